//! Popup lifecycle state machine.
//!
//! One popup instance exists. While open, the user may drag it by the
//! header or resize it by one of three handles; the two interactions share
//! the pointer lifecycle and are mutually exclusive, which the
//! [`InteractionMode`] tagged variant enforces structurally. All geometry
//! is clamped so the popup never leaves the viewport.

/// Default popup width in px; height follows content until resized.
pub const DEFAULT_WIDTH: f64 = 460.0;
pub const DEFAULT_HEIGHT: f64 = 520.0;
pub const MIN_WIDTH: f64 = 400.0;
pub const MIN_HEIGHT: f64 = 300.0;

/// A point in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A size in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// The browser viewport dimensions.
pub type ScreenSize = Size;

/// Popup box geometry applied back to the DOM.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopupGeometry {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Which resize handle the pointer grabbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeHandle {
    Right,
    Bottom,
    Corner,
}

impl ResizeHandle {
    pub fn affects_width(&self) -> bool {
        matches!(self, ResizeHandle::Right | ResizeHandle::Corner)
    }

    pub fn affects_height(&self) -> bool {
        matches!(self, ResizeHandle::Bottom | ResizeHandle::Corner)
    }
}

/// The active pointer interaction, if any.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InteractionMode {
    Idle,
    Dragging {
        /// Pointer position at drag start.
        pointer: Point,
        /// Popup offset at drag start.
        origin: Point,
    },
    Resizing {
        handle: ResizeHandle,
        /// Pointer position at resize start.
        pointer: Point,
        /// Popup size at resize start.
        size: Size,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopupController {
    visible: bool,
    position: Point,
    size: Size,
    mode: InteractionMode,
}

impl Default for PopupController {
    fn default() -> Self {
        Self::new()
    }
}

impl PopupController {
    pub fn new() -> Self {
        Self {
            visible: false,
            position: Point::default(),
            size: Size::new(DEFAULT_WIDTH, DEFAULT_HEIGHT),
            mode: InteractionMode::Idle,
        }
    }

    pub fn is_open(&self) -> bool {
        self.visible
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    pub fn geometry(&self) -> PopupGeometry {
        PopupGeometry {
            left: self.position.x,
            top: self.position.y,
            width: self.size.width,
            height: self.size.height,
        }
    }

    /// Open (or reopen) the popup: default size, centered in the viewport,
    /// clamped on screen. Reopening never restores a previous geometry.
    pub fn open(&mut self, viewport: ScreenSize) -> PopupGeometry {
        let width = DEFAULT_WIDTH.min(viewport.width);
        let height = DEFAULT_HEIGHT.min(viewport.height);
        self.size = Size::new(width, height);
        self.position = Point::new(
            ((viewport.width - width) / 2.0).max(0.0),
            ((viewport.height - height) / 2.0).max(0.0),
        );
        self.visible = true;
        self.mode = InteractionMode::Idle;
        self.geometry()
    }

    pub fn close(&mut self) {
        self.visible = false;
        self.mode = InteractionMode::Idle;
    }

    /// Enter drag mode from the header. `origin` is the popup's measured
    /// offset at pointer-down. Ignored while a resize is active.
    pub fn begin_drag(&mut self, pointer: Point, origin: Point) -> bool {
        if !self.visible || !matches!(self.mode, InteractionMode::Idle) {
            return false;
        }
        self.position = origin;
        self.mode = InteractionMode::Dragging { pointer, origin };
        true
    }

    /// Move the popup with the pointer, keeping it fully inside the
    /// viewport. Returns the geometry to apply, or `None` outside drag mode.
    pub fn drag_to(&mut self, pointer: Point, viewport: ScreenSize) -> Option<PopupGeometry> {
        let InteractionMode::Dragging {
            pointer: start,
            origin,
        } = self.mode
        else {
            return None;
        };
        let max_left = (viewport.width - self.size.width).max(0.0);
        let max_top = (viewport.height - self.size.height).max(0.0);
        self.position = Point::new(
            (origin.x + pointer.x - start.x).clamp(0.0, max_left),
            (origin.y + pointer.y - start.y).clamp(0.0, max_top),
        );
        Some(self.geometry())
    }

    pub fn end_drag(&mut self) {
        if matches!(self.mode, InteractionMode::Dragging { .. }) {
            self.mode = InteractionMode::Idle;
        }
    }

    /// Enter resize mode on a handle. `size` is the popup's measured size
    /// at pointer-down. Ignored while a drag is active.
    pub fn begin_resize(&mut self, handle: ResizeHandle, pointer: Point, size: Size) -> bool {
        if !self.visible || !matches!(self.mode, InteractionMode::Idle) {
            return false;
        }
        self.size = size;
        self.mode = InteractionMode::Resizing {
            handle,
            pointer,
            size,
        };
        true
    }

    /// Resize with the pointer, clamped to the minimum size. The caller
    /// issues a cheap chart reflow per move; the expensive re-render waits
    /// for [`PopupController::end_resize`].
    pub fn resize_to(&mut self, pointer: Point) -> Option<PopupGeometry> {
        let InteractionMode::Resizing {
            handle,
            pointer: start,
            size,
        } = self.mode
        else {
            return None;
        };
        if handle.affects_width() {
            self.size.width = (size.width + pointer.x - start.x).max(MIN_WIDTH);
        }
        if handle.affects_height() {
            self.size.height = (size.height + pointer.y - start.y).max(MIN_HEIGHT);
        }
        Some(self.geometry())
    }

    /// Leave resize mode. Returns true when a full chart re-render is due.
    pub fn end_resize(&mut self) -> bool {
        if matches!(self.mode, InteractionMode::Resizing { .. }) {
            self.mode = InteractionMode::Idle;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> ScreenSize {
        Size::new(1280.0, 800.0)
    }

    #[test]
    fn test_open_centers_and_clamps() {
        let mut popup = PopupController::new();
        let geo = popup.open(viewport());
        assert!(popup.is_open());
        assert_eq!(geo.width, DEFAULT_WIDTH);
        assert_eq!(geo.left, (1280.0 - DEFAULT_WIDTH) / 2.0);
        assert_eq!(geo.top, (800.0 - DEFAULT_HEIGHT) / 2.0);
    }

    #[test]
    fn test_open_in_small_viewport_stays_on_screen() {
        let mut popup = PopupController::new();
        let geo = popup.open(Size::new(320.0, 400.0));
        assert_eq!(geo.left, 0.0);
        assert_eq!(geo.top, 0.0);
        assert_eq!(geo.width, 320.0);
        assert_eq!(geo.height, 400.0);
    }

    #[test]
    fn test_reopen_recenters_at_default_size() {
        let mut popup = PopupController::new();
        popup.open(viewport());
        popup.begin_resize(
            ResizeHandle::Corner,
            Point::new(0.0, 0.0),
            Size::new(DEFAULT_WIDTH, DEFAULT_HEIGHT),
        );
        popup.resize_to(Point::new(300.0, 200.0));
        popup.end_resize();
        popup.close();

        let geo = popup.open(viewport());
        assert_eq!(geo.width, DEFAULT_WIDTH);
        assert_eq!(geo.height, DEFAULT_HEIGHT);
    }

    #[test]
    fn test_drag_clamps_to_viewport_origin() {
        let mut popup = PopupController::new();
        let geo = popup.open(viewport());
        assert!(popup.begin_drag(
            Point::new(700.0, 400.0),
            Point::new(geo.left, geo.top)
        ));
        // Pointer delta would push the popup far off the top-left corner.
        let geo = popup.drag_to(Point::new(-2000.0, -2000.0), viewport()).unwrap();
        assert_eq!(geo.left, 0.0);
        assert_eq!(geo.top, 0.0);
    }

    #[test]
    fn test_drag_clamps_to_viewport_far_edge() {
        let mut popup = PopupController::new();
        let geo = popup.open(viewport());
        popup.begin_drag(Point::new(0.0, 0.0), Point::new(geo.left, geo.top));
        let geo = popup.drag_to(Point::new(5000.0, 5000.0), viewport()).unwrap();
        assert_eq!(geo.left, 1280.0 - geo.width);
        assert_eq!(geo.top, 800.0 - geo.height);
    }

    #[test]
    fn test_resize_clamps_to_minimum() {
        let mut popup = PopupController::new();
        popup.open(viewport());
        popup.begin_resize(
            ResizeHandle::Corner,
            Point::new(800.0, 600.0),
            Size::new(DEFAULT_WIDTH, DEFAULT_HEIGHT),
        );
        // Requested width ~200 and height ~100, both below the minimums.
        let geo = popup.resize_to(Point::new(540.0, 180.0)).unwrap();
        assert_eq!(geo.width, MIN_WIDTH);
        assert_eq!(geo.height, MIN_HEIGHT);
    }

    #[test]
    fn test_right_handle_resizes_width_only() {
        let mut popup = PopupController::new();
        popup.open(viewport());
        popup.begin_resize(
            ResizeHandle::Right,
            Point::new(0.0, 0.0),
            Size::new(DEFAULT_WIDTH, DEFAULT_HEIGHT),
        );
        let geo = popup.resize_to(Point::new(100.0, 100.0)).unwrap();
        assert_eq!(geo.width, DEFAULT_WIDTH + 100.0);
        assert_eq!(geo.height, DEFAULT_HEIGHT);
    }

    #[test]
    fn test_bottom_handle_resizes_height_only() {
        let mut popup = PopupController::new();
        popup.open(viewport());
        popup.begin_resize(
            ResizeHandle::Bottom,
            Point::new(0.0, 0.0),
            Size::new(DEFAULT_WIDTH, DEFAULT_HEIGHT),
        );
        let geo = popup.resize_to(Point::new(100.0, 80.0)).unwrap();
        assert_eq!(geo.width, DEFAULT_WIDTH);
        assert_eq!(geo.height, DEFAULT_HEIGHT + 80.0);
    }

    #[test]
    fn test_drag_and_resize_are_mutually_exclusive() {
        let mut popup = PopupController::new();
        popup.open(viewport());
        assert!(popup.begin_resize(
            ResizeHandle::Right,
            Point::new(0.0, 0.0),
            Size::new(DEFAULT_WIDTH, DEFAULT_HEIGHT),
        ));
        // Drag start must be ignored while resizing, and vice versa.
        assert!(!popup.begin_drag(Point::new(0.0, 0.0), Point::new(10.0, 10.0)));
        assert!(popup.end_resize());

        assert!(popup.begin_drag(Point::new(0.0, 0.0), Point::new(10.0, 10.0)));
        assert!(!popup.begin_resize(
            ResizeHandle::Corner,
            Point::new(0.0, 0.0),
            Size::new(DEFAULT_WIDTH, DEFAULT_HEIGHT),
        ));
        popup.end_drag();
        assert_eq!(popup.mode(), InteractionMode::Idle);
    }

    #[test]
    fn test_end_resize_signals_rerender_once() {
        let mut popup = PopupController::new();
        popup.open(viewport());
        popup.begin_resize(
            ResizeHandle::Corner,
            Point::new(0.0, 0.0),
            Size::new(DEFAULT_WIDTH, DEFAULT_HEIGHT),
        );
        assert!(popup.end_resize());
        assert!(!popup.end_resize());
    }

    #[test]
    fn test_interaction_requires_open_popup() {
        let mut popup = PopupController::new();
        assert!(!popup.begin_drag(Point::default(), Point::default()));
        assert!(!popup.begin_resize(
            ResizeHandle::Right,
            Point::default(),
            Size::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
        ));
        assert!(popup.drag_to(Point::default(), viewport()).is_none());
        assert!(popup.resize_to(Point::default()).is_none());
    }

    #[test]
    fn test_close_resets_interaction() {
        let mut popup = PopupController::new();
        let geo = popup.open(viewport());
        popup.begin_drag(Point::new(0.0, 0.0), Point::new(geo.left, geo.top));
        popup.close();
        assert!(!popup.is_open());
        assert_eq!(popup.mode(), InteractionMode::Idle);
    }
}
