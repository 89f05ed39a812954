//! The site detail popup.
//!
//! Rendered when a marker click selects a site. The header drags the
//! popup, three handles resize it, and the two chart regions are drawn by
//! the deferred queue once this component's DOM has been committed. All
//! geometry decisions live in `cgw_core::popup`; this component only
//! feeds it pointer coordinates and applies the returned box.

use crate::state::{MapSession, PERCENTILE_REGION, TIME_SERIES_REGION};
use cgw_core::popup::Point;
use cgw_core::{InteractionMode, ResizeHandle};
use dioxus::prelude::*;

fn pointer(evt: &MouseEvent) -> Point {
    let coords = evt.client_coordinates();
    Point::new(coords.x, coords.y)
}

#[component]
pub fn MarkerPopup() -> Element {
    let mut session = use_context::<MapSession>();

    // Draw scheduled charts once the popup DOM below is committed.
    use_effect(move || {
        let open = session.selected_site.read().is_some();
        if open {
            session.drain_chart_queue();
        }
    });

    let record = session.selected_site.read().clone();
    let Some(record) = record else {
        return rsx! {};
    };
    let Some(geometry) = *session.popup_geometry.read() else {
        return rsx! {};
    };

    let mode = session.popup.read().mode();
    let interacting = !matches!(mode, InteractionMode::Idle);
    let height_style = if *session.popup_height_locked.read() {
        format!("height: {:.0}px;", geometry.height)
    } else {
        format!("max-height: {:.0}px;", geometry.height)
    };
    let box_style = format!(
        "position: fixed; left: {:.0}px; top: {:.0}px; width: {:.0}px; {} z-index: 1000; \
         background: white; border-radius: 8px; box-shadow: 0 4px 24px rgba(0,0,0,0.25); \
         display: flex; flex-direction: column; overflow: hidden; {}",
        geometry.left,
        geometry.top,
        geometry.width,
        height_style,
        if interacting { "user-select: none;" } else { "" },
    );

    let series = session
        .config
        .read()
        .as_ref()
        .and_then(|c| c.series_for(&record.site_no).cloned());
    let stats = series.as_ref().and_then(|ts| ts.stats());
    let stats_color = stats.map(|s| s.change_color()).unwrap_or_default();
    let has_percentile = record.percentile_bands().is_some();
    let badge_color = record.source.badge_color();
    let badge_label = record.source.label();
    let title = record.display_name().to_string();
    let info_rows = record.info_rows();

    rsx! {
        // Dimming overlay; also catches pointer moves that outrun the popup
        // during drag/resize.
        div {
            style: "position: fixed; inset: 0; z-index: 999; background: rgba(0,0,0,0.25);",
            onclick: move |_| session.close_popup(),
            onmousemove: move |evt| session.popup_pointer_move(pointer(&evt)),
            onmouseup: move |_| session.end_popup_interaction(),
        }
        div {
            style: "{box_style}",
            onmousemove: move |evt| session.popup_pointer_move(pointer(&evt)),
            onmouseup: move |_| session.end_popup_interaction(),

            // Header: source badge, title, close. Dragging starts here.
            div {
                style: "display: flex; align-items: center; gap: 8px; padding: 10px 14px; \
                    background: #FAFAFA; border-bottom: 1px solid #EEEEEE; cursor: move;",
                onmousedown: move |evt| session.begin_popup_drag(pointer(&evt)),
                span {
                    style: "background: {badge_color}; color: white; \
                        font-size: 10px; padding: 2px 7px; border-radius: 9px;",
                    "{badge_label}"
                }
                span {
                    style: "font-size: 14px; font-weight: 600; color: #333; flex: 1; \
                        overflow: hidden; text-overflow: ellipsis; white-space: nowrap;",
                    "{title}"
                }
                button {
                    style: "border: none; background: none; font-size: 18px; cursor: pointer; \
                        color: #9E9E9E; padding: 0 2px;",
                    onmousedown: move |evt| evt.stop_propagation(),
                    onclick: move |_| session.close_popup(),
                    "×"
                }
            }

            // Body: info rows, stats, charts.
            div {
                style: "padding: 10px 16px 16px 16px; overflow-y: auto; flex: 1;",
                for (label, value) in info_rows {
                    div {
                        key: "{label}",
                        style: "display: flex; justify-content: space-between; padding: 2px 0; \
                            font-size: 12px; border-bottom: 1px dotted #F0F0F0;",
                        span { style: "color: #757575;", "{label}" }
                        span { style: "color: #212121; text-align: right;", "{value}" }
                    }
                }

                if let Some(stats) = stats {
                    div {
                        style: "display: flex; gap: 14px; margin-top: 10px; padding: 8px 10px; \
                            background: #F5F5F5; border-radius: 4px; font-size: 11px; color: #616161;",
                        span { "Min: {stats.min:.1} ft" }
                        span { "Max: {stats.max:.1} ft" }
                        span { "Avg: {stats.avg:.1} ft" }
                        span {
                            style: "color: {stats_color}; font-weight: 600;",
                            "Change: {stats.change:+.1} ft"
                        }
                    }
                }

                if has_percentile {
                    h5 {
                        style: "margin: 12px 0 4px 0; font-size: 12px; color: #424242;",
                        "Percentile distribution"
                    }
                    div { id: PERCENTILE_REGION, style: "width: 100%;" }
                }

                if series.is_some() {
                    h5 {
                        style: "margin: 12px 0 4px 0; font-size: 12px; color: #424242;",
                        "Depth to water history"
                    }
                    div { id: TIME_SERIES_REGION, style: "width: 100%;" }
                } else {
                    div {
                        style: "margin-top: 12px; padding: 10px; background: #FAFAFA; \
                            border-radius: 4px; font-size: 12px; color: #9E9E9E; text-align: center;",
                        "No time series data available"
                    }
                }
            }

            // Resize handles: right edge, bottom edge, corner.
            div {
                style: "position: absolute; top: 0; right: 0; width: 6px; height: 100%; \
                    cursor: ew-resize;",
                onmousedown: move |evt| {
                    evt.stop_propagation();
                    session.begin_popup_resize(ResizeHandle::Right, pointer(&evt));
                },
            }
            div {
                style: "position: absolute; bottom: 0; left: 0; width: 100%; height: 6px; \
                    cursor: ns-resize;",
                onmousedown: move |evt| {
                    evt.stop_propagation();
                    session.begin_popup_resize(ResizeHandle::Bottom, pointer(&evt));
                },
            }
            div {
                style: "position: absolute; bottom: 0; right: 0; width: 14px; height: 14px; \
                    cursor: nwse-resize;",
                onmousedown: move |evt| {
                    evt.stop_propagation();
                    session.begin_popup_resize(ResizeHandle::Corner, pointer(&evt));
                },
            }
        }
    }
}
