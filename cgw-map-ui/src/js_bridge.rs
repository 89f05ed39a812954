//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The map itself is a Plotly figure pre-rendered by the page-assembly
//! step into the `gw-map` div; this module is the only place that touches
//! it. Everything is defensive about load order: Plotly arriving from the
//! CDN, the map div existing, and popup chart containers appearing are all
//! timing races absorbed with try/catch wrappers and polling loops.

use cgw_core::{ChartSpec, ChartSurface, LatLon, MapSurface, ScreenSize, SeriesCoords, Viewport};
use serde::Deserialize;
use wasm_bindgen::closure::Closure;

/// DOM id of the pre-rendered Plotly map div.
pub const MAP_DIV_ID: &str = "gw-map";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('CGW JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Evaluate a JS expression and return its string result, or `None` when
/// evaluation fails or yields a non-string.
fn eval_string(expr: &str) -> Option<String> {
    js_sys::eval(expr).ok()?.as_string().filter(|s| !s.is_empty())
}

/// Browser viewport dimensions, with a sane fallback before layout.
pub fn viewport_size() -> ScreenSize {
    let window = web_sys::window();
    let width = window
        .as_ref()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(1280.0);
    let height = window
        .as_ref()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(800.0);
    ScreenSize::new(width, height)
}

/// Measured inner width of a DOM region, for chart sizing.
pub fn region_width(region: &str) -> Option<f64> {
    let expr = format!(
        "(function() {{ var el = document.getElementById('{}'); return el ? el.clientWidth : -1; }})()",
        region
    );
    js_sys::eval(&expr).ok()?.as_f64().filter(|w| *w > 0.0)
}

#[derive(Deserialize)]
struct WireView {
    zoom: f64,
    lat: f64,
    lon: f64,
}

/// The pre-rendered Plotly map as a [`MapSurface`].
#[derive(Debug, Default, Clone, Copy)]
pub struct PlotlyMap;

impl MapSurface for PlotlyMap {
    fn view(&self) -> Option<Viewport> {
        let expr = format!(
            r#"
            (function() {{
                var gd = document.getElementById('{MAP_DIV_ID}');
                if (!gd || !gd.layout || !gd.layout.map || !gd.layout.map.center) {{ return ''; }}
                var m = gd.layout.map;
                return JSON.stringify({{ zoom: m.zoom, lat: m.center.lat, lon: m.center.lon }});
            }})()
            "#
        );
        let json = eval_string(&expr)?;
        let wire: WireView = serde_json::from_str(&json).ok()?;
        Some(Viewport::clamped(LatLon::new(wire.lat, wire.lon), wire.zoom))
    }

    fn relayout(&mut self, view: &Viewport) {
        call_js(&format!(
            r#"
            var gd = document.getElementById('{MAP_DIV_ID}');
            if (window.Plotly && gd && gd.layout) {{
                Plotly.relayout(gd, {{
                    'map.zoom': {zoom},
                    'map.center': {{ 'lat': {lat}, 'lon': {lon} }}
                }});
            }} else {{
                console.warn('CGW: map not ready for relayout');
            }}
            "#,
            zoom = view.zoom,
            lat = view.center.lat,
            lon = view.center.lon,
        ));
    }

    fn series_coords(&self, name: &str) -> Option<SeriesCoords> {
        let expr = format!(
            r#"
            (function() {{
                var gd = document.getElementById('{MAP_DIV_ID}');
                if (!gd || !gd.data) {{ return ''; }}
                var trace = gd.data.find(function(t) {{ return t.name === '{name}'; }});
                if (!trace) {{ return ''; }}
                return JSON.stringify({{ lat: trace.lat || [], lon: trace.lon || [] }});
            }})()
            "#
        );
        let json = eval_string(&expr)?;
        #[derive(Deserialize)]
        struct WireCoords {
            lat: Vec<f64>,
            lon: Vec<f64>,
        }
        let wire: WireCoords = serde_json::from_str(&json).ok()?;
        Some(SeriesCoords {
            lat: wire.lat,
            lon: wire.lon,
        })
    }

    fn set_series_coords(&mut self, name: &str, coords: &SeriesCoords) {
        let lat_json = serde_json::to_string(&coords.lat).unwrap_or_else(|_| "[]".to_string());
        let lon_json = serde_json::to_string(&coords.lon).unwrap_or_else(|_| "[]".to_string());
        call_js(&format!(
            r#"
            var gd = document.getElementById('{MAP_DIV_ID}');
            if (window.Plotly && gd && gd.data) {{
                var idx = gd.data.findIndex(function(t) {{ return t.name === '{name}'; }});
                if (idx >= 0) {{
                    Plotly.restyle(gd, {{ lat: [{lat_json}], lon: [{lon_json}] }}, [idx]);
                }}
            }}
            "#
        ));
    }
}

/// Popup chart regions as a [`ChartSurface`].
///
/// Drawing polls until Plotly and the target container exist, renders,
/// and then pins the container height to the rendered height so the
/// region never reserves more vertical space than the chart fills.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlotlyCharts;

impl ChartSurface for PlotlyCharts {
    fn draw(&mut self, region: &str, spec: &ChartSpec) {
        let traces = spec.traces_json().replace('\'', "\\'").replace('\n', "");
        let layout = spec.layout_json().replace('\'', "\\'").replace('\n', "");
        call_js(&format!(
            r#"
            (function() {{
                var tries = 0;
                var poll = setInterval(function() {{
                    var el = document.getElementById('{region}');
                    if (window.Plotly && el && el.offsetParent !== null) {{
                        clearInterval(poll);
                        try {{
                            Plotly.newPlot(el, JSON.parse('{traces}'), JSON.parse('{layout}'),
                                {{ displayModeBar: false, responsive: true }}
                            ).then(function(gd) {{
                                el.style.height = gd.clientHeight + 'px';
                            }});
                        }} catch(e) {{ console.error('CGW chart render error:', e); }}
                    }} else if (++tries > 50) {{
                        clearInterval(poll);
                    }}
                }}, 100);
            }})();
            "#
        ));
    }

    fn reflow(&mut self, region: &str) {
        call_js(&format!(
            r#"
            var el = document.getElementById('{region}');
            if (window.Plotly && el && el.data) {{ Plotly.Plots.resize(el); }}
            "#
        ));
    }

    fn clear(&mut self, region: &str) {
        call_js(&format!(
            r#"
            var el = document.getElementById('{region}');
            if (el) {{
                if (window.Plotly && el.data) {{ Plotly.purge(el); }}
                el.innerHTML = '';
                el.style.height = '';
            }}
            "#
        ));
    }
}

/// Decode a `plotly_relayout` event payload into the parts we track.
/// Events carry `map.zoom` and/or `map.center` depending on the gesture.
pub fn parse_relayout_event(json: &str) -> (Option<f64>, Option<LatLon>) {
    let Ok(event) = serde_json::from_str::<serde_json::Value>(json) else {
        return (None, None);
    };
    let zoom = event.get("map.zoom").and_then(|v| v.as_f64());
    let center = event.get("map.center").and_then(|c| {
        Some(LatLon::new(
            c.get("lat")?.as_f64()?,
            c.get("lon")?.as_f64()?,
        ))
    });
    (zoom, center)
}

/// Register marker-click and relayout callbacks on the map div.
///
/// The callbacks are promoted to `window.*` globals and attached with a
/// polling loop once Plotly has hydrated the div. The click callback
/// receives the clicked point's customdata as JSON; the relayout callback
/// receives the raw event payload for [`parse_relayout_event`].
pub fn bind_map_events(
    on_marker_click: impl FnMut(String) + 'static,
    on_relayout: impl FnMut(String) + 'static,
) {
    install_global("__cgwMarkerClick", on_marker_click);
    install_global("__cgwMapRelayout", on_relayout);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                var gd = document.getElementById('{MAP_DIV_ID}');
                if (window.Plotly && gd && gd.on && !gd.__cgwBound) {{
                    gd.__cgwBound = true;
                    clearInterval(poll);
                    gd.on('plotly_click', function(e) {{
                        if (e && e.points && e.points.length && e.points[0].customdata) {{
                            window.__cgwMarkerClick(JSON.stringify(e.points[0].customdata));
                        }}
                    }});
                    gd.on('plotly_relayout', function(e) {{
                        if (e) {{ window.__cgwMapRelayout(JSON.stringify(e)); }}
                    }});
                }}
            }}, 100);
        }})();
        "#
    ));
}

/// Bind the ESC key to a callback (popup close).
pub fn bind_escape_key(on_escape: impl FnMut(String) + 'static) {
    install_global("__cgwEscape", on_escape);
    call_js(
        r#"
        if (!window.__cgwEscapeBound) {
            window.__cgwEscapeBound = true;
            document.addEventListener('keydown', function(e) {
                if (e.key === 'Escape') { window.__cgwEscape(''); }
            });
        }
        "#,
    );
}

/// Promote a Rust callback to a `window.*` global the inline JS can call.
/// The closure is intentionally leaked; these bindings live for the whole
/// session.
fn install_global(name: &str, mut callback: impl FnMut(String) + 'static) {
    let closure = Closure::wrap(Box::new(move |value: wasm_bindgen::JsValue| {
        callback(value.as_string().unwrap_or_default());
    }) as Box<dyn FnMut(wasm_bindgen::JsValue)>);
    if let Some(window) = web_sys::window() {
        let _ = js_sys::Reflect::set(
            window.as_ref(),
            &wasm_bindgen::JsValue::from_str(name),
            closure.as_ref(),
        );
    }
    closure.forget();
}
