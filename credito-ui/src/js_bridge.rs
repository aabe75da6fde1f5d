//! Typed wrappers around JS interop.
//!
//! Chart.js is loaded from a `<script>` tag; the glue in
//! `assets/js/creditos-charts.js` is evaluated at global scope once `Chart`
//! exists, and keeps one chart instance per canvas id. Browser dialogs
//! (`confirm`, `alert`, scrolling) go through `web_sys` directly.

use web_sys::{ScrollBehavior, ScrollToOptions};

// Embed the chart glue at compile time
static CHARTS_JS: &str = include_str!("../assets/js/creditos-charts.js");

/// Chart.js build loaded by the app shell.
pub const CHART_JS_SRC: &str = "https://cdn.jsdelivr.net/npm/chart.js";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Creditos JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote `s` as a JS string literal.
fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "''".to_string())
}

/// Initialize the chart glue with a wait-for-Chart.js polling loop.
///
/// The glue defines `renderCreditoChart`/`destroyCreditoChart` as function
/// declarations; they are evaluated with an indirect `eval` so they land on
/// `window` instead of inside the interval callback.
pub fn init_charts() {
    let store_js = format!("window.__creditoChartScripts = {};", js_string(CHARTS_JS));
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__creditoChartsInit) { return; }
            window.__creditoChartsInit = true;
            var waitForChart = setInterval(function() {
                if (typeof Chart !== 'undefined') {
                    clearInterval(waitForChart);
                    (0, eval)(window.__creditoChartScripts);
                    delete window.__creditoChartScripts;
                    if (typeof renderCreditoChart !== 'undefined') window.renderCreditoChart = renderCreditoChart;
                    if (typeof destroyCreditoChart !== 'undefined') window.destroyCreditoChart = destroyCreditoChart;
                    window.__creditoChartsReady = true;
                    console.log('Creditos charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Draw `config_json` (a Chart.js config) on the canvas `canvas_id`,
/// replacing any chart already bound to it.
///
/// Polls until Chart.js, the glue and the canvas element are all present.
pub fn render_chart(canvas_id: &str, config_json: &str) {
    let id = js_string(canvas_id);
    let config = js_string(config_json);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__creditoChartsReady &&
                    typeof window.renderCreditoChart !== 'undefined' &&
                    document.getElementById({id})) {{
                    clearInterval(poll);
                    try {{
                        window.renderCreditoChart({id}, {config});
                    }} catch(e) {{ console.error('[creditos] renderCreditoChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Destroy the chart bound to `canvas_id`, if any.
pub fn destroy_chart(canvas_id: &str) {
    call_js(&format!(
        "if (window.destroyCreditoChart) {{ window.destroyCreditoChart({}); }}",
        js_string(canvas_id)
    ));
}

/// Blocking yes/no dialog. Returns `false` when no window is available.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Blocking message dialog.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if window.alert_with_message(message).is_err() {
            log::warn!("alert failed: {}", message);
        }
    }
}

/// Smooth-scroll the page back to the form.
pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}
