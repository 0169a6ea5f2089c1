//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3 treemap renderer lives in `assets/js/treemap.js`. It is evaluated
//! as a global script once D3 has loaded and exposed via `window.*`.

static TREEMAP_JS: &str = include_str!("../assets/js/treemap.js");

/// Name of the DOM event the renderer dispatches on `window` when a leaf is
/// clicked. `detail` carries the entry key.
pub const INSPECT_EVENT: &str = "pvis-inspect";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('PVIS JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote `s` as a JS string literal.
fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "''".to_string())
}

/// Initialize the chart script with a wait-for-D3 polling loop. Call once at
/// app startup.
///
/// The script is evaluated at global scope via indirect eval once D3 is
/// ready; its `function` declarations are then promoted to `window.*`.
pub fn init_charts() {
    let store_js = format!("window.__pvisChartScripts = {};", js_string(TREEMAP_JS));
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__pvisChartScripts);
                    delete window.__pvisChartScripts;
                    if (typeof renderTreemap !== 'undefined') window.renderTreemap = renderTreemap;
                    window.__pvisChartsReady = true;
                    console.log('PVIS charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Render the storage treemap into `container_id`, replacing its contents.
///
/// Polls until D3, the chart script and the container element are all
/// available before rendering.
pub fn render_treemap(container_id: &str, data_json: &str, config_json: &str) {
    let id = js_string(container_id);
    let data = js_string(data_json);
    let config = js_string(config_json);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__pvisChartsReady &&
                    typeof window.renderTreemap !== 'undefined' &&
                    document.getElementById({id})) {{
                    clearInterval(poll);
                    try {{
                        window.renderTreemap({id}, {data}, {config});
                    }} catch(e) {{ console.error('[PVIS] renderTreemap error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}
