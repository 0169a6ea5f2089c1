//! Fetching the storage dump from the browser.

use anyhow::{anyhow, bail};
use log::info;
use pvis_core::snapshot::Snapshot;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

fn js_error(value: JsValue) -> anyhow::Error {
    anyhow!("{:?}", value)
}

/// GET `endpoint` (relative to the page origin) and parse the dump.
///
/// Network failures, non-2xx statuses and malformed JSON are all errors;
/// nothing is retried.
pub async fn fetch_snapshot(endpoint: &str) -> anyhow::Result<Snapshot> {
    let window = web_sys::window().ok_or_else(|| anyhow!("no window available"))?;

    let response: Response = JsFuture::from(window.fetch_with_str(endpoint))
        .await
        .map_err(js_error)?
        .dyn_into()
        .map_err(js_error)?;

    if !response.ok() {
        bail!("GET {} failed with status {}", endpoint, response.status());
    }

    let body = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?
        .as_string()
        .ok_or_else(|| anyhow!("GET {} returned a non-text body", endpoint))?;

    let snapshot = Snapshot::from_json(&body)?;
    info!("Loaded {} records from {}", snapshot.records.len(), endpoint);
    Ok(snapshot)
}
