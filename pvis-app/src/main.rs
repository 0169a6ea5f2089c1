//! Privacy service storage visualizer.
//!
//! Shows every currently stored record of the storage service as a D3.js
//! treemap, grouped by a selectable property, with an inspector for the
//! record last clicked.
//!
//! Data flow:
//! 1. On mount: restore view/property from the URL fragment, load the D3
//!    script and start listening for window resizes and leaf clicks.
//! 2. Every render request (startup, selector change, resize) fetches a
//!    fresh dump from the storage endpoint.
//! 3. The dump is reduced to current entries, grouped and weighted in Rust,
//!    and handed to D3 as a two-level hierarchy for layout and drawing.

use dioxus::prelude::*;
use futures::StreamExt;
use log::error;
use pvis_core::config::{TreemapConfig, ViewerConfig};
use pvis_core::hierarchy::build_treemap;
use pvis_core::selection::ENTRY_KEY;
use pvis_ui::components::{
    ChartContainer, ErrorDisplay, Inspector, LoadingSpinner, PropertySelector, VisualSelector,
};
use pvis_ui::events::{self, UiEvent};
use pvis_ui::fetch::fetch_snapshot;
use pvis_ui::js_bridge::{self, INSPECT_EVENT};
use pvis_ui::location::page_fragment;
use pvis_ui::state::AppState;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("pvis-root"))
        .launch(App);
}

/// Renderer options: the treemap layout settings plus the click event name.
fn chart_config_json(treemap: &TreemapConfig) -> serde_json::Result<String> {
    let mut config = serde_json::to_value(treemap)?;
    config["inspectEvent"] = serde_json::Value::from(INSPECT_EVENT);
    Ok(config.to_string())
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(|| AppState::new(ViewerConfig::default()));

    // ─── DOM events (resize, leaf click) drained into the state ───
    let ui_events = use_coroutine(move |mut rx: UnboundedReceiver<UiEvent>| async move {
        let mut state = state;
        while let Some(event) = rx.next().await {
            match event {
                UiEvent::Resized => state.request_render(),
                UiEvent::Inspect(key) => state.inspect(&key),
            }
        }
    });

    use_hook(move || {
        js_bridge::init_charts();
        if let Err(e) = events::listen(ui_events.tx()) {
            error!("Failed to register window listeners: {}", e);
        }
    });

    // ─── Fetch a fresh dump on every render request ───
    let snapshot = use_resource(move || async move {
        let _ = (state.render_epoch)();
        let endpoint = state.config.peek().endpoint.clone();
        fetch_snapshot(&endpoint).await
    });

    // ─── Draw the selected visualization once the dump arrives ───
    use_effect(move || {
        let result = snapshot.read();
        let Some(result) = result.as_ref() else {
            return;
        };
        state.loading.set(false);

        let snapshot = match result {
            Ok(snapshot) => snapshot,
            Err(e) => {
                error!("Failed to load storage snapshot: {}", e);
                state.error_msg.set(Some(e.to_string()));
                return;
            }
        };
        state.error_msg.set(None);

        let entries = snapshot.current_entries();
        state.entries.set(entries.clone());
        if state.selected_entry.peek().is_none() {
            if let Some(key) = page_fragment().get(ENTRY_KEY) {
                state.show_entry(&key);
            }
        }

        let visualization = *state.visualization.peek();
        if !visualization.is_implemented() {
            error!("Currently unimplemented.");
            return;
        }

        let property = *state.property.peek();
        let config = state.config.peek().clone();
        let tree = build_treemap(&entries, property);

        let data_json = match serde_json::to_string(&tree) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize treemap: {}", e);
                return;
            }
        };
        let config_json = match chart_config_json(&config.treemap) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize chart config: {}", e);
                return;
            }
        };

        js_bridge::render_treemap(&config.chart_container_id, &data_json, &config_json);
    });

    let container_id = state.config.read().chart_container_id.clone();
    let endpoint = state.config.read().endpoint.clone();

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 1200px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone(), endpoint: endpoint.clone() }
            }

            div {
                style: "display: flex; gap: 16px;",
                VisualSelector {}
                PropertySelector {}
            }

            if *state.loading.read() {
                LoadingSpinner { endpoint: endpoint.clone() }
            }

            ChartContainer {
                id: container_id,
                loading: *state.loading.read(),
                height: 600,
            }

            Inspector {}
        }
    }
}
