//! Window-level DOM events forwarded into the Dioxus tree.
//!
//! Listeners live for the whole page, so their closures are leaked with
//! `forget()`. Events are pushed into an unbounded channel that a coroutine
//! drains.

use crate::js_bridge::INSPECT_EVENT;
use anyhow::anyhow;
use futures::channel::mpsc::UnboundedSender;
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::CustomEvent;

#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// The window was resized; the chart must be laid out again.
    Resized,
    /// A treemap leaf was clicked.
    Inspect(String),
}

/// Register the `resize` and leaf-click listeners on `window`.
pub fn listen(tx: UnboundedSender<UiEvent>) -> anyhow::Result<()> {
    let window = web_sys::window().ok_or_else(|| anyhow!("no window available"))?;

    {
        let tx = tx.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if tx.unbounded_send(UiEvent::Resized).is_err() {
                warn!("Resize listener outlived its receiver");
            }
        });
        window
            .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow!("failed to listen for resize: {:?}", e))?;
        closure.forget();
    }

    {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
            let Some(key) = event
                .dyn_ref::<CustomEvent>()
                .and_then(|custom| custom.detail().as_string())
            else {
                warn!("Ignoring {} event without a key", INSPECT_EVENT);
                return;
            };
            debug!("Inspecting {}", key);
            if tx.unbounded_send(UiEvent::Inspect(key)).is_err() {
                warn!("Inspect listener outlived its receiver");
            }
        });
        window
            .add_event_listener_with_callback(INSPECT_EVENT, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow!("failed to listen for {}: {:?}", INSPECT_EVENT, e))?;
        closure.forget();
    }

    Ok(())
}
