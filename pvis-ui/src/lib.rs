//! Shared Dioxus components and D3.js bridge for the storage visualizer.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js treemap via `js_sys::eval()`
//! - `fetch`: loading the storage dump with the browser fetch API
//! - `location`: the page URL fragment as a [`pvis_core::fragment::FragmentHost`]
//! - `events`: window events forwarded into the component tree
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (selectors, inspector, containers)

pub mod js_bridge;
pub mod fetch;
pub mod location;
pub mod events;
pub mod state;
pub mod components;
