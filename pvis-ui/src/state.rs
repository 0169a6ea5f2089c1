//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//! Selector changes are mirrored into the URL fragment so a reload or a
//! shared link restores the same view.

use crate::location::page_fragment;
use dioxus::prelude::*;
use log::warn;
use pvis_core::config::ViewerConfig;
use pvis_core::grouping::Property;
use pvis_core::selection::{record_entry, record_property, record_view, Selection};
use pvis_core::snapshot::FileEntry;
use pvis_core::visualization::Visualization;

/// Shared application state for the storage visualizer.
#[derive(Clone, Copy)]
pub struct AppState {
    pub config: Signal<ViewerConfig>,
    /// Whether the first snapshot is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    pub visualization: Signal<Visualization>,
    /// Property the treemap groups by
    pub property: Signal<Property>,
    /// Current entries of the last loaded snapshot
    pub entries: Signal<Vec<FileEntry>>,
    /// Entry shown in the inspector
    pub selected_entry: Signal<Option<FileEntry>>,
    /// Bumped whenever the chart must be fetched and drawn again
    pub render_epoch: Signal<u64>,
}

impl AppState {
    /// Create the state, restoring the selection from the URL fragment.
    pub fn new(config: ViewerConfig) -> Self {
        let selection = Selection::load(&page_fragment(), &config);
        Self {
            config: Signal::new(config),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            visualization: Signal::new(selection.visualization),
            property: Signal::new(selection.property),
            entries: Signal::new(Vec::new()),
            selected_entry: Signal::new(None),
            render_epoch: Signal::new(0),
        }
    }

    pub fn request_render(&mut self) {
        let next = *self.render_epoch.peek() + 1;
        self.render_epoch.set(next);
    }

    pub fn select_visualization(&mut self, visualization: Visualization) {
        record_view(&page_fragment(), visualization);
        self.visualization.set(visualization);
        self.selected_entry.set(None);
        self.request_render();
    }

    pub fn select_property(&mut self, property: Property) {
        record_property(&page_fragment(), property);
        self.property.set(property);
        self.selected_entry.set(None);
        self.request_render();
    }

    /// Show the entry with `key` in the inspector and remember it in the URL.
    pub fn inspect(&mut self, key: &str) {
        if self.show_entry(key) {
            record_entry(&page_fragment(), key);
        }
    }

    /// Show the entry with `key` without touching the URL. Returns false if
    /// the current snapshot has no such entry.
    pub fn show_entry(&mut self, key: &str) -> bool {
        let entry = self.entries.peek().iter().find(|e| e.key == key).cloned();
        match entry {
            Some(entry) => {
                self.selected_entry.set(Some(entry));
                true
            }
            None => {
                warn!("No current entry with key {}", key);
                false
            }
        }
    }
}
