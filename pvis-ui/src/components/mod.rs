//! Reusable Dioxus RSX components for the storage visualizer.

mod chart_container;
mod error_display;
mod inspector;
mod loading_spinner;
mod property_selector;
mod visual_selector;

pub use chart_container::ChartContainer;
pub use error_display::ErrorDisplay;
pub use inspector::Inspector;
pub use loading_spinner::LoadingSpinner;
pub use property_selector::PropertySelector;
pub use visual_selector::VisualSelector;
