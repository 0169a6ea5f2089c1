//! Dropdown selector for the visualization mode.

use crate::state::AppState;
use dioxus::prelude::*;
use log::warn;
use pvis_core::visualization::Visualization;

/// Visualization dropdown. Only implemented modes can be picked; a mode
/// restored from the URL that is not implemented shows as a disabled entry.
#[component]
pub fn VisualSelector() -> Element {
    let mut state = use_context::<AppState>();
    let selected = (state.visualization)();

    let on_change = move |evt: Event<FormData>| match evt.value().parse::<Visualization>() {
        Ok(visualization) => state.select_visualization(visualization),
        Err(e) => warn!("{}", e),
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "visualSelector",
                style: "font-weight: bold; margin-right: 8px;",
                "Visualization: "
            }
            select {
                id: "visualSelector",
                onchange: on_change,
                for (visualization, enabled) in Visualization::selector_options(selected) {
                    option {
                        value: "{visualization.as_str()}",
                        disabled: !enabled,
                        selected: visualization == selected,
                        "{visualization.description()}"
                    }
                }
            }
        }
    }
}
