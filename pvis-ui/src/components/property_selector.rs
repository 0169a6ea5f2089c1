//! Dropdown selector for the grouping property.

use crate::state::AppState;
use dioxus::prelude::*;
use log::warn;
use pvis_core::grouping::Property;

/// Property dropdown. Hidden for modes that do not group by property.
#[component]
pub fn PropertySelector() -> Element {
    let mut state = use_context::<AppState>();
    let selected = (state.property)();
    let display = if (state.visualization)().groups_by_property() {
        "block"
    } else {
        "none"
    };

    let on_change = move |evt: Event<FormData>| match evt.value().parse::<Property>() {
        Ok(property) => state.select_property(property),
        Err(e) => warn!("{}", e),
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: {display};",
            label {
                r#for: "propertySelector",
                style: "font-weight: bold; margin-right: 8px;",
                "Group by: "
            }
            select {
                id: "propertySelector",
                onchange: on_change,
                for property in Property::ALL {
                    option {
                        value: "{property}",
                        selected: property == selected,
                        "{property}"
                    }
                }
            }
        }
    }
}
