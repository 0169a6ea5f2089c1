//! Placeholder shown until the first dump arrives.

use dioxus::prelude::*;

#[component]
pub fn LoadingSpinner(endpoint: String) -> Element {
    rsx! {
        div {
            style: "padding: 24px 0; text-align: center; font-size: 13px; color: #78909C;",
            "Fetching storage dump from "
            code { "{endpoint}" }
        }
    }
}
