//! Banner shown when the storage dump could not be loaded.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// Dump URL the failed request went to
    pub endpoint: String,
}

/// Fetch failure banner. The previously drawn chart stays below it.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            role: "alert",
            style: "margin: 8px 0; padding: 8px 12px; border-left: 4px solid #D84315; background: #FBE9E7; font-size: 13px;",
            div {
                style: "font-weight: 600; color: #BF360C;",
                "Storage dump unavailable"
            }
            div { style: "color: #4E342E;", "{props.message}" }
            div {
                style: "margin-top: 4px; color: #8D6E63; font-family: monospace;",
                "{props.endpoint}"
            }
        }
    }
}
