//! Details panel for the treemap leaf last clicked.

use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn Inspector() -> Element {
    let state = use_context::<AppState>();
    let entry = state.selected_entry.read().clone();

    let (key, size, ip, date, headers) = match entry {
        Some(entry) => (
            entry.key.clone(),
            format!("{} Byte", entry.size),
            entry.ip.clone(),
            entry.timestamp.clone(),
            entry.header_lines(),
        ),
        None => Default::default(),
    };

    rsx! {
        div {
            style: "margin-top: 12px; padding-top: 8px; border-top: 1px solid #e0e0e0; font-size: 13px;",
            p { id: "idParagraph", "Key : {key}" }
            p { id: "sizeParagraph", "Size : {size}" }
            p { id: "ipParagraph", "IP : {ip}" }
            p { id: "dateParagraph", "Date : {date}" }
            ul {
                id: "HeaderList",
                for line in headers {
                    li { "{line}" }
                }
            }
        }
    }
}
