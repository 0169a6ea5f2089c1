//! Fragment host backed by `window.location.hash`.

use log::warn;
use pvis_core::fragment::{FragmentHost, FragmentStore};

/// The fragment of the current page. Writing it adds a history entry and
/// fires `hashchange`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocationFragment;

impl FragmentHost for LocationFragment {
    fn read_fragment(&self) -> String {
        web_sys::window()
            .and_then(|window| window.location().hash().ok())
            .unwrap_or_default()
    }

    fn write_fragment(&self, fragment: &str) {
        let Some(window) = web_sys::window() else {
            warn!("No window; fragment not written");
            return;
        };
        if let Err(e) = window.location().set_hash(fragment) {
            warn!("Failed to write URL fragment: {:?}", e);
        }
    }
}

/// Fragment store for the current page.
pub fn page_fragment() -> FragmentStore<LocationFragment> {
    FragmentStore::new(LocationFragment)
}
