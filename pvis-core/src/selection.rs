//! The viewer selection as persisted in the URL fragment.

use crate::config::ViewerConfig;
use crate::fragment::{FragmentHost, FragmentState, FragmentStore};
use crate::grouping::Property;
use crate::visualization::Visualization;
use log::warn;

pub const VIEW_KEY: &str = "view";
pub const PROPERTY_KEY: &str = "property";
/// Key of the entry shown in the inspector.
pub const ENTRY_KEY: &str = "entry";

#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub visualization: Visualization,
    pub property: Property,
    pub entry: Option<String>,
}

impl Selection {
    /// Read the selection from decoded fragment state. Missing or unknown
    /// values fall back to the configured defaults.
    pub fn from_fragment(state: &FragmentState, config: &ViewerConfig) -> Self {
        let visualization = match state.get(VIEW_KEY).map(|v| v.parse::<Visualization>()) {
            Some(Ok(v)) => v,
            Some(Err(e)) => {
                warn!("Ignoring view from URL: {}", e);
                config.default_visualization
            }
            None => config.default_visualization,
        };
        let property = match state.get(PROPERTY_KEY).map(|p| p.parse::<Property>()) {
            Some(Ok(p)) => p,
            Some(Err(e)) => {
                warn!("Ignoring property from URL: {}", e);
                config.default_property
            }
            None => config.default_property,
        };

        Self {
            visualization,
            property,
            entry: state.get(ENTRY_KEY).cloned(),
        }
    }

    pub fn load<H: FragmentHost>(store: &FragmentStore<H>, config: &ViewerConfig) -> Self {
        Self::from_fragment(&store.load(), config)
    }
}

/// Persist a view change. The inspected entry no longer applies and is
/// dropped in the same write.
pub fn record_view<H: FragmentHost>(store: &FragmentStore<H>, visualization: Visualization) {
    store.update(|state| {
        state.insert(VIEW_KEY.to_string(), visualization.as_str().to_string());
        state.remove(ENTRY_KEY);
    });
}

/// Persist a grouping change, dropping the inspected entry in the same write.
pub fn record_property<H: FragmentHost>(store: &FragmentStore<H>, property: Property) {
    store.update(|state| {
        state.insert(PROPERTY_KEY.to_string(), property.as_str().to_string());
        state.remove(ENTRY_KEY);
    });
}

pub fn record_entry<H: FragmentHost>(store: &FragmentStore<H>, key: &str) {
    store.set(ENTRY_KEY, key);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fragment::MemoryFragment;
    use std::cell::Cell;

    struct CountingFragment {
        inner: MemoryFragment,
        writes: Cell<usize>,
    }

    impl FragmentHost for CountingFragment {
        fn read_fragment(&self) -> String {
            self.inner.read_fragment()
        }

        fn write_fragment(&self, fragment: &str) {
            self.writes.set(self.writes.get() + 1);
            self.inner.write_fragment(fragment);
        }
    }

    fn counting(fragment: &str) -> CountingFragment {
        CountingFragment {
            inner: MemoryFragment::new(fragment),
            writes: Cell::new(0),
        }
    }

    #[test]
    fn test_defaults_on_empty_fragment() {
        let store = FragmentStore::new(MemoryFragment::new(""));
        let selection = Selection::load(&store, &ViewerConfig::default());
        assert_eq!(selection.visualization, Visualization::TreeMap);
        assert_eq!(selection.property, Property::Key);
        assert_eq!(selection.entry, None);
    }

    #[test]
    fn test_reads_all_keys() {
        let store = FragmentStore::new(MemoryFragment::new("#view=timeLine&property=ip&entry=ab12"));
        let selection = Selection::load(&store, &ViewerConfig::default());
        assert_eq!(selection.visualization, Visualization::TimeLine);
        assert_eq!(selection.property, Property::Ip);
        assert_eq!(selection.entry.as_deref(), Some("ab12"));
    }

    #[test]
    fn test_unknown_values_fall_back_to_config() {
        let config = ViewerConfig {
            default_property: Property::Size,
            ..ViewerConfig::default()
        };
        let store = FragmentStore::new(MemoryFragment::new("#view=pieChart&property=filename"));
        let selection = Selection::load(&store, &config);
        assert_eq!(selection.visualization, Visualization::TreeMap);
        assert_eq!(selection.property, Property::Size);
    }

    #[test]
    fn test_record_property_drops_entry_in_one_write() {
        let host = counting("#entry=k&view=treeMap");
        let store = FragmentStore::new(&host);
        record_property(&store, Property::Ip);
        assert_eq!(host.writes.get(), 1);
        let selection = Selection::load(&store, &ViewerConfig::default());
        assert_eq!(selection.property, Property::Ip);
        assert_eq!(selection.visualization, Visualization::TreeMap);
        assert_eq!(selection.entry, None);
        assert_eq!(host.read_fragment(), "property=ip&view=treeMap");
    }

    #[test]
    fn test_record_view_drops_entry_and_keeps_property() {
        let host = counting("#entry=k&property=size&view=timeLine");
        let store = FragmentStore::new(&host);
        record_view(&store, Visualization::TreeMap);
        assert_eq!(host.writes.get(), 1);
        assert_eq!(host.read_fragment(), "property=size&view=treeMap");
    }

    #[test]
    fn test_record_entry_keeps_selection() {
        let store = FragmentStore::new(MemoryFragment::new("#property=ip&view=treeMap"));
        record_entry(&store, "a b&c");
        let selection = Selection::load(&store, &ViewerConfig::default());
        assert_eq!(selection.property, Property::Ip);
        assert_eq!(selection.entry.as_deref(), Some("a b&c"));
    }

    #[test]
    fn test_recording_same_view_without_entry_does_not_write() {
        let host = counting("#view=treeMap");
        let store = FragmentStore::new(&host);
        record_view(&store, Visualization::TreeMap);
        assert_eq!(host.writes.get(), 0);
    }
}
