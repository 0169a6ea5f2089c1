//! Visualization modes offered by the viewer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Visualization {
    #[default]
    #[serde(rename = "treeMap")]
    TreeMap,
    #[serde(rename = "googleMap")]
    GoogleMap,
    #[serde(rename = "timeLine")]
    TimeLine,
}

impl Visualization {
    pub const ALL: [Visualization; 3] = [
        Visualization::TreeMap,
        Visualization::GoogleMap,
        Visualization::TimeLine,
    ];

    /// Name used in selector values and the URL fragment.
    pub fn as_str(&self) -> &'static str {
        match self {
            Visualization::TreeMap => "treeMap",
            Visualization::GoogleMap => "googleMap",
            Visualization::TimeLine => "timeLine",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Visualization::TreeMap => "Tree Map",
            Visualization::GoogleMap => "IP Google Map",
            Visualization::TimeLine => "Time Line",
        }
    }

    pub fn is_implemented(&self) -> bool {
        matches!(self, Visualization::TreeMap)
    }

    /// Whether the property selector applies to this mode.
    pub fn groups_by_property(&self) -> bool {
        matches!(self, Visualization::TreeMap)
    }

    /// Modes listed in the selector.
    pub fn selectable() -> impl Iterator<Item = Visualization> {
        Self::ALL.into_iter().filter(|v| v.is_implemented())
    }

    /// Selector entries as `(mode, enabled)` while `current` is shown.
    ///
    /// An unimplemented `current` (only reachable through the URL) is listed
    /// first and disabled, so the selector shows it and picking any
    /// implemented mode is still a change.
    pub fn selector_options(current: Visualization) -> Vec<(Visualization, bool)> {
        let placeholder = (!current.is_implemented()).then_some((current, false));
        placeholder
            .into_iter()
            .chain(Self::selectable().map(|v| (v, true)))
            .collect()
    }
}

impl fmt::Display for Visualization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Visualization {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Visualization::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| anyhow::anyhow!("unknown visualization: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_treemap_is_selectable() {
        let selectable: Vec<_> = Visualization::selectable().collect();
        assert_eq!(selectable, vec![Visualization::TreeMap]);
    }

    #[test]
    fn test_selector_options_for_implemented_view() {
        assert_eq!(
            Visualization::selector_options(Visualization::TreeMap),
            vec![(Visualization::TreeMap, true)]
        );
    }

    #[test]
    fn test_selector_options_keep_unimplemented_view_disabled() {
        assert_eq!(
            Visualization::selector_options(Visualization::TimeLine),
            vec![(Visualization::TimeLine, false), (Visualization::TreeMap, true)]
        );
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("timeLine".parse::<Visualization>().unwrap(), Visualization::TimeLine);
        assert_eq!("googleMap".parse::<Visualization>().unwrap(), Visualization::GoogleMap);
        assert!("TreeMap".parse::<Visualization>().is_err());
    }

    #[test]
    fn test_serde_names_match_fragment_names() {
        for v in Visualization::ALL {
            assert_eq!(serde_json::to_string(&v).unwrap(), format!("\"{}\"", v.as_str()));
        }
    }
}
