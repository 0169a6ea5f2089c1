//! Grouping of file entries by a selected property.

use crate::snapshot::FileEntry;
use crate::timestamp::parse_timestamp;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Entry property used to form the first level of the treemap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Property {
    #[default]
    Key,
    Ip,
    Size,
    Timestamp,
    Headers,
}

impl Property {
    /// Selector options, in display order.
    pub const ALL: [Property; 5] = [
        Property::Key,
        Property::Ip,
        Property::Size,
        Property::Timestamp,
        Property::Headers,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Property::Key => "key",
            Property::Ip => "ip",
            Property::Size => "size",
            Property::Timestamp => "timestamp",
            Property::Headers => "headers",
        }
    }

    /// The grouping value of `entry` for this property.
    pub fn value_of(&self, entry: &FileEntry) -> String {
        match self {
            Property::Key => entry.key.clone(),
            Property::Ip => entry.ip.clone(),
            Property::Size => entry.size.to_string(),
            Property::Timestamp => entry.timestamp.clone(),
            Property::Headers => entry.header_lines().join(", "),
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Property {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Property::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| anyhow::anyhow!("unknown property: {}", s))
    }
}

/// Entries sharing one property value.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub key: String,
    pub entries: Vec<FileEntry>,
}

/// Per-group totals.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupSummary {
    pub key: String,
    pub count: usize,
    /// Sum of entry sizes in bytes
    pub total_size: u64,
    /// Most recent parseable timestamp in the group
    pub latest: Option<NaiveDateTime>,
}

/// Group entries by `property`. Groups appear in the order their key is
/// first seen; entries keep their input order within a group.
pub fn group_by(entries: &[FileEntry], property: Property) -> Vec<Group> {
    let mut groups: Vec<Group> = Vec::new();

    for entry in entries {
        let key = property.value_of(entry);
        match groups.iter_mut().find(|g| g.key == key) {
            Some(group) => group.entries.push(entry.clone()),
            None => groups.push(Group {
                key,
                entries: vec![entry.clone()],
            }),
        }
    }

    groups
}

pub fn summarize(groups: &[Group]) -> Vec<GroupSummary> {
    groups
        .iter()
        .map(|group| GroupSummary {
            key: group.key.clone(),
            count: group.entries.len(),
            total_size: group.entries.iter().map(|e| e.size).sum(),
            latest: group
                .entries
                .iter()
                .filter_map(|e| parse_timestamp(&e.timestamp))
                .max(),
        })
        .collect()
}
