//! Two-level hierarchy handed to the D3 treemap layout.
//!
//! The root is named after the grouping property, its children are the
//! groups, and the grandchildren are the entries. Leaves carry a `value`
//! (the entry size passed through a [`SqrtScale`]) which D3 sums to size the
//! rectangles, so small entries stay visible next to very large ones.

use crate::grouping::{group_by, Property};
use crate::scale::SqrtScale;
use crate::snapshot::FileEntry;
use serde::Serialize;

/// Leaf label candidates. The renderer measures each text against the leaf
/// width and falls back when it does not fit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeafLabels {
    pub primary: String,
    pub primary_fallback: String,
    pub secondary: String,
    pub secondary_fallback: String,
}

impl LeafLabels {
    pub fn for_entry(entry: &FileEntry) -> Self {
        Self {
            primary: format!("Key: {}", entry.key),
            primary_fallback: "X".to_string(),
            secondary: format!("Size : {} KB", format_kb(entry.size)),
            secondary_fallback: String::new(),
        }
    }
}

/// Size in kilobytes with two decimals.
pub fn format_kb(size: u64) -> String {
    format!("{:.2}", size as f64 / 1024.0)
}

/// A treemap leaf: the entry's own fields plus layout weight and texts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreemapLeaf {
    #[serde(flatten)]
    pub entry: FileEntry,
    /// Scaled size; D3 sums these to size rectangles
    pub value: f64,
    /// Hover text
    pub title: String,
    pub labels: LeafLabels,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TreemapNode {
    Branch {
        key: String,
        children: Vec<TreemapNode>,
    },
    Leaf(TreemapLeaf),
}

impl TreemapNode {
    pub fn key(&self) -> &str {
        match self {
            TreemapNode::Branch { key, .. } => key,
            TreemapNode::Leaf(leaf) => &leaf.entry.key,
        }
    }

    pub fn children(&self) -> &[TreemapNode] {
        match self {
            TreemapNode::Branch { children, .. } => children,
            TreemapNode::Leaf(_) => &[],
        }
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            TreemapNode::Branch { children, .. } => children.iter().map(|c| c.leaf_count()).sum(),
            TreemapNode::Leaf(_) => 1,
        }
    }
}

/// Build the treemap hierarchy for `entries` grouped by `property`.
///
/// Leaves within a group are ordered by size, largest first.
pub fn build_treemap(entries: &[FileEntry], property: Property) -> TreemapNode {
    let scale = SqrtScale::fit(entries.iter().map(|e| e.size));

    let children = match scale {
        Some(scale) => group_by(entries, property)
            .into_iter()
            .map(|group| {
                let mut leaves = group.entries;
                leaves.sort_by(|a, b| b.size.cmp(&a.size));
                TreemapNode::Branch {
                    key: group.key,
                    children: leaves
                        .into_iter()
                        .map(|entry| {
                            TreemapNode::Leaf(TreemapLeaf {
                                value: scale.apply(entry.size as f64),
                                title: entry.tooltip(),
                                labels: LeafLabels::for_entry(&entry),
                                entry,
                            })
                        })
                        .collect(),
                }
            })
            .collect(),
        None => Vec::new(),
    };

    TreemapNode::Branch {
        key: property.as_str().to_string(),
        children,
    }
}
