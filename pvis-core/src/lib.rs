//! Core types for the storage visualizer.
//!
//! - `snapshot`: the storage dump and the flattened [`snapshot::FileEntry`] records
//! - `grouping`, `scale`, `hierarchy`: reshaping entries into a treemap hierarchy
//! - `fragment`: key/value state kept in the page URL fragment
//! - `selection`: the view/property/entry selection stored in that fragment
//! - `config`: viewer configuration with file overlay

pub mod config;
pub mod fragment;
pub mod grouping;
pub mod hierarchy;
pub mod scale;
pub mod selection;
pub mod snapshot;
pub mod timestamp;
pub mod visualization;
