//! Storage dump returned by `GET /storage/v1/dump`.
//!
//! The dump maps every record id the service has ever seen to its current
//! value (or `null` once deleted) plus its history. Only the current values
//! are charted.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One HTTP header captured with the request that wrote a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Header {
    pub key: String,
    pub value: String,
}

/// The current value of a stored record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentValue {
    pub timestamp: String,
    /// Value size in bytes
    pub size: u64,
    /// Address of the client that wrote the value
    pub ip: String,
    #[serde(default)]
    pub headers: Vec<Header>,
}

/// A record as it appears in the dump. History fields are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StoredRecord {
    pub current: Option<CurrentValue>,
}

/// A full storage dump, keyed by record id.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Snapshot {
    pub records: BTreeMap<String, StoredRecord>,
}

/// A currently stored record, flattened for charting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileEntry {
    pub key: String,
    pub timestamp: String,
    pub size: u64,
    pub ip: String,
    pub headers: Vec<Header>,
}

impl Snapshot {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Records that still hold a value, in record id order.
    pub fn current_entries(&self) -> Vec<FileEntry> {
        let entries: Vec<FileEntry> = self
            .records
            .iter()
            .filter_map(|(key, record)| {
                let current = record.current.as_ref()?;
                Some(FileEntry {
                    key: key.clone(),
                    timestamp: current.timestamp.clone(),
                    size: current.size,
                    ip: current.ip.clone(),
                    headers: current.headers.clone(),
                })
            })
            .collect();
        debug!(
            "{} of {} records currently hold a value",
            entries.len(),
            self.records.len()
        );
        entries
    }
}

impl FileEntry {
    /// Hover text for a treemap leaf.
    pub fn tooltip(&self) -> String {
        format!(
            "Key : {}\nSize : {}Byte\nIP : {}\nDateTime : {}\n",
            self.key, self.size, self.ip, self.timestamp
        )
    }

    /// Headers rendered as `key = value` lines.
    pub fn header_lines(&self) -> Vec<String> {
        self.headers
            .iter()
            .map(|h| format!("{} = {}", h.key, h.value))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DUMP: &str = r#"{
        "bb": {"current": {"timestamp": "2018-06-02 10:00:00.000001", "size": 2048, "ip": "10.0.0.2",
                           "headers": [{"key": "Host", "value": "example.org"}]},
               "history": [{"action": "Update"}]},
        "aa": {"current": {"timestamp": "2018-06-01 09:00:00", "size": 10, "ip": "10.0.0.1", "headers": []}},
        "cc": {"current": null, "history": []}
    }"#;

    #[test]
    fn test_parses_dump_and_ignores_history() {
        let snapshot = Snapshot::from_json(DUMP).unwrap();
        assert_eq!(snapshot.records.len(), 3);
        assert!(snapshot.records["cc"].current.is_none());
    }

    #[test]
    fn test_deleted_records_are_filtered() {
        let entries = Snapshot::from_json(DUMP).unwrap().current_entries();
        let keys: Vec<&str> = entries.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["aa", "bb"]);
        assert_eq!(entries[1].size, 2048);
        assert_eq!(entries[1].headers[0].key, "Host");
    }

    #[test]
    fn test_missing_headers_default_to_empty() {
        let json = r#"{"k": {"current": {"timestamp": "t", "size": 1, "ip": "i"}}}"#;
        let entries = Snapshot::from_json(json).unwrap().current_entries();
        assert!(entries[0].headers.is_empty());
    }

    #[test]
    fn test_malformed_dump_is_an_error() {
        assert!(Snapshot::from_json("[1, 2, 3]").is_err());
        assert!(Snapshot::from_json(r#"{"k": {"current": {"size": "big"}}}"#).is_err());
    }

    #[test]
    fn test_tooltip_and_header_lines() {
        let entries = Snapshot::from_json(DUMP).unwrap().current_entries();
        assert_eq!(
            entries[0].tooltip(),
            "Key : aa\nSize : 10Byte\nIP : 10.0.0.1\nDateTime : 2018-06-01 09:00:00\n"
        );
        assert_eq!(entries[1].header_lines(), vec!["Host = example.org"]);
    }
}
