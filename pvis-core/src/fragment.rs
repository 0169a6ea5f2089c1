//! Key/value state stored in a URL fragment (`#view=treeMap&property=ip`).
//!
//! The fragment is the only persistent copy of the state: every read decodes
//! it from scratch and every write replaces it wholesale. Decoding is
//! permissive; malformed segments are dropped instead of reported.
//!
//! The fragment itself lives behind [`FragmentHost`], so the store works the
//! same against `window.location` in the browser and against an in-memory
//! string in tests and the CLI.
//!
//! ```rust
//! use pvis_core::fragment::{FragmentStore, MemoryFragment};
//!
//! let store = FragmentStore::new(MemoryFragment::new("#a=1&bcd&=5&e=6"));
//! assert_eq!(store.get("a").as_deref(), Some("1"));
//! assert_eq!(store.get("bcd"), None);
//!
//! store.set("note", "a=b&c");
//! assert_eq!(store.get("note").as_deref(), Some("a=b&c"));
//! ```

use log::warn;
use std::collections::BTreeMap;
use std::sync::Mutex;

/// Decoded fragment contents.
pub type FragmentState = BTreeMap<String, String>;

/// Read/write access to the fragment string of a page.
pub trait FragmentHost {
    /// Current fragment, with or without the leading `#`.
    fn read_fragment(&self) -> String;

    /// Replace the fragment. `fragment` carries no leading `#`.
    fn write_fragment(&self, fragment: &str);
}

impl<H: FragmentHost + ?Sized> FragmentHost for &H {
    fn read_fragment(&self) -> String {
        (**self).read_fragment()
    }

    fn write_fragment(&self, fragment: &str) {
        (**self).write_fragment(fragment)
    }
}

/// A fragment held in process memory.
#[derive(Debug, Default)]
pub struct MemoryFragment {
    fragment: Mutex<String>,
}

impl MemoryFragment {
    pub fn new(fragment: impl Into<String>) -> Self {
        Self {
            fragment: Mutex::new(fragment.into()),
        }
    }
}

impl FragmentHost for MemoryFragment {
    fn read_fragment(&self) -> String {
        self.fragment
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn write_fragment(&self, fragment: &str) {
        let mut current = self
            .fragment
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *current = fragment.to_string();
    }
}

/// Decode a fragment into its key/value pairs.
///
/// A segment is kept only if splitting it on `=` yields exactly two parts and
/// the key part is non-empty. Later occurrences of a key overwrite earlier ones.
pub fn decode(fragment: &str) -> FragmentState {
    let fragment = fragment.strip_prefix('#').unwrap_or(fragment);

    fragment
        .split('&')
        .filter_map(|segment| {
            let parts: Vec<&str> = segment.split('=').collect();
            match parts.as_slice() {
                [key, value] if !key.is_empty() => {
                    let key = urlencoding::decode(key).ok()?;
                    let value = urlencoding::decode(value).ok()?;
                    Some((key.into_owned(), value.into_owned()))
                }
                _ => None,
            }
        })
        .fold(FragmentState::new(), |mut state, (key, value)| {
            state.insert(key, value);
            state
        })
}

/// Encode key/value pairs as `k1=v1&k2=v2`, escaping each part individually.
pub fn encode(state: &FragmentState) -> String {
    state
        .iter()
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Named string values persisted in a page fragment.
pub struct FragmentStore<H> {
    host: H,
    // Serializes the load/modify/store sequence of `update`.
    write_lock: Mutex<()>,
}

impl<H: FragmentHost> FragmentStore<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            write_lock: Mutex::new(()),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Decode the current fragment.
    pub fn load(&self) -> FragmentState {
        decode(&self.host.read_fragment())
    }

    /// Replace the fragment with the encoded `state`.
    pub fn store(&self, state: &FragmentState) {
        self.host.write_fragment(&encode(state));
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.load().remove(key)
    }

    /// Set one key, keeping every other key of the current fragment.
    ///
    /// An empty key is ignored: `load` drops `=value` segments, so it could
    /// never be read back.
    pub fn set(&self, key: &str, value: &str) {
        if key.is_empty() {
            warn!("Ignoring fragment value with an empty key");
            return;
        }
        self.update(|state| {
            state.insert(key.to_string(), value.to_string());
        });
    }

    /// Drop one key. The fragment is rewritten only if the key was present.
    pub fn remove(&self, key: &str) {
        self.update(|state| {
            state.remove(key);
        });
    }

    /// Apply `change` to the decoded fragment and write it back once.
    ///
    /// The fragment is rewritten only if `change` altered the state, so a
    /// no-op update adds no history entry.
    pub fn update<F: FnOnce(&mut FragmentState)>(&self, change: F) {
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let before = self.load();
        let mut state = before.clone();
        change(&mut state);
        if state != before {
            self.store(&state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    /// Memory host that counts writes.
    struct CountingFragment {
        inner: MemoryFragment,
        writes: Mutex<usize>,
    }

    impl CountingFragment {
        fn new(fragment: &str) -> Self {
            Self {
                inner: MemoryFragment::new(fragment),
                writes: Mutex::new(0),
            }
        }

        fn writes(&self) -> usize {
            *self.writes.lock().unwrap()
        }
    }

    impl FragmentHost for CountingFragment {
        fn read_fragment(&self) -> String {
            self.inner.read_fragment()
        }

        fn write_fragment(&self, fragment: &str) {
            *self.writes.lock().unwrap() += 1;
            self.inner.write_fragment(fragment);
        }
    }

    fn state(pairs: &[(&str, &str)]) -> FragmentState {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_malformed_segments_are_dropped() {
        let store = FragmentStore::new(MemoryFragment::new("#a=1&bcd&=5&e=6"));
        assert_eq!(store.load(), state(&[("a", "1"), ("e", "6")]));
    }

    #[test]
    fn test_segment_with_two_separators_is_dropped() {
        assert_eq!(decode("a=b=c&d=4"), state(&[("d", "4")]));
    }

    #[test]
    fn test_empty_value_is_kept() {
        assert_eq!(decode("#key="), state(&[("key", "")]));
    }

    #[test]
    fn test_last_occurrence_wins() {
        assert_eq!(decode("#x=1&y=2&x=3"), state(&[("x", "3"), ("y", "2")]));
    }

    #[test]
    fn test_keys_and_values_are_percent_decoded() {
        assert_eq!(
            decode("#my%20key=a%3Db%26c"),
            state(&[("my key", "a=b&c")])
        );
    }

    #[test]
    fn test_invalid_utf8_segment_is_dropped() {
        assert_eq!(decode("#bad=%FF&ok=1"), state(&[("ok", "1")]));
    }

    #[test]
    fn test_empty_fragment_has_no_entries() {
        let store = FragmentStore::new(MemoryFragment::new(""));
        assert!(store.load().is_empty());
        assert_eq!(store.get("missing"), None);
    }

    #[test]
    fn test_load_is_idempotent() {
        let store = FragmentStore::new(MemoryFragment::new("#view=treeMap&property=ip"));
        assert_eq!(store.load(), store.load());
    }

    #[test]
    fn test_store_then_load_round_trips() {
        let store = FragmentStore::new(MemoryFragment::default());
        let original = state(&[("view", "treeMap"), ("property", "timestamp"), ("note", "héllo wörld")]);
        store.store(&original);
        assert_eq!(store.load(), original);
    }

    #[test]
    fn test_store_escapes_delimiters() {
        let host = MemoryFragment::default();
        let store = FragmentStore::new(&host);
        store.store(&state(&[("a&b", "c=d")]));
        assert_eq!(host.read_fragment(), "a%26b=c%3Dd");
    }

    #[test]
    fn test_sequential_sets_accumulate() {
        let store = FragmentStore::new(MemoryFragment::default());
        store.set("x", "1");
        store.set("y", "2");
        assert_eq!(store.load(), state(&[("x", "1"), ("y", "2")]));
    }

    #[test]
    fn test_set_get_with_reserved_characters() {
        let store = FragmentStore::new(MemoryFragment::default());
        store.set("q", "a=b&c");
        assert_eq!(store.get("q").as_deref(), Some("a=b&c"));
    }

    #[test]
    fn test_set_overwrites_existing_key() {
        let store = FragmentStore::new(MemoryFragment::new("#view=timeLine&property=ip"));
        store.set("view", "treeMap");
        assert_eq!(store.load(), state(&[("property", "ip"), ("view", "treeMap")]));
    }

    #[test]
    fn test_remove_drops_only_that_key() {
        let store = FragmentStore::new(MemoryFragment::new("#entry=abc&view=treeMap"));
        store.remove("entry");
        assert_eq!(store.load(), state(&[("view", "treeMap")]));
    }

    #[test]
    fn test_remove_missing_key_leaves_fragment_untouched() {
        let host = MemoryFragment::new("#junk&view=treeMap");
        let store = FragmentStore::new(&host);
        store.remove("entry");
        assert_eq!(host.read_fragment(), "#junk&view=treeMap");
    }

    #[test]
    fn test_set_with_empty_key_is_ignored() {
        let host = MemoryFragment::new("#k%20y=1");
        let store = FragmentStore::new(&host);
        store.set("", "v");
        assert_eq!(host.read_fragment(), "#k%20y=1");
        assert_eq!(store.load(), state(&[("k y", "1")]));
    }

    #[test]
    fn test_update_writes_both_changes_at_once() {
        let host = CountingFragment::new("#entry=abc&view=timeLine");
        let store = FragmentStore::new(&host);
        store.update(|state| {
            state.insert("view".to_string(), "treeMap".to_string());
            state.remove("entry");
        });
        assert_eq!(host.writes(), 1);
        assert_eq!(store.load(), state(&[("view", "treeMap")]));
    }

    #[test]
    fn test_update_without_change_does_not_write() {
        let host = CountingFragment::new("#view=treeMap");
        let store = FragmentStore::new(&host);
        store.set("view", "treeMap");
        store.remove("entry");
        assert_eq!(host.writes(), 0);
    }

    #[test]
    fn test_concurrent_sets_do_not_lose_updates() {
        let store = Arc::new(FragmentStore::new(MemoryFragment::default()));
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                thread::spawn(move || store.set(&format!("k{}", i), &i.to_string()))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(store.load().len(), 8);
    }
}
