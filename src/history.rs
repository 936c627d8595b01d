// Recency and history lists over an injectable key-value store
// Lists are JSON-encoded arrays, newest first, capped at 10 entries.
// Absent or malformed persisted state is treated as an empty list,
// never as an error.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Maximum entries kept per list
pub const HISTORY_CAP: usize = 10;

/// Storage key for the color converter recency list
pub const RECENT_COLORS_KEY: &str = "recentColors";

/// Storage key for the UUID generation history
pub const UUID_HISTORY_KEY: &str = "uuid_history";

/// Storage key for the password generation history
pub const PASSWORD_HISTORY_KEY: &str = "password_history";

// ============================================================================
// KEY-VALUE STORE SEAM
// ============================================================================

/// Minimal persistence contract so core logic stays testable without a
/// real browser/disk environment
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
}

/// In-memory store, used in tests
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: std::collections::HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }
}

/// Single-JSON-file store backing the CLI's cross-invocation history.
/// A missing or malformed file opens as an empty store; writes are
/// best-effort, so a read-only location degrades to in-memory behavior.
#[derive(Debug)]
pub struct FileStore {
    path: std::path::PathBuf,
    entries: std::collections::HashMap<String, String>,
}

impl FileStore {
    pub fn open(path: impl Into<std::path::PathBuf>) -> Self {
        let path = path.into();
        let entries = std::fs::read_to_string(&path)
            .ok()
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or_default();

        FileStore { path, entries }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
        if let Ok(json) = serde_json::to_string_pretty(&self.entries) {
            let _ = std::fs::write(&self.path, json);
        }
    }
}

// ============================================================================
// HISTORY ENTRY
// ============================================================================

/// One persisted value with optional provenance fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub value: String,

    /// Source format (recent colors)
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Wall-clock milliseconds at generation time
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,

    /// Generator version (UUID history)
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl HistoryEntry {
    pub fn new(value: impl Into<String>) -> Self {
        HistoryEntry {
            value: value.into(),
            format: None,
            timestamp: None,
            version: None,
        }
    }

    /// Builder pattern: attach the source format
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Builder pattern: attach a millisecond timestamp
    pub fn with_timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Builder pattern: attach the generator version
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }
}

// ============================================================================
// RECENCY LIST
// ============================================================================

/// Capped, most-recent-first list persisted under one storage key
#[derive(Debug, Clone)]
pub struct RecencyList {
    key: String,
    /// De-duplicate by value on insert (recency lists do, histories do not)
    dedupe: bool,
    entries: Vec<HistoryEntry>,
}

impl RecencyList {
    /// Load from the store; absent or malformed JSON is an empty list
    pub fn load(store: &dyn KeyValueStore, key: &str, dedupe: bool) -> Self {
        let entries = store
            .get(key)
            .and_then(|json| serde_json::from_str::<Vec<HistoryEntry>>(&json).ok())
            .unwrap_or_default();

        RecencyList {
            key: key.to_string(),
            dedupe,
            entries,
        }
    }

    /// Insert an entry at the front, enforce the cap, persist
    pub fn push(&mut self, store: &mut dyn KeyValueStore, entry: HistoryEntry) {
        if self.dedupe {
            self.entries.retain(|e| e.value != entry.value);
        }
        self.entries.insert(0, entry);
        self.entries.truncate(HISTORY_CAP);

        let json = serde_json::to_string(&self.entries).unwrap_or_else(|_| "[]".to_string());
        store.set(&self.key, json);
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// RECORDERS
// ============================================================================

/// Record a successful color conversion into the recent-colors list
pub fn record_color(store: &mut dyn KeyValueStore, value: &str, format: &str) {
    let mut list = RecencyList::load(&*store, RECENT_COLORS_KEY, true);
    list.push(store, HistoryEntry::new(value).with_format(format));
}

/// Record the first UUID of a batch with its version and generation time
pub fn record_uuid(store: &mut dyn KeyValueStore, first: &str, version: &str) {
    let mut list = RecencyList::load(&*store, UUID_HISTORY_KEY, false);
    list.push(
        store,
        HistoryEntry::new(first)
            .with_version(version)
            .with_timestamp(Utc::now().timestamp_millis()),
    );
}

/// Record a generated password with its generation time
pub fn record_password(store: &mut dyn KeyValueStore, password: &str) {
    let mut list = RecencyList::load(&*store, PASSWORD_HISTORY_KEY, false);
    list.push(
        store,
        HistoryEntry::new(password).with_timestamp(Utc::now().timestamp_millis()),
    );
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_state_is_empty() {
        let store = MemoryStore::new();
        let list = RecencyList::load(&store, RECENT_COLORS_KEY, true);
        assert!(list.is_empty());
    }

    #[test]
    fn test_malformed_state_is_empty_not_an_error() {
        let mut store = MemoryStore::new();
        store.set(RECENT_COLORS_KEY, "{not json!".to_string());
        let list = RecencyList::load(&store, RECENT_COLORS_KEY, true);
        assert!(list.is_empty());
    }

    #[test]
    fn test_cap_at_ten_newest_first() {
        let mut store = MemoryStore::new();
        let mut list = RecencyList::load(&store, UUID_HISTORY_KEY, false);
        for i in 0..11 {
            list.push(&mut store, HistoryEntry::new(format!("value-{}", i)));
        }
        assert_eq!(list.len(), 10);
        assert_eq!(list.entries()[0].value, "value-10");
        assert_eq!(list.entries()[9].value, "value-1");
    }

    #[test]
    fn test_dedupe_moves_value_to_front() {
        let mut store = MemoryStore::new();
        let mut list = RecencyList::load(&store, RECENT_COLORS_KEY, true);
        list.push(&mut store, HistoryEntry::new("#ff0000").with_format("hex"));
        list.push(&mut store, HistoryEntry::new("#00ff00").with_format("hex"));
        list.push(&mut store, HistoryEntry::new("#ff0000").with_format("hex"));
        assert_eq!(list.len(), 2);
        assert_eq!(list.entries()[0].value, "#ff0000");
        assert_eq!(list.entries()[1].value, "#00ff00");
    }

    #[test]
    fn test_persists_and_reloads() {
        let mut store = MemoryStore::new();
        let mut list = RecencyList::load(&store, UUID_HISTORY_KEY, false);
        list.push(
            &mut store,
            HistoryEntry::new("abc").with_version("v4").with_timestamp(1_700_000_000_000),
        );

        let reloaded = RecencyList::load(&store, UUID_HISTORY_KEY, false);
        assert_eq!(reloaded.entries()[0].value, "abc");
        assert_eq!(reloaded.entries()[0].version.as_deref(), Some("v4"));
        assert_eq!(reloaded.entries()[0].timestamp, Some(1_700_000_000_000));
    }

    fn temp_store_path(tag: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("dev-toolbox-{}-{}.json", tag, std::process::id()))
    }

    #[test]
    fn test_file_store_persists_across_opens() {
        let path = temp_store_path("persist");
        let _ = std::fs::remove_file(&path);

        let mut store = FileStore::open(&path);
        record_color(&mut store, "#336699", "hex");

        let reopened = FileStore::open(&path);
        let list = RecencyList::load(&reopened, RECENT_COLORS_KEY, true);
        assert_eq!(list.entries()[0].value, "#336699");

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_file_store_tolerates_missing_and_malformed_files() {
        let path = temp_store_path("malformed");
        let missing = FileStore::open(&path);
        assert!(missing.get(RECENT_COLORS_KEY).is_none());

        std::fs::write(&path, "{broken json").unwrap();
        let malformed = FileStore::open(&path);
        assert!(malformed.get(RECENT_COLORS_KEY).is_none());

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_recorders() {
        let mut store = MemoryStore::new();
        record_color(&mut store, "#ff0000", "hex");
        record_color(&mut store, "#ff0000", "hex");
        let colors = RecencyList::load(&store, RECENT_COLORS_KEY, true);
        assert_eq!(colors.len(), 1);

        record_uuid(&mut store, "abc-123", "v4");
        let uuids = RecencyList::load(&store, UUID_HISTORY_KEY, false);
        assert_eq!(uuids.entries()[0].version.as_deref(), Some("v4"));
        assert!(uuids.entries()[0].timestamp.is_some());

        record_password(&mut store, "s3cret!");
        let passwords = RecencyList::load(&store, PASSWORD_HISTORY_KEY, false);
        assert_eq!(passwords.entries()[0].value, "s3cret!");
    }

    #[test]
    fn test_optional_fields_are_omitted_from_json() {
        let mut store = MemoryStore::new();
        let mut list = RecencyList::load(&store, RECENT_COLORS_KEY, true);
        list.push(&mut store, HistoryEntry::new("#123456").with_format("hex"));

        let json = store.get(RECENT_COLORS_KEY).unwrap();
        assert!(json.contains("\"format\""));
        assert!(!json.contains("\"timestamp\""));
        assert!(!json.contains("\"version\""));
    }
}
