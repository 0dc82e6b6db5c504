//! Persisted list of finished quizzes.

pub mod backend;
pub mod query;

pub use backend::{MemoryBackend, StorageBackend};
#[cfg(not(target_arch = "wasm32"))]
pub use backend::FileBackend;
#[cfg(target_arch = "wasm32")]
pub use backend::LocalStorageBackend;
pub use query::{HistoryQuery, HistorySort, HistoryStats};

use crate::model::HistoryRecord;

/// Most records kept; older ones are dropped first.
pub const MAX_HISTORY_RECORDS: usize = 50;

pub const DEFAULT_STORAGE_KEY: &str = "quizHistory";

/// Append-only, capped history of quiz results, stored as one JSON array
/// under a single key.
pub struct HistoryStore {
    backend: Box<dyn StorageBackend>,
    key: String,
    records: Vec<HistoryRecord>,
}

impl HistoryStore {
    /// Loads whatever `backend` holds under `key`. Missing or unreadable data
    /// yields an empty history.
    pub fn open(backend: Box<dyn StorageBackend>, key: impl Into<String>) -> Self {
        let key = key.into();
        let records = match backend.load(&key) {
            Ok(Some(text)) => match serde_json::from_str::<Vec<HistoryRecord>>(&text) {
                Ok(mut records) => {
                    trim_front(&mut records);
                    records
                }
                Err(err) => {
                    log::warn!("ignoring corrupt quiz history under '{key}': {err}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                log::warn!("could not read quiz history '{key}': {err}");
                Vec::new()
            }
        };
        Self {
            backend,
            key,
            records,
        }
    }

    /// History that lives only as long as the process.
    pub fn in_memory() -> Self {
        Self::open(Box::new(MemoryBackend::new()), DEFAULT_STORAGE_KEY)
    }

    pub fn append(&mut self, record: HistoryRecord) {
        self.records.push(record);
        trim_front(&mut self.records);
        self.persist();
    }

    /// Oldest first.
    pub fn list(&self) -> &[HistoryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
        if let Err(err) = self.backend.remove(&self.key) {
            log::error!("could not remove quiz history '{}': {err}", self.key);
        }
    }

    fn persist(&mut self) {
        let json = match serde_json::to_string(&self.records) {
            Ok(json) => json,
            Err(err) => {
                log::error!("could not serialize quiz history: {err}");
                return;
            }
        };
        if let Err(err) = self.backend.store(&self.key, &json) {
            log::error!("could not save quiz history '{}': {err}", self.key);
        }
    }
}

fn trim_front(records: &mut Vec<HistoryRecord>) {
    if records.len() > MAX_HISTORY_RECORDS {
        let excess = records.len() - MAX_HISTORY_RECORDS;
        records.drain(..excess);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use std::cell::RefCell;
    use std::io;
    use std::rc::Rc;

    fn record(n: usize) -> HistoryRecord {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::minutes(n as i64);
        HistoryRecord::new(n % 11, 10, at)
    }

    /// Backend whose contents stay visible to the test after the store takes it.
    #[derive(Clone, Default)]
    struct SharedBackend(Rc<RefCell<MemoryBackend>>);

    impl StorageBackend for SharedBackend {
        fn load(&self, key: &str) -> io::Result<Option<String>> {
            self.0.borrow().load(key)
        }
        fn store(&mut self, key: &str, value: &str) -> io::Result<()> {
            self.0.borrow_mut().store(key, value)
        }
        fn remove(&mut self, key: &str) -> io::Result<()> {
            self.0.borrow_mut().remove(key)
        }
    }

    #[test]
    fn append_keeps_insertion_order() {
        let mut store = HistoryStore::in_memory();
        store.append(record(1));
        store.append(record(2));
        assert_eq!(store.list(), &[record(1), record(2)]);
    }

    #[test]
    fn fifty_first_record_evicts_the_oldest() {
        let mut store = HistoryStore::in_memory();
        for n in 0..=MAX_HISTORY_RECORDS {
            store.append(record(n));
        }
        assert_eq!(store.len(), MAX_HISTORY_RECORDS);
        assert_eq!(store.list().first(), Some(&record(1)));
        assert_eq!(store.list().last(), Some(&record(MAX_HISTORY_RECORDS)));
    }

    #[test]
    fn records_survive_reopening() {
        let shared = SharedBackend::default();
        let mut store = HistoryStore::open(Box::new(shared.clone()), "quizHistory");
        store.append(record(3));
        drop(store);

        let reopened = HistoryStore::open(Box::new(shared), "quizHistory");
        assert_eq!(reopened.list(), &[record(3)]);
    }

    #[test]
    fn corrupt_data_loads_as_empty() {
        let backend = MemoryBackend::with_entry("quizHistory", "{not json");
        let store = HistoryStore::open(Box::new(backend), "quizHistory");
        assert!(store.is_empty());
    }

    #[test]
    fn oversized_stored_list_is_trimmed_on_load() {
        let records: Vec<_> = (0..60).map(record).collect();
        let json = serde_json::to_string(&records).expect("serializes");
        let store = HistoryStore::open(
            Box::new(MemoryBackend::with_entry("quizHistory", &json)),
            "quizHistory",
        );
        assert_eq!(store.len(), MAX_HISTORY_RECORDS);
        assert_eq!(store.list()[0], record(10));
    }

    #[test]
    fn clear_drops_records_and_the_stored_key() {
        let shared = SharedBackend::default();
        let mut store = HistoryStore::open(Box::new(shared.clone()), "quizHistory");
        store.append(record(1));
        store.clear();
        assert!(store.is_empty());
        assert_eq!(shared.load("quizHistory").expect("load"), None);
    }
}
