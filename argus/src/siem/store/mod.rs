// argus/src/siem/store/mod.rs
//!
//! Shared in-memory record collection with bounded retention.
//!
//! Most-recent-first is the display convention, not a stored time-order
//! invariant: live records are prepended with the current instant while the
//! seeded samples arrive oldest first.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::siem::models::LogRecord;
use crate::siem::DefaultDashboardConfig;

/// Bounded record collection shared between the feed and the query side.
#[derive(Debug, Clone)]
pub struct LogStore {
    records: Arc<Mutex<Vec<LogRecord>>>,
    max_retained: usize,
}

impl Default for LogStore {
    fn default() -> Self {
        Self::new(DefaultDashboardConfig::MAX_RETAINED_RECORDS)
    }
}

impl LogStore {
    pub fn new(max_retained: usize) -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
            max_retained,
        }
    }

    /// Replace the collection contents, trimming to the retention cap.
    pub fn seed(&self, records: Vec<LogRecord>) {
        let mut guard = self.lock();
        *guard = records;
        guard.truncate(self.max_retained);
    }

    /// Prepend a record. Eviction of the entry past the retention cap
    /// happens under the same lock as the insert.
    pub fn insert(&self, record: LogRecord) {
        let mut guard = self.lock();
        guard.insert(0, record);
        guard.truncate(self.max_retained);
    }

    /// Consistent copy of the collection for one query pass.
    pub fn snapshot(&self) -> Vec<LogRecord> {
        self.lock().clone()
    }

    pub fn get(&self, id: &str) -> Option<LogRecord> {
        self.lock().iter().find(|r| r.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<LogRecord>> {
        self.records.lock().unwrap_or_else(|e| e.into_inner())
    }
}
