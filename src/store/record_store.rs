//! The record store: owns the in-memory collection and is the only writer.

use crate::models::field::Field;
use crate::models::record::ProjectRecord;
use crate::store::TABLE_DATA_KEY;
use crate::store::adapter::StorageAdapter;
use crate::store::bootstrap;
use crate::store::daily_reset;
use crate::utils::date;
use chrono::NaiveDate;

pub struct RecordStore {
    adapter: Box<dyn StorageAdapter>,
    records: Vec<ProjectRecord>,
}

impl RecordStore {
    /// Load the persisted collection and apply the daily reset policy.
    pub fn open(adapter: Box<dyn StorageAdapter>) -> Self {
        Self::open_at(adapter, date::today())
    }

    /// Clock-injected variant of [`RecordStore::open`]; `today` decides
    /// whether the daily reset fires.
    pub fn open_at(adapter: Box<dyn StorageAdapter>, today: NaiveDate) -> Self {
        let records = load_or_bootstrap(adapter.as_ref());
        let mut store = Self { adapter, records };

        if daily_reset::should_apply(store.adapter.as_ref(), today) {
            daily_reset::reset_checks(&mut store.records);
            store.persist();
            daily_reset::mark_applied(store.adapter.as_mut(), today);
        }

        store
    }

    pub fn records(&self) -> &[ProjectRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ProjectRecord> {
        self.records.get(index)
    }

    /// Replace one field of the record at `index` with a raw storage-format
    /// value, then rewrite the persisted collection.
    ///
    /// No validation here; that is the creation path's job. An out-of-range
    /// index is a caller bug and panics; collaborators bounds-check first.
    pub fn set_field(&mut self, index: usize, field: Field, raw: &str) {
        self.records[index].set(field, raw);
        self.persist();
    }

    /// Append an already-validated record, then rewrite the persisted
    /// collection.
    pub fn append(&mut self, record: ProjectRecord) {
        self.records.push(record);
        self.persist();
    }

    /// Whole-collection rewrite through the adapter; runs after every
    /// mutation, with no batching or debounce.
    ///
    /// A failed write is reported on stderr and not retried; the in-memory
    /// collection stays authoritative for the rest of the session.
    fn persist(&mut self) {
        let blob = match serde_json::to_string(&self.records) {
            Ok(blob) => blob,
            Err(e) => {
                eprintln!("⚠️  Failed to encode table-data: {}", e);
                return;
            }
        };

        if let Err(e) = self.adapter.save(TABLE_DATA_KEY, &blob) {
            eprintln!("⚠️  Failed to persist table-data: {}", e);
        }
    }
}

/// Fail-soft load: a missing or unparseable blob falls back to the bootstrap
/// default. Never errors.
fn load_or_bootstrap(adapter: &dyn StorageAdapter) -> Vec<ProjectRecord> {
    match adapter.load(TABLE_DATA_KEY) {
        Ok(Some(blob)) => {
            serde_json::from_str(&blob).unwrap_or_else(|_| bootstrap::default_records())
        }
        _ => bootstrap::default_records(),
    }
}
