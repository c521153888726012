use chrono::NaiveDate;
use projtrack::errors::{AppError, AppResult};
use projtrack::models::field::Field;
use projtrack::models::record::ProjectRecord;
use projtrack::models::status::Status;
use projtrack::store::adapter::{MemoryAdapter, StorageAdapter};
use projtrack::store::bootstrap::default_records;
use projtrack::store::record_store::RecordStore;
use projtrack::store::sqlite::SqliteStore;
use projtrack::store::{LAST_RESET_KEY, TABLE_DATA_KEY};

mod common;
use common::setup_test_db;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Adapter whose writes always fail, to pin down the best-effort
/// persistence gap: the in-memory collection must stay authoritative.
struct FailingAdapter;

impl StorageAdapter for FailingAdapter {
    fn load(&self, _key: &str) -> AppResult<Option<String>> {
        Ok(None)
    }

    fn save(&mut self, _key: &str, _value: &str) -> AppResult<()> {
        Err(AppError::Storage("disk full".to_string()))
    }
}

#[test]
fn test_bootstrap_when_nothing_persisted() {
    let store = RecordStore::open_at(Box::new(MemoryAdapter::new()), day(2025, 10, 4));
    assert_eq!(store.records(), default_records().as_slice());
}

#[test]
fn test_zero_state_scenario_persists_collection_and_marker() {
    let db_path = setup_test_db("zero_state_scenario");

    {
        let db = SqliteStore::open(&db_path).expect("open db");
        let store = RecordStore::open_at(Box::new(db), day(2025, 10, 4));
        assert_eq!(store.len(), default_records().len());
        assert!(store.records().iter().all(|r| !r.daily_check.is_done()));
    }

    // Reopen the raw store and inspect the persisted slots.
    let db = SqliteStore::open(&db_path).expect("reopen db");
    let blob = db.load(TABLE_DATA_KEY).expect("load").expect("table-data");
    let persisted: Vec<ProjectRecord> = serde_json::from_str(&blob).expect("decode");
    assert_eq!(persisted, default_records());

    let marker = db.load(LAST_RESET_KEY).expect("load").expect("marker");
    assert_eq!(marker, "04/10/2025");
}

#[test]
fn test_append_preserves_order() {
    let db_path = setup_test_db("append_order");
    let db = SqliteStore::open(&db_path).expect("open db");
    let mut store = RecordStore::open_at(Box::new(db), day(2025, 10, 4));

    let before = store.records().to_vec();
    let record = ProjectRecord {
        project: "Orbit landing page".to_string(),
        client: "Orbit Labs".to_string(),
        ..ProjectRecord::default()
    };
    store.append(record.clone());

    assert_eq!(store.len(), before.len() + 1);
    assert_eq!(&store.records()[..before.len()], before.as_slice());
    assert_eq!(store.records()[before.len()], record);

    // The whole collection was rewritten on append.
    drop(store);
    let db = SqliteStore::open(&db_path).expect("reopen db");
    let blob = db.load(TABLE_DATA_KEY).expect("load").expect("table-data");
    let persisted: Vec<ProjectRecord> = serde_json::from_str(&blob).expect("decode");
    assert_eq!(persisted.len(), before.len() + 1);
    assert_eq!(persisted[before.len()].project, "Orbit landing page");
}

#[test]
fn test_set_field_touches_only_its_target() {
    let store_day = day(2025, 10, 4);
    let mut store = RecordStore::open_at(Box::new(MemoryAdapter::new()), store_day);
    let before = store.records().to_vec();

    store.set_field(1, Field::Status, "Completed");

    assert_eq!(store.records()[0], before[0]);
    assert_eq!(store.records()[2], before[2]);

    let mut expected = before[1].clone();
    expected.status = Status::Completed;
    assert_eq!(store.records()[1], expected);
}

#[test]
fn test_set_field_unknown_enum_value_decodes_as_legacy() {
    let db_path = setup_test_db("legacy_decode");

    {
        let db = SqliteStore::open(&db_path).expect("open db");
        let mut store = RecordStore::open_at(Box::new(db), day(2025, 10, 4));
        store.set_field(0, Field::Status, "Ancient Status");
        assert_eq!(
            store.records()[0].status,
            Status::Legacy("Ancient Status".to_string())
        );
        assert_eq!(store.records()[0].get(Field::Status), "Ancient Status");
    }

    // Unknown values survive a persistence round trip verbatim.
    let db = SqliteStore::open(&db_path).expect("reopen db");
    let store = RecordStore::open_at(Box::new(db), day(2025, 10, 4));
    assert_eq!(store.records()[0].get(Field::Status), "Ancient Status");
}

#[test]
fn test_corrupt_blob_falls_back_to_bootstrap() {
    let adapter =
        MemoryAdapter::with_entries([(TABLE_DATA_KEY, "definitely-not-json{{")]);
    let store = RecordStore::open_at(Box::new(adapter), day(2025, 10, 4));
    assert_eq!(store.records(), default_records().as_slice());
}

#[test]
fn test_persisted_empty_collection_is_respected() {
    // An empty array is valid persisted state, not a corruption.
    let adapter = MemoryAdapter::with_entries([(TABLE_DATA_KEY, "[]")]);
    let store = RecordStore::open_at(Box::new(adapter), day(2025, 10, 4));
    assert!(store.is_empty());
}

#[test]
fn test_failed_write_does_not_abort_the_mutation() {
    // Persistence is best-effort in the current design: the edit stands in
    // memory even when every save fails.
    let mut store = RecordStore::open_at(Box::new(FailingAdapter), day(2025, 10, 4));
    store.set_field(0, Field::Project, "Renamed after disk loss");
    assert_eq!(store.records()[0].project, "Renamed after disk loss");
}

#[test]
#[should_panic]
fn test_set_field_out_of_range_is_a_programmer_error() {
    let mut store = RecordStore::open_at(Box::new(MemoryAdapter::new()), day(2025, 10, 4));
    store.set_field(99, Field::Status, "Completed");
}
