//! Once-per-day reset of the `dailyCheck` flag.
//!
//! Two states per process: pending (marker differs from today) and applied.
//! The transition fires at most once, at store initialization; the next
//! check only happens the next time a store is opened.

use crate::models::daily_check::DailyCheck;
use crate::models::record::ProjectRecord;
use crate::store::LAST_RESET_KEY;
use crate::store::adapter::StorageAdapter;
use crate::utils::date;
use chrono::NaiveDate;

/// True when the persisted marker is absent or names a different local
/// calendar day than `today`. An unreadable marker counts as different.
pub fn should_apply(adapter: &dyn StorageAdapter, today: NaiveDate) -> bool {
    let marker = adapter.load(LAST_RESET_KEY).ok().flatten();
    marker.as_deref() != Some(date::format_storage(today).as_str())
}

/// Clear every record's check-in flag.
pub fn reset_checks(records: &mut [ProjectRecord]) {
    for record in records.iter_mut() {
        record.daily_check = DailyCheck::No;
    }
}

/// Persist today's date as the new marker. Best-effort like every other
/// write; after a failure the reset simply repeats on the next open
/// (clearing is idempotent).
pub fn mark_applied(adapter: &mut dyn StorageAdapter, today: NaiveDate) {
    if let Err(e) = adapter.save(LAST_RESET_KEY, &date::format_storage(today)) {
        eprintln!("⚠️  Failed to persist reset marker: {}", e);
    }
}
