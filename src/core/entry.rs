//! High-level entry points called by the presentation layer: save a new
//! validated entry, edit a single cell.

use crate::core::validate::{EntryDraft, validate};
use crate::errors::{AppError, AppResult};
use crate::models::category::Category;
use crate::models::daily_check::DailyCheck;
use crate::models::date_field::DateField;
use crate::models::discussion::Discussion;
use crate::models::field::Field;
use crate::models::group::Group;
use crate::models::project_manager::ProjectManager;
use crate::models::record::ProjectRecord;
use crate::models::sales_channel::SalesChannel;
use crate::models::status::Status;
use crate::models::team_lead::TeamLead;
use crate::store::record_store::RecordStore;
use crate::utils::date;

/// Validate a draft and append it to the collection.
///
/// A non-empty validation mapping rejects the submission; nothing is mutated
/// and the mapping is returned inside the error for per-field display.
pub fn save_entry(store: &mut RecordStore, draft: &EntryDraft) -> AppResult<()> {
    let errors = validate(draft);
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    store.append(build_record(draft));
    Ok(())
}

/// Edit one field of the record at `index`.
///
/// Date fields arrive in the view format the date controls produce and are
/// converted to storage format here; the store never sees view-format text.
/// The index is bounds-checked at this layer; inside the store an
/// out-of-range index is a programmer error.
pub fn edit_field(store: &mut RecordStore, index: usize, field: Field, raw: &str) -> AppResult<()> {
    if index >= store.len() {
        return Err(AppError::InvalidIndex(index));
    }

    if field.is_date() {
        store.set_field(index, field, &date::view_to_storage(raw));
    } else {
        store.set_field(index, field, raw);
    }
    Ok(())
}

/// Build the record from an already-validated draft, filling the fields the
/// form does not expose with the form's defaults.
fn build_record(draft: &EntryDraft) -> ProjectRecord {
    ProjectRecord {
        project: draft.project.clone(),
        daily_check: DailyCheck::No,
        tl_comments: draft.tl_comments.clone(),
        columns4: String::new(),
        group: Group::from_wire(&draft.group),
        category: Category::from_wire(&draft.category),
        team_lead: TeamLead::from_wire(&draft.team_lead),
        status: Status::from_wire(&draft.status),
        discussion: Discussion::from_wire(&draft.discussion),
        start_date: DateField::from_storage(&date::view_to_storage(&draft.start_date)),
        end_date: DateField::from_storage(&date::view_to_storage(&draft.end_date)),
        project_manager: ProjectManager::from_wire(&draft.project_manager),
        client: draft.client.clone(),
        sales_discussion: SalesChannel::from_wire(&draft.sales_discussion),
        month_year: draft.month_year.clone(),
        rating_status: String::new(),
        final_invoice_pending: "No".to_string(),
        rating_requested: "No".to_string(),
        client_satisfaction: String::new(),
        priority: draft.priority.clone(),
    }
}
