use super::category::Category;
use super::daily_check::DailyCheck;
use super::date_field::DateField;
use super::discussion::Discussion;
use super::field::Field;
use super::group::Group;
use super::project_manager::ProjectManager;
use super::sales_channel::SalesChannel;
use super::status::Status;
use super::team_lead::TeamLead;
use serde::{Deserialize, Serialize};

/// One tracked client engagement.
///
/// The persisted JSON keys are camelCase (`dailyCheck`, `tlComments`, ...),
/// matching the `table-data` blob format. Every field defaults so a partial
/// blob still decodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectRecord {
    pub project: String,
    pub daily_check: DailyCheck,
    pub tl_comments: String,
    pub columns4: String,
    pub group: Group,
    pub category: Category,
    pub team_lead: TeamLead,
    pub status: Status,
    pub discussion: Discussion,
    pub start_date: DateField,
    pub end_date: DateField,
    pub project_manager: ProjectManager,
    pub client: String,
    pub sales_discussion: SalesChannel,
    pub month_year: String,
    pub rating_status: String,
    pub final_invoice_pending: String,
    pub rating_requested: String,
    pub client_satisfaction: String,
    pub priority: String,
}

impl ProjectRecord {
    /// Current value of a field as its wire string.
    pub fn get(&self, field: Field) -> String {
        match field {
            Field::Project => self.project.clone(),
            Field::DailyCheck => self.daily_check.as_str().to_string(),
            Field::TlComments => self.tl_comments.clone(),
            Field::Columns4 => self.columns4.clone(),
            Field::Group => self.group.as_str().to_string(),
            Field::Category => self.category.as_str().to_string(),
            Field::TeamLead => self.team_lead.as_str().to_string(),
            Field::Status => self.status.as_str().to_string(),
            Field::Discussion => self.discussion.as_str().to_string(),
            Field::StartDate => self.start_date.to_storage(),
            Field::EndDate => self.end_date.to_storage(),
            Field::ProjectManager => self.project_manager.as_str().to_string(),
            Field::Client => self.client.clone(),
            Field::SalesDiscussion => self.sales_discussion.as_str().to_string(),
            Field::MonthYear => self.month_year.clone(),
            Field::RatingStatus => self.rating_status.clone(),
            Field::FinalInvoicePending => self.final_invoice_pending.clone(),
            Field::RatingRequested => self.rating_requested.clone(),
            Field::ClientSatisfaction => self.client_satisfaction.clone(),
            Field::Priority => self.priority.clone(),
        }
    }

    /// Replace a field from a raw storage-format string.
    ///
    /// Total: enum fields decode with the legacy fallback and date fields
    /// accept any text. Validation belongs to the creation path, not here.
    pub fn set(&mut self, field: Field, raw: &str) {
        match field {
            Field::Project => self.project = raw.to_string(),
            Field::DailyCheck => self.daily_check = DailyCheck::from_wire(raw),
            Field::TlComments => self.tl_comments = raw.to_string(),
            Field::Columns4 => self.columns4 = raw.to_string(),
            Field::Group => self.group = Group::from_wire(raw),
            Field::Category => self.category = Category::from_wire(raw),
            Field::TeamLead => self.team_lead = TeamLead::from_wire(raw),
            Field::Status => self.status = Status::from_wire(raw),
            Field::Discussion => self.discussion = Discussion::from_wire(raw),
            Field::StartDate => self.start_date = DateField::from_storage(raw),
            Field::EndDate => self.end_date = DateField::from_storage(raw),
            Field::ProjectManager => self.project_manager = ProjectManager::from_wire(raw),
            Field::Client => self.client = raw.to_string(),
            Field::SalesDiscussion => self.sales_discussion = SalesChannel::from_wire(raw),
            Field::MonthYear => self.month_year = raw.to_string(),
            Field::RatingStatus => self.rating_status = raw.to_string(),
            Field::FinalInvoicePending => self.final_invoice_pending = raw.to_string(),
            Field::RatingRequested => self.rating_requested = raw.to_string(),
            Field::ClientSatisfaction => self.client_satisfaction = raw.to_string(),
            Field::Priority => self.priority = raw.to_string(),
        }
    }
}
