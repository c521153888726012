/// Addressable fields of a [`super::record::ProjectRecord`].
///
/// The keys are the persisted JSON keys; `set_field` and the `edit` command
/// resolve user input through [`Field::from_key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Project,
    DailyCheck,
    TlComments,
    Columns4,
    Group,
    Category,
    TeamLead,
    Status,
    Discussion,
    StartDate,
    EndDate,
    ProjectManager,
    Client,
    SalesDiscussion,
    MonthYear,
    RatingStatus,
    FinalInvoicePending,
    RatingRequested,
    ClientSatisfaction,
    Priority,
}

/// All fields, in column order.
pub const ALL_FIELDS: [Field; 20] = [
    Field::Project,
    Field::DailyCheck,
    Field::TlComments,
    Field::Columns4,
    Field::Group,
    Field::Category,
    Field::TeamLead,
    Field::Status,
    Field::Discussion,
    Field::StartDate,
    Field::EndDate,
    Field::ProjectManager,
    Field::Client,
    Field::SalesDiscussion,
    Field::MonthYear,
    Field::RatingStatus,
    Field::FinalInvoicePending,
    Field::RatingRequested,
    Field::ClientSatisfaction,
    Field::Priority,
];

impl Field {
    pub fn key(&self) -> &'static str {
        match self {
            Field::Project => "project",
            Field::DailyCheck => "dailyCheck",
            Field::TlComments => "tlComments",
            Field::Columns4 => "columns4",
            Field::Group => "group",
            Field::Category => "category",
            Field::TeamLead => "teamLead",
            Field::Status => "status",
            Field::Discussion => "discussion",
            Field::StartDate => "startDate",
            Field::EndDate => "endDate",
            Field::ProjectManager => "projectManager",
            Field::Client => "client",
            Field::SalesDiscussion => "salesDiscussion",
            Field::MonthYear => "monthYear",
            Field::RatingStatus => "ratingStatus",
            Field::FinalInvoicePending => "finalInvoicePending",
            Field::RatingRequested => "ratingRequested",
            Field::ClientSatisfaction => "clientSatisfaction",
            Field::Priority => "priority",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        ALL_FIELDS.iter().copied().find(|f| f.key() == key)
    }

    /// Fields whose edit-control value arrives in `YYYY-MM-DD` view format.
    pub fn is_date(&self) -> bool {
        matches!(self, Field::StartDate | Field::EndDate)
    }
}
