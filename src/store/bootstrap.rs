//! Bootstrap data: the default record collection used when nothing is
//! persisted, and the one-time `auth-users` seed.

use crate::errors::AppResult;
use crate::models::category::Category;
use crate::models::daily_check::DailyCheck;
use crate::models::date_field::DateField;
use crate::models::discussion::Discussion;
use crate::models::group::Group;
use crate::models::project_manager::ProjectManager;
use crate::models::record::ProjectRecord;
use crate::models::sales_channel::SalesChannel;
use crate::models::status::Status;
use crate::models::team_lead::TeamLead;
use crate::store::AUTH_USERS_KEY;
use crate::store::adapter::StorageAdapter;
use serde::{Deserialize, Serialize};

/// Credential pair for the sign-in screen. PascalCase keys on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Password")]
    pub password: String,
}

/// The fixed seed dataset used when no collection is persisted.
pub fn default_records() -> Vec<ProjectRecord> {
    vec![
        ProjectRecord {
            project: "Aurora Home redesign".to_string(),
            daily_check: DailyCheck::No,
            tl_comments: "Waiting on brand assets".to_string(),
            columns4: String::new(),
            group: Group::A,
            category: Category::RedesignThemeUpdate,
            team_lead: TeamLead::NikhilJoshi,
            status: Status::OnTrack,
            discussion: Discussion::OnWhatsapp,
            start_date: DateField::from_storage("01/09/2025"),
            end_date: DateField::from_storage("04/10/2025"),
            project_manager: ProjectManager::Komal,
            client: "Aurora Home".to_string(),
            sales_discussion: SalesChannel::Email,
            month_year: "2025-09".to_string(),
            rating_status: String::new(),
            final_invoice_pending: "No".to_string(),
            rating_requested: "No".to_string(),
            client_satisfaction: String::new(),
            priority: "High".to_string(),
        },
        ProjectRecord {
            project: "Peak Gear speed audit".to_string(),
            daily_check: DailyCheck::No,
            tl_comments: String::new(),
            columns4: String::new(),
            group: Group::C,
            category: Category::SpeedOptimization,
            team_lead: TeamLead::Aditya,
            status: Status::NotStarted,
            discussion: Discussion::NoGroup,
            start_date: DateField::from_storage("15/09/2025"),
            end_date: DateField::from_storage("30/09/2025"),
            project_manager: ProjectManager::Pankaj,
            client: "Peak Gear Co".to_string(),
            sales_discussion: SalesChannel::Whatsapp,
            month_year: "2025-09".to_string(),
            rating_status: String::new(),
            final_invoice_pending: "No".to_string(),
            rating_requested: "No".to_string(),
            client_satisfaction: String::new(),
            priority: "Medium".to_string(),
        },
        ProjectRecord {
            project: "Bloomly monthly maintenance".to_string(),
            daily_check: DailyCheck::No,
            tl_comments: "Recurring scope".to_string(),
            columns4: String::new(),
            group: Group::B,
            category: Category::MonthlyMaintaining,
            team_lead: TeamLead::Vibha,
            status: Status::FollowUp,
            discussion: Discussion::Slack,
            start_date: DateField::from_storage("01/08/2025"),
            end_date: DateField::from_storage("31/12/2025"),
            project_manager: ProjectManager::Rahul,
            client: "Bloomly".to_string(),
            sales_discussion: SalesChannel::Slack,
            month_year: "2025-08".to_string(),
            rating_status: String::new(),
            final_invoice_pending: "Yes".to_string(),
            rating_requested: "No".to_string(),
            client_satisfaction: String::new(),
            priority: "Low".to_string(),
        },
    ]
}

fn default_auth_users() -> Vec<AuthUser> {
    vec![AuthUser {
        email: "admin@company.com".to_string(),
        password: "admin123".to_string(),
    }]
}

/// Write the default credential list once, if absent. Later runs leave any
/// existing list untouched.
pub fn seed_auth_users(adapter: &mut dyn StorageAdapter) -> AppResult<bool> {
    if adapter.load(AUTH_USERS_KEY)?.is_some() {
        return Ok(false);
    }

    let blob = serde_json::to_string(&default_auth_users())
        .map_err(|e| crate::errors::AppError::Other(e.to_string()))?;
    adapter.save(AUTH_USERS_KEY, &blob)?;
    Ok(true)
}
