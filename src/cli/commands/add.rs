use crate::cli::commands::{audit, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::entry::save_entry;
use crate::core::validate::EntryDraft;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Add a new project record.
///
/// The flags mirror the entry form: selects come pre-filled with the form's
/// defaults (project manager and team lead from the config), text and date
/// fields start empty and are enforced by the validator, not by clap.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        project,
        client,
        project_manager,
        sales_discussion,
        team_lead,
        status,
        category,
        discussion,
        start,
        end,
        month,
        group,
        priority,
        comments,
    } = cmd
    {
        let draft = EntryDraft {
            project: project.clone().unwrap_or_default(),
            client: client.clone().unwrap_or_default(),
            project_manager: project_manager
                .clone()
                .unwrap_or_else(|| cfg.default_project_manager.clone()),
            sales_discussion: sales_discussion
                .clone()
                .unwrap_or_else(|| "Email".to_string()),
            team_lead: team_lead
                .clone()
                .unwrap_or_else(|| cfg.default_team_lead.clone()),
            status: status.clone().unwrap_or_else(|| "Not started".to_string()),
            category: category
                .clone()
                .unwrap_or_else(|| "Redesign/Theme update".to_string()),
            discussion: discussion.clone().unwrap_or_else(|| "No group".to_string()),
            start_date: start.clone().unwrap_or_default(),
            end_date: end.clone().unwrap_or_default(),
            month_year: month.clone().unwrap_or_default(),
            group: group.clone().unwrap_or_else(|| "Group A".to_string()),
            priority: priority.clone().unwrap_or_default(),
            tl_comments: comments.clone().unwrap_or_default(),
        };

        let mut store = open_store(cfg)?;
        save_entry(&mut store, &draft)?;

        success(format!(
            "Entry added for project '{}' ({} records)",
            draft.project,
            store.len()
        ));

        audit(
            cfg,
            "add",
            "Append record",
            &format!("project={} client={}", draft.project, draft.client),
        );
    }

    Ok(())
}
