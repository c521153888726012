use crate::cli::commands::open_store;
use crate::config::Config;
use crate::core::overdue;
use crate::errors::AppResult;
use crate::utils::colors::color_for_severity;
use crate::utils::table::{Cell, Table};

/// Render the collection as a table with a colored overdue badge per row.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = open_store(cfg)?;

    println!("📋 Project records:");
    println!();

    if store.is_empty() {
        println!("⚠️  No records in the store");
        return Ok(());
    }

    let mut table = Table::new(&[
        "#", "Project", "Client", "Daily", "Status", "PM", "Start", "End", "Overdue",
    ]);

    for (i, record) in store.records().iter().enumerate() {
        // The badge is derived per render, never persisted.
        let badge = overdue::for_today(&record.end_date.to_storage());

        table.add_row(vec![
            Cell::plain(i.to_string()),
            Cell::plain(record.project.as_str()),
            Cell::plain(record.client.as_str()),
            Cell::plain(record.daily_check.as_str()),
            Cell::plain(record.status.as_str()),
            Cell::plain(record.project_manager.as_str()),
            Cell::plain(record.start_date.to_storage()),
            Cell::plain(record.end_date.to_storage()),
            Cell::colored(badge.text, color_for_severity(&badge.severity)),
        ]);
    }

    print!("{}", table.render());

    Ok(())
}
