use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::overdue;
use crate::errors::{AppError, AppResult};
use crate::models::field::ALL_FIELDS;
use crate::utils::colors::{RESET, color_for_severity, colorize_optional};
use crate::utils::formatting::{bold, pad_right};

/// Print every field of one record, plus the derived overdue line.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { index } = cmd {
        let store = open_store(cfg)?;
        let record = store.get(*index).ok_or(AppError::InvalidIndex(*index))?;

        println!("📋 Record {}:", index);
        println!();

        for field in ALL_FIELDS {
            let value = record.get(field);
            println!(
                "  {} {}",
                bold(&pad_right(field.key(), 20)),
                colorize_optional(&value)
            );
        }

        let badge = overdue::for_today(&record.end_date.to_storage());
        println!();
        println!(
            "  {} {}{}{}",
            bold(&pad_right("overdue", 20)),
            color_for_severity(&badge.severity),
            badge.text,
            RESET
        );
    }
    Ok(())
}
