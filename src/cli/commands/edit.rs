use crate::cli::commands::{audit, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::entry::edit_field;
use crate::errors::{AppError, AppResult};
use crate::models::field::{ALL_FIELDS, Field};
use crate::ui::messages::success;

/// Edit one field of the record at the given index.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        index,
        field,
        value,
    } = cmd
    {
        let field = Field::from_key(field).ok_or_else(|| {
            let keys: Vec<&str> = ALL_FIELDS.iter().map(|f| f.key()).collect();
            AppError::UnknownField(format!("'{}'. Use one of: {}", field, keys.join(", ")))
        })?;

        let mut store = open_store(cfg)?;
        edit_field(&mut store, *index, field, value)?;

        success(format!("{} updated for record {}", field.key(), index));

        audit(
            cfg,
            "edit",
            "Edit record field",
            &format!("index={} | {}={}", index, field.key(), value),
        );
    }

    Ok(())
}
