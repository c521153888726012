pub mod entry;
pub mod overdue;
pub mod validate;
