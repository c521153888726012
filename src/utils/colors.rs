//! ANSI color helper utilities for terminal output.

use crate::core::overdue::Severity;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// Badge color:
/// Overdue → red
/// OnTrack → green
/// Neutral → grey
pub fn color_for_severity(sev: &Severity) -> &'static str {
    match sev {
        Severity::Overdue => RED,
        Severity::OnTrack => GREEN,
        Severity::Neutral => GREY,
    }
}

/// Returns GREY when the field is empty, and RESET otherwise.
pub fn color_for_optional_field(value: &str) -> &'static str {
    if value.trim().is_empty() { GREY } else { RESET }
}

/// Colored rendition of an optional cell value; empty cells render as a
/// grey dash.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() {
        format!("{GREY}-{RESET}")
    } else {
        value.to_string()
    }
}
