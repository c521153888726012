use crate::utils::date;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Calendar date field of a record.
///
/// One canonical in-memory representation; `DD/MM/YYYY` is only a
/// serialization format. Non-empty text that does not parse is kept verbatim
/// in `Raw` so a malformed persisted date degrades the display instead of
/// blocking the load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateField {
    Empty,
    Date(NaiveDate),
    Raw(String),
}

impl DateField {
    /// Decode a storage-format (`DD/MM/YYYY`) string. Total.
    pub fn from_storage(s: &str) -> Self {
        if s.is_empty() {
            return DateField::Empty;
        }
        match date::parse_storage(s) {
            Some(d) => DateField::Date(d),
            None => DateField::Raw(s.to_string()),
        }
    }

    pub fn to_storage(&self) -> String {
        match self {
            DateField::Empty => String::new(),
            DateField::Date(d) => date::format_storage(*d),
            DateField::Raw(s) => s.clone(),
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            DateField::Date(d) => Some(*d),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, DateField::Empty)
    }
}

impl Default for DateField {
    fn default() -> Self {
        DateField::Empty
    }
}

impl fmt::Display for DateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_storage())
    }
}

impl Serialize for DateField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_storage())
    }
}

impl<'de> Deserialize<'de> for DateField {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(DateField::from_storage(&s))
    }
}
