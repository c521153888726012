use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Daily check-in flag. Reset to `No` once per calendar day by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DailyCheck {
    Yes,
    No,
    /// Unknown value found in a persisted blob; kept verbatim.
    Legacy(String),
}

impl DailyCheck {
    pub fn as_str(&self) -> &str {
        match self {
            DailyCheck::Yes => "Yes",
            DailyCheck::No => "No",
            DailyCheck::Legacy(s) => s,
        }
    }

    /// Decode a wire string. Total: unknown values land in `Legacy`.
    pub fn from_wire(s: &str) -> Self {
        match s {
            "Yes" => DailyCheck::Yes,
            "No" => DailyCheck::No,
            other => DailyCheck::Legacy(other.to_string()),
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, DailyCheck::Yes)
    }
}

impl Default for DailyCheck {
    fn default() -> Self {
        DailyCheck::No
    }
}

impl Serialize for DailyCheck {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DailyCheck {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(DailyCheck::from_wire(&s))
    }
}
