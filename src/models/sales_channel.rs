use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Channel the sales discussion happened on (`salesDiscussion` on the wire).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SalesChannel {
    Email,
    Whatsapp,
    Slack,
    Legacy(String),
}

impl SalesChannel {
    pub fn as_str(&self) -> &str {
        match self {
            SalesChannel::Email => "Email",
            SalesChannel::Whatsapp => "Whatsapp",
            SalesChannel::Slack => "Slack",
            SalesChannel::Legacy(s) => s,
        }
    }

    pub fn from_wire(s: &str) -> Self {
        match s {
            "Email" => SalesChannel::Email,
            "Whatsapp" => SalesChannel::Whatsapp,
            "Slack" => SalesChannel::Slack,
            other => SalesChannel::Legacy(other.to_string()),
        }
    }
}

impl Default for SalesChannel {
    fn default() -> Self {
        SalesChannel::Email
    }
}

impl Serialize for SalesChannel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SalesChannel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(SalesChannel::from_wire(&s))
    }
}
