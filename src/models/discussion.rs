use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Team lead discussion channel. The lowercase "skype" wire string is a
/// legacy artifact and must round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Discussion {
    NoGroup,
    OnWhatsapp,
    OnEmail,
    Skype,
    Slack,
    Aisensy,
    Legacy(String),
}

impl Discussion {
    pub fn as_str(&self) -> &str {
        match self {
            Discussion::NoGroup => "No group",
            Discussion::OnWhatsapp => "On Whatsapp",
            Discussion::OnEmail => "On Email",
            Discussion::Skype => "skype",
            Discussion::Slack => "Slack",
            Discussion::Aisensy => "Aisensy",
            Discussion::Legacy(s) => s,
        }
    }

    pub fn from_wire(s: &str) -> Self {
        match s {
            "No group" => Discussion::NoGroup,
            "On Whatsapp" => Discussion::OnWhatsapp,
            "On Email" => Discussion::OnEmail,
            "skype" => Discussion::Skype,
            "Slack" => Discussion::Slack,
            "Aisensy" => Discussion::Aisensy,
            other => Discussion::Legacy(other.to_string()),
        }
    }
}

impl Default for Discussion {
    fn default() -> Self {
        Discussion::NoGroup
    }
}

impl Serialize for Discussion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Discussion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Discussion::from_wire(&s))
    }
}
