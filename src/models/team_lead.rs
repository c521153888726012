use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamLead {
    NikhilJoshi,
    KomalMankani,
    Aditya,
    Shubham,
    Arun,
    Vibha,
    Sunil,
    Legacy(String),
}

impl TeamLead {
    pub fn as_str(&self) -> &str {
        match self {
            TeamLead::NikhilJoshi => "Nikhil Joshi",
            TeamLead::KomalMankani => "Komal Mankani",
            TeamLead::Aditya => "Aditya",
            TeamLead::Shubham => "Shubham",
            TeamLead::Arun => "Arun",
            TeamLead::Vibha => "Vibha",
            TeamLead::Sunil => "Sunil",
            TeamLead::Legacy(s) => s,
        }
    }

    pub fn from_wire(s: &str) -> Self {
        match s {
            "Nikhil Joshi" => TeamLead::NikhilJoshi,
            "Komal Mankani" => TeamLead::KomalMankani,
            "Aditya" => TeamLead::Aditya,
            "Shubham" => TeamLead::Shubham,
            "Arun" => TeamLead::Arun,
            "Vibha" => TeamLead::Vibha,
            "Sunil" => TeamLead::Sunil,
            other => TeamLead::Legacy(other.to_string()),
        }
    }
}

impl Default for TeamLead {
    fn default() -> Self {
        TeamLead::NikhilJoshi
    }
}

impl Serialize for TeamLead {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TeamLead {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(TeamLead::from_wire(&s))
    }
}
