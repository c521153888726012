use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Group {
    A,
    B,
    C,
    D,
    E,
    Legacy(String),
}

impl Group {
    pub fn as_str(&self) -> &str {
        match self {
            Group::A => "Group A",
            Group::B => "Group B",
            Group::C => "Group C",
            Group::D => "Group D",
            Group::E => "Group E",
            Group::Legacy(s) => s,
        }
    }

    pub fn from_wire(s: &str) -> Self {
        match s {
            "Group A" => Group::A,
            "Group B" => Group::B,
            "Group C" => Group::C,
            "Group D" => Group::D,
            "Group E" => Group::E,
            other => Group::Legacy(other.to_string()),
        }
    }
}

impl Default for Group {
    fn default() -> Self {
        Group::A
    }
}

impl Serialize for Group {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Group {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Group::from_wire(&s))
    }
}
