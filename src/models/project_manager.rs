use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectManager {
    Komal,
    Pankaj,
    Rahul,
    Khanak,
    Shubham,
    Kajal,
    Legacy(String),
}

impl ProjectManager {
    pub fn as_str(&self) -> &str {
        match self {
            ProjectManager::Komal => "Komal",
            ProjectManager::Pankaj => "Pankaj",
            ProjectManager::Rahul => "Rahul",
            ProjectManager::Khanak => "Khanak",
            ProjectManager::Shubham => "Shubham",
            ProjectManager::Kajal => "Kajal",
            ProjectManager::Legacy(s) => s,
        }
    }

    pub fn from_wire(s: &str) -> Self {
        match s {
            "Komal" => ProjectManager::Komal,
            "Pankaj" => ProjectManager::Pankaj,
            "Rahul" => ProjectManager::Rahul,
            "Khanak" => ProjectManager::Khanak,
            "Shubham" => ProjectManager::Shubham,
            "Kajal" => ProjectManager::Kajal,
            other => ProjectManager::Legacy(other.to_string()),
        }
    }
}

impl Default for ProjectManager {
    fn default() -> Self {
        ProjectManager::Komal
    }
}

impl Serialize for ProjectManager {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ProjectManager {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(ProjectManager::from_wire(&s))
    }
}
