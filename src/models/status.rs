use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    NotStarted,
    OnTrack,
    AtRisk,
    OffTrack,
    Completed,
    OnHold,
    Rating,
    Refunded,
    ForwardedToClient,
    RatingRequested,
    RiskyCompleted,
    OfftrackClient,
    FollowUp,
    ConfirmationPending,
    Legacy(String),
}

impl Status {
    pub fn as_str(&self) -> &str {
        match self {
            Status::NotStarted => "Not started",
            Status::OnTrack => "ON TRACK",
            Status::AtRisk => "At Risk",
            Status::OffTrack => "Off Track",
            Status::Completed => "Completed",
            Status::OnHold => "On Hold",
            Status::Rating => "Rating",
            Status::Refunded => "Refunded",
            Status::ForwardedToClient => "Forwarded to Client",
            Status::RatingRequested => "Rating Requested",
            Status::RiskyCompleted => "Risky Completed",
            Status::OfftrackClient => "Offtrack Client",
            Status::FollowUp => "Follow Up",
            Status::ConfirmationPending => "Confirmation Pending",
            Status::Legacy(s) => s,
        }
    }

    pub fn from_wire(s: &str) -> Self {
        match s {
            "Not started" => Status::NotStarted,
            "ON TRACK" => Status::OnTrack,
            "At Risk" => Status::AtRisk,
            "Off Track" => Status::OffTrack,
            "Completed" => Status::Completed,
            "On Hold" => Status::OnHold,
            "Rating" => Status::Rating,
            "Refunded" => Status::Refunded,
            "Forwarded to Client" => Status::ForwardedToClient,
            "Rating Requested" => Status::RatingRequested,
            "Risky Completed" => Status::RiskyCompleted,
            "Offtrack Client" => Status::OfftrackClient,
            "Follow Up" => Status::FollowUp,
            "Confirmation Pending" => Status::ConfirmationPending,
            other => Status::Legacy(other.to_string()),
        }
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::NotStarted
    }
}

impl Serialize for Status {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Status::from_wire(&s))
    }
}
