use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VisitStatus {
    Pending,
    InProgress,
    Resolved,
}

impl VisitStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VisitStatus::Pending => "PENDING",
            VisitStatus::InProgress => "IN_PROGRESS",
            VisitStatus::Resolved => "RESOLVED",
        }
    }

    pub fn parse(s: &str) -> Option<VisitStatus> {
        match s {
            "PENDING" => Some(VisitStatus::Pending),
            "IN_PROGRESS" => Some(VisitStatus::InProgress),
            "RESOLVED" => Some(VisitStatus::Resolved),
            _ => None,
        }
    }
}

impl Default for VisitStatus {
    fn default() -> Self {
        VisitStatus::Pending
    }
}

/// A field-agent visit to a farm. The agent reference is weak: deleting
/// the agent's user account leaves the visit in place with no agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteVisit {
    pub id: i32,
    pub farm_id: i32,
    pub agent_id: Option<i32>,
    pub visit_date: NaiveDate,
    pub notes: String,
    pub status: VisitStatus,
    pub resolution_notes: String,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}
