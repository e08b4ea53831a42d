use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A broadcast notice. Notices carry no ownership scoping: every role
/// sees every notice, only `is_active` differentiates at query time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub id: i32,
    pub title: String,
    pub message: String,
    pub issued_by: Option<i32>,
    pub is_active: bool,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

impl Notice {
    /// Flip the active flag (the list screen's toggle action).
    pub fn toggle_active(&mut self) {
        self.is_active = !self.is_active;
    }
}
