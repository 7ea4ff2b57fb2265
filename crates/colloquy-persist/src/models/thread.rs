use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Message;

/// A chat conversation owned by a single user
///
/// Threads are stored and replaced as whole documents; `id` is unique within
/// the collection and `messages` keeps its chronological order verbatim
/// across round-trips.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChatThread {
    pub id: String,
    pub user_id: String,
    pub messages: Vec<Message>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ChatThread {
    /// Create an empty thread for a user
    pub fn new(user_id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            messages: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Refresh `updated_at`; call before persisting a modified thread
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
