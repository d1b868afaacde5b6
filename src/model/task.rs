use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single task in the list.
///
/// Serialized as camelCase JSON so stored files stay compatible with the
/// browser-extension storage format this tool grew out of.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique positive id, assigned monotonically by the store
    pub id: u64,
    /// Non-empty title
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
    /// Creation timestamp, set once
    pub created_at: DateTime<Utc>,
    /// Present iff `completed` is true
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    /// Optional deadline; absent means "no deadline"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,
    /// Present only while the task sits in the archived list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived_at: Option<DateTime<Utc>>,
    /// Manual-order tie-break; reassigned to the task's index in the
    /// active list on every sort
    #[serde(default)]
    pub order: usize,
}

impl Task {
    /// Create a new incomplete task with the given fields.
    pub fn new(
        id: u64,
        title: String,
        description: Option<String>,
        deadline: Option<DateTime<Utc>>,
        created_at: DateTime<Utc>,
        order: usize,
    ) -> Self {
        Task {
            id,
            title,
            description,
            completed: false,
            created_at,
            completed_at: None,
            deadline,
            archived_at: None,
            order,
        }
    }
}
