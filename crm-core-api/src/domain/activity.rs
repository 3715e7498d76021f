use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of entity an activity entry was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Client,
    Contract,
}

impl std::fmt::Display for ActivityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActivityType::Client => write!(f, "client"),
            ActivityType::Contract => write!(f, "contract"),
        }
    }
}

/// # Documentation
/// One entry of the dashboard "recent activity" feed.
/// - Derived on every request from the client and contract tables, never persisted.
/// - `timestamp` is always set. For clients it is synthesized from the request clock since
///   the client table carries no creation time.
/// - Serialized as `{type, description, timestamp, id}` where `id` is the source entity id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecord {
    #[serde(rename = "type")]
    pub activity_type: ActivityType,

    /// Human readable summary shown in the dashboard table
    pub description: String,

    /// When the event became known, serialized as RFC 3339
    pub timestamp: DateTime<Utc>,

    /// Identifier of the client or contract this entry was built from
    #[serde(rename = "id")]
    pub source_id: i64,
}
