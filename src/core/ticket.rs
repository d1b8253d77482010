//! The ticket record and its audit history

use super::{Category, Priority, Status};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Short opaque ticket identifier
///
/// Eight hex characters taken from a freshly generated UUID v4. Collisions
/// against existing tickets are not checked; uniqueness is probabilistic,
/// which is acceptable at help-desk scale.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketId(String);

impl TicketId {
    /// Generate a new random ticket ID
    #[must_use]
    pub fn new() -> Self {
        let uuid = Uuid::new_v4().simple().to_string();
        Self(uuid[..8].to_string())
    }

    /// Wrap an existing identifier string
    #[must_use]
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TicketId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One audit entry in a ticket's history
///
/// History is append-only: events are never reordered, rewritten, or
/// truncated once recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEvent {
    /// When the change happened
    pub timestamp: DateTime<Utc>,
    /// Human-readable description of the change
    pub action: String,
    /// Who made the change
    pub actor: String,
}

impl HistoryEvent {
    /// Create a new history event
    #[must_use]
    pub fn new(
        timestamp: DateTime<Utc>,
        action: impl Into<String>,
        actor: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            action: action.into(),
            actor: actor.into(),
        }
    }
}

/// One support request record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    /// Unique identifier, immutable after creation
    pub id: TicketId,
    /// Name of the person who filed the request
    pub requester: String,
    /// Contact email of the requester
    pub email: String,
    /// Problem-domain classification
    pub category: Category,
    /// One-line summary
    pub subject: String,
    /// Full description of the problem
    pub description: String,
    /// Current workflow state
    pub status: Status,
    /// Urgency classification
    pub priority: Priority,
    /// Assigned technician, empty string when unassigned
    #[serde(default)]
    pub assigned_to: String,
    /// Creation timestamp, immutable
    pub created: DateTime<Utc>,
    /// Last mutation timestamp, advances on every accepted change
    pub updated: DateTime<Utc>,
    /// Append-only audit trail, never empty after creation
    pub history: Vec<HistoryEvent>,
}

impl Ticket {
    /// Whether the ticket has no assignee
    #[must_use]
    pub fn is_unassigned(&self) -> bool {
        self.assigned_to.is_empty()
    }
}
