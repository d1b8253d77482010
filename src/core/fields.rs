//! Closed enumerations for ticket fields
//!
//! Status, priority, and category are closed sets. Membership is a
//! type-level guarantee: once a value parses, it is valid for the lifetime
//! of the ticket. Parsing is case-insensitive and tolerant of common
//! separator variants ("in-progress", "in_progress").

use crate::error::{DeskTicketError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Workflow state of a ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Status {
    #[default]
    New,
    InProgress,
    Waiting,
    Resolved,
    Closed,
}

impl Status {
    /// All statuses in display order
    pub const ALL: [Self; 5] = [
        Self::New,
        Self::InProgress,
        Self::Waiting,
        Self::Resolved,
        Self::Closed,
    ];
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::New => "New",
            Self::InProgress => "In Progress",
            Self::Waiting => "Waiting",
            Self::Resolved => "Resolved",
            Self::Closed => "Closed",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Status {
    type Err = DeskTicketError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace(['-', '_'], " ").as_str() {
            "new" => Ok(Self::New),
            "in progress" | "inprogress" => Ok(Self::InProgress),
            "waiting" => Ok(Self::Waiting),
            "resolved" => Ok(Self::Resolved),
            "closed" => Ok(Self::Closed),
            _ => Err(DeskTicketError::InvalidStatus {
                value: s.to_string(),
            }),
        }
    }
}

/// Urgency classification of a ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl Priority {
    /// All priorities in ascending urgency order
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::Critical];
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Priority {
    type Err = DeskTicketError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "critical" => Ok(Self::Critical),
            _ => Err(DeskTicketError::InvalidPriority {
                value: s.to_string(),
            }),
        }
    }
}

/// Problem-domain classification of a ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Category {
    Hardware,
    Software,
    Network,
    Account,
    #[default]
    Other,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Self; 5] = [
        Self::Hardware,
        Self::Software,
        Self::Network,
        Self::Account,
        Self::Other,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Hardware => "Hardware",
            Self::Software => "Software",
            Self::Network => "Network",
            Self::Account => "Account",
            Self::Other => "Other",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Category {
    type Err = DeskTicketError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "hardware" => Ok(Self::Hardware),
            "software" => Ok(Self::Software),
            "network" => Ok(Self::Network),
            "account" => Ok(Self::Account),
            "other" => Ok(Self::Other),
            _ => Err(DeskTicketError::InvalidCategory {
                value: s.to_string(),
            }),
        }
    }
}
