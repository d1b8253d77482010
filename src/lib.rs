//! desk-ticket - Help desk ticket tracking with audit history
//!
//! This crate records support requests, their lifecycle, and an append-only
//! audit trail over a single persisted collection:
//! - Closed status/priority/category enumerations checked at the type level
//! - Whole-store YAML persistence; a missing file is just an empty store
//! - Conjunctive filtering by status, priority, and assignee
//! - Summary reporting and tabular display
//!
//! The store assumes single-writer, single-process usage: every accepted
//! mutation rewrites the backing file in full, with no locking and no
//! atomic-replace guarantee.
//!
//! # Example
//!
//! ```rust,ignore
//! use desk_ticket::storage::FileStore;
//! use desk_ticket::tracker::{NewTicket, Tracker};
//!
//! let mut tracker = Tracker::open(FileStore::new("tickets.yaml"))?;
//!
//! let id = tracker.create(NewTicket {
//!     requester: "Dana Smith".into(),
//!     email: "dana@example.com".into(),
//!     category: "Hardware".into(),
//!     subject: "Laptop won't boot".into(),
//!     description: "Black screen on power-on".into(),
//!     priority: Some("High".into()),
//! })?;
//!
//! let ticket = tracker.get(&id).unwrap();
//! assert_eq!(ticket.history.len(), 1);
//! ```

pub mod cli;
pub mod core;
pub mod error;
pub mod export;
pub mod report;
pub mod storage;
pub mod tracker;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types
pub use error::{DeskTicketError, Result};
