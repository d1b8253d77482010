//! Test utilities for desk-ticket
//!
//! Common fixtures to reduce duplication in test code across the codebase.

#![cfg(test)]

use crate::core::{Category, Priority, Status, Ticket, TicketBuilder};
use crate::storage::FileStore;
use crate::tracker::{NewTicket, Tracker};
use std::path::PathBuf;
use tempfile::TempDir;

/// Test fixture: a tracker over a temporary on-disk store
pub struct TestDesk {
    pub temp_dir: TempDir,
    pub store_path: PathBuf,
    pub tracker: Tracker<FileStore>,
}

impl TestDesk {
    /// Create a fixture with an empty store
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store_path = temp_dir.path().join("tickets.yaml");
        let tracker =
            Tracker::open(FileStore::new(&store_path)).expect("Failed to open tracker");

        Self {
            temp_dir,
            store_path,
            tracker,
        }
    }

    /// Create a fixture preloaded with a few sample tickets
    pub fn with_sample_tickets() -> Self {
        let mut desk = Self::new();
        for (category, subject, priority) in [
            ("Hardware", "Laptop won't boot", "High"),
            ("Software", "Excel crashes on open", "Medium"),
            ("Network", "VPN unreachable", "High"),
        ] {
            desk.create(category, subject, Some(priority));
        }
        desk
    }

    /// Create a ticket through the lifecycle manager
    pub fn create(
        &mut self,
        category: &str,
        subject: &str,
        priority: Option<&str>,
    ) -> crate::core::TicketId {
        self.tracker
            .create(NewTicket {
                requester: "Test User".to_string(),
                email: "test@example.com".to_string(),
                category: category.to_string(),
                subject: subject.to_string(),
                description: format!("Description for {subject}"),
                priority: priority.map(str::to_string),
            })
            .expect("Failed to create ticket")
    }

    /// Reopen a fresh tracker over the same backing file
    pub fn reopen(&self) -> Tracker<FileStore> {
        Tracker::open(FileStore::new(&self.store_path)).expect("Failed to reopen tracker")
    }
}

/// Create a detached test ticket without going through a tracker
pub fn create_test_ticket(subject: &str, priority: Priority, status: Status) -> Ticket {
    TicketBuilder::new()
        .requester("Test User")
        .email("test@example.com")
        .category(Category::Other)
        .subject(subject)
        .description(format!("Description for {subject}"))
        .priority(priority)
        .status(status)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_desk_fixture() {
        let desk = TestDesk::with_sample_tickets();
        assert_eq!(desk.tracker.store().len(), 3);
        assert!(desk.store_path.exists());
    }

    #[test]
    fn test_reopen_sees_persisted_tickets() {
        let desk = TestDesk::with_sample_tickets();
        let reopened = desk.reopen();
        assert_eq!(reopened.store().len(), 3);
    }

    #[test]
    fn test_detached_ticket_helper() {
        let ticket = create_test_ticket("Printer jam", Priority::Low, Status::Waiting);
        assert_eq!(ticket.status, Status::Waiting);
        assert_eq!(ticket.history.len(), 1);
    }
}
