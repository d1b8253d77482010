use super::{Category, HistoryEvent, Priority, Status, Ticket, TicketId};
use chrono::{DateTime, Utc};

/// Builder for creating Ticket instances
///
/// Used by tests and fixtures to assemble tickets field by field. The
/// lifecycle manager is the normal creation path and seeds history itself;
/// the builder seeds a single creation event only when no history was
/// supplied, so the never-empty-history invariant holds either way.
#[derive(Default)]
pub struct TicketBuilder {
    id: Option<TicketId>,
    requester: Option<String>,
    email: Option<String>,
    category: Option<Category>,
    subject: Option<String>,
    description: Option<String>,
    status: Option<Status>,
    priority: Option<Priority>,
    assigned_to: Option<String>,
    created: Option<DateTime<Utc>>,
    updated: Option<DateTime<Utc>>,
    history: Vec<HistoryEvent>,
}

impl TicketBuilder {
    /// Create a new ticket builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ticket ID
    #[must_use]
    pub fn id(mut self, id: TicketId) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the requester name
    #[must_use]
    pub fn requester(mut self, requester: impl Into<String>) -> Self {
        self.requester = Some(requester.into());
        self
    }

    /// Set the requester email
    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the category
    #[must_use]
    pub const fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Set the subject
    #[must_use]
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set the description
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the status
    #[must_use]
    pub const fn status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the priority
    #[must_use]
    pub const fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Set the assignee
    #[must_use]
    pub fn assigned_to(mut self, assigned_to: impl Into<String>) -> Self {
        self.assigned_to = Some(assigned_to.into());
        self
    }

    /// Set the `created` timestamp
    #[must_use]
    pub const fn created(mut self, created: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self
    }

    /// Set the `updated` timestamp
    #[must_use]
    pub const fn updated(mut self, updated: DateTime<Utc>) -> Self {
        self.updated = Some(updated);
        self
    }

    /// Set the full history
    #[must_use]
    pub fn history(mut self, history: Vec<HistoryEvent>) -> Self {
        self.history = history;
        self
    }

    /// Append a single history event
    #[must_use]
    pub fn event(mut self, event: HistoryEvent) -> Self {
        self.history.push(event);
        self
    }

    /// Build the ticket
    #[must_use]
    pub fn build(self) -> Ticket {
        let created = self.created.unwrap_or_else(Utc::now);
        let history = if self.history.is_empty() {
            vec![HistoryEvent::new(created, "Ticket created", "System")]
        } else {
            self.history
        };

        Ticket {
            id: self.id.unwrap_or_default(),
            requester: self.requester.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            subject: self.subject.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            status: self.status.unwrap_or_default(),
            priority: self.priority.unwrap_or_default(),
            assigned_to: self.assigned_to.unwrap_or_default(),
            created,
            updated: self.updated.unwrap_or(created),
            history,
        }
    }
}
