//! Ticket lifecycle manager and query layer
//!
//! [`Tracker`] owns the in-memory [`Store`] and mirrors it through its
//! repository after every accepted mutation. All state transitions and
//! history bookkeeping happen here.
//!
//! Validation is deliberately asymmetric: [`Tracker::create`] rejects a
//! category or priority outside the closed enumerations, while
//! [`Tracker::update`] silently ignores unrecognized status or priority
//! values. Callers relying on update-side validation must parse the values
//! themselves first.

mod filter;

pub use filter::TicketFilter;

use crate::core::{Category, HistoryEvent, Priority, Status, Store, Ticket, TicketId};
use crate::error::{DeskTicketError, Result};
use crate::storage::StoreRepository;
use chrono::Utc;

/// Default actor recorded for changes with no explicit actor
pub const SYSTEM_ACTOR: &str = "System";

/// Input for creating a ticket
#[derive(Debug, Clone, Default)]
pub struct NewTicket {
    pub requester: String,
    pub email: String,
    /// Parsed against [`Category`]; an unknown value fails the creation
    pub category: String,
    pub subject: String,
    pub description: String,
    /// Parsed against [`Priority`]; defaults to Medium when absent
    pub priority: Option<String>,
}

/// Input for updating a ticket
///
/// Every field is optional. `status` and `priority` values that don't parse
/// are dropped without error; `assigned_to` set to an empty string
/// unassigns the ticket; a non-empty `notes` value is recorded in history
/// only and never stored on the ticket itself.
#[derive(Debug, Clone)]
pub struct UpdateRequest {
    pub status: Option<String>,
    pub priority: Option<String>,
    pub assigned_to: Option<String>,
    pub notes: Option<String>,
    pub actor: String,
}

impl Default for UpdateRequest {
    fn default() -> Self {
        Self {
            status: None,
            priority: None,
            assigned_to: None,
            notes: None,
            actor: SYSTEM_ACTOR.to_string(),
        }
    }
}

/// Lifecycle manager for a single ticket store
pub struct Tracker<R: StoreRepository> {
    repo: R,
    store: Store,
}

impl<R: StoreRepository> Tracker<R> {
    /// Open a tracker over the given repository, loading the current store
    pub fn open(repo: R) -> Result<Self> {
        let store = repo.load()?;
        Ok(Self { repo, store })
    }

    /// The in-memory store
    #[must_use]
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Create a new ticket and persist the store
    ///
    /// Returns the id of the new ticket. Fails with
    /// [`DeskTicketError::InvalidCategory`] or
    /// [`DeskTicketError::InvalidPriority`] before the store is touched.
    pub fn create(&mut self, input: NewTicket) -> Result<TicketId> {
        let category: Category = input.category.parse()?;
        let priority = match input.priority.as_deref() {
            Some(p) => p.parse::<Priority>()?,
            None => Priority::Medium,
        };

        let now = Utc::now();
        let id = TicketId::new();
        let ticket = Ticket {
            id: id.clone(),
            requester: input.requester,
            email: input.email,
            category,
            subject: input.subject,
            description: input.description,
            status: Status::New,
            priority,
            assigned_to: String::new(),
            created: now,
            updated: now,
            history: vec![HistoryEvent::new(now, "Ticket created", SYSTEM_ACTOR)],
        };

        tracing::info!(id = %id, subject = %ticket.subject, "created ticket");
        self.store.push(ticket);
        self.repo.save(&self.store)?;
        Ok(id)
    }

    /// Apply changes to an existing ticket
    ///
    /// Returns `Ok(true)` if at least one field changed (or a note was
    /// recorded), in which case `updated` advances and the store is
    /// persisted. Returns `Ok(false)` when nothing changed; the store file
    /// is not rewritten in that case.
    pub fn update(&mut self, id: &TicketId, request: UpdateRequest) -> Result<bool> {
        let ticket = self
            .store
            .get_mut(id)
            .ok_or_else(|| DeskTicketError::TicketNotFound { id: id.to_string() })?;

        let now = Utc::now();
        let actor = request.actor.as_str();
        let mut changed = false;

        // Unrecognized values parse to None and are dropped, not rejected
        if let Some(new_status) = request.status.as_deref().and_then(|s| s.parse::<Status>().ok())
        {
            if new_status != ticket.status {
                ticket.history.push(HistoryEvent::new(
                    now,
                    format!("Status changed from {} to {}", ticket.status, new_status),
                    actor,
                ));
                ticket.status = new_status;
                changed = true;
            }
        }

        if let Some(new_priority) = request
            .priority
            .as_deref()
            .and_then(|p| p.parse::<Priority>().ok())
        {
            if new_priority != ticket.priority {
                ticket.history.push(HistoryEvent::new(
                    now,
                    format!(
                        "Priority changed from {} to {}",
                        ticket.priority, new_priority
                    ),
                    actor,
                ));
                ticket.priority = new_priority;
                changed = true;
            }
        }

        if let Some(assignee) = request.assigned_to {
            if assignee != ticket.assigned_to {
                let action = if assignee.is_empty() {
                    "Ticket unassigned".to_string()
                } else if ticket.assigned_to.is_empty() {
                    format!("Assigned to {assignee}")
                } else {
                    format!("Reassigned from {} to {}", ticket.assigned_to, assignee)
                };
                ticket.history.push(HistoryEvent::new(now, action, actor));
                ticket.assigned_to = assignee;
                changed = true;
            }
        }

        if let Some(notes) = request.notes {
            if !notes.is_empty() {
                ticket
                    .history
                    .push(HistoryEvent::new(now, format!("Note: {notes}"), actor));
                changed = true;
            }
        }

        if changed {
            ticket.updated = now;
            tracing::info!(id = %id, actor = %actor, "updated ticket");
            self.repo.save(&self.store)?;
        }

        Ok(changed)
    }

    /// Look up a ticket by id; a missing id is not an error
    #[must_use]
    pub fn get(&self, id: &TicketId) -> Option<&Ticket> {
        self.store.get(id)
    }

    /// List tickets matching the filter, in store order
    #[must_use]
    pub fn list(&self, filter: &TicketFilter) -> Vec<&Ticket> {
        self.store.iter().filter(|t| filter.matches(t)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn open_tracker() -> Tracker<MemoryStore> {
        Tracker::open(MemoryStore::new()).unwrap()
    }

    fn hardware_ticket() -> NewTicket {
        NewTicket {
            requester: "Dana Smith".to_string(),
            email: "dana@example.com".to_string(),
            category: "Hardware".to_string(),
            subject: "Laptop won't boot".to_string(),
            description: "Black screen on power-on".to_string(),
            priority: Some("High".to_string()),
        }
    }

    #[test]
    fn test_create_sets_initial_state() {
        let mut tracker = open_tracker();
        let id = tracker.create(hardware_ticket()).unwrap();

        let ticket = tracker.get(&id).expect("ticket should exist");
        assert_eq!(ticket.status, Status::New);
        assert_eq!(ticket.priority, Priority::High);
        assert_eq!(ticket.history.len(), 1);
        assert_eq!(ticket.history[0].action, "Ticket created");
        assert_eq!(ticket.history[0].actor, SYSTEM_ACTOR);
        assert_eq!(ticket.created, ticket.updated);
        assert!(ticket.is_unassigned());
    }

    #[test]
    fn test_create_defaults_to_medium_priority() {
        let mut tracker = open_tracker();
        let id = tracker
            .create(NewTicket {
                category: "Software".to_string(),
                ..NewTicket::default()
            })
            .unwrap();
        assert_eq!(tracker.get(&id).unwrap().priority, Priority::Medium);
    }

    #[test]
    fn test_create_rejects_invalid_category() {
        let mut tracker = open_tracker();
        let err = tracker
            .create(NewTicket {
                category: "Printer".to_string(),
                ..NewTicket::default()
            })
            .unwrap_err();
        assert!(matches!(err, DeskTicketError::InvalidCategory { .. }));
        assert!(tracker.store().is_empty());
    }

    #[test]
    fn test_create_rejects_invalid_priority() {
        let mut tracker = open_tracker();
        let err = tracker
            .create(NewTicket {
                category: "Hardware".to_string(),
                priority: Some("Urgent".to_string()),
                ..NewTicket::default()
            })
            .unwrap_err();
        assert!(matches!(err, DeskTicketError::InvalidPriority { .. }));
        assert!(tracker.store().is_empty());
    }

    #[test]
    fn test_update_missing_id_is_not_found() {
        let mut tracker = open_tracker();
        let err = tracker
            .update(
                &TicketId::from_string("ffffffff"),
                UpdateRequest::default(),
            )
            .unwrap_err();
        assert!(matches!(err, DeskTicketError::TicketNotFound { .. }));
    }

    #[test]
    fn test_update_with_nothing_to_do_returns_false() {
        let mut tracker = open_tracker();
        let id = tracker.create(hardware_ticket()).unwrap();
        let before = tracker.get(&id).unwrap().clone();

        let changed = tracker.update(&id, UpdateRequest::default()).unwrap();
        assert!(!changed);

        let after = tracker.get(&id).unwrap();
        assert_eq!(after.updated, before.updated);
        assert_eq!(after.history.len(), before.history.len());
    }

    #[test]
    fn test_update_ignores_unrecognized_values() {
        // Asymmetry with create: bad values here are dropped, not rejected
        let mut tracker = open_tracker();
        let id = tracker.create(hardware_ticket()).unwrap();

        let changed = tracker
            .update(
                &id,
                UpdateRequest {
                    status: Some("Pending".to_string()),
                    priority: Some("Urgent".to_string()),
                    ..UpdateRequest::default()
                },
            )
            .unwrap();
        assert!(!changed);

        let ticket = tracker.get(&id).unwrap();
        assert_eq!(ticket.status, Status::New);
        assert_eq!(ticket.priority, Priority::High);
        assert_eq!(ticket.history.len(), 1);
    }

    #[test]
    fn test_update_appends_one_event_per_change() {
        let mut tracker = open_tracker();
        let id = tracker.create(hardware_ticket()).unwrap();

        let changed = tracker
            .update(
                &id,
                UpdateRequest {
                    status: Some("In Progress".to_string()),
                    assigned_to: Some("Tech Support".to_string()),
                    notes: Some("contacted user".to_string()),
                    ..UpdateRequest::default()
                },
            )
            .unwrap();
        assert!(changed);

        let ticket = tracker.get(&id).unwrap();
        assert_eq!(ticket.status, Status::InProgress);
        assert_eq!(ticket.assigned_to, "Tech Support");
        assert_eq!(ticket.history.len(), 4);
        assert_eq!(
            ticket.history[1].action,
            "Status changed from New to In Progress"
        );
        assert_eq!(ticket.history[2].action, "Assigned to Tech Support");
        assert_eq!(ticket.history[3].action, "Note: contacted user");
        assert!(ticket.updated > ticket.created);
    }

    #[test]
    fn test_update_same_value_is_no_change() {
        let mut tracker = open_tracker();
        let id = tracker.create(hardware_ticket()).unwrap();

        let changed = tracker
            .update(
                &id,
                UpdateRequest {
                    status: Some("New".to_string()),
                    priority: Some("High".to_string()),
                    ..UpdateRequest::default()
                },
            )
            .unwrap();
        assert!(!changed);
        assert_eq!(tracker.get(&id).unwrap().history.len(), 1);
    }

    #[test]
    fn test_unassign_and_reassign_events() {
        let mut tracker = open_tracker();
        let id = tracker.create(hardware_ticket()).unwrap();

        tracker
            .update(
                &id,
                UpdateRequest {
                    assigned_to: Some("Alice".to_string()),
                    ..UpdateRequest::default()
                },
            )
            .unwrap();
        tracker
            .update(
                &id,
                UpdateRequest {
                    assigned_to: Some("Bob".to_string()),
                    ..UpdateRequest::default()
                },
            )
            .unwrap();
        tracker
            .update(
                &id,
                UpdateRequest {
                    assigned_to: Some(String::new()),
                    ..UpdateRequest::default()
                },
            )
            .unwrap();

        let ticket = tracker.get(&id).unwrap();
        assert!(ticket.is_unassigned());
        assert_eq!(ticket.history[1].action, "Assigned to Alice");
        assert_eq!(ticket.history[2].action, "Reassigned from Alice to Bob");
        assert_eq!(ticket.history[3].action, "Ticket unassigned");
    }

    #[test]
    fn test_update_records_actor() {
        let mut tracker = open_tracker();
        let id = tracker.create(hardware_ticket()).unwrap();

        tracker
            .update(
                &id,
                UpdateRequest {
                    notes: Some("replaced battery".to_string()),
                    actor: "jo.tech".to_string(),
                    ..UpdateRequest::default()
                },
            )
            .unwrap();

        assert_eq!(tracker.get(&id).unwrap().history[1].actor, "jo.tech");
    }

    #[test]
    fn test_get_missing_id_is_none() {
        let tracker = open_tracker();
        assert!(tracker.get(&TicketId::from_string("ffffffff")).is_none());
    }

    #[test]
    fn test_list_filters_compose_conjunctively() {
        let mut tracker = open_tracker();
        let a = tracker.create(hardware_ticket()).unwrap();
        let b = tracker
            .create(NewTicket {
                category: "Software".to_string(),
                subject: "Excel crashes".to_string(),
                priority: Some("Medium".to_string()),
                ..NewTicket::default()
            })
            .unwrap();
        let c = tracker
            .create(NewTicket {
                category: "Network".to_string(),
                subject: "VPN unreachable".to_string(),
                priority: Some("High".to_string()),
                ..NewTicket::default()
            })
            .unwrap();

        let high = tracker.list(&TicketFilter::new().priority(Priority::High));
        let high_ids: Vec<_> = high.iter().map(|t| t.id.clone()).collect();
        assert_eq!(high_ids, vec![a.clone(), c.clone()]);

        let by_status = tracker.list(&TicketFilter::new().status(Status::New));
        assert_eq!(by_status.len(), 3);

        // status AND priority is exactly the intersection of the two
        let both = tracker.list(
            &TicketFilter::new()
                .status(Status::New)
                .priority(Priority::High),
        );
        let both_ids: Vec<_> = both.iter().map(|t| t.id.clone()).collect();
        assert_eq!(both_ids, vec![a, c]);
        assert!(!both_ids.contains(&b));
    }

    #[test]
    fn test_empty_filter_returns_store_order() {
        let mut tracker = open_tracker();
        tracker.create(hardware_ticket()).unwrap();
        tracker
            .create(NewTicket {
                category: "Account".to_string(),
                subject: "Password reset".to_string(),
                ..NewTicket::default()
            })
            .unwrap();

        let all = tracker.list(&TicketFilter::new());
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].subject, "Laptop won't boot");
        assert_eq!(all[1].subject, "Password reset");
    }
}
