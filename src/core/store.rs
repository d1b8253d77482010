//! The in-memory ticket collection
//!
//! A [`Store`] is an ordered sequence of tickets. Insertion order is
//! preserved and used as the default display order. The store is a plain
//! value with no ambient global state, so multiple stores (e.g. in tests)
//! can coexist.

use super::{Ticket, TicketId};
use serde::{Deserialize, Serialize};

/// The full collection of tickets held in memory
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Store {
    tickets: Vec<Ticket>,
}

impl Store {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tickets in the store
    #[must_use]
    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    /// Whether the store holds no tickets
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    /// Iterate over tickets in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Ticket> {
        self.tickets.iter()
    }

    /// Find a ticket by ID
    #[must_use]
    pub fn get(&self, id: &TicketId) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.id == *id)
    }

    /// Find a ticket by ID, mutably
    pub fn get_mut(&mut self, id: &TicketId) -> Option<&mut Ticket> {
        self.tickets.iter_mut().find(|t| t.id == *id)
    }

    /// Append a ticket to the store
    pub fn push(&mut self, ticket: Ticket) {
        self.tickets.push(ticket);
    }

    /// All tickets as a slice, in insertion order
    #[must_use]
    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }
}

impl<'a> IntoIterator for &'a Store {
    type Item = &'a Ticket;
    type IntoIter = std::slice::Iter<'a, Ticket>;

    fn into_iter(self) -> Self::IntoIter {
        self.tickets.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TicketBuilder;

    #[test]
    fn test_empty_store() {
        let store = Store::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_push_and_get() {
        let mut store = Store::new();
        let ticket = TicketBuilder::new().subject("Broken keyboard").build();
        let id = ticket.id.clone();

        store.push(ticket);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&id).unwrap().subject, "Broken keyboard");
    }

    #[test]
    fn test_get_missing_returns_none() {
        let store = Store::new();
        assert!(store.get(&TicketId::from_string("ffffffff")).is_none());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut store = Store::new();
        for subject in ["first", "second", "third"] {
            store.push(TicketBuilder::new().subject(subject).build());
        }
        let subjects: Vec<_> = store.iter().map(|t| t.subject.as_str()).collect();
        assert_eq!(subjects, ["first", "second", "third"]);
    }
}
