//! Core data model: tickets, their field enumerations, and the store

mod builders;
mod fields;
mod store;
mod ticket;

pub use builders::TicketBuilder;
pub use fields::{Category, Priority, Status};
pub use store::Store;
pub use ticket::{HistoryEvent, Ticket, TicketId};
