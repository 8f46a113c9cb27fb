//! Core domain types: tickets, users, comments and the audit history

mod builders;
mod comment;
mod history;
mod ticket;
mod user;

pub use builders::{TicketBuilder, UserBuilder};
pub use comment::Comment;
pub use history::{ActionKind, HistoryEntry};
pub use ticket::{Category, Status, Ticket, TicketId, Urgency};
pub use user::{Role, User, UserId};
