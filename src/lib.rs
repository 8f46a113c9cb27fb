//! helpdesk - an internal IT-support ticketing system
//!
//! This crate provides the full ticketing core behind the `helpdesk` CLI:
//! - Tickets with status, urgency, category and an embedded audit history
//! - A three-role capability matrix (user, technician, admin)
//! - An explicit status transition table with SLA-based overdue tracking
//! - Role-scoped listing, dashboard analytics and CSV export
//!
//! # Example
//!
//! ```rust,ignore
//! use helpdesk::service::{NewTicket, TicketService};
//! use helpdesk::store::FileStorage;
//!
//! let storage = FileStorage::new(".helpdesk");
//! let service = TicketService::new(&storage)?;
//!
//! let reporter = service.actor_by_username("alice")?;
//! let ticket = service.create(&reporter, NewTicket {
//!     title: "VPN keeps dropping".into(),
//!     description: "Disconnects every few minutes".into(),
//!     urgency: helpdesk::core::Urgency::High,
//!     category: helpdesk::core::Category::Connectivity,
//! })?;
//! ```

pub mod auth;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod report;
pub mod service;
pub mod store;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types
pub use error::{HelpdeskError, Result};
