//! Access control and the status transition table
//!
//! All role checks live here as a single capability matrix instead of being
//! scattered across the handlers. The matrix is (role, ownership relation) ->
//! allow/deny:
//!
//! | action        | user                 | technician       | admin |
//! |---------------|----------------------|------------------|-------|
//! | create        | yes                  | no               | yes   |
//! | view/comment  | own tickets          | assigned tickets | yes   |
//! | change status | no                   | assigned tickets | yes   |
//! | assign        | no                   | no               | yes   |
//! | take          | no                   | unassigned only  | no    |
//! | delete        | own, NEW, unassigned | no               | yes   |

use crate::core::{Role, Status, Ticket, User};
use crate::error::{HelpdeskError, Result};
use std::fmt;

/// A ticket-scoped action an actor can attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    View,
    Comment,
    ChangeStatus,
    Assign,
    Take,
    Delete,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::View => "view this ticket",
            Self::Comment => "comment on this ticket",
            Self::ChangeStatus => "change the status of this ticket",
            Self::Assign => "assign this ticket",
            Self::Take => "take this ticket",
            Self::Delete => "delete this ticket",
        };
        write!(f, "{s}")
    }
}

/// Check whether `actor` may file new tickets.
///
/// Technicians never create tickets; they only work them.
pub fn authorize_create(actor: &User) -> Result<()> {
    if matches!(actor.role, Role::User | Role::Admin) {
        Ok(())
    } else {
        Err(HelpdeskError::denied("create tickets", actor.role))
    }
}

/// Check whether `actor` may perform `action` on `ticket`.
///
/// Returns `PermissionDenied` on any mismatch; the service layer calls this
/// before every mutation and every scoped read.
pub fn authorize(actor: &User, action: Action, ticket: &Ticket) -> Result<()> {
    let allowed = match action {
        Action::View | Action::Comment => match actor.role {
            Role::Admin => true,
            Role::User => ticket.created_by == actor.id,
            Role::Technician => ticket.assigned_to == Some(actor.id),
        },
        Action::ChangeStatus => match actor.role {
            Role::Admin => true,
            Role::Technician => ticket.assigned_to == Some(actor.id),
            Role::User => false,
        },
        Action::Assign => matches!(actor.role, Role::Admin),
        // Take is the technician self-assign verb; admins use Assign
        Action::Take => matches!(actor.role, Role::Technician) && ticket.assigned_to.is_none(),
        Action::Delete => match actor.role {
            Role::Admin => true,
            Role::User => {
                ticket.created_by == actor.id
                    && ticket.status == Status::New
                    && ticket.assigned_to.is_none()
            },
            Role::Technician => false,
        },
    };

    if allowed {
        Ok(())
    } else {
        Err(HelpdeskError::denied(action.to_string(), actor.role))
    }
}

/// Check a status change against the allowed-transition table.
///
/// The table permits forward movement plus reopening; self-transitions are
/// rejected. This is stricter than the original behavior, which accepted any
/// status value from any state.
pub fn validate_transition(from: Status, to: Status) -> Result<()> {
    let allowed = matches!(
        (from, to),
        (Status::New, Status::InProgress | Status::Resolved)
            | (Status::InProgress, Status::New | Status::Resolved)
            | (Status::Resolved, Status::InProgress | Status::Closed)
            | (Status::Closed, Status::InProgress)
    );

    if allowed {
        Ok(())
    } else {
        Err(HelpdeskError::InvalidTransition {
            from: from.to_string(),
            to: to.to_string(),
        })
    }
}
