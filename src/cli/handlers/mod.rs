//! Command handlers

mod actions;
mod analytics;
mod common;
mod init;
mod list;
mod new;
mod seed;
mod show;
mod user;

pub use actions::{handle_assign, handle_comment, handle_delete, handle_status, handle_take};
pub use analytics::{handle_analytics, handle_export};
pub use common::HandlerContext;
pub use init::handle_init;
pub use list::{ListArgs, handle_board, handle_list};
pub use new::{NewArgs, handle_new};
pub use seed::handle_seed;
pub use show::{handle_history, handle_show};
pub use user::{handle_user_add, handle_user_list};
