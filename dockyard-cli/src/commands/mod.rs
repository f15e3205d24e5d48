//! Command implementations for dockyard CLI

pub mod message;
pub mod users;

pub use message::{run_message, MessageArgs};
pub use users::{run_users, UsersArgs};
