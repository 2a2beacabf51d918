//! Core domain entities
//!
//! The account state machine and the command vocabulary the console uses to
//! drive it. Pure data and validation - no I/O.

mod account;
pub mod command;
pub mod result;

pub use account::Account;
pub use command::{parse_amount, CommandKind, Outcome, Request};
