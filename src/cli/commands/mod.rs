//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations and owns the required-parts table
//! they share.

pub mod completions;
pub mod diagnose;
pub mod dispatcher;
pub mod requirements;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
