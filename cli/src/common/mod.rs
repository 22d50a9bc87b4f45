//! Shared helpers for the CLI commands.

pub mod error;
pub mod input;
