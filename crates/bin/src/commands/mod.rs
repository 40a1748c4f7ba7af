//! Subcommand implementations.

pub mod accounts;
