//! Command handlers
//!
//! Each submodule implements one subcommand of the CLI.

pub mod rules;
pub mod trim;
