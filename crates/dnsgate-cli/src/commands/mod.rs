//! Command handlers, one module per subcommand.
//!
//! Handlers receive already-parsed arguments plus the loaded config and the
//! [`crate::output::OutputManager`]; they return [`crate::error::CliResult`].

pub mod completions;
pub mod config;
pub mod init;
pub mod record_types;
pub mod validate;
