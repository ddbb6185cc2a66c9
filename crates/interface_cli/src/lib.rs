//! Claims Workflow CLI
//!
//! A thin command-line surface over the workflow engines, used by operators
//! and integration scripts to dry-run updates before they reach the API.
//!
//! # Commands
//!
//! - `validate-claim <file|->` - validate a JSON `ValidationInput`
//! - `policy-transition --from --to --role` - check a policy status change
//! - `lifecycle` - print the claims lifecycle tables

pub mod commands;
pub mod config;

pub use commands::{execute, Cli, Command, CommandOutput};
pub use config::{CliConfig, LogFormat};
