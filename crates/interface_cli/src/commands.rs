//! Command definitions and execution

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use std::io::Read;

use core_kernel::{Lifecycle, Role};
use domain_claims::{validate, ClaimStatus, LifecycleView, ValidationInput};
use domain_policy::{validate_transition, PolicyStatus};

/// Command-line arguments
#[derive(Debug, Parser)]
#[command(name = "claims-workflow", version, about = "Dry-run claim and policy workflow decisions")]
pub struct Cli {
    /// Exit with a non-zero status when the verdict is invalid
    #[arg(long, global = true)]
    pub strict: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate a claim update read as JSON from a file or stdin
    ValidateClaim {
        /// Path to the input file, or `-` for stdin
        #[arg(default_value = "-")]
        input: String,
    },
    /// Check a policy status change
    PolicyTransition {
        #[arg(long)]
        from: PolicyStatus,
        #[arg(long)]
        to: PolicyStatus,
        #[arg(long)]
        role: Role,
    },
    /// Print the claims lifecycle tables
    Lifecycle,
}

/// Result of a command
#[derive(Debug)]
pub struct CommandOutput {
    pub body: Value,
    pub valid: bool,
}

/// Executes a command; `stdin` is read only when the input path is `-`
pub fn execute(command: &Command, mut stdin: impl Read) -> anyhow::Result<CommandOutput> {
    match command {
        Command::ValidateClaim { input } => {
            let raw = if input == "-" {
                let mut buffer = String::new();
                stdin
                    .read_to_string(&mut buffer)
                    .context("failed to read validation input from stdin")?;
                buffer
            } else {
                std::fs::read_to_string(input)
                    .with_context(|| format!("failed to read validation input from {input}"))?
            };

            let parsed: ValidationInput =
                serde_json::from_str(&raw).context("malformed validation input")?;
            let result = validate(&parsed);
            tracing::info!(
                claim_id = %parsed.current.id,
                valid = result.valid,
                "validated claim update"
            );

            Ok(CommandOutput {
                valid: result.valid,
                body: serde_json::to_value(&result)?,
            })
        }
        Command::PolicyTransition { from, to, role } => {
            let verdict = validate_transition(*from, *to, *role);
            tracing::info!(%from, %to, %role, valid = verdict.is_ok(), "checked policy transition");

            Ok(CommandOutput {
                valid: verdict.is_ok(),
                body: json!({
                    "valid": verdict.is_ok(),
                    "error": verdict.err().map(|err| err.to_string()),
                }),
            })
        }
        Command::Lifecycle => {
            let views: Vec<LifecycleView> =
                ClaimStatus::ALL.iter().copied().map(LifecycleView::of).collect();
            Ok(CommandOutput {
                valid: true,
                body: serde_json::to_value(views)?,
            })
        }
    }
}
