//! Claims Workflow - CLI Binary
//!
//! # Usage
//!
//! ```bash
//! # Validate an update read from a file
//! claims-workflow validate-claim update.json
//!
//! # Validate from stdin and fail the shell pipeline on rejection
//! cat update.json | claims-workflow --strict validate-claim
//!
//! # Check a policy transition
//! claims-workflow policy-transition --from ACTIVE --to SUSPENDED --role ADMIN
//! ```
//!
//! # Environment Variables
//!
//! * `WORKFLOW_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: warn)
//! * `WORKFLOW_LOG_FORMAT` - `plain` or `json` (default: plain)
//! * `WORKFLOW_PRETTY` - Pretty-print JSON output (default: false)

use clap::Parser;
use interface_cli::{execute, Cli, CliConfig, LogFormat};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let (config, config_error) = CliConfig::load();
    init_tracing(&config);
    if let Some(err) = config_error {
        tracing::warn!(error = %err, "invalid WORKFLOW_* configuration, using defaults");
    }

    let output = execute(&cli.command, std::io::stdin().lock())?;

    let rendered = if cli.pretty || config.pretty {
        serde_json::to_string_pretty(&output.body)?
    } else {
        serde_json::to_string(&output.body)?
    };
    println!("{rendered}");

    if cli.strict && !output.valid {
        std::process::exit(1);
    }
    Ok(())
}

/// Initializes the tracing subscriber; logs go to stderr so stdout stays JSON
fn init_tracing(config: &CliConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let registry = tracing_subscriber::registry().with(filter);
    match config.log_format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogFormat::Plain => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}
