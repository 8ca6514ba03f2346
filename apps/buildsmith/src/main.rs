//! # Buildsmith - Armor Build Optimizer Client
//!
//! Pick target skills from the optimizer's catalog, submit them, and read
//! back the proposed armor, talisman and decorations.
//!
//! ## Usage
//!
//! ```bash
//! # Interactive session (search, pick, submit)
//! buildsmith --url http://127.0.0.1:5000
//!
//! # One-shot commands
//! buildsmith skills --filter "attack"
//! buildsmith optimize -s "Agitator=3" -s "Attack Boost=5"
//! ```
//!
//! ## Environment
//!
//! - `BUILDSMITH_URL` - optimizer base URL
//! - `BUILDSMITH_LOG_FORMAT=json` - machine-parseable logs
//! - `RUST_LOG` - log filter (default `buildsmith=info`)

use buildsmith::cli;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = cli::Cli::parse();

    // Logs go to stderr; stdout carries reports and JSON output.
    let log_format =
        std::env::var("BUILDSMITH_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let default_filter = if cli.verbose {
        "buildsmith=debug,buildsmith_core=debug"
    } else {
        "buildsmith=info"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    // Display startup banner
    if !cli.quiet && !cli.json_mode {
        print_banner();
    }

    // Execute command
    let outcome = cli::execute(cli).await;
    let code = cli::report_outcome(&outcome, &mut std::io::stderr());
    if code != 0 {
        std::process::exit(code);
    }
}

/// Print the Buildsmith startup banner.
fn print_banner() {
    eprintln!(
        r#"
  ╔╗ ╦ ╦╦╦  ╔╦╗╔═╗╔╦╗╦╔╦╗╦ ╦
  ╠╩╗║ ║║║   ║║╚═╗║║║║ ║ ╠═╣
  ╚═╝╚═╝╩╩═╝═╩╝╚═╝╩ ╩╩ ╩ ╩ ╩

  Armor Build Optimizer Client v{}
"#,
        env!("CARGO_PKG_VERSION")
    );
}
