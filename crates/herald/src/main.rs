//! Herald - command-line tools for the Herald event protocol
//!
//! # Usage
//!
//! ```bash
//! # Generate a Rust scheme declaration from a captured event
//! herald scheme -b event.bin
//! herald scheme -b event.bin -o scheme_decl.rs
//!
//! # Pretty-print a binary event
//! herald inspect event.bin
//! ```

mod cmd;

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Herald - command-line tools for the Herald event protocol
#[derive(Parser, Debug)]
#[command(name = "herald")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a Rust scheme declaration from a binary event
    Scheme(cmd::scheme::SchemeArgs),

    /// Decode a binary event and pretty-print it
    Inspect(cmd::inspect::InspectArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = init_logging(cli.log_level.as_deref().unwrap_or("warn")) {
        eprintln!("{err:#}");
        return ExitCode::FAILURE;
    }

    match cli.command {
        // Scheme reports stage-specific exit codes for scripting
        Command::Scheme(args) => cmd::scheme::run(args),
        Command::Inspect(args) => match cmd::inspect::run(args) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("{err:#}");
                ExitCode::FAILURE
            }
        },
    }
}

/// Initialize the tracing subscriber for logging
fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(level)
        .or_else(|_| EnvFilter::try_new("warn"))
        .map_err(|e| anyhow::anyhow!("invalid log level: {}", e))?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();

    Ok(())
}
