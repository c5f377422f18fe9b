//! Inspect command - decode a binary event and pretty-print it
//!
//! # Usage
//!
//! ```bash
//! herald inspect event.bin
//! herald inspect event.bin > event.txt
//! ```

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use herald_protocol::{decode, Event};
use tracing::debug;

/// Inspect command arguments
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Binary event file
    #[arg(value_name = "FILE")]
    input: PathBuf,
}

/// Run the inspect command
pub fn run(args: InspectArgs) -> Result<()> {
    let bytes = fs::read(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    debug!(file = %args.input.display(), len = bytes.len(), "read event");

    let event = decode(&bytes)
        .with_context(|| format!("failed to decode {}", args.input.display()))?;

    let mut out = io::stdout().lock();
    write_event(&mut out, &event)?;
    Ok(())
}

/// Write the header fields and one line per top-level tag
fn write_event(out: &mut impl Write, event: &Event) -> io::Result<()> {
    writeln!(out, "version:   {}", event.version())?;
    writeln!(out, "timestamp: {}", event.timestamp())?;
    writeln!(out, "source:    {}", event.source_id())?;
    writeln!(out, "tags:      {}", event.payload().len())?;
    for (key, value) in event.payload() {
        writeln!(out, "  {key}: {value}")?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "inspect_test.rs"]
mod inspect_test;
