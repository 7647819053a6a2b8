// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod logic;

#[cfg(test)]
mod tests;

use clap::Parser;
use logic::Logic;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use studybook_parser::help_text;
use studybook_persistence::JsonPersistence;
use tracing::info;

/// Studybook - manage contacts, modules and tasks from the command line
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the JSON data file. If not provided, data is kept in memory only.
    #[arg(short, long)]
    data_file: Option<PathBuf>,

    /// Log level used when `RUST_LOG` is not set
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    /// Run this command instead of starting the prompt. May be repeated.
    #[arg(short, long = "command")]
    command: Vec<String>,
}

/// Whether the session should continue after a line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Runs one line and writes everything the user should see to `out`.
fn run_line<W: Write>(logic: &mut Logic, input: &str, out: &mut W) -> std::io::Result<Flow> {
    match logic.execute(input) {
        Ok(result) => {
            writeln!(out, "{}", result.feedback)?;
            if let Some(listing) = logic.take_listing() {
                writeln!(out, "{listing}")?;
            }
            if result.show_help {
                writeln!(out, "{}", help_text())?;
            }
            Ok(if result.exit { Flow::Exit } else { Flow::Continue })
        }
        Err(err) => {
            writeln!(out, "{err}")?;
            Ok(Flow::Continue)
        }
    }
}

/// Reads commands from `input` until it ends or an exit command runs.
fn run_prompt<R: BufRead, W: Write>(
    logic: &mut Logic,
    input: R,
    out: &mut W,
) -> std::io::Result<()> {
    write!(out, "> ")?;
    out.flush()?;
    for line in input.lines() {
        let line: String = line?;
        if !line.trim().is_empty() && run_line(logic, &line, out)? == Flow::Exit {
            return Ok(());
        }
        write!(out, "> ")?;
        out.flush()?;
    }
    writeln!(out)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&args.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting Studybook");

    let storage: JsonPersistence = if let Some(path) = &args.data_file {
        info!(path = %path.display(), "Using data file");
        JsonPersistence::new_with_file(path)
    } else {
        info!("Using in-memory storage");
        JsonPersistence::new_in_memory()
    };
    let mut logic: Logic = Logic::new(storage);
    info!(summary = %logic.model().address_book(), "Address book ready");

    let stdout: std::io::Stdout = std::io::stdout();
    let mut out: std::io::StdoutLock<'_> = stdout.lock();

    if args.command.is_empty() {
        run_prompt(&mut logic, std::io::stdin().lock(), &mut out)?;
    } else {
        for command in &args.command {
            if run_line(&mut logic, command, &mut out)? == Flow::Exit {
                break;
            }
        }
    }

    info!("Exiting Studybook");
    Ok(())
}
