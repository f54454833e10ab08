mod cli;
mod error;
mod report;
mod types;

use crate::error::{ReportError, Result};
use crate::types::violation::Violation;
use clap::Parser;
use std::fs;
use std::io::Read;
use std::path::Path;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const VIOLATIONS: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 2;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let directive = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(directive));
    // Logs go to stderr so stdout stays a clean report stream.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => {
            if !path.exists() {
                return Err(ReportError::InputNotFound(path.display().to_string()));
            }
            Ok(fs::read_to_string(path)?)
        }
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let raw = read_input(cli.input.as_deref())?;
    let violations: Vec<Violation> = serde_json::from_str(&raw)?;
    tracing::debug!(count = violations.len(), "parsed violation records");

    let document = report::render(&violations);
    match &cli.output {
        Some(path) => {
            fs::write(path, &document)?;
            tracing::info!(path = %path.display(), "report written");
        }
        None => println!("{document}"),
    }

    if violations.is_empty() {
        Ok(exit_code::SUCCESS)
    } else {
        Ok(exit_code::VIOLATIONS)
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
