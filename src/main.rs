//! YSLT CLI entry point
//!
//! This is the main executable for the YAML Stylesheet Transformer.
//! It handles command-line argument parsing, logging setup, error display,
//! and the transformation itself.

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use yslt::cli;
use yslt::core::error::user_friendly_error;

fn main() -> ExitCode {
    // Parse CLI arguments
    let cli = cli::Cli::parse();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    // Log lines go to stderr so stdout stays reserved for rendered output.
    // Filtering is driven entirely by RUST_LOG; silent by default.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Execute the transformation
    match cli.execute() {
        Ok(code) => code,
        Err(e) => {
            // Convert to user-friendly error with context and suggestions
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            ExitCode::FAILURE
        }
    }
}
