//! Command-line interface for YSLT.
//!
//! The CLI exposes a single operation: apply a stylesheet to a YAML input
//! file. Its surface is exactly two arguments:
//!
//! ```bash
//! yslt --stylesheet report.tera data.yaml
//! yslt -s report.tera data.yaml
//! ```
//!
//! # Execution Flow
//!
//! 1. **Validation**: the input file is checked first, then the stylesheet.
//!    A missing file prints a fixed message on stdout and ends the run with
//!    a failure status; nothing else is printed.
//! 2. **Template root**: the stylesheet path is canonicalized and its parent
//!    directory becomes the template root, so includes resolve relative to
//!    the stylesheet rather than the working directory.
//! 3. **Rendering**: the input is decoded as YAML, a `## <context>`
//!    diagnostic line is printed, and the rendered stylesheet follows it on
//!    stdout.
//!
//! Decode and render failures propagate to the binary's top level, which
//! reports them on stderr and exits non-zero; a `## ` line already printed
//! stays on stdout.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use crate::core::error::YsltError;
use crate::templating::{DocumentContext, StylesheetRenderer};

/// Main CLI structure for YSLT.
///
/// Both arguments are mandatory; clap rejects an invocation missing either
/// one with its usual usage error and non-zero exit.
#[derive(Parser)]
#[command(name = "yslt", about = "Apply stylesheet to input file.")]
pub struct Cli {
    /// Stylesheet to apply
    #[arg(short = 's', long, value_name = "PATH")]
    stylesheet: PathBuf,

    /// Input file
    #[arg(value_name = "INPUT")]
    input: PathBuf,
}

impl Cli {
    /// Execute the transformation.
    ///
    /// Returns the process exit code for the handled paths: success after a
    /// render, failure after one of the two validation messages. Decode and
    /// render errors are returned as `Err` for the caller to display.
    pub fn execute(self) -> Result<ExitCode> {
        if !self.input.is_file() {
            println!("Input file {} does not exist.", self.input.display());
            return Ok(ExitCode::FAILURE);
        }

        if !self.stylesheet.is_file() {
            println!("Stylesheet {} does not exist.", self.stylesheet.display());
            return Ok(ExitCode::FAILURE);
        }

        self.transform()?;
        Ok(ExitCode::SUCCESS)
    }

    /// Render the stylesheet with the input document as context.
    fn transform(&self) -> Result<()> {
        let stylesheet = self
            .stylesheet
            .canonicalize()
            .map_err(|e| YsltError::FileRead {
                path: self.stylesheet.display().to_string(),
                source: e,
            })?;

        let root = stylesheet
            .parent()
            .context("stylesheet path has no parent directory")?;
        let name = stylesheet
            .file_name()
            .context("stylesheet path has no file name")?
            .to_string_lossy();

        tracing::debug!(
            "Template root {} (stylesheet '{}')",
            root.display(),
            name
        );

        let renderer = StylesheetRenderer::from_directory(root)?;
        let document = DocumentContext::load(&self.input)?;

        println!("## {}", document.repr());

        let output = renderer.render(&name, &document.to_tera_context())?;
        println!("{output}");

        Ok(())
    }
}
