//! YSLT - YAML Stylesheet Transformer
//!
//! Applies a stylesheet written in the [Tera] templating syntax to a YAML
//! input file and prints the rendered text to standard output. The program
//! is a thin composition of three capabilities: argument parsing, YAML
//! deserialization, and template rendering.
//!
//! # Processing Model
//!
//! Each invocation performs a single transformation:
//! 1. Validate that the input file and the stylesheet exist
//! 2. Register every template under the stylesheet's parent directory, so
//!    `include`/`extends` resolve relative to the stylesheet, not the
//!    current working directory
//! 3. Decode the input file as YAML into an opaque context value
//! 4. Print a `## <context>` diagnostic line followed by the rendered output
//!
//! # Template Variables
//!
//! Stylesheets receive two variables:
//! - `context` - the decoded YAML document
//! - `filename` - the input file's base name (not the full path)
//!
//! # Example
//!
//! Given `greeting.yaml`:
//! ```yaml
//! name: world
//! ```
//!
//! and `hello.tera`:
//! ```text
//! Hello {{ context.name }} ({{ filename }})
//! ```
//!
//! then `yslt -s hello.tera greeting.yaml` prints:
//! ```text
//! ## {"name":"world"}
//! Hello world (greeting.yaml)
//! ```
//!
//! # Core Modules
//!
//! - [`cli`] - Command-line interface and transformation flow
//! - [`core`] - Error types and user-friendly error reporting
//! - [`templating`] - Tera renderer and YAML context construction
//!
//! [Tera]: https://keats.github.io/tera/

pub mod cli;
pub mod core;
pub mod templating;
