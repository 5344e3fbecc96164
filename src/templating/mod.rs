//! Template rendering for YSLT.
//!
//! This module wraps the Tera engine with the transformer's loading rules and
//! builds the template context from the YAML input file.
//!
//! # Template Resolution
//!
//! Templates are resolved against a single root: the stylesheet's
//! canonicalized parent directory. Every file under that root is registered
//! under its root-relative name, so a stylesheet can `{% include %}` or
//! `{% extends %}` sibling files regardless of the process working
//! directory.
//!
//! # Context Shape
//!
//! Stylesheets see two variables:
//! - `context` - the YAML document, converted to a JSON-shaped value
//! - `filename` - the input file's base name

pub mod context;
pub mod renderer;

pub use context::DocumentContext;
pub use renderer::{StylesheetRenderer, format_tera_error};
