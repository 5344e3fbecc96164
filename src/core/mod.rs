//! Core types and error handling for YSLT.
//!
//! This module hosts the error infrastructure shared by the CLI and the
//! templating layer. See [`error`] for the error types and the
//! user-friendly reporting used by the binary's top level.

pub mod error;

pub use error::{ErrorContext, YsltError, user_friendly_error};
