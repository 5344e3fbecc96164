//! Stylesheet rendering with Tera.
//!
//! Provides the [`StylesheetRenderer`] that loads every template under the
//! stylesheet's directory and renders the stylesheet by name, plus the
//! formatting helper that turns Tera's nested error chains into a single
//! readable message.

use std::path::Path;

use tera::{Context as TeraContext, Tera};

use crate::core::error::YsltError;

/// Template renderer rooted at a stylesheet directory.
///
/// Wraps a [`Tera`] instance whose templates are the files under the root
/// directory, named relative to it. The stylesheet itself is rendered by its
/// file name; includes and extends resolve against the same root.
///
/// Loading is eager: every file under the root is parsed when the renderer
/// is built, so a malformed sibling template fails the run before any
/// rendering starts.
pub struct StylesheetRenderer {
    tera: Tera,
}

impl StylesheetRenderer {
    /// Build a renderer over all templates under `root`.
    ///
    /// # Errors
    ///
    /// Returns [`YsltError::TemplateLoad`] if any file under `root` cannot
    /// be read or parsed as a template.
    pub fn from_directory(root: &Path) -> Result<Self, YsltError> {
        let pattern = format!("{}/**/*", root.display());
        let tera = Tera::new(&pattern).map_err(|e| YsltError::TemplateLoad {
            root: root.display().to_string(),
            source: e,
        })?;

        tracing::debug!(
            "Loaded {} template(s) from {}",
            tera.get_template_names().count(),
            root.display()
        );

        Ok(Self { tera })
    }

    /// Render the template registered under `name` with the given context.
    ///
    /// # Errors
    ///
    /// Returns [`YsltError::TemplateRender`] if the template is missing,
    /// references an undefined variable, or fails in any other way. The
    /// error carries the formatted Tera error chain.
    pub fn render(&self, name: &str, context: &TeraContext) -> Result<String, YsltError> {
        tracing::debug!("Rendering stylesheet '{name}'");

        self.tera
            .render(name, context)
            .map_err(|e| YsltError::TemplateRender {
                name: name.to_string(),
                reason: format_tera_error(&e),
            })
    }
}

/// Format a Tera error with its full cause chain.
///
/// Tera wraps the interesting message ("Variable `x` not found", "Template
/// `y` not found", ...) in outer "Failed to render '<name>'" layers. This
/// walks the chain, drops the pure wrapper layers, and joins the rest.
pub fn format_tera_error(error: &tera::Error) -> String {
    use std::error::Error;

    let mut all_messages = vec![error.to_string()];
    let mut current_error: Option<&dyn Error> = error.source();
    while let Some(err) = current_error {
        all_messages.push(err.to_string());
        current_error = err.source();
    }

    let messages: Vec<String> = all_messages
        .into_iter()
        .filter(|msg| !msg.starts_with("Failed to render '"))
        .filter(|msg| !msg.is_empty())
        .collect();

    if messages.is_empty() {
        "Template rendering failed".to_string()
    } else {
        messages.join("\n  -> ")
    }
}
