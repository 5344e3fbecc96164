//! Template context construction from YAML input files.
//!
//! The decoded YAML document is converted to a JSON-shaped
//! [`serde_json::Value`] because that is the value model Tera evaluates
//! against. The conversion stringifies scalar mapping keys (JSON objects
//! only have string keys) and unwraps YAML tags; non-scalar keys are
//! rejected.

use std::fs;
use std::path::Path;

use serde_json::Value as JsonValue;
use serde_yaml::Value as YamlValue;
use tera::Context as TeraContext;

use crate::core::error::YsltError;

/// The decoded input document plus the metadata exposed to stylesheets.
#[derive(Debug, Clone)]
pub struct DocumentContext {
    value: JsonValue,
    filename: String,
}

impl DocumentContext {
    /// Read and decode a YAML input file.
    ///
    /// # Errors
    ///
    /// Returns [`YsltError::FileRead`] if the file cannot be read,
    /// [`YsltError::YamlParse`] if it is not valid YAML, and
    /// [`YsltError::ContextConversion`] if the document cannot be
    /// represented as a template context.
    pub fn load(path: &Path) -> Result<Self, YsltError> {
        let text = fs::read_to_string(path).map_err(|e| YsltError::FileRead {
            path: path.display().to_string(),
            source: e,
        })?;

        let document: YamlValue =
            serde_yaml::from_str(&text).map_err(|e| YsltError::YamlParse {
                file: path.display().to_string(),
                source: e,
            })?;

        let value = yaml_to_json(document).map_err(|reason| YsltError::ContextConversion {
            file: path.display().to_string(),
            reason,
        })?;

        // Base name only: templates get `filename`, never the full path.
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        tracing::debug!("Decoded context from {}", path.display());

        Ok(Self { value, filename })
    }

    /// Compact JSON form of the document, used for the `## ` diagnostic line.
    #[must_use]
    pub fn repr(&self) -> String {
        self.value.to_string()
    }

    /// The input file's base name.
    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Build the Tera context with the `context` and `filename` variables.
    #[must_use]
    pub fn to_tera_context(&self) -> TeraContext {
        let mut context = TeraContext::new();
        context.insert("context", &self.value);
        context.insert("filename", &self.filename);
        context
    }
}

/// Convert a YAML value into the JSON value model Tera consumes.
fn yaml_to_json(value: YamlValue) -> Result<JsonValue, String> {
    match value {
        YamlValue::Null => Ok(JsonValue::Null),
        YamlValue::Bool(b) => Ok(JsonValue::Bool(b)),
        YamlValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(JsonValue::from(i))
            } else if let Some(u) = n.as_u64() {
                Ok(JsonValue::from(u))
            } else {
                let f = n
                    .as_f64()
                    .ok_or_else(|| format!("number {n} is not representable"))?;
                serde_json::Number::from_f64(f)
                    .map(JsonValue::Number)
                    .ok_or_else(|| format!("number {n} has no JSON representation"))
            }
        }
        YamlValue::String(s) => Ok(JsonValue::String(s)),
        YamlValue::Sequence(items) => items
            .into_iter()
            .map(yaml_to_json)
            .collect::<Result<Vec<_>, _>>()
            .map(JsonValue::Array),
        YamlValue::Mapping(mapping) => {
            let mut object = serde_json::Map::new();
            for (key, val) in mapping {
                object.insert(key_to_string(&key)?, yaml_to_json(val)?);
            }
            Ok(JsonValue::Object(object))
        }
        YamlValue::Tagged(tagged) => yaml_to_json(tagged.value),
    }
}

/// Stringify a scalar mapping key; composite keys are rejected.
fn key_to_string(key: &YamlValue) -> Result<String, String> {
    match key {
        YamlValue::String(s) => Ok(s.clone()),
        YamlValue::Bool(b) => Ok(b.to_string()),
        YamlValue::Number(n) => Ok(n.to_string()),
        YamlValue::Null => Ok("null".to_string()),
        YamlValue::Sequence(_) | YamlValue::Mapping(_) => {
            Err("mapping key is not a scalar".to_string())
        }
        YamlValue::Tagged(tagged) => key_to_string(&tagged.value),
    }
}
