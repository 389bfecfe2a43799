//! Reading documents into [`Value`] trees and rendering them back out.
//!
//! The format is chosen from the file extension. YAML is the native format
//! and also the fallback for unknown extensions. YAML and TOML support sit
//! behind the `yaml` and `toml` features, both enabled by default.

mod format;
#[cfg(feature = "yaml")]
mod yaml;

pub use format::{DocumentFormat, UnknownFormat};

use std::path::Path;

use crate::error::{MergerError, MergerResult};
use crate::value::Value;

/// Parse `contents` according to the format implied by `path`.
///
/// Whitespace-only input is an empty document and yields [`Value::Null`].
///
/// # Errors
///
/// Returns [`MergerError::Document`] when the contents do not parse or the
/// format's feature is disabled.
pub fn parse_document(path: &Path, contents: &str) -> MergerResult<Value> {
    parse_as(DocumentFormat::from_path(path), path, contents)
}

/// Parse `contents` as `format`; `path` is only used for error context.
///
/// # Errors
///
/// Returns [`MergerError::Document`] when the contents do not parse or the
/// format's feature is disabled.
pub fn parse_as(format: DocumentFormat, path: &Path, contents: &str) -> MergerResult<Value> {
    if contents.trim().is_empty() {
        return Ok(Value::Null);
    }
    match format {
        DocumentFormat::Yaml => {
            #[cfg(feature = "yaml")]
            {
                yaml::parse(contents).map_err(|err| MergerError::document(path, err))
            }
            #[cfg(not(feature = "yaml"))]
            {
                Err(feature_disabled(path, "yaml"))
            }
        }
        DocumentFormat::Json => {
            serde_json::from_str(contents).map_err(|err| MergerError::document(path, err))
        }
        DocumentFormat::Toml => {
            #[cfg(feature = "toml")]
            {
                toml::from_str(contents).map_err(|err| MergerError::document(path, err))
            }
            #[cfg(not(feature = "toml"))]
            {
                Err(feature_disabled(path, "toml"))
            }
        }
    }
}

/// Read and parse the document at `path`.
///
/// # Errors
///
/// Returns [`MergerError::Document`] when the file cannot be read or parsed.
pub fn load_document(path: &Path) -> MergerResult<Value> {
    let contents = std::fs::read_to_string(path).map_err(|err| MergerError::document(path, err))?;
    parse_document(path, &contents)
}

/// Render `value` as text in `format`.
///
/// JSON output is pretty-printed. All formats keep mapping insertion order.
///
/// # Errors
///
/// Returns [`MergerError::Render`] when the serializer rejects the value,
/// for example a top-level sequence or a null rendered as TOML.
pub fn render_document(value: &Value, format: DocumentFormat) -> MergerResult<String> {
    let rendered = match format {
        DocumentFormat::Yaml => {
            #[cfg(feature = "yaml")]
            {
                yaml::render(value)
            }
            #[cfg(not(feature = "yaml"))]
            {
                Err(String::from("yaml feature disabled"))
            }
        }
        DocumentFormat::Json => serde_json::to_string_pretty(value)
            .map(|mut text| {
                text.push('\n');
                text
            })
            .map_err(|err| err.to_string()),
        DocumentFormat::Toml => {
            #[cfg(feature = "toml")]
            {
                toml::to_string(value).map_err(|err| err.to_string())
            }
            #[cfg(not(feature = "toml"))]
            {
                Err(String::from("toml feature disabled"))
            }
        }
    };
    rendered.map_err(|message| MergerError::Render {
        format: format.as_str(),
        message,
    })
}

#[cfg(not(all(feature = "yaml", feature = "toml")))]
fn feature_disabled(path: &Path, feature: &str) -> MergerError {
    MergerError::document(
        path,
        std::io::Error::other(format!(
            "{feature} feature disabled: enable the '{feature}' feature to support this file format"
        )),
    )
}

#[cfg(test)]
mod tests;
