//! Supported document formats.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Serialization format of a document.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum DocumentFormat {
    /// YAML 1.2, the default.
    #[default]
    Yaml,
    /// JSON.
    Json,
    /// TOML.
    Toml,
}

impl DocumentFormat {
    /// Chooses a format from the extension of `path`.
    ///
    /// Matching is case-insensitive. Missing or unknown extensions select
    /// [`DocumentFormat::Yaml`].
    ///
    /// ```
    /// use std::path::Path;
    /// use yaml_merger::DocumentFormat;
    ///
    /// assert_eq!(DocumentFormat::from_path(Path::new("app.JSON")), DocumentFormat::Json);
    /// assert_eq!(DocumentFormat::from_path(Path::new("app.conf")), DocumentFormat::Yaml);
    /// ```
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
            .unwrap_or_default()
    }

    /// Lowercase name of the format.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yaml => "yaml",
            Self::Json => "json",
            Self::Toml => "toml",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a format name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown document format '{0}'")]
pub struct UnknownFormat(pub String);

impl FromStr for DocumentFormat {
    type Err = UnknownFormat;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            _ => Err(UnknownFormat(name.to_owned())),
        }
    }
}
