//! Error taxonomy shared by every fallible step of the extraction pipeline.

use std::path::PathBuf;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures raised while preparing, loading or writing label data.
///
/// Cleaning and filtering are pure and never produce an `Error`; only file
/// access, ontology parsing and serialization can fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A file could not be read or written.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// The file being accessed.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The ontology document could not be parsed.
    #[error("failed to parse ontology: {message}")]
    OntologyParse {
        /// Parser diagnostic.
        message: String,
    },

    /// The label mapping could not be serialized.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// A configuration file is not valid TOML for [`LabelConfig`](crate::LabelConfig).
    #[error("invalid configuration in {}: {source}", .path.display())]
    Config {
        /// The configuration file.
        path: PathBuf,
        /// The TOML decoding failure.
        #[source]
        source: toml::de::Error,
    },
}

impl Error {
    /// Wraps an I/O failure with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// Builds a parse error from any parser diagnostic.
    pub fn parse(message: impl std::fmt::Display) -> Self {
        Error::OntologyParse {
            message: message.to_string(),
        }
    }
}
