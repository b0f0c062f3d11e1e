//! Error handling for feature resolution and installation

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for resolver operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving or installing a build plan
#[derive(Error, Debug)]
pub enum Error {
    /// A requested format is not part of the catalog
    #[error("Unknown format `{name}` (known formats: {})", known.join(", "))]
    UnknownFormat {
        /// The offending token, exactly as requested
        name: String,
        /// Every catalog format name, sorted
        known: Vec<String>,
    },

    /// The catalog violates one of its structural rules
    #[error("Invalid catalog: {message}")]
    InvalidCatalog {
        /// What rule was violated
        message: String,
    },

    /// A catalog document could not be deserialized
    #[error("Catalog parse error: {0}")]
    CatalogParse(#[from] serde_json::Error),

    /// A header template could not be rendered
    #[error("Template error: {message}")]
    Template {
        /// What went wrong, with the template line
        message: String,
    },

    /// A file required from the source checkout does not exist
    #[error("Missing source file: {}", path.display())]
    MissingSource {
        /// Absolute path that was expected
        path: PathBuf,
    },

    /// Filesystem operation failed
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path the operation was working on
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a new unknown format error
    pub fn unknown_format<S: Into<String>>(name: S, known: Vec<String>) -> Self {
        Self::UnknownFormat {
            name: name.into(),
            known,
        }
    }

    /// Create a new invalid catalog error
    pub fn invalid_catalog<S: Into<String>>(message: S) -> Self {
        Self::InvalidCatalog {
            message: message.into(),
        }
    }

    /// Create a new template error
    pub fn template<S: Into<String>>(message: S) -> Self {
        Self::Template {
            message: message.into(),
        }
    }

    /// Wrap an I/O error with the path it happened at
    pub fn io<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a new missing source error
    pub fn missing_source<P: Into<PathBuf>>(path: P) -> Self {
        Self::MissingSource { path: path.into() }
    }
}
