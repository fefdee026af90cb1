//! Errors at the file boundary. Conversion itself never fails.

use std::io;
use std::path::PathBuf;

/// Failure while reading the Markdown input or writing the HTML output.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Missing {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Failure while loading a user-supplied config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
