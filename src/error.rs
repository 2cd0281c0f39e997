//! Error type shared by the library and the CLI

use std::io;
use std::path::PathBuf;

/// Errors raised while loading settings, writing documents or watching.
///
/// Scanning and rendering never fail: unreadable entries are skipped and
/// rendering is total over a scanned tree.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot access '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid settings file '{}': {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("file watcher failed: {0}")]
    Watch(#[from] notify::Error),

    #[error("logging setup failed: {0}")]
    Logging(String),

    #[error("{0}")]
    InvalidArgument(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
