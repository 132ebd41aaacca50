use std::path::PathBuf;

use tagkit_naming::{Namespace, NamingError};
use thiserror::Error as ThisError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(ThisError, Debug)]
pub enum Error {
    #[error("I/O Error: {0}")]
    IO(#[from] std::io::Error),

    #[error("Failed to parse page: {0}")]
    Parse(String),

    #[error("Invalid TOML in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize manifest: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Manifest {path} holds {found} elements but is configured as {expected}")]
    NamespaceMismatch {
        path: PathBuf,
        expected: Namespace,
        found: Namespace,
    },

    #[error("Name derivation failed: {0}")]
    Naming(#[from] NamingError),

    #[error("{0} is out of date; run `tagkit-gen generate`")]
    Stale(PathBuf),
}

impl From<html_parser::Error> for Error {
    fn from(e: html_parser::Error) -> Self {
        Self::Parse(e.to_string())
    }
}
