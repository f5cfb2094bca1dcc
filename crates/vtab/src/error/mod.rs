use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading completion tables.
#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    /// The tables file could not be read.
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The tables file is not valid.
    #[error("cannot parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Error indicating that a shell name is not supported.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unsupported shell '{0}' (expected bash, fish, powershell or zsh)")]
pub(crate) struct UnknownShell(pub(crate) String);
