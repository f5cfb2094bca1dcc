use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use vtab_complete::Tables;

use crate::error::ConfigError;

/// Tables file to use when none is given, relative to the user's configuration directory.
const TABLES_FILE_NAME: &str = "vtab/tables.toml";

/// Loads completion tables from `explicit`, or from the default tables file if it exists.
///
/// Completion must keep working with a broken configuration, so any error is logged and the
/// built-in tables are used instead.
pub(crate) fn load_tables(explicit: Option<&Path>) -> Tables {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match default_tables_file() {
            Some(path) if path.exists() => path,
            _ => return Tables::default(),
        },
    };

    match read_tables(&path) {
        Ok(tables) => {
            debug!(path = %path.display(), "loaded completion tables");
            tables
        }
        Err(error) => {
            warn!(%error, "using built-in completion tables");
            Tables::default()
        }
    }
}

/// Returns the location of the default tables file.
fn default_tables_file() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(TABLES_FILE_NAME);
        path
    })
}

/// Reads completion tables from a TOML file.
///
/// Tables missing from the file keep their built-in definition.
fn read_tables(path: &Path) -> Result<Tables, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
