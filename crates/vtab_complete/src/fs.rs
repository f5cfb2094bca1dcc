use std::path::{Path, PathBuf};

use tracing::{debug, trace};
use vtab_core::{
    utils::{path_to_string, with_trailing_separator, SEPARATOR},
    Host,
};

use crate::{tables::HOME_SHORTHAND, Tables};

const CURRENT_DIR: &str = ".";
const PARENT_DIR: &str = "..";

/// A directory to list, and how its entries become completions.
#[derive(Debug, PartialEq, Eq)]
struct Listing {
    /// Directory to list.
    dir: PathBuf,

    /// Entries not starting with this text are dropped.
    filter: String,

    /// Text prepended to each kept entry.
    prefix: String,
}

/// Completes a path relative to the current directory, an absolute path or a path within the
/// user's home directory.
///
/// Directories are completed with a trailing separator. Failing to list a directory results in no
/// completions rather than an error.
pub(crate) fn complete_paths(word: &str, tables: &Tables, host: &dyn Host) -> Vec<String> {
    let home = home_to_expand(word, host);
    let path = match &home {
        Some(home) => expand_home(word, home),
        None => word.to_owned(),
    };

    let listing = choose_listing(&path, tables, host);
    debug!(?listing, "completing paths");

    let entries = match host.list_directory(&listing.dir) {
        Ok(entries) => entries,
        Err(error) => {
            debug!(dir = %listing.dir.display(), %error, "cannot list directory");
            return Vec::new();
        }
    };
    trace!(count = entries.len(), "listed directory");

    entries
        .into_iter()
        .filter(|entry| entry.starts_with(&listing.filter))
        .map(|entry| {
            let mut completion = format!("{}{entry}", listing.prefix);

            // Completing the separator as well results in faster navigation.
            if host.is_dir(&listing.dir.join(&entry)) {
                completion.push(SEPARATOR);
            }

            match &home {
                Some(home) => collapse_home(completion, home),
                None => completion,
            }
        })
        .collect()
}

/// Returns the home directory that `word` refers to, without any trailing separator.
fn home_to_expand(word: &str, host: &dyn Host) -> Option<String> {
    if !word.starts_with(HOME_SHORTHAND) {
        return None;
    }

    let home = host.home_dir()?;
    Some(path_to_string(&home).trim_end_matches(SEPARATOR).to_owned())
}

/// Replaces the leading home shorthand in `word` with `home`.
fn expand_home(word: &str, home: &str) -> String {
    let mut path = word.replacen(HOME_SHORTHAND, home, 1);
    if word.len() == HOME_SHORTHAND.len_utf8() {
        path.push(SEPARATOR);
    }
    path
}

/// Replaces a leading `home` in a completion with the home shorthand.
///
/// Only paths within `home` are collapsed: a sibling sharing its name as a prefix is kept as is.
fn collapse_home(completion: String, home: &str) -> String {
    match completion.strip_prefix(home) {
        Some(rest) if rest.is_empty() || rest.starts_with(SEPARATOR) => {
            format!("{HOME_SHORTHAND}{rest}")
        }
        _ => completion,
    }
}

/// Decides which directory to list for a (home-expanded) path, and how to filter its entries.
fn choose_listing(path: &str, tables: &Tables, host: &dyn Host) -> Listing {
    // Whole directories.
    if path.ends_with(SEPARATOR) || path == CURRENT_DIR || path == PARENT_DIR {
        let dir = nearest_dir(path, host);
        let prefix = if !path.ends_with(SEPARATOR) || dir == CURRENT_DIR {
            String::new()
        } else if dir == path {
            path.to_owned()
        } else {
            with_trailing_separator(&dir)
        };

        return Listing {
            dir: PathBuf::from(dir),
            filter: String::new(),
            prefix,
        };
    }

    // Entries of an existing parent directory.
    if let Some((parent, name)) = path.rsplit_once(SEPARATOR) {
        let parent_dir = if parent.is_empty() {
            SEPARATOR.to_string()
        } else {
            parent.to_owned()
        };

        if host.is_dir(Path::new(&parent_dir)) {
            return Listing {
                dir: PathBuf::from(parent_dir),
                filter: name.to_owned(),
                prefix: format!("{parent}{SEPARATOR}"),
            };
        }
    }

    // A full command name was not completed as a command, so everything is a candidate.
    let filter = if tables.is_command(path) {
        String::new()
    } else {
        path.to_owned()
    };

    Listing {
        dir: PathBuf::from(CURRENT_DIR),
        filter,
        prefix: String::new(),
    }
}

/// Returns `path` if it is an existing directory, or else its nearest existing ancestor.
///
/// Absolute paths ultimately fall back to the file system root, and relative paths to the
/// current directory.
fn nearest_dir(path: &str, host: &dyn Host) -> String {
    if host.is_dir(Path::new(path)) {
        return path.to_owned();
    }

    let separator = SEPARATOR.to_string();
    let segments: Vec<&str> = path.split(SEPARATOR).collect();
    for end in (1..segments.len()).rev() {
        let ancestor = segments[..end].join(separator.as_str());
        if !ancestor.is_empty() && host.is_dir(Path::new(&ancestor)) {
            return ancestor;
        }
    }

    if Path::new(path).has_root() {
        SEPARATOR.to_string()
    } else {
        CURRENT_DIR.to_owned()
    }
}
