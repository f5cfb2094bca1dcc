use std::path::{Path, PathBuf};

/// A host is the completion engine's view of the operating system.
///
/// All file system access and executable lookups made while resolving completions go through
/// this trait. Implementations must be free of side effects: a host is only ever queried.
pub trait Host {
    /// Returns the names of all entries in a directory.
    ///
    /// The names are relative to `path`, i.e. they contain no separators. Implementations should
    /// return them in a stable order.
    fn list_directory(&self, path: &Path) -> std::io::Result<Vec<String>>;

    /// Returns `true` if `path` exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Returns the current user's home directory, if known.
    fn home_dir(&self) -> Option<PathBuf>;

    /// Resolves an executable by name using the host's search path.
    fn find_executable(&self, name: &str) -> Option<PathBuf>;
}
