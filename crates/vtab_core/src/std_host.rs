use std::path::{Path, PathBuf};

use is_executable::is_executable;
use itertools::Itertools;

use crate::{fs::find_in_path, Host};

/// A host wrapping the Rust standard library.
#[derive(Debug, Default, Clone)]
pub struct StdHost {
    /// The user's home directory.
    home: Option<PathBuf>,

    /// Contents of `$PATH`.
    search_path: Option<String>,

    /// Contents of `$PATHEXT`.
    path_extensions: Option<String>,
}

impl StdHost {
    /// Constructs a host from the current process environment.
    pub fn from_env() -> Self {
        Self {
            home: dirs::home_dir(),
            search_path: std::env::var("PATH").ok(),
            path_extensions: std::env::var("PATHEXT").ok(),
        }
    }

    /// Overrides the home directory.
    pub fn with_home<P: Into<PathBuf>>(mut self, home: P) -> Self {
        self.home = Some(home.into());
        self
    }

    /// Overrides the executable search path (the equivalent of `$PATH`).
    pub fn with_search_path<S: Into<String>>(mut self, search_path: S) -> Self {
        self.search_path = Some(search_path.into());
        self
    }
}

impl Host for StdHost {
    fn list_directory(&self, path: &Path) -> std::io::Result<Vec<String>> {
        let entries = std::fs::read_dir(path)?
            .filter_map(|entry| entry.ok()) // Entries may vanish while listing.
            .map(|entry| entry.file_name().to_string_lossy().to_string())
            .sorted()
            .collect();
        Ok(entries)
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn home_dir(&self) -> Option<PathBuf> {
        self.home.clone()
    }

    fn find_executable(&self, name: &str) -> Option<PathBuf> {
        let search_path = self.search_path.as_deref()?;
        find_in_path(name, search_path, self.path_extensions.as_deref())
            .filter(|path| is_executable(path))
    }
}

#[cfg(test)]
mod tests {
    use std::fs::{create_dir, File};

    use super::*;

    #[test]
    fn list_directory_returns_entry_names() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("main.x")).unwrap();
        create_dir(dir.path().join("lib")).unwrap();

        let names = StdHost::default().list_directory(dir.path()).unwrap();
        assert_eq!(names, vec!["lib".to_string(), "main.x".to_string()]);
    }

    #[test]
    fn list_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let host = StdHost::default();
        assert!(host.list_directory(&dir.path().join("missing")).is_err());
    }

    #[test]
    fn home_override() {
        let host = StdHost::default().with_home("/home/u");
        assert_eq!(host.home_dir(), Some(PathBuf::from("/home/u")));
    }

    #[test]
    fn no_search_path_finds_nothing() {
        assert_eq!(StdHost::default().find_executable("sh"), None);
    }

    #[cfg(unix)]
    #[test]
    fn find_executable_requires_executable_bit() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let runnable = dir.path().join("gcc");
        let plain = dir.path().join("tcc");
        File::create(&runnable).unwrap();
        File::create(&plain).unwrap();
        std::fs::set_permissions(&runnable, std::fs::Permissions::from_mode(0o755)).unwrap();
        std::fs::set_permissions(&plain, std::fs::Permissions::from_mode(0o644)).unwrap();

        let host = StdHost::default().with_search_path(dir.path().to_string_lossy());
        assert!(host.find_executable("gcc").is_some());
        assert_eq!(host.find_executable("tcc"), None);
        assert_eq!(host.find_executable("clang"), None);
    }
}
