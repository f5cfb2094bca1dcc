use std::path::PathBuf;

/// Find a program by searching for its name in the directories of a search path such as `$PATH`.
///
/// Optionally, extensions present in the semicolon-separated `pathext` (the contents of
/// `$PATHEXT`) are used when searching. Note that `$PATHEXT` is typically only present on Windows
/// systems. If no extensions are given, only the name is matched.
///
/// Also note that file system case-insensitivity may be in effect.
pub fn find_in_path(name: &str, search_path: &str, pathext: Option<&str>) -> Option<PathBuf> {
    // Define all possible file extensions that can be matched.
    let mut extensions = vec![String::new()]; // Empty string = no file extension.
    if let Some(pathext) = pathext {
        extensions.extend(
            pathext
                .split(';')
                .filter(|ext| !ext.is_empty())
                .map(str::to_owned),
        );
    }

    // Define all possible paths using paths in the search path combined with all extensions.
    let paths = paths(search_path);
    let possible_paths = paths.iter().flat_map(|path| {
        extensions.iter().map(|extension| {
            let mut path = path.clone();
            path.push(name.to_owned() + extension);
            path
        })
    });

    for path in possible_paths {
        if path.is_file() {
            return Some(path.canonicalize().unwrap_or(path));
        }
    }

    None
}

/// Returns a list of all paths in a search path separated by ':' on Unix systems, and by ';' on
/// Windows.
///
/// Empty segments are ignored.
fn paths(search_path: &str) -> Vec<PathBuf> {
    let separator = if cfg!(windows) { ';' } else { ':' };
    search_path
        .split(separator)
        .filter(|path| !path.is_empty())
        .map(PathBuf::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::fs::{create_dir, File};

    use super::*;

    #[cfg(unix)]
    #[test]
    fn split_search_path() {
        assert_eq!(
            paths("/usr/bin::/bin"),
            vec![PathBuf::from("/usr/bin"), PathBuf::from("/bin")]
        );
        assert!(paths("").is_empty());
    }

    #[test]
    fn find_first_match_in_search_path() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        File::create(second.path().join("clang")).unwrap();

        let separator = if cfg!(windows) { ";" } else { ":" };
        let search_path = format!(
            "{}{separator}{}",
            first.path().display(),
            second.path().display()
        );

        let found = find_in_path("clang", &search_path, None).unwrap();
        assert_eq!(found.file_name().unwrap(), "clang");
        assert_eq!(find_in_path("gcc", &search_path, None), None);
    }

    #[test]
    fn find_with_path_extension() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("msvc.EXE")).unwrap();

        let search_path = dir.path().to_string_lossy();
        assert!(find_in_path("msvc", &search_path, Some(".COM;.EXE")).is_some());
        assert_eq!(find_in_path("msvc", &search_path, None), None);
    }

    #[test]
    fn directories_are_not_programs() {
        let dir = tempfile::tempdir().unwrap();
        create_dir(dir.path().join("tcc")).unwrap();

        assert_eq!(find_in_path("tcc", &dir.path().to_string_lossy(), None), None);
    }
}
