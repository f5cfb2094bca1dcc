use std::path::Path;

/// The platform's main path separator.
pub const SEPARATOR: char = std::path::MAIN_SEPARATOR;

/// Converts a path to a string.
///
/// Non-unicode characters are replaced by '?' in the returned string.
pub fn path_to_string<P: AsRef<Path>>(path: &P) -> String {
    path.as_ref()
        .to_string_lossy()
        .trim_start_matches(r#"\\?\"#)
        .to_string()
}

/// Returns `path` with exactly one trailing separator appended, unless it already ends with one.
pub fn with_trailing_separator(path: &str) -> String {
    if path.ends_with(SEPARATOR) {
        path.to_owned()
    } else {
        format!("{path}{SEPARATOR}")
    }
}
