use std::path::PathBuf;

use super::*;

#[test]
fn path_to_string() {
    assert_eq!(
        &super::path_to_string(&PathBuf::from(r#"C:\\Dev"#)),
        r#"C:\\Dev"#
    );
    assert_eq!(
        &super::path_to_string(&PathBuf::from("/usr/bin")),
        "/usr/bin"
    );
}

#[cfg(unix)]
#[test]
fn trailing_separator() {
    assert_eq!(with_trailing_separator("/home/u"), "/home/u/");
    assert_eq!(with_trailing_separator("/home/u/"), "/home/u/");
    assert_eq!(with_trailing_separator("/"), "/");
}
