/// Splits a completion request into words.
///
/// Words are separated by single spaces. Runs of spaces do not produce empty words, except for
/// the final word: a line ending in a space yields an explicit empty final word, which is the word
/// being completed. Other trailing whitespace, such as a newline appended by the calling shell,
/// is ignored.
pub(crate) fn separate_input(line: &str) -> Vec<&str> {
    let trimmed = line.trim_end();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let mut words: Vec<&str> = trimmed.split(' ').filter(|word| !word.is_empty()).collect();
    if line[trimmed.len()..].contains(' ') {
        words.push("");
    }

    words
}
