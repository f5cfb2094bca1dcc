use tracing::debug;

use crate::{tables::FLAG_PREFIX, Tables};

/// What the word being completed is expected to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A top-level command, or anything that is not flag-shaped.
    Command,

    /// A flag of the parent command.
    Flag,

    /// The value of the compiler-selector flag.
    CompilerValue,
}

/// The context in which the final word of a request is completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionContext<'a> {
    /// The word being completed. May be empty.
    pub current: &'a str,

    /// The nearest word before the current word that is not a flag. Empty if every preceding word
    /// is a flag, or if there are no preceding words.
    pub parent: &'a str,

    /// The word immediately before the current word, if any.
    pub previous: Option<&'a str>,

    /// `true` if the current word starts with the flag prefix.
    pub is_flag: bool,
}

impl<'a> CompletionContext<'a> {
    /// Classifies a sequence of words.
    ///
    /// Returns `None` if there are no words.
    pub fn classify(words: &[&'a str]) -> Option<Self> {
        let (&current, preceding) = words.split_last()?;
        let current = current.trim_matches(' ');

        // Scanning backwards past flags finds the command that owns them, even on the incomplete
        // and ungrammatical input a shell hands over mid-typing.
        let parent = preceding
            .iter()
            .rev()
            .find(|word| !word.starts_with(FLAG_PREFIX))
            .copied()
            .unwrap_or_default();

        let previous = preceding.last().copied();

        let context = Self {
            current,
            parent,
            previous,
            is_flag: current.starts_with(FLAG_PREFIX),
        };
        debug!(?context, "classified completion request");
        Some(context)
    }

    /// Returns the kind of word being completed.
    pub fn kind(&self, tables: &Tables) -> TokenKind {
        if self.is_flag {
            TokenKind::Flag
        } else if self.previous == Some(tables.compiler_flag.as_str()) {
            TokenKind::CompilerValue
        } else {
            TokenKind::Command
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify<'a>(words: &[&'a str]) -> CompletionContext<'a> {
        CompletionContext::classify(words).unwrap()
    }

    #[test]
    fn no_words_no_context() {
        assert_eq!(CompletionContext::classify(&[]), None);
    }

    #[test]
    fn parent_skips_flags() {
        let context = classify(&["v", "build", "-x", "-y", ""]);
        assert_eq!(context.current, "");
        assert_eq!(context.parent, "build");
        assert!(!context.is_flag);

        let context = classify(&["v", "build", "-x", "-y", "-sh"]);
        assert_eq!(context.current, "-sh");
        assert_eq!(context.parent, "build");
        assert_eq!(context.previous, Some("-y"));
        assert!(context.is_flag);
    }

    #[test]
    fn parent_is_empty_when_only_flags() {
        let context = classify(&["-v", "-prod"]);
        assert_eq!(context.parent, "");

        let context = classify(&["v"]);
        assert_eq!(context.parent, "");
        assert_eq!(context.previous, None);
    }

    #[test]
    fn current_word_is_not_its_own_parent() {
        let context = classify(&["v", "doc", "bui"]);
        assert_eq!(context.parent, "doc");
        assert!(!context.is_flag);
    }

    #[test]
    fn kinds() {
        let tables = Tables::default();
        assert_eq!(classify(&["v", "fm"]).kind(&tables), TokenKind::Command);
        assert_eq!(classify(&["v", "fmt", "-"]).kind(&tables), TokenKind::Flag);
        assert_eq!(
            classify(&["v", "-cc", "gc"]).kind(&tables),
            TokenKind::CompilerValue
        );
        assert_eq!(classify(&["v", "-cc", "-"]).kind(&tables), TokenKind::Flag);
    }
}
