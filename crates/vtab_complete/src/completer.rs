use vtab_core::Host;

use crate::{
    commands::complete_commands,
    flags::{complete_compiler_value, complete_flags},
    fs::complete_paths,
    input::separate_input,
    CompletionContext, Tables, TokenKind,
};

/// Resolves completions for partial command lines.
///
/// A completer holds no state of its own. Each request is resolved independently from its full
/// text, so a single completer may serve any number of requests.
pub struct Completer<'a> {
    tables: &'a Tables,
    host: &'a dyn Host,
}

impl<'a> Completer<'a> {
    pub fn new(tables: &'a Tables, host: &'a dyn Host) -> Self {
        Self { tables, host }
    }

    /// Completes the final word of a space-separated line.
    pub fn complete_line(&self, line: &str) -> Vec<String> {
        self.complete_words(&separate_input(line))
    }

    /// Completes the final word of a request.
    ///
    /// Structured completions (commands and flags) are preferred. If there are none, the final word
    /// is completed as a path.
    pub fn complete_words(&self, words: &[&str]) -> Vec<String> {
        // Only the program name has been typed.
        if words.len() == 1 {
            return self.tables.commands.clone();
        }

        let Some(context) = CompletionContext::classify(words) else {
            return Vec::new();
        };

        let completions = match context.kind(self.tables) {
            TokenKind::Flag => complete_flags(&context, self.tables, self.host),
            TokenKind::CompilerValue => {
                complete_compiler_value(context.current, self.tables, self.host)
            }
            TokenKind::Command => complete_commands(context.current, self.tables),
        };

        if !completions.is_empty() {
            return completions;
        }

        complete_paths(context.current, self.tables, self.host)
    }
}
