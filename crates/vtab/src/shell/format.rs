use super::ShellKind;

impl ShellKind {
    /// Formats completions as input for the shell's completion mechanism, one per line.
    ///
    /// The returned text is empty if there are no completions.
    pub(crate) fn format(&self, completions: &[String]) -> String {
        completions
            .iter()
            .map(|completion| match self {
                ShellKind::Bash => format!("COMPREPLY+=({})", quote(completion)),
                ShellKind::Zsh => format!("compadd -U -S \"\" -- {};", quote(completion)),
                ShellKind::Fish | ShellKind::PowerShell => completion.clone(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Single-quotes text for evaluation by a POSIX-like shell.
fn quote(text: &str) -> String {
    format!("'{}'", text.replace('\'', r"'\''"))
}
