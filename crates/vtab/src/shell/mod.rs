mod format;
mod setup;

use std::str::FromStr;

use crate::error::UnknownShell;

/// A shell that can invoke completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ShellKind {
    Bash,
    Fish,
    PowerShell,
    Zsh,
}

impl FromStr for ShellKind {
    type Err = UnknownShell;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "bash" => Ok(Self::Bash),
            "fish" => Ok(Self::Fish),
            "powershell" | "pwsh" => Ok(Self::PowerShell),
            "zsh" => Ok(Self::Zsh),
            _ => Err(UnknownShell(name.to_owned())),
        }
    }
}
