use super::ShellKind;

const BASH_SETUP: &str = r#"_{function}_completions() {
	local src
	local limit
	COMPREPLY=()
	# Send all words up to the word the cursor is currently on.
	let limit=1+$COMP_CWORD
	src=$("{exe}" complete bash "${COMP_WORDS[@]:0:$limit}")
	if [[ $? == 0 ]]; then
		eval "${src}"
	fi
}
complete -o nospace -F _{function}_completions {program}
"#;

const FISH_SETUP: &str = r#"function __{function}_completions
	# Send all words up to the cursor, including the partial word.
	"{exe}" complete fish (commandline -cop) "$(commandline -ct)"
end
complete -f -c {program} -a "(__{function}_completions)"
"#;

const POWERSHELL_SETUP: &str = r#"Register-ArgumentCompleter -Native -CommandName {program} -ScriptBlock {
	param($wordToComplete, $commandAst, $cursorPosition)
	$line = $commandAst.ToString()
	if ($wordToComplete -eq '') {
		$line += ' '
	}
	& "{exe}" complete powershell $line | ForEach-Object {
		[System.Management.Automation.CompletionResult]::new($_, $_, 'ParameterValue', $_)
	}
}
"#;

const ZSH_SETUP: &str = r#"#compdef {program}
_{function}() {
	local src
	# Send all words up to the word the cursor is currently on.
	src=$("{exe}" complete zsh "${(@)words[1,$CURRENT]}")
	if [[ $? == 0 ]]; then
		eval "${src}"
	fi
}
compdef _{function} {program}
"#;

impl ShellKind {
    /// Returns a snippet that, once sourced by the shell, completes `program` by invoking the
    /// executable at `exe`.
    pub(crate) fn setup_script(&self, program: &str, exe: &str) -> String {
        let template = match self {
            ShellKind::Bash => BASH_SETUP,
            ShellKind::Fish => FISH_SETUP,
            ShellKind::PowerShell => POWERSHELL_SETUP,
            ShellKind::Zsh => ZSH_SETUP,
        };

        template
            .replace("{function}", &function_name(program))
            .replace("{program}", program)
            .replace("{exe}", exe)
    }
}

/// Derives a shell function name from a program name.
fn function_name(program: &str) -> String {
    program
        .chars()
        .map(|ch| if ch.is_ascii_alphanumeric() { ch } else { '_' })
        .collect()
}
