use crate::Tables;

/// Completes a top-level command.
///
/// Never touches the file system.
pub(crate) fn complete_commands(current: &str, tables: &Tables) -> Vec<String> {
    if current == tables.help_command {
        return tables
            .commands
            .iter()
            .filter(|command| *command != current && !tables.help_hidden.contains(command))
            .cloned()
            .collect();
    }

    tables
        .commands
        .iter()
        .filter(|command| *command != current && command.starts_with(current))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_command_prefix() {
        assert_eq!(
            complete_commands("bui", &Tables::default()),
            vec!["build", "build-examples", "build-tools", "build-vbinaries"]
        );
    }

    #[test]
    fn exact_command_is_excluded() {
        let completions = complete_commands("build", &Tables::default());
        assert_eq!(
            completions,
            vec!["build-examples", "build-tools", "build-vbinaries"]
        );
        assert!(complete_commands("fmt", &Tables::default()).is_empty());
    }

    #[test]
    fn empty_word_lists_every_command() {
        let tables = Tables::default();
        assert_eq!(complete_commands("", &tables), tables.commands);
    }

    #[test]
    fn help_lists_commands_except_itself_and_hidden() {
        let tables = Tables::default();
        let completions = complete_commands("help", &tables);

        assert_eq!(completions.len(), tables.commands.len() - 2);
        assert!(!completions.contains(&"help".to_string()));
        assert!(!completions.contains(&"complete".to_string()));
        assert!(completions.contains(&"build".to_string()));
    }
}
