use std::collections::HashMap;

use serde::Deserialize;

/// Marks a word as a flag rather than a command or path.
pub const FLAG_PREFIX: char = '-';

/// Stands in for the user's home directory at the start of a path.
pub const HOME_SHORTHAND: char = '~';

const COMMANDS: &[&str] = &[
    "ast",
    "bin2v",
    "bug",
    "build",
    "build-examples",
    "build-tools",
    "build-vbinaries",
    "bump",
    "check-md",
    "complete",
    "compress",
    "doc",
    "doctor",
    "fmt",
    "gret",
    "help",
    "init",
    "install",
    "list",
    "ls",
    "missdoc",
    "new",
    "outdated",
    "remove",
    "repl",
    "run",
    "search",
    "self",
    "setup-freetype",
    "shader",
    "symlink",
    "test",
    "test-all",
    "test-cleancode",
    "test-fmt",
    "test-parser",
    "test-self",
    "tracev",
    "translate",
    "up",
    "update",
    "upgrade",
    "version",
    "vet",
    "vlib-docs",
    "watch",
    "where",
    "wipe-cache",
];

const GLOBAL_FLAGS: &[&str] = &[
    "-apk",
    "-show-timings",
    "-check-syntax",
    "-v",
    "-progress",
    "-silent",
    "-g",
    "-cg",
    "-repl",
    "-live",
    "-sharedlive",
    "-shared",
    "--enable-globals",
    "-enable-globals",
    "-autofree",
    "-compress",
    "-freestanding",
    "-no-parallel",
    "-no-preludes",
    "-prof",
    "-profile",
    "-profile-no-inline",
    "-prod",
    "-simulator",
    "-stats",
    "-obfuscate",
    "-translated",
    "-color",
    "-nocolor",
    "-showcc",
    "-show-c-output",
    "-experimental",
    "-usecache",
    "-prealloc",
    "-parallel",
    "-native",
    "-W",
    "-keepc",
    "-w",
    "-print-v-files",
    "-error-limit",
    "-os",
    "-printfn",
    "-cflags",
    "-define",
    "-d",
    "-cc",
    "-o",
    "-b",
    "-path",
    "-custom-prelude",
    "-name",
    "-bundle",
    "-V",
    "-version",
    "--version",
];

const BUILD_FLAGS: &[&str] = &[
    "-apk",
    "-autofree",
    "-b",
    "-bundle",
    "-cc",
    "-cflags",
    "-cg",
    "-check-syntax",
    "-color",
    "-compress",
    "-custom-prelude",
    "-d",
    "-define",
    "-enable-globals",
    "-error-limit",
    "-experimental",
    "-freestanding",
    "-g",
    "-keepc",
    "-live",
    "-manualfree",
    "-native",
    "-no-parallel",
    "-no-preludes",
    "-nocolor",
    "-o",
    "-obfuscate",
    "-os",
    "-path",
    "-prealloc",
    "-printfn",
    "-print-v-files",
    "-prod",
    "-prof",
    "-profile",
    "-profile-no-inline",
    "-showcc",
    "-show-c-output",
    "-show-timings",
    "-silent",
    "-skip-unused",
    "-stats",
    "-translated",
    "-usecache",
    "-v",
    "-W",
    "-w",
];

const BIN2V_FLAGS: &[&str] = &[
    "-h", "-help", "-m", "-module", "-p", "-prefix", "-w", "-write",
];

const DOC_FLAGS: &[&str] = &[
    "-all",
    "-f",
    "-h",
    "-help",
    "-m",
    "-o",
    "-readme",
    "-v",
    "-filename",
    "-pos",
    "-no-timestamp",
    "-inline-assets",
    "-theme-dir",
    "-open",
    "-p",
    "-s",
    "-l",
];

const FMT_FLAGS: &[&str] = &["-c", "-diff", "-l", "-w", "-debug", "-verify"];

const MISSDOC_FLAGS: &[&str] = &[
    "--help",
    "-h",
    "--tags",
    "-t",
    "--deprecated",
    "-d",
    "--private",
    "-p",
    "--no-line-numbers",
    "-n",
    "--exclude",
    "-e",
    "--relative-paths",
    "-r",
    "--js",
    "--verify",
    "--diff",
];

const SELF_FLAGS: &[&str] = &["-prod"];

const SHADER_FLAGS: &[&str] = &[
    "-h", "-help", "-v", "-verbose", "-force-update", "-o", "-output", "-l", "-slang",
];

const WHERE_FLAGS: &[&str] = &["-h", "-f", "-v"];

const COMPILERS: &[&str] = &["cc", "gcc", "tcc", "tinyc", "clang", "mingw", "msvc"];

/// Read-only completion tables.
///
/// Every field falls back to the built-in table when deserialized from a partial definition.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Tables {
    /// Top-level command names.
    pub commands: Vec<String>,

    /// Flags of commands without a dedicated table.
    pub global_flags: Vec<String>,

    /// Flags keyed by their parent command.
    pub command_flags: HashMap<String, Vec<String>>,

    /// Known compiler names, offered as values of [`Tables::compiler_flag`].
    pub compilers: Vec<String>,

    /// The flag selecting a compiler.
    pub compiler_flag: String,

    /// Completing this word lists the top-level commands.
    pub help_command: String,

    /// Commands not listed by [`Tables::help_command`].
    pub help_hidden: Vec<String>,
}

impl Tables {
    /// Returns the dedicated flags of a command, if any.
    pub fn flags_for(&self, command: &str) -> Option<&[String]> {
        self.command_flags.get(command).map(Vec::as_slice)
    }

    /// Returns `true` if `name` is exactly a top-level command.
    pub fn is_command(&self, name: &str) -> bool {
        self.commands.iter().any(|command| command == name)
    }
}

impl Default for Tables {
    fn default() -> Self {
        let command_flags = [
            ("bin2v", BIN2V_FLAGS),
            ("build", BUILD_FLAGS),
            ("doc", DOC_FLAGS),
            ("fmt", FMT_FLAGS),
            ("missdoc", MISSDOC_FLAGS),
            ("self", SELF_FLAGS),
            ("shader", SHADER_FLAGS),
            ("where", WHERE_FLAGS),
        ]
        .into_iter()
        .map(|(command, flags)| (command.to_owned(), strings(flags)))
        .collect();

        Self {
            commands: strings(COMMANDS),
            global_flags: strings(GLOBAL_FLAGS),
            command_flags,
            compilers: strings(COMPILERS),
            compiler_flag: "-cc".to_owned(),
            help_command: "help".to_owned(),
            help_hidden: vec!["complete".to_owned()],
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_for_known_and_unknown_commands() {
        let tables = Tables::default();
        assert_eq!(
            tables.flags_for("fmt").map(<[String]>::len),
            Some(FMT_FLAGS.len())
        );
        assert_eq!(tables.flags_for("run"), None);
    }

    #[test]
    fn is_command_matches_exactly() {
        let tables = Tables::default();
        assert!(tables.is_command("build"));
        assert!(!tables.is_command("bui"));
    }

    #[test]
    fn built_in_tables_hold_no_duplicates() {
        let tables = Tables::default();
        let mut lists = vec![&tables.commands, &tables.global_flags, &tables.compilers];
        lists.extend(tables.command_flags.values());

        for list in lists {
            let mut sorted = list.clone();
            sorted.sort();
            sorted.dedup();
            assert_eq!(sorted.len(), list.len(), "duplicates in {list:?}");
        }
    }

    #[test]
    fn compiler_flag_is_a_global_flag() {
        let tables = Tables::default();
        assert!(tables.global_flags.contains(&tables.compiler_flag));
    }
}
