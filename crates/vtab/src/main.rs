mod config;
mod error;
mod shell;


use std::{io::Write, path::PathBuf};

use clap::{crate_version, Parser, Subcommand};
use shell::ShellKind;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use vtab_complete::Completer;
use vtab_core::{utils::path_to_string, Host, StdHost};

/// Environment variable holding the log filter directives.
const LOG_ENV_VAR: &str = "VTAB_LOG";

/// Command line options for the application's CLI.
#[derive(Parser)]
#[command(about = "Shell completion for the V toolchain.", version = crate_version!())]
struct Opts {
    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Completion tables replacing the built-in ones
    #[arg(long, value_name = "FILE")]
    tables: Option<PathBuf>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print completions for the words typed so far
    Complete {
        /// Shell to format completions for
        shell: String,

        /// Words up to and including the word being completed
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },

    /// Print the snippet hooking completion into a shell
    Setup {
        /// Shell to hook into
        shell: String,

        /// Program to complete
        #[arg(long, default_value = "v")]
        program: String,
    },
}

/// Entrypoint for the application.
pub fn main() {
    let opts = Opts::parse();
    init_logging(opts.verbose);

    let host = StdHost::from_env();
    let code = run(opts, &host, &mut std::io::stdout().lock());
    std::process::exit(code);
}

/// Runs an action, writing its output to `out`. Returns an exit code.
fn run(opts: Opts, host: &dyn Host, out: &mut impl Write) -> i32 {
    match opts.action {
        Action::Complete { shell, words } => {
            // Unknown shells get no completions, as any output could corrupt their prompt.
            let Ok(shell) = shell.parse::<ShellKind>() else {
                debug!(%shell, "unsupported shell");
                return 0;
            };

            let tables = config::load_tables(opts.tables.as_deref());
            let completions = Completer::new(&tables, host).complete_line(&words.join(" "));
            debug!(count = completions.len(), "resolved completions");

            if !completions.is_empty() {
                let _ = writeln!(out, "{}", shell.format(&completions));
            }
            0
        }

        Action::Setup { shell, program } => match shell.parse::<ShellKind>() {
            Ok(shell) => match write!(out, "{}", shell.setup_script(&program, &current_exe())) {
                Ok(()) => 0,
                Err(error) => {
                    eprintln!("vtab: cannot write setup script: {error}");
                    1
                }
            },
            Err(error) => {
                eprintln!("vtab: {error}");
                1
            }
        },
    }
}

/// Returns the path of the running executable, or its bare name if the path is unknown.
fn current_exe() -> String {
    std::env::current_exe()
        .map(|path| path_to_string(&path))
        .unwrap_or_else(|_| String::from("vtab"))
}

/// Initializes logging to stderr, keeping stdout free for completions.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
