use tracing::debug;
use vtab_core::Host;

use crate::{tables::FLAG_PREFIX, CompletionContext, Tables};

/// Completes a flag of the parent command.
///
/// Commands without a dedicated table use the global flags.
pub(crate) fn complete_flags(
    context: &CompletionContext,
    tables: &Tables,
    host: &dyn Host,
) -> Vec<String> {
    let current = context.current;
    let mut completions = match tables.flags_for(context.parent) {
        Some(flags) => filter_flags(flags, current),
        None => {
            debug!(parent = context.parent, "no dedicated flags, using global flags");
            complete_global_flags(current, tables, host)
        }
    };

    // The flag is already complete.
    if completions.len() == 1 && completions[0] == current {
        completions.clear();
    }

    completions
}

/// Completes the value of the compiler-selector flag using the compilers present on the host.
pub(crate) fn complete_compiler_value(current: &str, tables: &Tables, host: &dyn Host) -> Vec<String> {
    available_compilers(tables, host)
        .into_iter()
        .filter(|compiler| compiler != current && compiler.starts_with(current))
        .collect()
}

/// Returns the flags starting with `current`, or all flags if `current` is the bare flag prefix.
fn filter_flags(flags: &[String], current: &str) -> Vec<String> {
    if current.len() <= FLAG_PREFIX.len_utf8() {
        return flags.to_vec();
    }

    flags
        .iter()
        .filter(|flag| flag.starts_with(current))
        .cloned()
        .collect()
}

fn complete_global_flags(current: &str, tables: &Tables, host: &dyn Host) -> Vec<String> {
    let mut completions = Vec::new();
    for flag in &tables.global_flags {
        if flag == current {
            if *flag == tables.compiler_flag {
                completions.extend(available_compilers(tables, host));
            }
        } else if flag.starts_with(current) {
            completions.push(flag.clone());
        }
    }
    completions
}

/// Returns the known compilers that can be found on the host.
fn available_compilers(tables: &Tables, host: &dyn Host) -> Vec<String> {
    tables
        .compilers
        .iter()
        .filter(|compiler| match host.find_executable(compiler) {
            Some(_) => true,
            None => {
                debug!(compiler = compiler.as_str(), "compiler not found");
                false
            }
        })
        .cloned()
        .collect()
}
