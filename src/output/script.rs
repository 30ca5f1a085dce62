//! Shell removal-command generation for duplicate files.
//!
//! Produces one `rm` command per removable path, escaped for POSIX shells.
//! Nothing here executes anything; the commands are emitted for the user to
//! review and run themselves.
//!
//! # Escaping
//!
//! Paths are wrapped in single quotes. A literal single quote inside a path
//! cannot appear inside a single-quoted string, so each one is replaced with
//! `'\''`: close the quoting, insert an escaped quote, reopen the quoting.
//! This keeps paths with spaces, parentheses, `$`, backticks and quote
//! characters intact as a single shell argument.

use std::io::Write;
use std::path::Path;

use crate::duplicates::RemovalPlan;

/// Escape a path for use as a single-quoted POSIX shell argument.
#[must_use]
pub fn escape_posix(path: &Path) -> String {
    let s = path.to_string_lossy();
    // Wrap in single quotes, escape single quotes as '\''
    format!("'{}'", s.replace('\'', "'\\''"))
}

/// Generate one `rm` command per removable path in the plan.
///
/// The keeper never appears in the output.
#[must_use]
pub fn removal_commands(plan: &RemovalPlan) -> Vec<String> {
    plan.removable
        .iter()
        .map(|path| format!("rm {}", escape_posix(path)))
        .collect()
}

/// Write the removal commands for a set of plans, one per line.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_commands<W: Write>(writer: &mut W, plans: &[RemovalPlan]) -> std::io::Result<()> {
    for plan in plans {
        for command in removal_commands(plan) {
            writeln!(writer, "{}", command)?;
        }
    }
    Ok(())
}
