//! Centralized warnings, prompts, and quiet-mode state for CLI output.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::terminal::{RED, RESET, YELLOW};

/// Global quiet mode flag - suppresses warnings and prompts
static QUIET: AtomicBool = AtomicBool::new(false);

/// Enable quiet mode (suppress warnings and non-essential output)
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

fn quiet_enabled() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// True when interactive prompts should be skipped: quiet mode is on or
/// stdin is not a tty.
fn skip_prompt() -> bool {
    quiet_enabled() || unsafe { libc::isatty(0) != 1 }
}

/// Print a warning message to stderr (yellow) - suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet_enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Print an error message to stderr (red) - NOT suppressed (errors are always shown)
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Print clipboard copied confirmation - suppressed in quiet mode
pub fn clipboard_copied() {
    if !quiet_enabled() {
        println!("*** -COPIED TO CLIPBOARD- ***");
    }
}

/// Print clipboard error - NOT suppressed (errors are always shown)
pub fn clipboard_error(err: &str) {
    eprintln!("Clipboard error: {err}");
}

/// Prompt user when clipboard is unavailable. Returns true to fall back to
/// terminal output, false to abort. Quiet/non-interactive runs fall back
/// silently.
pub fn clipboard_fallback_prompt() -> bool {
    if skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_ok() {
        let input = input.trim().to_lowercase();
        if input.is_empty() || input == "y" || input == "yes" {
            eprintln!();
            return true;
        }
    } else {
        return true; // Fall back on read error
    }

    eprintln!("\nAborted.");
    false
}

/// Print password output summary - suppressed in quiet mode
pub fn passwords_written(count: usize, path: &str) {
    if !quiet_enabled() {
        println!("{count} password(s) \u{2192} {path}");
    }
}
