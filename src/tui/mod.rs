//! Interactive TUI card.

mod input;
mod options;
mod text;

pub use text::print_help;

/// Run TUI interactive mode.
pub fn run() {
    options::run_card();
}
