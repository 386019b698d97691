//! TUI screens.

use crate::pass::{ConfigError, charset};
use crate::settings::Settings;
use crate::terminal::{
    GREEN, RED, RESET, UNDERLINE, box_bottom, box_line, box_line_center, box_opt, box_top,
    calculate_entropy, entropy_strength, flush, format_number, print_error, print_rule,
};

pub fn enter_prompt() -> &'static str {
    "Enter option (or press Enter to generate)"
}

fn on_off(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}

/// Feedback shown under the card after an action.
pub enum Notice {
    None,
    Copied,
    NothingToCopy,
    Saved,
    Defaults,
    Error(String),
}

pub fn print_screen(settings: &Settings, shown: &Result<String, ConfigError>, notice: &Notice) {
    box_top("Starpass");
    match shown {
        Ok(password) => box_line_center(password),
        Err(_) => box_line_center(&format!("{RED}Select at least one character class{RESET}")),
    }

    let size = charset::size(settings);
    if size > 0 {
        let bits = calculate_entropy(settings.pass_length, size);
        print_rule();
        box_line_center(&format!(
            "{:.1} bits ({}) | charset: {} chars",
            bits,
            entropy_strength(bits),
            size
        ));
    }
    box_bottom();
    println!();

    box_top("Options");
    box_line(&format!(
        "  1) Length: {}",
        format_number(settings.pass_length)
    ));
    box_line("");
    box_line(&format!("{UNDERLINE}Include characters{RESET}:"));
    box_line(&format!(
        "  2) Uppercase (A-Z): {}",
        on_off(settings.include_uppercase)
    ));
    box_line(&format!(
        "  3) Lowercase (a-z): {}",
        on_off(settings.include_lowercase)
    ));
    box_line(&format!(
        "  4) Digits (0-9): {}",
        on_off(settings.include_digits)
    ));
    box_line(&format!(
        "  5) Symbols (!@#$%...): {}",
        on_off(settings.include_symbols)
    ));
    box_line("");
    print_rule();
    box_line("     Enter) generate  |  c) copy  |  s) save settings");
    box_line("     r) defaults  |  h) help  |  q) quit");
    box_bottom();

    // Feedback line (or blank line to keep the prompt in place)
    match notice {
        Notice::None => println!(),
        Notice::Copied => println!("{GREEN}Copied to clipboard.{RESET}"),
        Notice::NothingToCopy => print_error("Nothing to copy."),
        Notice::Saved => println!("{GREEN}Settings saved.{RESET}"),
        Notice::Defaults => println!("{GREEN}Defaults restored.{RESET}"),
        Notice::Error(msg) => print_error(msg),
    }
    flush();
}

pub fn print_help() {
    box_top("Starpass");
    box_line_center("Random password generator");
    box_line("");
    box_line("MODES:");
    box_line("  1) Interactive: Run without arguments. Opens a TUI card to");
    box_line("     pick character classes and generate passwords.");
    box_line("  2) Client: Pass flags directly (e.g., -l 20 -n 5) to generate");
    box_line("     passwords without the menu.");
    box_line("  3) Command: Use -c to save flags as defaults. Future runs of");
    box_line("     `starpass` will use those flags automatically. Clear with");
    box_line("     `starpass -c`.");
    box_line("");
    box_line("USAGE:");
    box_line("  starpass [OPTIONS]");
    box_line("");
    box_line("OPTIONS:");
    box_line(" Password:");
    box_opt("  -l, --length <N>", "Characters per password (default: 16)");
    box_opt("  -n, --number <N>", "How many passwords to generate (default: 1)");
    box_opt("      --no-upper", "Drop uppercase letters from the charset");
    box_opt("      --no-lower", "Drop lowercase letters from the charset");
    box_opt("      --no-digits", "Drop digits from the charset");
    box_opt("      --no-symbols", "Drop symbols from the charset");
    box_line("");
    box_line(" Output:");
    box_opt("  -o, --output [FILE]", "Append to file (default: starpass.txt)");
    box_opt("  -b, --board", "Copy to clipboard instead of printing");
    box_opt("  -q, --quiet", "Suppress all output except passwords");
    box_line("");
    box_line(" Settings:");
    box_opt("  -c, --command [FLAGS]", "Save flags as defaults. Run alone to clear.");
    box_opt("  -d, --default", "Use default settings");
    box_opt("  -s, --saved", "Use saved settings from config file");
    box_line("");
    box_line(" Info:");
    box_opt("  -h, --help", "Display this help message");
    box_opt("  -v, --version", "Display version");
    box_line("");
    box_line("EXAMPLES:");
    box_line("  starpass                 Interactive or command mode (if set)");
    box_line("  starpass -l 32           One password, 32 characters");
    box_line("  starpass -l 20 -n 3      Three passwords, 20 characters each");
    box_line("  starpass --no-symbols    Alphanumeric only");
    box_line("  starpass -n 5 -b         Five passwords to the clipboard");
    box_line("  starpass -c -l 20        Save -l 20 as default");
    box_line("");
    box_bottom();
    println!();
}
