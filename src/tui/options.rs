//! Interactive card loop.

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use crate::pass::{self, ConfigError};
use crate::settings::Settings;
use crate::terminal::{clear, print_error, reset_terminal};

use super::input::{get_editable_input, get_numeric_input};
use super::text::{Notice, enter_prompt, print_help, print_screen};

// Interactive length bounds. CLI callers are unclamped.
pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 64;

pub fn run_card() {
    reset_terminal();

    let mut settings = match Settings::load_from_file() {
        Ok(s) => s,
        Err(e) => {
            print_error(&format!("Error loading settings: {}", e));
            Settings::default()
        }
    };
    settings.pass_length = settings.pass_length.clamp(MIN_LENGTH, MAX_LENGTH);

    // The card always opens with a freshly generated password.
    let mut shown = pass::generate(&settings);
    let mut notice = Notice::None;
    let mut clipboard: Option<ClipboardContext> = None;

    loop {
        clear();
        print_screen(&settings, &shown, &notice);
        notice = Notice::None;

        let input = match get_editable_input(enter_prompt(), "") {
            Some(s) => s,
            None => continue,
        };

        match input.trim() {
            "" => regenerate(&mut shown, &settings),
            "1" => {
                if let Some(len) = get_numeric_input("New length (4-64)", settings.pass_length) {
                    settings.pass_length = len.clamp(MIN_LENGTH, MAX_LENGTH);
                }
            }
            // Toggles update the charset only; the shown password stays
            // until the next generate.
            "2" => settings.include_uppercase = !settings.include_uppercase,
            "3" => settings.include_lowercase = !settings.include_lowercase,
            "4" => settings.include_digits = !settings.include_digits,
            "5" => settings.include_symbols = !settings.include_symbols,
            "c" => notice = copy_to_clipboard(&mut clipboard, &shown),
            "s" => {
                notice = match settings.save_to_file() {
                    Ok(()) => Notice::Saved,
                    Err(e) => Notice::Error(format!("Error saving settings: {}", e)),
                }
            }
            "r" => {
                settings = Settings::default();
                regenerate(&mut shown, &settings);
                notice = Notice::Defaults;
            }
            "h" => {
                clear();
                print_help();
                let _ = get_editable_input("Press Enter to return", "");
            }
            "q" => {
                clear();
                break;
            }
            _ => notice = Notice::Error("Invalid option.".to_string()),
        }
    }

    if let Ok(password) = &mut shown {
        password.zeroize();
    }
}

fn regenerate(shown: &mut Result<String, ConfigError>, settings: &Settings) {
    if let Ok(old) = shown {
        old.zeroize();
    }
    *shown = pass::generate(settings);
}

fn copy_to_clipboard(
    clipboard: &mut Option<ClipboardContext>,
    shown: &Result<String, ConfigError>,
) -> Notice {
    let Ok(password) = shown else {
        return Notice::NothingToCopy;
    };

    if clipboard.is_none() {
        *clipboard = ClipboardContext::new().ok();
    }

    match clipboard {
        Some(ctx) => match ctx.set_contents(password.clone()) {
            Ok(()) => Notice::Copied,
            Err(e) => Notice::Error(format!("Clipboard error: {}", e)),
        },
        None => Notice::Error("Clipboard unavailable.".to_string()),
    }
}
