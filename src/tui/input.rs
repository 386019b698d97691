//! Raw-mode line editors.

use crossterm::event::{Event, KeyCode, KeyModifiers, read};

use crate::terminal::{RawModeGuard, flush, reset_terminal};

/// Read a free-text line. Returns None when the edit is cancelled
/// (Esc or Ctrl+Q). Ctrl+C exits the process.
pub fn get_editable_input(prompt: &str, initial_value: &str) -> Option<String> {
    edit_line(prompt, initial_value, false)
}

/// Read an unsigned number. Returns None when cancelled or when the
/// final text is empty or does not parse.
pub fn get_numeric_input(prompt: &str, initial_value: usize) -> Option<usize> {
    let initial = if initial_value > 0 {
        initial_value.to_string()
    } else {
        String::new()
    };
    edit_line(prompt, &initial, true)?.parse().ok()
}

fn edit_line(prompt: &str, initial_value: &str, digits_only: bool) -> Option<String> {
    let mut input = initial_value.to_string();
    let mut cursor_pos = input.len() + 1; // 1-based: 1 = before first char
    let mut last_len = input.len();
    let mut cancelled = false;

    // RawModeGuard ensures raw mode is disabled even if we panic or return early
    let _guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(_) => return Some(input),
    };

    print!("{}: {}", prompt, input);
    flush();

    loop {
        let Ok(event) = read() else { break };
        let Event::Key(key_event) = event else {
            continue;
        };

        match key_event.code {
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                // Reset terminal BEFORE exit since process::exit doesn't run destructors
                reset_terminal();
                println!();
                std::process::exit(0);
            }
            KeyCode::Char('q') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                cancelled = true;
                break;
            }
            KeyCode::Esc => {
                cancelled = true;
                break;
            }
            KeyCode::Char('u') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                input.clear();
                cursor_pos = 1;
            }
            KeyCode::Enter => break,
            KeyCode::Backspace => {
                if cursor_pos > 1 {
                    cursor_pos -= 1;
                    input.remove(cursor_pos - 1);
                }
            }
            KeyCode::Delete => {
                if cursor_pos <= input.len() {
                    input.remove(cursor_pos - 1);
                }
            }
            KeyCode::Left => {
                if cursor_pos > 1 {
                    cursor_pos -= 1;
                }
            }
            KeyCode::Right => {
                if cursor_pos < input.len() + 1 {
                    cursor_pos += 1;
                }
            }
            KeyCode::Home => cursor_pos = 1,
            KeyCode::End => cursor_pos = input.len() + 1,
            // ASCII keeps byte and char indices interchangeable here.
            KeyCode::Char(c) if c.is_ascii() && (!digits_only || c.is_ascii_digit()) => {
                input.insert(cursor_pos - 1, c);
                cursor_pos += 1;
            }
            _ => {}
        }

        // Redraw the input line, then park the cursor.
        print!("\r{}: {}", prompt, " ".repeat(last_len + 1));
        print!("\r{}: {}", prompt, input);
        last_len = input.len();
        print!("\x1b[{}G", prompt.len() + 2 + cursor_pos);
        flush();
    }

    // Explicitly drop guard to disable raw mode BEFORE println
    drop(_guard);
    println!();

    if cancelled { None } else { Some(input) }
}
