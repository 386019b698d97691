//! Settings file persistence.
//!
//! One line of comma-separated fields at `~/.config/starpass/settings`.
//! Free-text fields are escaped with `|` so commas survive a round trip.

use std::env;
use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use super::Settings;

pub fn save(settings: &Settings) -> std::io::Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(get_path())?;

    file.write_all(encode(settings).as_bytes())?;
    Ok(())
}

pub fn load(settings: &mut Settings) -> std::io::Result<()> {
    let path = get_path();
    if !Path::new(&path).exists()
        && let Some(parent) = Path::new(&path).parent()
        && let Err(e) = std::fs::create_dir_all(parent)
    {
        eprintln!("Failed to create directory for settings file: {}", e);
        return Ok(());
    }

    let file = OpenOptions::new()
        .read(true)
        .create(true)
        .truncate(false)
        .write(true)
        .open(&path)?;

    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    if line.is_empty() {
        save(settings)?;
    } else if !decode(&line, settings) {
        // Malformed or stale format: rewrite with current defaults.
        save(settings)?;
    }

    Ok(())
}

fn encode(settings: &Settings) -> String {
    format!(
        "{},{},{},{},{},{},{},{},{}\n",
        settings.pass_length,
        settings.include_uppercase,
        settings.include_lowercase,
        settings.include_digits,
        settings.include_symbols,
        settings.number_of_passwords,
        settings.output_to_terminal,
        escape(&settings.output_file_path),
        escape(&settings.cli_command),
    )
}

/// Apply one encoded line onto `settings`. Returns false when the line does
/// not carry the expected field count; fields that fail to parse keep their
/// current value.
fn decode(line: &str, settings: &mut Settings) -> bool {
    let parts = split_escaped(line.trim());
    if parts.len() != 9 {
        return false;
    }

    settings.pass_length = parts[0].parse().unwrap_or(settings.pass_length);
    settings.include_uppercase = parts[1].parse().unwrap_or(settings.include_uppercase);
    settings.include_lowercase = parts[2].parse().unwrap_or(settings.include_lowercase);
    settings.include_digits = parts[3].parse().unwrap_or(settings.include_digits);
    settings.include_symbols = parts[4].parse().unwrap_or(settings.include_symbols);
    settings.number_of_passwords = parts[5].parse().unwrap_or(settings.number_of_passwords);
    settings.output_to_terminal = parts[6].parse().unwrap_or(settings.output_to_terminal);
    settings.output_file_path = parts[7].clone();
    settings.cli_command = parts[8].clone();
    true
}

#[inline]
fn get_path() -> String {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    format!("{}/.config/starpass/settings", home)
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '|' => out.push_str("||"),
            ',' => out.push_str("|,"),
            _ => out.push(c),
        }
    }
    out
}

fn split_escaped(line: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut escaped = false;

    for c in line.chars() {
        if escaped {
            current.push(c);
            escaped = false;
        } else if c == '|' {
            escaped = true;
        } else if c == ',' {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }

    parts.push(current);
    parts
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_round_trip() {
        let original = Settings::default();
        let mut decoded = Settings {
            pass_length: 99,
            include_symbols: false,
            ..Settings::default()
        };
        assert!(decode(&encode(&original), &mut decoded));
        assert_eq!(decoded, original);
    }

    #[test]
    fn free_text_fields_survive_commas_and_pipes() {
        let original = Settings {
            output_file_path: "/tmp/a,b|c.txt".to_string(),
            cli_command: "-l 32, --no-symbols".to_string(),
            ..Settings::default()
        };
        let mut decoded = Settings::default();
        assert!(decode(&encode(&original), &mut decoded));
        assert_eq!(decoded.output_file_path, "/tmp/a,b|c.txt");
        assert_eq!(decoded.cli_command, "-l 32, --no-symbols");
    }

    #[test]
    fn wrong_field_count_is_rejected_untouched() {
        let mut settings = Settings::default();
        let before = settings.clone();
        assert!(!decode("74,true,false\n", &mut settings));
        assert!(!decode("", &mut settings));
        assert_eq!(settings, before);
    }

    #[test]
    fn unparsable_fields_keep_their_current_value() {
        let mut settings = Settings::default();
        let line = "nonsense,true,true,maybe,true,2,true,,\n";
        assert!(decode(line, &mut settings));
        assert_eq!(settings.pass_length, 16);
        assert!(settings.include_digits);
        assert_eq!(settings.number_of_passwords, 2);
    }

    #[test]
    fn split_preserves_trailing_empty_fields() {
        assert_eq!(split_escaped("a,b,"), vec!["a", "b", ""]);
        assert_eq!(split_escaped("a|,b,c"), vec!["a,b", "c"]);
        assert_eq!(split_escaped("a||b"), vec!["a|b"]);
    }
}
