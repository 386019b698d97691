//! CLI context - bundles settings, flags, and clipboard state.

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use super::{CliFlags, prompts};
use crate::pass;
use crate::settings::Settings;
use crate::tui::print_help;

/// Early exit - not an error, just done.
pub struct Done;

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub saved_settings: Settings,
    pub clipboard: Option<ClipboardContext>,
    pub flags: CliFlags,
    args: Vec<String>,
}

impl Context {
    /// Create a new context by parsing command-line arguments.
    /// Returns Err with the error message if parsing fails.
    pub fn new(args: Vec<String>) -> Result<Self, String> {
        let flags = super::parse(&args).map_err(|e| e.to_string())?;

        let saved_settings = Settings::load_from_file().unwrap_or_else(|e| {
            prompts::warn(&format!("Failed to load settings: {}", e));
            Settings::default()
        });

        let settings = if flags.saved {
            saved_settings.clone()
        } else {
            Settings {
                cli_command: saved_settings.cli_command.clone(),
                ..Default::default()
            }
        };

        Ok(Self {
            settings,
            saved_settings,
            clipboard: None,
            flags,
            args,
        })
    }

    /// Run CLI. Returns `Err(Done)` for early exits, `Ok(())` on completion.
    pub fn run(&mut self) -> Result<(), Done> {
        self.handle_info_flags()?;
        prompts::set_quiet(self.flags.quiet);
        self.apply_flags()?;
        self.generate_output();
        Ok(())
    }

    fn handle_info_flags(&self) -> Result<(), Done> {
        if self.flags.help {
            print_help();
            return Err(Done);
        }
        if self.flags.version {
            println!("starpass {}", env!("CARGO_PKG_VERSION"));
            return Err(Done);
        }
        Ok(())
    }

    /// Apply CLI flags to settings. Returns `Err(Done)` when the invocation
    /// only cleared the saved command.
    fn apply_flags(&mut self) -> Result<(), Done> {
        // -c persists every other argument as the startup command; run alone
        // it clears the saved command.
        if self.flags.command {
            let command = self.args[1..]
                .iter()
                .filter(|a| *a != "-c" && *a != "--command")
                .cloned()
                .collect::<Vec<_>>()
                .join(" ");
            self.saved_settings.cli_command = command.clone();
            if let Err(e) = self.saved_settings.save_to_file() {
                prompts::warn(&format!("Failed to save command: {}", e));
            }
            self.settings.cli_command = command;
            if self.settings.cli_command.is_empty() {
                return Err(Done);
            }
        }

        // Apply the saved command when this run brings no arguments of its own
        if !self.settings.cli_command.is_empty()
            && !self.flags.command
            && !self.flags.has_explicit_args()
        {
            let mut combined_args = vec![self.args[0].clone()];
            combined_args.extend(
                self.settings
                    .cli_command
                    .split_whitespace()
                    .map(String::from),
            );
            if let Ok(mut saved_flags) = super::parse(&combined_args) {
                // Replace flags so all flag handling below applies; -q from
                // this run still counts.
                saved_flags.quiet |= self.flags.quiet;
                self.flags = saved_flags;
                prompts::set_quiet(self.flags.quiet);
            }
        }

        // -d resets a -s load (and anything a saved command changed)
        if self.flags.default {
            self.settings = Settings {
                cli_command: self.settings.cli_command.clone(),
                ..Default::default()
            };
        }

        if let Some(len) = self.flags.length {
            self.settings.pass_length = len;
        }
        if let Some(num) = self.flags.number {
            self.settings.number_of_passwords = num;
        }

        if self.flags.no_upper {
            self.settings.include_uppercase = false;
        }
        if self.flags.no_lower {
            self.settings.include_lowercase = false;
        }
        if self.flags.no_digits {
            self.settings.include_digits = false;
        }
        if self.flags.no_symbols {
            self.settings.include_symbols = false;
        }

        if let Some(ref path) = self.flags.output {
            self.settings.output_file_path = normalize_output_path(path);
            self.settings.output_to_terminal = false;
        }

        if self.flags.clipboard {
            match ClipboardContext::new() {
                Ok(c) => {
                    self.clipboard = Some(c);
                    self.settings.to_clipboard = true;
                }
                Err(_) => {
                    if prompts::clipboard_fallback_prompt() {
                        self.settings.to_clipboard = false;
                    } else {
                        std::process::exit(0);
                    }
                }
            }
        }

        Ok(())
    }

    /// Generate passwords and hand them to the configured sink.
    fn generate_output(&mut self) {
        // Use explicit flag, else settings (which may come from saved command)
        let count = self
            .flags
            .number
            .unwrap_or(self.settings.number_of_passwords.max(1));

        let blob = match pass::generate_batch(&self.settings, count) {
            Ok(blob) => blob,
            Err(e) => {
                prompts::error(&format!("Cannot generate: {}", e));
                std::process::exit(2);
            }
        };

        if let Some(mut passwords) = blob {
            if let Some(ctx) = self.clipboard.as_mut() {
                match ctx.set_contents(passwords.clone()) {
                    Ok(_) => {
                        // Some clipboard backends only commit on a read-back
                        if let Ok(mut retrieved) = ctx.get_contents() {
                            retrieved.zeroize();
                        }
                        prompts::clipboard_copied();
                    }
                    Err(e) => prompts::clipboard_error(&e.to_string()),
                }
            }
            passwords.zeroize();
        } else if !self.settings.output_to_terminal && !self.settings.output_file_path.is_empty() {
            let full_path = std::fs::canonicalize(&self.settings.output_file_path)
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| self.settings.output_file_path.clone());
            prompts::passwords_written(count, &full_path);
        }
    }
}

fn normalize_output_path(path: &str) -> String {
    if path == "." {
        "starpass.txt".to_string()
    } else if path.ends_with('/') {
        format!("{}starpass.txt", path)
    } else if !path.ends_with(".txt") {
        format!("{}.txt", path)
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::normalize_output_path;

    #[test]
    fn bare_output_lands_in_the_working_directory() {
        assert_eq!(normalize_output_path("."), "starpass.txt");
    }

    #[test]
    fn directory_paths_get_the_default_file_name() {
        assert_eq!(normalize_output_path("vault/"), "vault/starpass.txt");
    }

    #[test]
    fn extension_is_forced_to_txt() {
        assert_eq!(normalize_output_path("pw"), "pw.txt");
        assert_eq!(normalize_output_path("pw.txt"), "pw.txt");
    }
}
