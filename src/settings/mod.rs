//! Generation and output settings.

mod file;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub pass_length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_digits: bool,
    pub include_symbols: bool,
    pub number_of_passwords: usize,
    pub output_file_path: String,
    pub output_to_terminal: bool,
    pub cli_command: String,
    /// Per-invocation, never persisted.
    pub to_clipboard: bool,
}

impl Settings {
    pub fn load_from_file() -> Result<Self, std::io::Error> {
        let mut settings = Settings::default();
        file::load(&mut settings)?;
        Ok(settings)
    }

    pub fn save_to_file(&self) -> Result<(), std::io::Error> {
        file::save(self)
    }

    pub fn has_saved_command() -> bool {
        Self::load_from_file()
            .map(|s| !s.cli_command.is_empty())
            .unwrap_or(false)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: 16,
            include_uppercase: true,
            include_lowercase: true,
            include_digits: true,
            include_symbols: true,
            number_of_passwords: 1,
            output_file_path: String::new(),
            output_to_terminal: true,
            cli_command: String::new(),
            to_clipboard: false,
        }
    }
}
