#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub clipboard: bool,
    pub saved: bool,
    pub default: bool,
    pub command: bool,
    pub quiet: bool,
    pub no_upper: bool,
    pub no_lower: bool,
    pub no_digits: bool,
    pub no_symbols: bool,
    pub length: Option<usize>,
    pub number: Option<usize>,
    pub output: Option<String>,
}

impl CliFlags {
    /// True when the invocation carries its own generation arguments, in
    /// which case the saved command is not applied.
    pub fn has_explicit_args(&self) -> bool {
        self.length.is_some()
            || self.number.is_some()
            || self.saved
            || self.default
            || self.no_upper
            || self.no_lower
            || self.no_digits
            || self.no_symbols
            || self.clipboard
            || self.output.is_some()
    }
}
