//! Character classes and charset assembly.

use crate::settings::Settings;

const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*()_+-=[]{}|;:,.<>?";

/// One of the four selectable character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digit,
    Symbol,
}

impl CharacterClass {
    /// Assembly order. The charset layout depends on it, so it never changes.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    /// The fixed character sequence of this class.
    pub fn chars(self) -> &'static [u8] {
        match self {
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Symbol => SYMBOLS,
        }
    }

    /// Whether the settings enable this class.
    pub fn enabled_in(self, settings: &Settings) -> bool {
        match self {
            CharacterClass::Uppercase => settings.include_uppercase,
            CharacterClass::Lowercase => settings.include_lowercase,
            CharacterClass::Digit => settings.include_digits,
            CharacterClass::Symbol => settings.include_symbols,
        }
    }
}

/// Build the character pool for the enabled classes, in assembly order.
pub fn build(settings: &Settings) -> Vec<u8> {
    let mut chars = Vec::new();
    for class in CharacterClass::ALL {
        if class.enabled_in(settings) {
            chars.extend_from_slice(class.chars());
        }
    }
    chars
}

/// Effective charset size without building it (for entropy display).
pub fn size(settings: &Settings) -> usize {
    CharacterClass::ALL
        .iter()
        .filter(|class| class.enabled_in(settings))
        .map(|class| class.chars().len())
        .sum()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(upper: bool, lower: bool, digits: bool, symbols: bool) -> Settings {
        Settings {
            include_uppercase: upper,
            include_lowercase: lower,
            include_digits: digits,
            include_symbols: symbols,
            ..Settings::default()
        }
    }

    #[test]
    fn class_sizes() {
        assert_eq!(CharacterClass::Uppercase.chars().len(), 26);
        assert_eq!(CharacterClass::Lowercase.chars().len(), 26);
        assert_eq!(CharacterClass::Digit.chars().len(), 10);
        assert_eq!(CharacterClass::Symbol.chars().len(), 26);
    }

    #[test]
    fn full_build_concatenates_in_assembly_order() {
        let chars = build(&settings(true, true, true, true));
        let mut expected = Vec::new();
        expected.extend_from_slice(UPPERCASE);
        expected.extend_from_slice(LOWERCASE);
        expected.extend_from_slice(DIGITS);
        expected.extend_from_slice(SYMBOLS);
        assert_eq!(chars, expected);
        assert_eq!(chars.len(), 88);
    }

    #[test]
    fn single_class_builds_match_their_sequences() {
        assert_eq!(build(&settings(true, false, false, false)), UPPERCASE);
        assert_eq!(build(&settings(false, true, false, false)), LOWERCASE);
        assert_eq!(build(&settings(false, false, true, false)), DIGITS);
        assert_eq!(build(&settings(false, false, false, true)), SYMBOLS);
    }

    #[test]
    fn order_is_independent_of_which_classes_are_enabled() {
        let chars = build(&settings(true, false, true, true));
        let mut expected = Vec::new();
        expected.extend_from_slice(UPPERCASE);
        expected.extend_from_slice(DIGITS);
        expected.extend_from_slice(SYMBOLS);
        assert_eq!(chars, expected);
    }

    #[test]
    fn build_is_deterministic_across_calls() {
        let config = settings(false, true, true, false);
        let first = build(&config);
        // Unrelated builds in between must not affect the result.
        let _ = build(&settings(true, true, true, true));
        let _ = build(&settings(false, false, false, false));
        assert_eq!(build(&config), first);
    }

    #[test]
    fn empty_selection_builds_empty_pool() {
        assert!(build(&settings(false, false, false, false)).is_empty());
        assert_eq!(size(&settings(false, false, false, false)), 0);
    }

    #[test]
    fn size_matches_build_length() {
        let combos = [
            (true, true, true, true),
            (true, false, false, false),
            (false, true, true, false),
            (true, false, true, true),
        ];
        for (u, l, d, s) in combos {
            let config = settings(u, l, d, s);
            assert_eq!(size(&config), build(&config).len());
        }
    }
}
