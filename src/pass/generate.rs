//! Password generation.

use rand::{CryptoRng, Rng};

use super::charset;
use crate::settings::Settings;

/// The configuration cannot produce a usable charset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// All four character classes are disabled.
    NoCharacterClassSelected,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NoCharacterClassSelected => {
                write!(f, "no character class selected")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Generate a single password using the thread-local CSPRNG.
pub fn generate(settings: &Settings) -> Result<String, ConfigError> {
    generate_with(&mut rand::rng(), settings)
}

/// Generate a single password from a caller-supplied RNG.
///
/// The `CryptoRng` bound keeps non-cryptographic generators out at the type
/// level. `random_range` re-samples instead of taking a remainder, so every
/// charset index is equally likely whatever the charset length.
pub fn generate_with<R: Rng + CryptoRng>(
    rng: &mut R,
    settings: &Settings,
) -> Result<String, ConfigError> {
    let chars = charset::build(settings);
    if chars.is_empty() {
        return Err(ConfigError::NoCharacterClassSelected);
    }

    let mut password = String::with_capacity(settings.pass_length);
    for _ in 0..settings.pass_length {
        password.push(chars[rng.random_range(0..chars.len())] as char);
    }
    Ok(password)
}

/// Batch fast path: fill `buf` with one password drawn from a pre-built
/// charset. `chars` must be non-empty. Caller owns the buffer and zeroizes
/// it between calls.
#[inline]
pub(crate) fn fill_from_charset<R: Rng + CryptoRng>(
    rng: &mut R,
    chars: &[u8],
    length: usize,
    buf: &mut Vec<u8>,
) {
    buf.clear();
    buf.extend((0..length).map(|_| chars[rng.random_range(0..chars.len())]));
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::charset::CharacterClass;

    fn settings(
        length: usize,
        upper: bool,
        lower: bool,
        digits: bool,
        symbols: bool,
    ) -> Settings {
        Settings {
            pass_length: length,
            include_uppercase: upper,
            include_lowercase: lower,
            include_digits: digits,
            include_symbols: symbols,
            ..Settings::default()
        }
    }

    fn assert_members_of(password: &str, classes: &[CharacterClass]) {
        for c in password.chars() {
            let byte = c as u8;
            assert!(
                classes.iter().any(|class| class.chars().contains(&byte)),
                "unexpected character {c:?} in {password:?}"
            );
        }
    }

    #[test]
    fn sixteen_chars_from_the_full_pool() {
        let password = generate(&settings(16, true, true, true, true)).unwrap();
        assert_eq!(password.len(), 16);
        assert_members_of(&password, &CharacterClass::ALL);
    }

    #[test]
    fn fails_when_every_class_is_disabled() {
        assert_eq!(
            generate(&settings(16, false, false, false, false)),
            Err(ConfigError::NoCharacterClassSelected)
        );
    }

    #[test]
    fn empty_selection_fails_regardless_of_length() {
        for length in [0, 1, 16, 64] {
            assert!(generate(&settings(length, false, false, false, false)).is_err());
        }
    }

    #[test]
    fn zero_length_yields_the_empty_string() {
        let password = generate(&settings(0, false, true, false, false)).unwrap();
        assert_eq!(password, "");
    }

    #[test]
    fn digits_only_stays_within_digits() {
        let password = generate(&settings(12, false, false, true, false)).unwrap();
        assert_eq!(password.len(), 12);
        assert!(password.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn membership_holds_over_many_trials() {
        let config = settings(32, true, false, false, true);
        let picked = [CharacterClass::Uppercase, CharacterClass::Symbol];
        for _ in 0..500 {
            let password = generate(&config).unwrap();
            assert_members_of(&password, &picked);
            assert!(!password.chars().any(|c| c.is_ascii_lowercase()));
            assert!(!password.chars().any(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn consecutive_calls_differ() {
        // 64 chars over an 88-char pool; a collision would take ~2^207 tries.
        let config = settings(64, true, true, true, true);
        let first = generate(&config).unwrap();
        let second = generate(&config).unwrap();
        assert_eq!(first.len(), 64);
        assert_eq!(second.len(), 64);
        assert_ne!(first, second);
    }

    #[test]
    fn accepts_a_caller_supplied_rng() {
        let mut rng = rand::rng();
        let password = generate_with(&mut rng, &settings(20, true, true, false, false)).unwrap();
        assert_eq!(password.len(), 20);
    }

    #[test]
    fn draws_are_uniform_over_the_digit_pool() {
        // One long digits-only password gives 100k independent draws over a
        // 10-symbol pool. Chi-square with 9 degrees of freedom stays under 60
        // except with probability on the order of 1e-8; a remainder-biased
        // sampler lands far above it.
        let password = generate(&settings(100_000, false, false, true, false)).unwrap();
        let mut counts = [0usize; 10];
        for c in password.bytes() {
            counts[(c - b'0') as usize] += 1;
        }

        let expected = 10_000.0_f64;
        let chi_square: f64 = counts
            .iter()
            .map(|&count| {
                let delta = count as f64 - expected;
                delta * delta / expected
            })
            .sum();
        assert!(chi_square < 60.0, "chi-square too high: {chi_square}");
    }

    #[test]
    fn error_text_is_stable() {
        assert_eq!(
            ConfigError::NoCharacterClassSelected.to_string(),
            "no character class selected"
        );
    }
}
