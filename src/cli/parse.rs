use super::CliFlags;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    InvalidNumber(String),
    MissingValue(&'static str),
    UnknownArg(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidNumber(s) => write!(f, "Invalid number: {}", s),
            ParseError::MissingValue(flag) => write!(f, "Missing value for {}", flag),
            ParseError::UnknownArg(s) => write!(f, "Unknown argument: {}", s),
        }
    }
}

/// Parse argv (args[0] is the binary name).
pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "-s" | "--saved" => flags.saved = true,
            "-d" | "--default" => flags.default = true,
            "-c" | "--command" => flags.command = true,
            "--no-upper" => flags.no_upper = true,
            "--no-lower" => flags.no_lower = true,
            "--no-digits" => flags.no_digits = true,
            "--no-symbols" => flags.no_symbols = true,
            "-l" | "--length" => {
                i += 1;
                flags.length = Some(parse_number(args, i, "--length")?);
            }
            "-n" | "--number" => {
                i += 1;
                flags.number = Some(parse_number(args, i, "--number")?);
            }
            "-o" | "--output" => {
                // Path is optional; a following flag means none was given
                if i + 1 < args.len() && !args[i + 1].starts_with('-') {
                    i += 1;
                    flags.output = Some(args[i].clone());
                } else {
                    flags.output = Some(".".to_string());
                }
            }
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

fn parse_number(args: &[String], i: usize, flag: &'static str) -> Result<usize, ParseError> {
    let Some(value) = args.get(i) else {
        return Err(ParseError::MissingValue(flag));
    };
    value
        .parse()
        .map_err(|_| ParseError::InvalidNumber(value.clone()))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        std::iter::once("starpass")
            .chain(args.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn short_length_and_count() {
        let flags = parse(&argv(&["-l", "32", "-n", "5"])).unwrap();
        assert_eq!(flags.length, Some(32));
        assert_eq!(flags.number, Some(5));
    }

    #[test]
    fn long_forms_match_short_forms() {
        let flags = parse(&argv(&["--length", "12", "--board", "--quiet"])).unwrap();
        assert_eq!(flags.length, Some(12));
        assert!(flags.clipboard);
        assert!(flags.quiet);
    }

    #[test]
    fn class_exclusions() {
        let flags =
            parse(&argv(&["--no-upper", "--no-lower", "--no-digits", "--no-symbols"])).unwrap();
        assert!(flags.no_upper && flags.no_lower && flags.no_digits && flags.no_symbols);
    }

    #[test]
    fn output_takes_an_optional_path() {
        let bare = parse(&argv(&["-o"])).unwrap();
        assert_eq!(bare.output.as_deref(), Some("."));

        let flag_follows = parse(&argv(&["-o", "-b"])).unwrap();
        assert_eq!(flag_follows.output.as_deref(), Some("."));
        assert!(flag_follows.clipboard);

        let with_path = parse(&argv(&["-o", "vault/pw.txt"])).unwrap();
        assert_eq!(with_path.output.as_deref(), Some("vault/pw.txt"));
    }

    #[test]
    fn unknown_argument_is_rejected() {
        assert_eq!(
            parse(&argv(&["--wat"])),
            Err(ParseError::UnknownArg("--wat".to_string()))
        );
    }

    #[test]
    fn non_numeric_length_is_rejected() {
        assert_eq!(
            parse(&argv(&["-l", "lots"])),
            Err(ParseError::InvalidNumber("lots".to_string()))
        );
    }

    #[test]
    fn trailing_value_flag_is_rejected() {
        assert_eq!(
            parse(&argv(&["-n"])),
            Err(ParseError::MissingValue("--number"))
        );
    }

    #[test]
    fn bare_invocation_parses_clean() {
        let flags = parse(&argv(&[])).unwrap();
        assert!(!flags.has_explicit_args());
        assert!(!flags.help);
    }
}
