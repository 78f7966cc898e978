//! Guess parsing and validation
//!
//! Raw player input is text; this module turns it into a validated guess value
//! or a rejection reason.

use std::fmt;

/// Smallest value the secret target can take
pub const MIN_TARGET: u32 = 1;

/// Largest value the secret target can take
pub const MAX_TARGET: u32 = 100;

/// Error type for rejected guesses
///
/// All variants are recoverable: a rejected guess never touches session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    /// Input did not parse as a whole number
    InvalidFormat(String),
    /// Parsed value falls outside [`MIN_TARGET`]..=[`MAX_TARGET`]
    OutOfRange(i64),
    /// Value was already guessed this session
    DuplicateGuess(u32),
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat(raw) => {
                write!(f, "Please enter a whole number, got {raw:?}")
            }
            Self::OutOfRange(value) => {
                write!(
                    f,
                    "Please enter a number between {MIN_TARGET} and {MAX_TARGET}, got {value}"
                )
            }
            Self::DuplicateGuess(value) => write!(f, "You already guessed {value}"),
        }
    }
}

impl std::error::Error for GuessError {}

/// Parse a raw input string into a guess value
///
/// Validation order (first failing check wins):
/// 1. Input must parse as an integer, otherwise `InvalidFormat`
/// 2. Value must be in [1,100] inclusive, otherwise `OutOfRange`
///
/// Duplicate detection needs the session history and happens in
/// [`crate::session::GameSession::submit_guess`].
///
/// # Errors
/// Returns `GuessError::InvalidFormat` or `GuessError::OutOfRange` as above.
///
/// # Examples
/// ```
/// use hilo::core::{GuessError, parse_guess};
///
/// assert_eq!(parse_guess("42"), Ok(42));
/// assert_eq!(parse_guess(" 7 "), Ok(7));
///
/// assert!(matches!(parse_guess("abc"), Err(GuessError::InvalidFormat(_))));
/// assert_eq!(parse_guess("0"), Err(GuessError::OutOfRange(0)));
/// assert_eq!(parse_guess("101"), Err(GuessError::OutOfRange(101)));
/// ```
pub fn parse_guess(raw: &str) -> Result<u32, GuessError> {
    let trimmed = raw.trim();

    let value = match trimmed.parse::<i64>() {
        Ok(value) => value,
        Err(_) => {
            // A digit string too long for i64 is still an integer, just absurdly
            // far out of range. The exact value no longer matters for reporting.
            if is_integer_literal(trimmed) {
                let clamped = if trimmed.starts_with('-') {
                    i64::MIN
                } else {
                    i64::MAX
                };
                return Err(GuessError::OutOfRange(clamped));
            }
            return Err(GuessError::InvalidFormat(trimmed.to_string()));
        }
    };

    if !(i64::from(MIN_TARGET)..=i64::from(MAX_TARGET)).contains(&value) {
        return Err(GuessError::OutOfRange(value));
    }

    // Cast is safe: value is within [1,100]
    Ok(value as u32)
}

/// Check whether a string is an optionally-signed run of ASCII digits
fn is_integer_literal(s: &str) -> bool {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_guesses() {
        assert_eq!(parse_guess("1"), Ok(1));
        assert_eq!(parse_guess("50"), Ok(50));
        assert_eq!(parse_guess("100"), Ok(100));
    }

    #[test]
    fn parse_trims_whitespace() {
        assert_eq!(parse_guess("  42"), Ok(42));
        assert_eq!(parse_guess("42  "), Ok(42));
        assert_eq!(parse_guess("\t42\n"), Ok(42));
    }

    #[test]
    fn parse_accepts_explicit_sign() {
        assert_eq!(parse_guess("+42"), Ok(42));
    }

    #[test]
    fn parse_rejects_non_numeric() {
        assert!(matches!(
            parse_guess("abc"),
            Err(GuessError::InvalidFormat(_))
        ));
        assert!(matches!(parse_guess(""), Err(GuessError::InvalidFormat(_))));
        assert!(matches!(
            parse_guess("4.2"),
            Err(GuessError::InvalidFormat(_))
        ));
        assert!(matches!(
            parse_guess("42abc"),
            Err(GuessError::InvalidFormat(_))
        ));
    }

    #[test]
    fn parse_rejects_out_of_range() {
        assert_eq!(parse_guess("0"), Err(GuessError::OutOfRange(0)));
        assert_eq!(parse_guess("101"), Err(GuessError::OutOfRange(101)));
        assert_eq!(parse_guess("-5"), Err(GuessError::OutOfRange(-5)));
    }

    #[test]
    fn parse_huge_digit_string_is_out_of_range() {
        // Does not fit in i64, but it is still an integer
        assert!(matches!(
            parse_guess("99999999999999999999999"),
            Err(GuessError::OutOfRange(_))
        ));
        assert!(matches!(
            parse_guess("-99999999999999999999999"),
            Err(GuessError::OutOfRange(_))
        ));
    }

    #[test]
    fn error_messages_name_the_problem() {
        let err = parse_guess("abc").unwrap_err();
        assert!(err.to_string().contains("whole number"));

        let err = parse_guess("200").unwrap_err();
        assert!(err.to_string().contains("between 1 and 100"));
        assert!(err.to_string().contains("200"));
    }
}
