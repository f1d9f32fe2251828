//! Validation for values typed into entry fields.
//!
//! Bad input never reaches the counters: the caller shows
//! [`INVALID_PLACEHOLDER`] in place of the entry and nothing changes.

use crate::errors::LifelineError;
use crate::game::PlayerSlot;

/// Text shown in place of a rejected entry.
pub const INVALID_PLACEHOLDER: &str = "Invalid";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("'{input}' is not a whole number")]
    NotANumber { input: String },

    #[error("Starting total must be greater than zero, got {value}")]
    NotPositive { value: i64 },
}

impl LifelineError for InputError {
    fn error_code(&self) -> &'static str {
        match self {
            InputError::NotANumber { .. } => "INPUT_NOT_A_NUMBER",
            InputError::NotPositive { .. } => "INPUT_NOT_POSITIVE",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}

/// Parse a damage/heal/adjust amount.
pub fn parse_amount(text: &str) -> Result<i64, InputError> {
    let trimmed = text.trim();
    trimmed.parse::<i64>().map_err(|_| InputError::NotANumber {
        input: trimmed.to_string(),
    })
}

/// Parse a starting total, which must be greater than zero.
pub fn parse_starting_total(text: &str) -> Result<i64, InputError> {
    let value = parse_amount(text)?;
    if value <= 0 {
        return Err(InputError::NotPositive { value });
    }
    Ok(value)
}

/// Trim a player name; a blank name becomes the slot's default.
pub fn normalize_name(text: &str, slot: PlayerSlot) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        slot.default_name().to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(" 3000 "), Ok(3000));
        assert_eq!(parse_amount("-5"), Ok(-5));
        assert_eq!(
            parse_amount("12abc"),
            Err(InputError::NotANumber {
                input: "12abc".to_string()
            })
        );
        assert!(parse_amount("").is_err());
        assert!(parse_amount("1.5").is_err());
    }

    #[test]
    fn test_parse_starting_total() {
        assert_eq!(parse_starting_total("8000"), Ok(8000));
        assert_eq!(
            parse_starting_total("0"),
            Err(InputError::NotPositive { value: 0 })
        );
        assert!(parse_starting_total("-20").is_err());
        assert!(parse_starting_total("Invalid").is_err());
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("  Joey ", PlayerSlot::One), "Joey");
        assert_eq!(normalize_name("", PlayerSlot::Two), "Player 2");
    }

    #[test]
    fn test_input_error_codes() {
        let error = InputError::NotPositive { value: -1 };
        assert_eq!(error.error_code(), "INPUT_NOT_POSITIVE");
        assert!(error.is_user_error());
    }
}
