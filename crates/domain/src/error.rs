use thiserror::Error;

use crate::guess::{GUESS_MAX, GUESS_MIN};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("not an integer: {0:?}")]
    NotAnInteger(String),
    #[error("guess {value} is outside {min}..={max}", min = GUESS_MIN, max = GUESS_MAX)]
    OutOfRange { value: i64 },
    #[error("unknown difficulty: {0:?}")]
    UnknownDifficulty(String),
    #[error("validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Dialog title shown to the player for a rejected guess.
    pub fn title(&self) -> &'static str {
        match self {
            Self::NotAnInteger(_) => "Invalid Input",
            Self::OutOfRange { .. } => "Out of Bounds",
            Self::UnknownDifficulty(_) => "Unknown Difficulty",
            Self::Validation(_) => "Invalid Data",
        }
    }

    /// Player-facing explanation, phrased as a correction.
    pub fn user_message(&self) -> String {
        match self {
            Self::NotAnInteger(_) => "Please enter a valid integer.".to_string(),
            Self::OutOfRange { .. } => {
                format!("Please guess a number between {GUESS_MIN} and {GUESS_MAX}.")
            }
            Self::UnknownDifficulty(_) => "Please choose easy, medium or hard.".to_string(),
            Self::Validation(message) => message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_messages_match_dialogs() {
        let err = DomainError::NotAnInteger("abc".into());
        assert_eq!(err.title(), "Invalid Input");
        assert_eq!(err.user_message(), "Please enter a valid integer.");

        let err = DomainError::OutOfRange { value: 101 };
        assert_eq!(err.title(), "Out of Bounds");
        assert_eq!(
            err.user_message(),
            "Please guess a number between 1 and 100."
        );
        assert_eq!(err.to_string(), "guess 101 is outside 1..=100");
    }
}
