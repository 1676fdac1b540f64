use std::cmp::Ordering;
use std::num::IntErrorKind;

use crate::DomainError;

pub const GUESS_MIN: u32 = 1;
pub const GUESS_MAX: u32 = 100;

/// A guess that has already been checked against the playable range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Guess(u32);

impl Guess {
    pub fn new(value: i64) -> Result<Self, DomainError> {
        if value < GUESS_MIN as i64 || value > GUESS_MAX as i64 {
            return Err(DomainError::OutOfRange { value });
        }
        Ok(Self(value as u32))
    }

    /// Parse raw text from an input field.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let trimmed = input.trim();
        let value = trimmed.parse::<i64>().map_err(|err| match err.kind() {
            // Still an integer, just far outside the range.
            IntErrorKind::PosOverflow => DomainError::OutOfRange { value: i64::MAX },
            IntErrorKind::NegOverflow => DomainError::OutOfRange { value: i64::MIN },
            _ => DomainError::NotAnInteger(trimmed.to_string()),
        })?;
        Self::new(value)
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hint {
    TooLow,
    TooHigh,
}

impl Hint {
    pub fn message(self) -> &'static str {
        match self {
            Hint::TooLow => "Too low!",
            Hint::TooHigh => "Too high!",
        }
    }
}

/// `None` means the guess hit the secret.
pub fn compare(guess: Guess, secret: u32) -> Option<Hint> {
    match guess.value().cmp(&secret) {
        Ordering::Less => Some(Hint::TooLow),
        Ordering::Greater => Some(Hint::TooHigh),
        Ordering::Equal => None,
    }
}
