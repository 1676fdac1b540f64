use std::num::NonZeroU32;

use numguess_domain::{compare, Difficulty, Guess, Hint};

use crate::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessFeedback {
    /// Wrong guess, the game goes on.
    Hint { hint: Hint, attempts_remaining: u32 },
    Won { secret: u32, attempts_used: NonZeroU32 },
    /// Wrong guess on the final attempt.
    Lost {
        hint: Hint,
        secret: u32,
        attempts_used: NonZeroU32,
    },
}

impl GuessFeedback {
    pub fn is_final(&self) -> bool {
        !matches!(self, GuessFeedback::Hint { .. })
    }
}

/// How a finished game ended, kept for the result screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSummary {
    pub difficulty: Difficulty,
    pub won: bool,
    pub secret: u32,
    pub attempts_used: NonZeroU32,
}

impl GameSummary {
    pub fn title(&self) -> &'static str {
        if self.won {
            "Congratulations!"
        } else {
            "Game Over"
        }
    }

    pub fn message(&self) -> String {
        if self.won {
            format!("You guessed the number {} correctly!", self.secret)
        } else {
            format!(
                "You've run out of attempts! The number was {}.",
                self.secret
            )
        }
    }
}

/// A single game: one secret, a fixed attempt allowance.
#[derive(Debug, Clone)]
pub struct GameSession {
    difficulty: Difficulty,
    secret: u32,
    attempts_remaining: u32,
    outcome: Option<GameSummary>,
}

impl GameSession {
    pub fn new(difficulty: Difficulty, secret: u32) -> Self {
        Self {
            difficulty,
            secret,
            attempts_remaining: difficulty.attempts(),
            outcome: None,
        }
    }

    pub fn attempts_allowed(&self) -> u32 {
        self.difficulty.attempts()
    }

    pub fn attempts_remaining(&self) -> u32 {
        self.attempts_remaining
    }

    pub fn attempts_used(&self) -> u32 {
        self.attempts_allowed() - self.attempts_remaining
    }

    pub fn outcome(&self) -> Option<GameSummary> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Prompt shown above the input field.
    pub fn prompt(&self) -> String {
        if self.attempts_used() == 0 {
            format!(
                "You have {} attempts to guess the number between {} and {}",
                self.attempts_remaining,
                numguess_domain::GUESS_MIN,
                numguess_domain::GUESS_MAX
            )
        } else {
            format!(
                "You have {} attempts left. Try again!",
                self.attempts_remaining
            )
        }
    }

    pub fn submit(&mut self, guess: Guess) -> Result<GuessFeedback, GameError> {
        if self.is_over() {
            return Err(GameError::Finished);
        }
        self.attempts_remaining -= 1;
        // attempts_used is at least 1 after the decrement above
        let attempts_used = NonZeroU32::new(self.attempts_used()).ok_or(GameError::Finished)?;

        let feedback = match compare(guess, self.secret) {
            None => GuessFeedback::Won {
                secret: self.secret,
                attempts_used,
            },
            Some(hint) if self.attempts_remaining == 0 => GuessFeedback::Lost {
                hint,
                secret: self.secret,
                attempts_used,
            },
            Some(hint) => GuessFeedback::Hint {
                hint,
                attempts_remaining: self.attempts_remaining,
            },
        };

        if feedback.is_final() {
            self.outcome = Some(GameSummary {
                difficulty: self.difficulty,
                won: matches!(feedback, GuessFeedback::Won { .. }),
                secret: self.secret,
                attempts_used,
            });
        }
        Ok(feedback)
    }
}
