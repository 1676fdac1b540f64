pub mod difficulty;
pub mod error;
pub mod guess;
pub mod stats;

pub use crate::difficulty::Difficulty;
pub use crate::error::DomainError;
pub use crate::guess::{compare, Guess, Hint, GUESS_MAX, GUESS_MIN};
pub use crate::stats::StatisticsRecord;
