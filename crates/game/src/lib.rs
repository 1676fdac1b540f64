pub mod error;
pub mod flow;
pub mod secret;
pub mod session;

pub use error::GameError;
pub use flow::{GameFlow, Screen};
pub use secret::{FixedSecret, RandomSecret, SecretSource};
pub use session::{GameSession, GameSummary, GuessFeedback};
