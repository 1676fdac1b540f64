use numguess_domain::DomainError;
use numguess_stats::StatsError;
use thiserror::Error;

use crate::GuessFeedback;

#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Input(#[from] DomainError),
    #[error("the game is already over")]
    Finished,
    #[error("{action} is not available on the {screen} screen")]
    WrongScreen {
        action: &'static str,
        screen: &'static str,
    },
    /// The game ended but its result was not persisted.
    #[error("game result could not be saved")]
    Unsaved {
        feedback: GuessFeedback,
        #[source]
        source: StatsError,
    },
}
