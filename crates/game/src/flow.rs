use numguess_domain::{Difficulty, Guess, StatisticsRecord};
use numguess_stats::StatisticsStore;
use tracing::{debug, info};

use crate::secret::SecretSource;
use crate::session::{GameSession, GameSummary, GuessFeedback};
use crate::GameError;

/// Screens the player moves through, in order.
#[derive(Debug, Clone)]
pub enum Screen {
    MainMenu,
    DifficultySelect,
    Guessing(GameSession),
    Result(GameSummary),
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::MainMenu => "main menu",
            Screen::DifficultySelect => "difficulty",
            Screen::Guessing(_) => "guessing",
            Screen::Result(_) => "result",
        }
    }
}

/// Drives MainMenu -> DifficultySelect -> Guessing -> Result -> MainMenu and
/// records every finished game in the injected store.
pub struct GameFlow {
    store: StatisticsStore,
    secrets: Box<dyn SecretSource>,
    screen: Screen,
}

impl GameFlow {
    pub fn new(store: StatisticsStore, secrets: Box<dyn SecretSource>) -> Self {
        Self {
            store,
            secrets,
            screen: Screen::MainMenu,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn statistics(&self) -> StatisticsRecord {
        self.store.snapshot()
    }

    pub fn start_game(&mut self) -> Result<(), GameError> {
        self.expect(matches!(self.screen, Screen::MainMenu), "start game")?;
        self.screen = Screen::DifficultySelect;
        Ok(())
    }

    pub fn choose_difficulty(&mut self, difficulty: Difficulty) -> Result<(), GameError> {
        self.expect(
            matches!(self.screen, Screen::DifficultySelect),
            "choose difficulty",
        )?;
        let secret = self.secrets.draw();
        debug!(%difficulty, "starting game");
        self.screen = Screen::Guessing(GameSession::new(difficulty, secret));
        Ok(())
    }

    /// Back out to the main menu. An unfinished game is discarded unrecorded.
    pub fn cancel(&mut self) -> Result<(), GameError> {
        self.expect(
            matches!(self.screen, Screen::DifficultySelect | Screen::Guessing(_)),
            "cancel",
        )?;
        if let Screen::Guessing(session) = &self.screen {
            info!(
                attempts_used = session.attempts_used(),
                "abandoned game, not recorded"
            );
        }
        self.screen = Screen::MainMenu;
        Ok(())
    }

    /// Validate raw input and play it. Invalid input leaves the game untouched.
    ///
    /// When the guess ends the game the flow moves to the result screen and the
    /// result is recorded; a save failure is returned after that transition,
    /// carrying the feedback of the final guess.
    pub fn submit_guess(&mut self, input: &str) -> Result<GuessFeedback, GameError> {
        let screen = self.screen.name();
        let Screen::Guessing(session) = &mut self.screen else {
            return Err(GameError::WrongScreen {
                action: "submit guess",
                screen,
            });
        };
        let guess = Guess::parse(input)?;
        let feedback = session.submit(guess)?;
        let Some(summary) = session.outcome() else {
            return Ok(feedback);
        };

        info!(
            won = summary.won,
            attempts_used = summary.attempts_used.get(),
            difficulty = %summary.difficulty,
            "game finished"
        );
        self.screen = Screen::Result(summary);
        self.store
            .record_result(summary.won, summary.attempts_used)
            .map_err(|source| GameError::Unsaved { feedback, source })?;
        Ok(feedback)
    }

    pub fn acknowledge(&mut self) -> Result<(), GameError> {
        self.expect(matches!(self.screen, Screen::Result(_)), "acknowledge")?;
        self.screen = Screen::MainMenu;
        Ok(())
    }

    fn expect(&self, allowed: bool, action: &'static str) -> Result<(), GameError> {
        if allowed {
            Ok(())
        } else {
            Err(GameError::WrongScreen {
                action,
                screen: self.screen.name(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use numguess_domain::{DomainError, Hint};

    use super::*;
    use crate::secret::FixedSecret;

    fn flow_in(dir: &tempfile::TempDir, secret: u32) -> GameFlow {
        let store = StatisticsStore::load(dir.path().join("stats.json")).unwrap();
        GameFlow::new(store, Box::new(FixedSecret(secret)))
    }

    #[test]
    fn full_winning_game_is_recorded_once() {
        let dir = tempfile::tempdir().unwrap();
        let mut flow = flow_in(&dir, 64);
        flow.start_game().unwrap();
        flow.choose_difficulty(Difficulty::Medium).unwrap();

        assert_eq!(
            flow.submit_guess("50").unwrap(),
            GuessFeedback::Hint {
                hint: Hint::TooLow,
                attempts_remaining: 6
            }
        );
        assert!(matches!(
            flow.submit_guess("64").unwrap(),
            GuessFeedback::Won { secret: 64, .. }
        ));
        assert!(matches!(flow.screen(), Screen::Result(summary) if summary.won));

        let stats = flow.statistics();
        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.total_attempts, 2);
        assert_eq!(stats.best_game, NonZeroU32::new(2));

        flow.acknowledge().unwrap();
        assert!(matches!(flow.screen(), Screen::MainMenu));

        let reloaded = StatisticsStore::load(dir.path().join("stats.json")).unwrap();
        assert_eq!(reloaded.snapshot(), stats);
    }

    #[test]
    fn losing_game_records_full_allowance() {
        let dir = tempfile::tempdir().unwrap();
        let mut flow = flow_in(&dir, 3);
        flow.start_game().unwrap();
        flow.choose_difficulty(Difficulty::Hard).unwrap();
        for _ in 0..4 {
            assert!(!flow.submit_guess("90").unwrap().is_final());
        }
        assert!(matches!(
            flow.submit_guess("90").unwrap(),
            GuessFeedback::Lost { secret: 3, .. }
        ));
        let stats = flow.statistics();
        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.games_won, 0);
        assert_eq!(stats.total_attempts, 5);
        assert_eq!(stats.best_game, None);
    }

    #[test]
    fn invalid_input_does_not_consume_attempts() {
        let dir = tempfile::tempdir().unwrap();
        let mut flow = flow_in(&dir, 10);
        flow.start_game().unwrap();
        flow.choose_difficulty(Difficulty::Easy).unwrap();

        assert!(matches!(
            flow.submit_guess("ten"),
            Err(GameError::Input(DomainError::NotAnInteger(_)))
        ));
        assert!(matches!(
            flow.submit_guess("101"),
            Err(GameError::Input(DomainError::OutOfRange { value: 101 }))
        ));
        match flow.screen() {
            Screen::Guessing(session) => assert_eq!(session.attempts_remaining(), 10),
            other => panic!("unexpected screen {other:?}"),
        }
    }

    #[test]
    fn cancel_discards_unfinished_game() {
        let dir = tempfile::tempdir().unwrap();
        let mut flow = flow_in(&dir, 10);
        flow.start_game().unwrap();
        flow.cancel().unwrap();
        flow.start_game().unwrap();
        flow.choose_difficulty(Difficulty::Easy).unwrap();
        flow.submit_guess("5").unwrap();
        flow.cancel().unwrap();
        assert!(matches!(flow.screen(), Screen::MainMenu));
        assert_eq!(flow.statistics(), StatisticsRecord::new());
        assert!(!dir.path().join("stats.json").exists());
    }

    #[test]
    fn actions_on_wrong_screen_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut flow = flow_in(&dir, 10);
        assert!(matches!(
            flow.submit_guess("10"),
            Err(GameError::WrongScreen { screen: "main menu", .. })
        ));
        assert!(flow.choose_difficulty(Difficulty::Easy).is_err());
        assert!(flow.acknowledge().is_err());
        assert!(flow.cancel().is_err());
        flow.start_game().unwrap();
        assert!(flow.start_game().is_err());
    }

    #[test]
    fn save_failure_still_reaches_result() {
        let dir = tempfile::tempdir().unwrap();
        let store = StatisticsStore::load(dir.path().join("gone").join("stats.json")).unwrap();
        let mut flow = GameFlow::new(store, Box::new(FixedSecret(7)));
        flow.start_game().unwrap();
        flow.choose_difficulty(Difficulty::Easy).unwrap();
        assert!(matches!(
            flow.submit_guess("7"),
            Err(GameError::Unsaved {
                feedback: GuessFeedback::Won { secret: 7, .. },
                ..
            })
        ));
        assert!(matches!(flow.screen(), Screen::Result(_)));
        assert_eq!(flow.statistics().games_won, 1);
    }

    #[test]
    fn unsaved_loss_keeps_last_hint() {
        let dir = tempfile::tempdir().unwrap();
        let store = StatisticsStore::load(dir.path().join("gone").join("stats.json")).unwrap();
        let mut flow = GameFlow::new(store, Box::new(FixedSecret(50)));
        flow.start_game().unwrap();
        flow.choose_difficulty(Difficulty::Hard).unwrap();
        for _ in 0..4 {
            flow.submit_guess("80").unwrap();
        }
        match flow.submit_guess("20") {
            Err(GameError::Unsaved {
                feedback: GuessFeedback::Lost { hint, secret, .. },
                source,
            }) => {
                assert_eq!(hint, Hint::TooLow);
                assert_eq!(secret, 50);
                assert!(matches!(source, numguess_stats::StatsError::Write { .. }));
            }
            other => panic!("unexpected result {other:?}"),
        }
        assert!(matches!(flow.screen(), Screen::Result(summary) if !summary.won));
        assert_eq!(flow.statistics().total_attempts, 5);
    }
}
