use numguess_domain::{GUESS_MAX, GUESS_MIN};
use rand::RngExt;

/// Supplies the number the player has to find.
pub trait SecretSource {
    /// Returns a value in `GUESS_MIN..=GUESS_MAX`.
    fn draw(&mut self) -> u32;
}

/// Uniform draw from the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomSecret;

impl SecretSource for RandomSecret {
    fn draw(&mut self) -> u32 {
        rand::rng().random_range(GUESS_MIN..=GUESS_MAX)
    }
}

/// Always the same number; handy for scripted play.
#[derive(Debug, Clone, Copy)]
pub struct FixedSecret(pub u32);

impl SecretSource for FixedSecret {
    fn draw(&mut self) -> u32 {
        self.0.clamp(GUESS_MIN, GUESS_MAX)
    }
}
