use crate::*;
pub use fixed::*;
pub use random::*;
pub(crate) use random::place_mines;

mod fixed;
mod random;

/// Source of the mine layout for a session, consulted once per game on the first reveal.
pub trait MineFieldGenerator {
    /// Builds a field for `config` that has no mine at `safe`.
    fn generate(&mut self, config: GameConfig, safe: Coord2) -> Result<MineField>;

    /// Rejects configs this generator can never satisfy, checked when a session is created.
    fn check_config(&self, config: GameConfig) -> Result<()> {
        config.validate()
    }
}
