use alloc::collections::{BTreeSet, VecDeque};
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - NotStarted -> InProgress
/// - NotStarted -> Won (first reveal opens every safe cell)
/// - InProgress -> Won
/// - InProgress -> Lost
/// - any -> NotStarted (reset)
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// No field yet, waiting for the first reveal
    NotStarted,
    InProgress,
    Won,
    Lost,
}

impl SessionState {
    pub const fn is_initial(self) -> bool {
        matches!(self, Self::NotStarted)
    }

    /// Indicates the game has ended and reveals have no effect
    pub const fn is_final(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::NotStarted
    }
}

/// What a reveal changed on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealResult {
    /// The session already ended, nothing changed.
    Terminal,
    /// The cell was already revealed.
    NoChange,
    /// A mine was revealed and the game is lost.
    Exploded {
        mine: Coord2,
        mine_coordinates: BTreeSet<Coord2>,
    },
    /// Safe cells revealed by this call in visiting order, origin first, each
    /// with its adjacent mine count.
    Revealed { cells: Vec<(Coord2, u8)> },
}

impl RevealResult {
    /// Whether this result could have caused an update to the board
    pub const fn has_update(&self) -> bool {
        matches!(self, Self::Exploded { .. } | Self::Revealed { .. })
    }
}

/// One game from the first reveal to a win or loss, restartable with [`reset`].
///
/// The mine field does not exist until the first reveal, which then becomes
/// the safe cell of the generated layout.
///
/// [`reset`]: GameSession::reset
#[derive(Clone, Debug)]
pub struct GameSession<G = RandomGenerator> {
    config: GameConfig,
    generator: G,
    field: Option<MineField>,
    remaining_safe: CellCount,
    state: SessionState,
}

impl GameSession<RandomGenerator> {
    /// Session with random layouts drawn from `seed`.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        Self::with_generator(config, RandomGenerator::new(seed))
    }
}

impl<G: MineFieldGenerator> GameSession<G> {
    pub fn with_generator(config: GameConfig, generator: G) -> Result<Self> {
        generator.check_config(config)?;
        Ok(Self {
            config,
            generator,
            field: None,
            remaining_safe: config.safe_cells(),
            state: SessionState::default(),
        })
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    /// Field of the current game, absent before the first reveal.
    pub fn field(&self) -> Option<&MineField> {
        self.field.as_ref()
    }

    pub fn remaining_safe_cells(&self) -> CellCount {
        self.remaining_safe
    }

    /// What the player sees at `coords`. Mines show only once the game is lost.
    pub fn cell_at(&self, coords: Coord2) -> Result<CellView> {
        let coords = self.config.validate_coords(coords)?;
        let Some(field) = &self.field else {
            return Ok(CellView::Hidden);
        };

        Ok(match (field[coords], field.cell_revealed(coords)) {
            (true, revealed) if revealed || self.state == SessionState::Lost => CellView::Mine,
            (false, true) => CellView::Revealed(field.adjacent_mine_count(coords)),
            _ => CellView::Hidden,
        })
    }

    /// Reveals a cell, opening the whole connected zero-count region around it.
    pub fn reveal_cell(&mut self, coords: Coord2) -> Result<RevealResult> {
        if self.state.is_final() {
            return Ok(RevealResult::Terminal);
        }

        let coords = self.config.validate_coords(coords)?;

        let field = match &mut self.field {
            Some(field) => field,
            empty => {
                let field = self.generator.generate(self.config, coords)?;
                log::debug!(
                    "Created {}x{} field with {} mines, safe cell {:?}",
                    field.width(),
                    field.height(),
                    field.mine_count(),
                    coords
                );
                self.state = SessionState::InProgress;
                empty.insert(field)
            }
        };

        if !field.mark_revealed(coords) {
            return Ok(RevealResult::NoChange);
        }

        if field[coords] {
            log::debug!("Mine revealed at {:?}, game lost", coords);
            self.state = SessionState::Lost;
            return Ok(RevealResult::Exploded {
                mine: coords,
                mine_coordinates: field.mine_coordinates(),
            });
        }

        // Cells are marked revealed when queued, so each is visited at most once.
        let mut cells = Vec::new();
        let mut to_visit = VecDeque::from([coords]);
        while let Some(visit_coords) = to_visit.pop_front() {
            let count = field.adjacent_mine_count(visit_coords);
            cells.push((visit_coords, count));
            self.remaining_safe -= 1;
            log::trace!("Revealed {:?}, adjacent mines: {}", visit_coords, count);

            if count == 0 {
                for neighbor in field.iter_neighbors(visit_coords) {
                    if field.mark_revealed(neighbor) {
                        to_visit.push_back(neighbor);
                    }
                }
            }
        }

        if self.remaining_safe == 0 {
            log::debug!("All safe cells revealed, game won");
            self.state = SessionState::Won;
        }

        Ok(RevealResult::Revealed { cells })
    }

    /// Discards the field so the next reveal starts a fresh game.
    pub fn reset(&mut self) {
        log::debug!("Resetting session from {:?}", self.state);
        self.field = None;
        self.remaining_safe = self.config.safe_cells();
        self.state = SessionState::NotStarted;
    }
}
