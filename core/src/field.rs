use alloc::collections::BTreeSet;
use core::ops::Index;
use ndarray::Array2;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

use crate::*;

/// Mine layout of one game together with the set of revealed cells.
///
/// The layout is fixed at construction and never changes afterwards, only
/// the revealed cells grow as the game progresses.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MineFieldParts")]
pub struct MineField {
    size: Coord2,
    mine_mask: Array2<bool>,
    revealed: Array2<bool>,
    mine_count: CellCount,
    revealed_count: CellCount,
}

impl MineField {
    /// Places `config.mines` mines uniformly at random, never on `safe`.
    pub fn create(config: GameConfig, safe: Coord2, rng: &mut SmallRng) -> Result<Self> {
        config.validate()?;
        let safe = config.validate_coords(safe)?;
        let mine_mask = crate::generator::place_mines(config, safe, rng);
        Ok(Self::from_mine_mask(config.size, mine_mask, config.mines))
    }

    /// Builds a field from a known set of mines.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(ConfigIssue::ZeroSize.into());
        }
        let bounds = GameConfig::new_unchecked(size, 0);
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in mine_coords {
            let coords = bounds.validate_coords(coords)?;
            let cell = &mut mine_mask[coords.to_nd_index()];
            if *cell {
                return Err(ConfigIssue::DuplicateMine.into());
            }
            *cell = true;
        }

        let mine_count = CellCount::try_from(mine_coords.len())
            .map_err(|_| GameError::from(ConfigIssue::TooManyMines))?;
        GameConfig::new(size, mine_count)?;
        Ok(Self::from_mine_mask(size, mine_mask, mine_count))
    }

    fn from_mine_mask(size: Coord2, mine_mask: Array2<bool>, mine_count: CellCount) -> Self {
        Self {
            size,
            mine_mask,
            revealed: Array2::default(size.to_nd_index()),
            mine_count,
            revealed_count: 0,
        }
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.size, self.mine_count)
    }

    pub fn size(&self) -> Coord2 {
        self.size
    }

    pub fn width(&self) -> Coord {
        self.size.0
    }

    pub fn height(&self) -> Coord {
        self.size.1
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mine_count)
    }

    /// Number of revealed cells, including a detonated mine.
    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        self.game_config().validate_coords(coords)
    }

    pub fn is_mine(&self, coords: Coord2) -> Result<bool> {
        let coords = self.validate_coords(coords)?;
        Ok(self[coords])
    }

    pub fn is_revealed(&self, coords: Coord2) -> Result<bool> {
        let coords = self.validate_coords(coords)?;
        Ok(self.revealed[coords.to_nd_index()])
    }

    /// Counts mines among the in-bounds neighbors, the cell itself excluded.
    pub fn count_adjacent_mines(&self, coords: Coord2) -> Result<u8> {
        let coords = self.validate_coords(coords)?;
        Ok(self.adjacent_mine_count(coords))
    }

    /// All mined coordinates, ordered by `(col, row)`.
    pub fn mine_coordinates(&self) -> BTreeSet<Coord2> {
        self.mine_mask
            .indexed_iter()
            .filter(|&(_, &is_mine)| is_mine)
            .filter_map(|((x, y), _)| Some((Coord::try_from(x).ok()?, Coord::try_from(y).ok()?)))
            .collect()
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.mine_mask.iter_neighbors(coords)
    }

    pub(crate) fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.iter_neighbors(coords)
            .filter(|&pos| self[pos])
            .fold(0, |count, _| count + 1)
    }

    pub(crate) fn cell_revealed(&self, coords: Coord2) -> bool {
        self.revealed[coords.to_nd_index()]
    }

    /// Marks a cell revealed, returning `false` if it already was.
    pub(crate) fn mark_revealed(&mut self, coords: Coord2) -> bool {
        let cell = &mut self.revealed[coords.to_nd_index()];
        if *cell {
            return false;
        }
        *cell = true;
        self.revealed_count += 1;
        true
    }
}

/// Deserialized form of a [`MineField`], checked before use.
#[derive(Deserialize)]
struct MineFieldParts {
    size: Coord2,
    mine_mask: Array2<bool>,
    revealed: Array2<bool>,
    mine_count: CellCount,
}

impl TryFrom<MineFieldParts> for MineField {
    type Error = GameError;

    fn try_from(parts: MineFieldParts) -> Result<Self> {
        GameConfig::new(parts.size, parts.mine_count)?;

        let dim = (usize::from(parts.size.0), usize::from(parts.size.1));
        if parts.mine_mask.dim() != dim || parts.revealed.dim() != dim {
            return Err(ConfigIssue::InvalidBoardShape.into());
        }

        let count_set = |mask: &Array2<bool>| {
            CellCount::try_from(mask.iter().filter(|&&set| set).count())
                .map_err(|_| GameError::from(ConfigIssue::InvalidBoardShape))
        };
        if count_set(&parts.mine_mask)? != parts.mine_count {
            return Err(ConfigIssue::MineCountMismatch.into());
        }

        Ok(Self {
            size: parts.size,
            revealed_count: count_set(&parts.revealed)?,
            mine_mask: parts.mine_mask,
            revealed: parts.revealed,
            mine_count: parts.mine_count,
        })
    }
}

impl Index<Coord2> for MineField {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}
