use serde::{Deserialize, Serialize};

use crate::*;

/// Grid dimensions and mine count of a game, validated on construction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    pub fn new(size: Coord2, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(size, mines);
        config.validate()?;
        Ok(config)
    }

    /// Checks `0 < width`, `0 < height` and `0 < mines < width * height`.
    pub fn validate(&self) -> Result<()> {
        if self.size.0 == 0 || self.size.1 == 0 {
            return Err(ConfigIssue::ZeroSize.into());
        }
        if self.mines == 0 {
            return Err(ConfigIssue::NoMines.into());
        }
        if self.mines >= self.total_cells() {
            return Err(ConfigIssue::TooManyMines.into());
        }
        Ok(())
    }

    pub const fn width(&self) -> Coord {
        self.size.0
    }

    pub const fn height(&self) -> Coord {
        self.size.1
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }

    pub const fn contains(&self, (col, row): Coord2) -> bool {
        col < self.size.0 && row < self.size.1
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.contains(coords) {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds {
                col: coords.0,
                row: coords.1,
            })
        }
    }
}

impl Default for GameConfig {
    /// Classic layout: 10 columns, 15 rows, 15 mines.
    fn default() -> Self {
        Self::new_unchecked((10, 15), 15)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.safe_cells(), 135);
    }

    #[test]
    fn rejects_zero_dimensions() {
        let err = GameError::InvalidConfiguration(ConfigIssue::ZeroSize);
        assert_eq!(GameConfig::new((0, 5), 1), Err(err));
        assert_eq!(GameConfig::new((5, 0), 1), Err(err));
    }

    #[test]
    fn rejects_mine_counts_without_a_safe_cell() {
        assert_eq!(
            GameConfig::new((3, 3), 0),
            Err(GameError::InvalidConfiguration(ConfigIssue::NoMines))
        );
        assert_eq!(
            GameConfig::new((3, 3), 9),
            Err(GameError::InvalidConfiguration(ConfigIssue::TooManyMines))
        );
        assert!(GameConfig::new((3, 3), 8).is_ok());
        assert!(GameConfig::new((2, 1), 1).is_ok());
    }

    #[test]
    fn out_of_bounds_coords_are_reported() {
        let config = GameConfig::new((4, 3), 2).unwrap();
        assert_eq!(config.validate_coords((3, 2)), Ok((3, 2)));
        assert_eq!(
            config.validate_coords((4, 0)),
            Err(GameError::OutOfBounds { col: 4, row: 0 })
        );
        assert_eq!(
            config.validate_coords((0, 3)),
            Err(GameError::OutOfBounds { col: 0, row: 3 })
        );
    }
}
