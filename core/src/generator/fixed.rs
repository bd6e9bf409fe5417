use alloc::vec::Vec;

use super::*;

/// Replays the same hand-placed mines for every game.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedGenerator {
    mines: Vec<Coord2>,
}

impl FixedGenerator {
    pub fn new(mines: impl Into<Vec<Coord2>>) -> Self {
        Self {
            mines: mines.into(),
        }
    }

    pub fn mines(&self) -> &[Coord2] {
        &self.mines
    }
}

impl FixedGenerator {
    fn layout(&self, config: GameConfig) -> Result<MineField> {
        let field = MineField::from_mine_coords(config.size, &self.mines)?;
        if field.mine_count() != config.mines {
            log::debug!(
                "Fixed layout has {} mines, configured for {}",
                field.mine_count(),
                config.mines
            );
            return Err(ConfigIssue::MineCountMismatch.into());
        }
        Ok(field)
    }
}

impl MineFieldGenerator for FixedGenerator {
    fn generate(&mut self, config: GameConfig, safe: Coord2) -> Result<MineField> {
        let field = self.layout(config)?;
        if field[config.validate_coords(safe)?] {
            return Err(ConfigIssue::MineOnSafeCell.into());
        }
        Ok(field)
    }

    fn check_config(&self, config: GameConfig) -> Result<()> {
        config.validate()?;
        self.layout(config).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_layout() {
        let mut generator = FixedGenerator::new([(1, 1), (2, 0)]);
        let config = GameConfig::new((3, 3), 2).unwrap();

        let field = generator.generate(config, (0, 2)).unwrap();

        assert_eq!(field.mine_coordinates().into_iter().collect::<Vec<_>>(), [(1, 1), (2, 0)]);
        assert_eq!(generator.generate(config, (0, 2)), Ok(field));
    }

    #[test]
    fn refuses_mine_on_safe_cell() {
        let mut generator = FixedGenerator::new([(1, 1)]);
        let config = GameConfig::new((3, 3), 1).unwrap();

        assert_eq!(
            generator.generate(config, (1, 1)),
            Err(GameError::InvalidConfiguration(ConfigIssue::MineOnSafeCell))
        );
    }

    #[test]
    fn check_config_validates_layout_up_front() {
        let generator = FixedGenerator::new([(1, 1), (3, 0)]);

        assert_eq!(generator.check_config(GameConfig::new((4, 2), 2).unwrap()), Ok(()));
        assert_eq!(
            generator.check_config(GameConfig::new((3, 3), 2).unwrap()),
            Err(GameError::OutOfBounds { col: 3, row: 0 })
        );
        assert_eq!(
            generator.check_config(GameConfig::new((4, 2), 3).unwrap()),
            Err(GameError::InvalidConfiguration(ConfigIssue::MineCountMismatch))
        );
    }

    #[test]
    fn refuses_count_mismatch() {
        let mut generator = FixedGenerator::new([(1, 1)]);
        let config = GameConfig::new((3, 3), 2).unwrap();

        assert_eq!(
            generator.generate(config, (0, 0)),
            Err(GameError::InvalidConfiguration(ConfigIssue::MineCountMismatch))
        );
    }
}
