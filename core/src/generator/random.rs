use alloc::vec::Vec;
use ndarray::Array2;
use rand::prelude::*;
use rand::rngs::SmallRng;

use super::*;

/// Uniformly random placement driven by a seeded [`SmallRng`].
///
/// One generator keeps a single random stream, so every game it produces
/// gets a different layout while the whole sequence stays reproducible from
/// the seed.
#[derive(Clone, Debug)]
pub struct RandomGenerator {
    rng: SmallRng,
}

impl RandomGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl MineFieldGenerator for RandomGenerator {
    fn generate(&mut self, config: GameConfig, safe: Coord2) -> Result<MineField> {
        MineField::create(config, safe, &mut self.rng)
    }
}

/// Picks `config.mines` distinct cells other than `safe`.
///
/// Sparse boards use rejection sampling. Once mines would take more than half
/// of the candidate cells, the candidates are listed explicitly and a partial
/// shuffle selects the mines, so the work stays bounded as the mine count
/// approaches `total - 1`.
///
/// Expects a validated config and an in-bounds `safe`.
pub(crate) fn place_mines(config: GameConfig, safe: Coord2, rng: &mut SmallRng) -> Array2<bool> {
    let mut mines: Array2<bool> = Array2::default(config.size.to_nd_index());
    let candidates = config.total_cells() - 1;

    if config.mines.saturating_mul(2) <= candidates {
        log::debug!(
            "Placing {} mines by rejection sampling over {} cells",
            config.mines,
            candidates
        );
        let mut placed = 0;
        let mut rejected = 0u32;
        while placed < config.mines {
            let coords = (
                rng.random_range(0..config.width()),
                rng.random_range(0..config.height()),
            );
            let cell = &mut mines[coords.to_nd_index()];
            if coords == safe || *cell {
                rejected += 1;
                continue;
            }
            *cell = true;
            placed += 1;
        }
        log::trace!("Rejected {} samples", rejected);
    } else {
        log::debug!(
            "Placing {} mines by shuffling {} candidate cells",
            config.mines,
            candidates
        );
        let mut cells: Vec<Coord2> = (0..config.height())
            .flat_map(|y| (0..config.width()).map(move |x| (x, y)))
            .filter(|&coords| coords != safe)
            .collect();
        let (chosen, _) = cells.partial_shuffle(rng, usize::from(config.mines));
        for &coords in chosen.iter() {
            mines[coords.to_nd_index()] = true;
        }
    }

    mines
}
