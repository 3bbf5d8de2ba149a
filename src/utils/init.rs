use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{CellState, Grid, Result};

pub const DEFAULT_SEED: u64 = 54321;
pub const DEFAULT_FILL_RATE: f64 = 0.5;

/// Seeds the interior of a grid with random cells.
///
/// Interior row `i` draws from its own generator seeded with `seed | i`, so
/// the content of a row depends only on the seed and the row number.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Initializer {
    seed: u64,
    fill_rate: f64,
}

impl Default for Initializer {
    fn default() -> Self {
        Self::new(DEFAULT_SEED, DEFAULT_FILL_RATE)
    }
}

impl Initializer {
    /// `fill_rate` - probability of a cell being alive
    pub fn new(seed: u64, fill_rate: f64) -> Self {
        Self { seed, fill_rate }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn fill_rate(&self) -> f64 {
        self.fill_rate
    }

    /// Overwrite every interior cell of `grid`; the halo is killed.
    pub fn fill(&self, grid: &mut Grid) {
        let cols = grid.cols();
        for i in 1..=grid.rows() {
            let mut rng = ChaCha8Rng::seed_from_u64(self.seed | i as u64);
            for cell in grid.interior_row_mut(i)[1..=cols].iter_mut() {
                *cell = CellState::from(rng.gen::<f64>() < self.fill_rate);
            }
        }
        grid.seed_halo();
    }

    pub fn random_grid(&self, rows: usize, cols: usize) -> Result<Grid> {
        let mut grid = Grid::new(rows, cols)?;
        self.fill(&mut grid);
        Ok(grid)
    }
}
