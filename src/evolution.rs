use std::time::Instant;

use crate::{Grid, NiceInt, Result, Strategy};

/// Double-buffered driver of successive generations.
///
/// Owns both buffers for its whole lifetime. `current` is the index of the
/// buffer holding the newest generation; the other one is overwritten by the
/// next step. Both halos are killed once on construction and are never
/// written afterwards.
pub struct Evolution {
    buffers: [Grid; 2],
    current: usize,
    generation: u64,
    last_changes: Option<usize>,
    total_changes: u64,
    strategy: Strategy,
    pool: Option<rayon::ThreadPool>,
}

impl Evolution {
    pub fn new(initial: Grid, strategy: Strategy) -> Self {
        let mut initial = initial;
        initial.seed_halo();
        let next = initial.clone();
        Self {
            buffers: [initial, next],
            current: 0,
            generation: 0,
            last_changes: None,
            total_changes: 0,
            strategy,
            pool: None,
        }
    }

    /// Run rayon steps on a dedicated pool of `threads` workers instead of
    /// the global one.
    pub fn with_thread_pool(mut self, threads: usize) -> Result<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("halo-life-{}", i))
            .build()?;
        self.pool = Some(pool);
        Ok(self)
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Number of steps performed so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Cells changed by the most recent step, `None` before the first one.
    pub fn last_changes(&self) -> Option<usize> {
        self.last_changes
    }

    /// Cells changed summed over all steps.
    pub fn total_changes(&self) -> u64 {
        self.total_changes
    }

    /// Buffer holding the newest generation.
    pub fn current(&self) -> &Grid {
        &self.buffers[self.current]
    }

    pub fn into_current(self) -> Grid {
        let [a, b] = self.buffers;
        if self.current == 0 {
            a
        } else {
            b
        }
    }

    /// Perform one step and return the number of changed cells.
    pub fn step(&mut self) -> Result<usize> {
        let (head, tail) = self.buffers.split_at_mut(1);
        let (src, dst) = if self.current == 0 {
            (&head[0], &mut tail[0])
        } else {
            (&tail[0], &mut head[0])
        };
        let changed = match &self.pool {
            Some(pool) => pool.install(|| self.strategy.step(src, dst))?,
            None => self.strategy.step(src, dst)?,
        };
        self.current ^= 1;
        self.generation += 1;
        self.last_changes = Some(changed);
        self.total_changes += changed as u64;
        log::trace!("generation {}: {} cells changed", self.generation, changed);
        Ok(changed)
    }

    /// Perform exactly `steps` steps. The change counter never cuts this short.
    pub fn advance(&mut self, steps: u64) -> Result<()> {
        let timer = Instant::now();
        for _ in 0..steps {
            self.step()?;
        }
        let (rows, cols) = self.current().shape();
        let elapsed = timer.elapsed();
        let updates = steps as f64 * rows as f64 * cols as f64;
        log::debug!(
            "advanced {} generations of {}x{} with {} in {:?} ({} cell updates/s)",
            steps,
            rows,
            cols,
            self.strategy,
            elapsed,
            NiceInt::from_f64(updates / elapsed.as_secs_f64().max(f64::MIN_POSITIVE)),
        );
        Ok(())
    }
}

/// Evolve `initial` for `iterations` generations and return the final grid.
///
/// `iterations == 0` returns `initial` as is (with its halo killed).
pub fn run(initial: Grid, iterations: u64, strategy: Strategy) -> Result<Grid> {
    let mut evolution = Evolution::new(initial, strategy);
    evolution.advance(iterations)?;
    Ok(evolution.into_current())
}
