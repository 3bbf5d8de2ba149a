use std::{fmt, num::NonZeroUsize, str::FromStr, thread};

use rayon::prelude::*;

use crate::{
    stencil::{check_shapes, step_band, step_row},
    CellState, Grid, Result,
};

/// How the cells of one generation are distributed among workers.
///
/// Every strategy writes only into disjoint rows of `dst` and only reads
/// `src`, so there is no locking inside a step. A call to [`Strategy::step`]
/// returns after every worker has finished, which is the single barrier
/// between consecutive generations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    /// One thread, rows in order.
    Sequential,
    /// Interior rows split into `threads` contiguous bands, one scoped
    /// thread per band.
    Scoped { threads: NonZeroUsize },
    /// One rayon task per row on the current rayon pool.
    #[default]
    Rayon,
}

impl Strategy {
    /// `Scoped` with one band per available core.
    pub fn scoped() -> Self {
        let threads = thread::available_parallelism().unwrap_or(NonZeroUsize::MIN);
        Self::Scoped { threads }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Scoped { .. } => "scoped",
            Self::Rayon => "rayon",
        }
    }

    /// Compute the next generation of `src` into `dst`.
    ///
    /// Returns the number of interior cells that changed state.
    pub fn step(&self, src: &Grid, dst: &mut Grid) -> Result<usize> {
        check_shapes(src, dst)?;
        let stride = src.stride();
        let band = dst.interior_band_mut();
        let changed = match *self {
            Self::Sequential => step_band(src, 1, band),
            Self::Scoped { threads } => step_scoped(src, band, threads.get()),
            Self::Rayon => band
                .par_chunks_mut(stride)
                .enumerate()
                .map(|(k, row)| step_row(src, k + 1, row))
                .sum(),
        };
        Ok(changed)
    }
}

fn step_scoped(src: &Grid, band: &mut [CellState], threads: usize) -> usize {
    let rows_per_band = src.rows().div_ceil(threads);
    thread::scope(|s| {
        let handles = band
            .chunks_mut(rows_per_band * src.stride())
            .enumerate()
            .map(|(b, part)| s.spawn(move || step_band(src, 1 + b * rows_per_band, part)))
            .collect::<Vec<_>>();
        handles
            .into_iter()
            .map(|h| h.join().unwrap_or_else(|e| std::panic::resume_unwind(e)))
            .sum()
    })
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scoped { threads } => write!(f, "scoped({})", threads),
            _ => f.write_str(self.name()),
        }
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "seq" | "sequential" => Ok(Self::Sequential),
            "scoped" => Ok(Self::scoped()),
            "rayon" => Ok(Self::Rayon),
            _ => Err(format!(
                "unknown strategy '{}', expected one of: seq, scoped, rayon",
                s
            )),
        }
    }
}
