//! The per-cell kernel and the sequential reference step.
//!
//! Every function here reads only the source grid and writes only the
//! destination, so the interior rows of a step can be computed in any order
//! and on any number of workers.

use crate::{next_state, CellState, Grid, LifeError, Result};

#[inline]
fn count_neibs(cells: &[CellState], idx: usize, stride: usize) -> u8 {
    let (up, down) = (idx - stride, idx + stride);
    cells[up - 1] as u8
        + cells[up] as u8
        + cells[up + 1] as u8
        + cells[idx - 1] as u8
        + cells[idx + 1] as u8
        + cells[down - 1] as u8
        + cells[down] as u8
        + cells[down + 1] as u8
}

fn check_interior(src: &Grid, i: usize, j: usize) -> Result<()> {
    if (1..=src.rows()).contains(&i) && (1..=src.cols()).contains(&j) {
        Ok(())
    } else {
        Err(LifeError::IndexOutOfBounds {
            row: i,
            col: j,
            rows: src.rows(),
            cols: src.cols(),
        })
    }
}

pub(crate) fn check_shapes(src: &Grid, dst: &Grid) -> Result<()> {
    if src.same_shape(dst) {
        Ok(())
    } else {
        Err(LifeError::ShapeMismatch {
            src: src.shape(),
            dst: dst.shape(),
        })
    }
}

/// Number of alive cells in the Moore neighborhood of interior cell `(i, j)`.
pub fn live_neighbors(src: &Grid, i: usize, j: usize) -> Result<u8> {
    check_interior(src, i, j)?;
    Ok(count_neibs(src.cells(), i * src.stride() + j, src.stride()))
}

/// Next state of interior cell `(i, j)`.
pub fn update_cell(src: &Grid, i: usize, j: usize) -> Result<CellState> {
    let neibs = live_neighbors(src, i, j)?;
    Ok(next_state(src.get(i, j)?, neibs))
}

/// Compute interior row `i` of the next generation into `dst_row`, a full
/// physical row (`stride()` cells). Halo columns of `dst_row` are not touched.
///
/// Returns how many cells of the row changed state.
pub(crate) fn step_row(src: &Grid, i: usize, dst_row: &mut [CellState]) -> usize {
    let (cells, stride) = (src.cells(), src.stride());
    debug_assert_eq!(dst_row.len(), stride);
    let base = i * stride;
    let mut changed = 0;
    for (j, dst) in dst_row.iter_mut().enumerate().take(stride - 1).skip(1) {
        let idx = base + j;
        let next = next_state(cells[idx], count_neibs(cells, idx, stride));
        changed += (next != cells[idx]) as usize;
        *dst = next;
    }
    changed
}

/// Compute a contiguous band of physical rows starting at row `first_row`.
pub(crate) fn step_band(src: &Grid, first_row: usize, band: &mut [CellState]) -> usize {
    band.chunks_exact_mut(src.stride())
        .enumerate()
        .map(|(k, row)| step_row(src, first_row + k, row))
        .sum()
}

/// Apply the rule to every interior cell of `src`, writing into `dst`.
///
/// `dst`'s halo is left as it is. Returns the number of interior cells that
/// changed state.
pub fn step(src: &Grid, dst: &mut Grid) -> Result<usize> {
    check_shapes(src, dst)?;
    Ok(step_band(src, 1, dst.interior_band_mut()))
}
