use crate::{LifeError, Result};

/// State of a single cell.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        self == Self::Alive
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive {
            Self::Alive
        } else {
            Self::Dead
        }
    }
}

/// Rectangular field of `rows x cols` cells surrounded by a one-cell halo.
///
/// Cells are stored row-major in a flat buffer of `(rows + 2) x (cols + 2)`
/// elements. Row `0`, row `rows + 1`, column `0` and column `cols + 1` form
/// the halo: they are always dead and are never written by the stencil, so
/// the neighbor sum of an interior cell needs no edge handling.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<CellState>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Create a blank grid with `rows x cols` interior cells.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let size = rows
            .checked_add(2)
            .zip(cols.checked_add(2))
            .and_then(|(h, w)| h.checked_mul(w))
            .filter(|_| rows > 0 && cols > 0)
            .ok_or(LifeError::InvalidDimension { rows, cols })?;
        Ok(Self {
            cells: vec![CellState::Dead; size],
            rows,
            cols,
        })
    }

    /// Create a blank `side x side` grid.
    pub fn square(side: usize) -> Result<Self> {
        Self::new(side, side)
    }

    /// Create a grid from row-major interior states (halo excluded).
    pub fn from_interior(rows: usize, cols: usize, states: &[CellState]) -> Result<Self> {
        let mut grid = Self::new(rows, cols)?;
        if states.len() != rows * cols {
            return Err(LifeError::InteriorLength {
                expected: rows * cols,
                actual: states.len(),
            });
        }
        for (i, src) in states.chunks_exact(cols).enumerate() {
            grid.interior_row_mut(i + 1)[1..=cols].copy_from_slice(src);
        }
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Logical (interior) dimensions.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Distance between vertically adjacent cells in the flat buffer.
    pub fn stride(&self) -> usize {
        self.cols + 2
    }

    pub fn same_shape(&self, other: &Grid) -> bool {
        self.shape() == other.shape()
    }

    fn index(&self, i: usize, j: usize) -> Result<usize> {
        if i > self.rows + 1 || j > self.cols + 1 {
            return Err(LifeError::IndexOutOfBounds {
                row: i,
                col: j,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(i * self.stride() + j)
    }

    /// Cell at physical coordinates, `0 <= i <= rows + 1`, `0 <= j <= cols + 1`.
    pub fn get(&self, i: usize, j: usize) -> Result<CellState> {
        self.index(i, j).map(|idx| self.cells[idx])
    }

    /// Overwrite the cell at physical coordinates.
    ///
    /// Writing `Alive` into the halo is allowed here but breaks the stencil's
    /// boundary; [`Grid::seed_halo`] restores it.
    pub fn set(&mut self, i: usize, j: usize, state: CellState) -> Result<()> {
        let idx = self.index(i, j)?;
        self.cells[idx] = state;
        Ok(())
    }

    pub fn is_halo(&self, i: usize, j: usize) -> bool {
        i == 0 || j == 0 || i == self.rows + 1 || j == self.cols + 1
    }

    /// Kill every halo cell. Idempotent.
    pub fn seed_halo(&mut self) {
        let (stride, last) = (self.stride(), self.rows + 1);
        self.cells[..stride].fill(CellState::Dead);
        self.cells[last * stride..].fill(CellState::Dead);
        for row in self.cells.chunks_exact_mut(stride) {
            row[0] = CellState::Dead;
            row[stride - 1] = CellState::Dead;
        }
    }

    pub fn halo_is_dead(&self) -> bool {
        self.physical_rows().enumerate().all(|(i, row)| {
            row.iter()
                .enumerate()
                .all(|(j, &c)| !self.is_halo(i, j) || c == CellState::Dead)
        })
    }

    /// Number of alive interior cells.
    pub fn population(&self) -> usize {
        self.interior_rows()
            .map(|row| row.iter().filter(|c| c.is_alive()).count())
            .sum()
    }

    /// Interior states in row-major order.
    pub fn interior_cells(&self) -> Vec<CellState> {
        let mut result = Vec::with_capacity(self.rows * self.cols);
        for row in self.interior_rows() {
            result.extend_from_slice(row);
        }
        result
    }

    /// First physical coordinate (row-major) where the grids differ.
    pub fn first_mismatch(&self, other: &Grid) -> Result<Option<(usize, usize)>> {
        if !self.same_shape(other) {
            return Err(LifeError::ShapeMismatch {
                src: self.shape(),
                dst: other.shape(),
            });
        }
        let stride = self.stride();
        Ok(self
            .cells
            .iter()
            .zip(other.cells.iter())
            .position(|(a, b)| a != b)
            .map(|idx| (idx / stride, idx % stride)))
    }

    /// Copy every cell of `other`, halo included, without reallocating.
    pub fn copy_from(&mut self, other: &Grid) -> Result<()> {
        if !self.same_shape(other) {
            return Err(LifeError::ShapeMismatch {
                src: other.shape(),
                dst: self.shape(),
            });
        }
        self.cells.copy_from_slice(&other.cells);
        Ok(())
    }

    /// All `rows + 2` physical rows, halo rows included.
    pub fn physical_rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.chunks_exact(self.stride())
    }

    /// Interior part of every interior row.
    fn interior_rows(&self) -> impl Iterator<Item = &[CellState]> {
        let cols = self.cols;
        self.physical_rows()
            .skip(1)
            .take(self.rows)
            .map(move |row| &row[1..=cols])
    }

    pub(crate) fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Physical rows `1..=rows` as one contiguous slice; every `stride()`
    /// elements form a row whose first and last element are halo.
    pub(crate) fn interior_band_mut(&mut self) -> &mut [CellState] {
        let stride = self.stride();
        &mut self.cells[stride..(self.rows + 1) * stride]
    }

    pub(crate) fn interior_row_mut(&mut self, i: usize) -> &mut [CellState] {
        let stride = self.stride();
        &mut self.cells[i * stride..(i + 1) * stride]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_grid() {
        let grid = Grid::new(3, 5).unwrap();
        assert_eq!(grid.shape(), (3, 5));
        assert_eq!(grid.stride(), 7);
        assert_eq!(grid.physical_rows().count(), 5);
        assert_eq!(grid.population(), 0);
        assert!(grid.halo_is_dead());
    }

    #[test]
    fn test_invalid_dimension() {
        assert!(matches!(
            Grid::new(0, 4),
            Err(LifeError::InvalidDimension { rows: 0, cols: 4 })
        ));
        assert!(matches!(
            Grid::square(0),
            Err(LifeError::InvalidDimension { .. })
        ));
        assert!(matches!(
            Grid::new(usize::MAX, 1),
            Err(LifeError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_get_set_full_physical_range() {
        let mut grid = Grid::new(2, 3).unwrap();
        for i in 0..4 {
            for j in 0..5 {
                assert_eq!(grid.get(i, j).unwrap(), CellState::Dead);
            }
        }
        grid.set(1, 3, CellState::Alive).unwrap();
        assert_eq!(grid.get(1, 3).unwrap(), CellState::Alive);
        assert_eq!(grid.population(), 1);

        assert!(matches!(
            grid.get(4, 0),
            Err(LifeError::IndexOutOfBounds { row: 4, col: 0, .. })
        ));
        assert!(matches!(
            grid.set(0, 5, CellState::Alive),
            Err(LifeError::IndexOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_seed_halo() {
        let mut grid = Grid::new(3, 3).unwrap();
        for (i, j) in [(0, 0), (0, 2), (4, 4), (2, 0), (3, 4)] {
            grid.set(i, j, CellState::Alive).unwrap();
        }
        grid.set(2, 2, CellState::Alive).unwrap();
        assert!(!grid.halo_is_dead());

        grid.seed_halo();
        assert!(grid.halo_is_dead());
        assert_eq!(grid.get(2, 2).unwrap(), CellState::Alive);

        let snapshot = grid.clone();
        grid.seed_halo();
        assert_eq!(grid, snapshot);
    }

    #[test]
    fn test_from_interior() {
        use CellState::{Alive as A, Dead as D};

        let grid = Grid::from_interior(2, 3, &[A, D, A, D, A, D]).unwrap();
        assert_eq!(grid.get(1, 1).unwrap(), A);
        assert_eq!(grid.get(1, 3).unwrap(), A);
        assert_eq!(grid.get(2, 2).unwrap(), A);
        assert_eq!(grid.interior_cells(), vec![A, D, A, D, A, D]);
        assert!(grid.halo_is_dead());

        assert!(matches!(
            Grid::from_interior(2, 3, &[A; 5]),
            Err(LifeError::InteriorLength {
                expected: 6,
                actual: 5
            })
        ));
    }

    #[test]
    fn test_first_mismatch_and_copy() {
        let mut a = Grid::square(4).unwrap();
        let mut b = Grid::square(4).unwrap();
        assert_eq!(a.first_mismatch(&b).unwrap(), None);

        b.set(3, 2, CellState::Alive).unwrap();
        b.set(4, 4, CellState::Alive).unwrap();
        assert_eq!(a.first_mismatch(&b).unwrap(), Some((3, 2)));

        a.copy_from(&b).unwrap();
        assert_eq!(a, b);

        let c = Grid::new(4, 5).unwrap();
        assert!(matches!(
            a.first_mismatch(&c),
            Err(LifeError::ShapeMismatch { .. })
        ));
        assert!(a.copy_from(&c).is_err());
    }
}
