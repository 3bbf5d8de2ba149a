use crate::CellState;

/// B3/S23: a live cell survives with 2 or 3 live neighbors,
/// a dead cell is born with exactly 3.
#[inline]
pub fn next_state(current: CellState, live_neighbors: u8) -> CellState {
    match (current, live_neighbors) {
        (CellState::Alive, 2 | 3) | (CellState::Dead, 3) => CellState::Alive,
        _ => CellState::Dead,
    }
}
