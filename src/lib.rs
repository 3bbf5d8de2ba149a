#![warn(clippy::all)]

mod error;
mod evolution;
mod grid;
mod rule;
pub mod stencil;
mod strategy;
mod utils;

pub use error::{LifeError, Result};
pub use evolution::{run, Evolution};
pub use grid::{CellState, Grid};
pub use rule::next_state;
pub use strategy::Strategy;
pub use utils::{
    output_file_name, parse_grid, render_snapshot, save_to_dir, write_grid, Config, ConfigError,
    Initializer, NiceInt, DEFAULT_FILL_RATE, DEFAULT_SEED,
};
