mod config;
mod format_int;
mod init;
mod output;

pub use config::{Config, ConfigError};
pub use format_int::NiceInt;
pub use init::{Initializer, DEFAULT_FILL_RATE, DEFAULT_SEED};
pub use output::{output_file_name, parse_grid, render_snapshot, save_to_dir, write_grid};
