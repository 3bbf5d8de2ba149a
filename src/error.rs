use thiserror::Error;

/// Errors reported by the grid, the stencil and the text codec.
///
/// None of them is transient: every variant means the caller broke a
/// precondition or handed over malformed data.
#[derive(Debug, Error)]
pub enum LifeError {
    #[error("grid dimensions must be positive and addressable, got {rows}x{cols}")]
    InvalidDimension { rows: usize, cols: usize },

    #[error("buffers differ in shape: src is {src:?}, dst is {dst:?}")]
    ShapeMismatch {
        src: (usize, usize),
        dst: (usize, usize),
    },

    #[error("cell ({row}, {col}) is outside the physical range [0, {rows}+1]x[0, {cols}+1]")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("expected {expected} interior cells, got {actual}")]
    InteriorLength { expected: usize, actual: usize },

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LifeError>;
