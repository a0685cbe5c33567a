use thiserror::Error;

/// Errors raised while building grids, adjacency tables and dictionaries.
/// Running out of dictionary entries for a prefix is not an error; the finder
/// treats it as a plain miss.
#[derive(Debug, Error)]
pub enum BoggleError {
    #[error("Grid of {0} cells is not a non-empty perfect square")]
    InvalidGridSize(usize),

    #[error("Invalid letter {letter:?} at cell {index}")]
    InvalidLetter { index: usize, letter: char },

    #[error("Grid has {grid} cells but the adjacency table was built for {table}")]
    AdjacencyMismatch { grid: usize, table: usize },

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BoggleError>;
