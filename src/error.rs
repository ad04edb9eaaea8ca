use thiserror::Error;

/// Errors raised by the k-mer index and the analysis pipeline built on it.
#[derive(Debug, Error)]
pub enum KmerError {
    /// A character outside `{A, C, G, T}` was found while encoding.
    #[error("invalid base '{base}' at offset {position} in k-mer")]
    InvalidBase { base: char, position: usize },

    /// The string handed to the encoder is not exactly K bases long.
    #[error("k length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// The index was created with unusable parameters.
    #[error("cannot construct index: {0}")]
    Construction(String),

    /// Linear probing wrapped the whole table without finding room.
    /// The pre-insert growth check makes this unreachable in a healthy index.
    #[error("hash table full at capacity {capacity}")]
    TableFull { capacity: usize },

    #[error("no sequence loaded")]
    EmptySequence,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl KmerError {
    /// True for the per-window encoding failures that index building skips.
    pub fn is_window_error(&self) -> bool {
        matches!(self, KmerError::InvalidBase { .. } | KmerError::LengthMismatch { .. })
    }
}
