use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Buffer too short: expected at least {expected} bytes, found {found}")]
    BufferTooShort { expected: usize, found: usize },

    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed character table: {0}")]
    CharacterTable(#[from] serde_json::Error),
}
