//! Error types
//!
//! Gameplay outcomes (death, game over) are ordinary state. Errors only cover
//! invariant violations at construction and settings I/O.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid organism size {0}: size must be positive")]
    InvalidSize(u32),

    #[error("invalid lives count {lives}: must be at most {max}")]
    InvalidLives { lives: u8, max: u8 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings error: {0}")]
    Settings(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Settings(err.to_string())
    }
}
