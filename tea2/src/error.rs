//! Error types for the value and byte layers around the engine

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Tea2Error {
    #[error("Invalid block length: expected {expected} bytes, got {actual}")]
    InvalidBlockLength { expected: usize, actual: usize },

    #[error("Invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    #[error("Invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

pub type Result<T> = std::result::Result<T, Tea2Error>;
