//! Block and key value types

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, Tea2Error};

/// Block size in bytes (128 bits).
pub const BLOCK_SIZE: usize = 16;

/// Key size in bytes (256 bits).
pub const KEY_SIZE: usize = 32;

/// A 128-bit block as two 64-bit halves `(v0, v1)`.
///
/// In byte form `v0` occupies the first eight bytes, each half big-endian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Block {
    v0: u64,
    v1: u64,
}

impl Block {
    pub const fn new(v0: u64, v1: u64) -> Self {
        Self { v0, v1 }
    }

    pub const fn words(&self) -> (u64, u64) {
        (self.v0, self.v1)
    }

    pub fn from_bytes(bytes: &[u8; BLOCK_SIZE]) -> Self {
        let (hi, lo) = bytes.split_at(8);
        Self::new(be_word(hi), be_word(lo))
    }

    pub fn to_bytes(&self) -> [u8; BLOCK_SIZE] {
        let mut out = [0u8; BLOCK_SIZE];
        out[..8].copy_from_slice(&self.v0.to_be_bytes());
        out[8..].copy_from_slice(&self.v1.to_be_bytes());
        out
    }
}

impl From<(u64, u64)> for Block {
    fn from((v0, v1): (u64, u64)) -> Self {
        Self::new(v0, v1)
    }
}

impl From<[u64; 2]> for Block {
    fn from([v0, v1]: [u64; 2]) -> Self {
        Self::new(v0, v1)
    }
}

impl From<Block> for (u64, u64) {
    fn from(block: Block) -> Self {
        block.words()
    }
}

impl TryFrom<&[u8]> for Block {
    type Error = Tea2Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        let bytes: &[u8; BLOCK_SIZE] =
            bytes.try_into().map_err(|_| Tea2Error::InvalidBlockLength {
                expected: BLOCK_SIZE,
                actual: bytes.len(),
            })?;
        Ok(Self::from_bytes(bytes))
    }
}

impl FromStr for Block {
    type Err = Tea2Error;

    /// Parses hex digits, ignoring any ASCII whitespace.
    fn from_str(s: &str) -> Result<Self> {
        let bytes = decode_hex(s)?;
        Self::try_from(bytes.as_slice())
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016X} {:016X}", self.v0, self.v1)
    }
}

impl fmt::UpperHex for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// A 256-bit key as four 64-bit words `(k0, k1, k2, k3)`.
///
/// `Debug` never prints the words.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct Key {
    words: [u64; 4],
}

impl Key {
    pub const fn new(k0: u64, k1: u64, k2: u64, k3: u64) -> Self {
        Self {
            words: [k0, k1, k2, k3],
        }
    }

    pub const fn words(&self) -> [u64; 4] {
        self.words
    }

    pub fn from_bytes(bytes: &[u8; KEY_SIZE]) -> Self {
        let mut words = [0u64; 4];
        for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(8)) {
            *word = be_word(chunk);
        }
        Self { words }
    }

    pub fn to_bytes(&self) -> [u8; KEY_SIZE] {
        let mut out = [0u8; KEY_SIZE];
        for (chunk, word) in out.chunks_exact_mut(8).zip(self.words.iter()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        out
    }
}

impl From<(u64, u64, u64, u64)> for Key {
    fn from((k0, k1, k2, k3): (u64, u64, u64, u64)) -> Self {
        Self::new(k0, k1, k2, k3)
    }
}

impl From<[u64; 4]> for Key {
    fn from(words: [u64; 4]) -> Self {
        Self { words }
    }
}

impl TryFrom<&[u8]> for Key {
    type Error = Tea2Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        let bytes: &[u8; KEY_SIZE] =
            bytes.try_into().map_err(|_| Tea2Error::InvalidKeyLength {
                expected: KEY_SIZE,
                actual: bytes.len(),
            })?;
        Ok(Self::from_bytes(bytes))
    }
}

impl FromStr for Key {
    type Err = Tea2Error;

    /// Parses hex digits, ignoring any ASCII whitespace.
    fn from_str(s: &str) -> Result<Self> {
        let bytes = decode_hex(s)?;
        Self::try_from(bytes.as_slice())
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [k0, k1, k2, k3] = self.words;
        write!(f, "{:016X} {:016X} {:016X} {:016X}", k0, k1, k2, k3)
    }
}

impl fmt::UpperHex for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Key").finish_non_exhaustive()
    }
}

/// Caller guarantees `chunk` is 8 bytes long.
fn be_word(chunk: &[u8]) -> u64 {
    let mut buf = [0u8; 8];
    buf.copy_from_slice(chunk);
    u64::from_be_bytes(buf)
}

fn decode_hex(s: &str) -> Result<Vec<u8>> {
    let digits: String = s.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    Ok(hex::decode(digits)?)
}
