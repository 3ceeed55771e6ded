//! Generic block cipher trait and its TEA2 implementation over byte slices

use log::trace;

use crate::block::{Block, Key, BLOCK_SIZE, KEY_SIZE};
use crate::engine;
use crate::error::Result;

/// Trait for a generic block cipher
pub trait BlockCipher {
    /// Encrypts a single block
    fn encrypt(&self, key: &[u8], block: &[u8]) -> Result<Vec<u8>>;

    /// Decrypts a single block
    fn decrypt(&self, key: &[u8], block: &[u8]) -> Result<Vec<u8>>;

    /// Returns the block size of the cipher in bytes
    fn block_size(&self) -> usize;

    /// Returns the key size of the cipher in bytes
    fn key_size(&self) -> usize;
}

/// TEA2 on raw bytes: one 16-byte block, one 32-byte key.
///
/// There is no padding and no chaining; inputs of any other length are
/// rejected.
///
/// ```rust
/// use tea2::{BlockCipher, Tea2};
///
/// let mut key = [0u8; 32];
/// key[31] = 1;
/// let ct = Tea2.encrypt(&key, &[0u8; 16])?;
/// assert_eq!(hex::encode_upper(&ct), "D713374DD796B94893E198C8BF480EEA");
/// assert_eq!(Tea2.decrypt(&key, &ct)?, vec![0u8; 16]);
/// # Ok::<(), tea2::Tea2Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Tea2;

impl Tea2 {
    fn parse(key: &[u8], block: &[u8]) -> Result<(Key, Block)> {
        let key = Key::try_from(key)?;
        let block = Block::try_from(block)?;
        Ok((key, block))
    }
}

impl BlockCipher for Tea2 {
    fn encrypt(&self, key: &[u8], block: &[u8]) -> Result<Vec<u8>> {
        let (key, block) = Self::parse(key, block)?;
        trace!("encrypting block {}", block);
        Ok(engine::encrypt(block, &key).to_bytes().to_vec())
    }

    fn decrypt(&self, key: &[u8], block: &[u8]) -> Result<Vec<u8>> {
        let (key, block) = Self::parse(key, block)?;
        trace!("decrypting block {}", block);
        Ok(engine::decrypt(block, &key).to_bytes().to_vec())
    }

    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    fn key_size(&self) -> usize {
        KEY_SIZE
    }
}
