//! # TEA2
//!
//! TEA2 is a Feistel block cipher with a 128-bit block and a 256-bit key. It
//! extends the Tiny Encryption Algorithm (Wheeler & Needham) to 64-bit halves
//! and runs 64 cycles, i.e. 128 Feistel rounds, per block.
//!
//! This crate is the raw single-block primitive. Padding, modes of operation
//! and key derivation are left to the caller.
//!
//! ## Usage
//!
//! ```rust
//! use tea2::{decrypt, encrypt, Block, Key};
//!
//! let key = Key::new(0, 0, 0, 1);
//! let plaintext = Block::new(0, 0);
//!
//! let ciphertext = encrypt(plaintext, &key);
//! assert_eq!(ciphertext.to_string(), "D713374DD796B948 93E198C8BF480EEA");
//! assert_eq!(decrypt(ciphertext, &key), plaintext);
//! ```
//!
//! Blocks and keys also parse from hex text:
//!
//! ```rust
//! use tea2::{encrypt, Block, Key};
//!
//! let key: Key = "0000000000000000 0000000000000000 0000000000000000 0000000000000001".parse()?;
//! let block: Block = "0000000000000001 0000000000000001".parse()?;
//! assert_eq!(encrypt(block, &key).to_string(), "9F6CCED0EAF20C18 CA4F15379C175F5C");
//! # Ok::<(), tea2::Tea2Error>(())
//! ```

pub mod block;
pub mod cipher;
pub mod engine;
pub mod error;

pub use block::{Block, Key, BLOCK_SIZE, KEY_SIZE};
pub use cipher::{BlockCipher, Tea2};
pub use engine::{decrypt, encrypt, CYCLES, DELTA};
pub use error::{Result, Tea2Error};
