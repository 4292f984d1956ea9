//! Classical cipher implementations.
//!
//! Each cipher is a small stateless value holding its validated key and
//! implementing the [`Cipher`] trait, so the dispatch layer can drive
//! any of them through one seam.

pub mod columnar;
pub mod monoalphabetic;
pub mod playfair;
pub mod rail_fence;
pub mod shift;

use crate::error::Result;

/// Trait for a keyed classical cipher.
///
/// Implementations are pure transforms: no I/O, no shared state, and the
/// same input always produces the same output. Which characters survive
/// the transform (case, spacing, punctuation) is per-cipher policy and
/// documented on each implementation.
pub trait Cipher: Send + Sync {
    /// Encrypts plaintext under the cipher's key.
    fn encrypt(&self, text: &str) -> Result<String>;

    /// Decrypts ciphertext under the cipher's key.
    fn decrypt(&self, text: &str) -> Result<String>;
}

pub use columnar::ColumnarCipher;
pub use monoalphabetic::MonoalphabeticCipher;
pub use playfair::{PlayfairCipher, PlayfairMatrix};
pub use rail_fence::RailFenceCipher;
pub use shift::{RunningKeyCipher, ShiftCipher};
