//! Columnar transposition over a keyword-ordered grid.

use crate::config::FILLER;
use crate::error::{CipherError, Result};

use super::Cipher;

/// Columnar transposition cipher.
///
/// Plaintext is stripped of spaces, uppercased, padded with filler
/// letters to fill a `rows × cols` grid, and read out column by column
/// in key order. The column order sorts the key's characters by
/// `(letter, original index)` — the index tie-break makes repeated key
/// letters reproducible.
///
/// # Examples
///
/// ```
/// use scytale::cipher::{Cipher, ColumnarCipher};
///
/// let cipher = ColumnarCipher::new("ZEBRA").unwrap();
/// assert_eq!(cipher.encrypt("WEAREDISCOVERED").unwrap(), "EODASREIERCEWDV");
/// assert_eq!(cipher.decrypt("EODASREIERCEWDV").unwrap(), "WEAREDISCOVERED");
/// ```
#[derive(Debug, Clone)]
pub struct ColumnarCipher {
    /// Uppercased key characters; one grid column per character.
    key: Vec<char>,
}

impl ColumnarCipher {
    /// Creates a columnar cipher from a keyword.
    ///
    /// # Errors
    ///
    /// Returns `InvalidKey` for an empty keyword.
    pub fn new(key: &str) -> Result<Self> {
        if key.is_empty() {
            return Err(CipherError::InvalidKey(
                "columnar transposition requires a non-empty key".to_string(),
            ));
        }
        Ok(Self {
            key: key.chars().map(|c| c.to_ascii_uppercase()).collect(),
        })
    }

    /// Column indices in read order: positions sorted by key character,
    /// original index breaking ties.
    fn column_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.key.len()).collect();
        order.sort_by_key(|&i| (self.key[i], i));
        order
    }

    fn strip(text: &str) -> Vec<char> {
        text.chars()
            .filter(|&c| c != ' ')
            .map(|c| c.to_ascii_uppercase())
            .collect()
    }
}

impl Cipher for ColumnarCipher {
    fn encrypt(&self, text: &str) -> Result<String> {
        let mut grid = Self::strip(text);
        let cols = self.key.len();
        let rows = grid.len().div_ceil(cols);
        grid.resize(rows * cols, FILLER);

        let mut out = String::with_capacity(grid.len());
        for col in self.column_order() {
            for row in 0..rows {
                out.push(grid[row * cols + col]);
            }
        }
        Ok(out)
    }

    /// Recovers the row-major plaintext, including any trailing filler
    /// padding added during encryption.
    ///
    /// # Errors
    ///
    /// Returns `LengthMismatch` when the ciphertext length is not an
    /// exact multiple of the key length.
    fn decrypt(&self, text: &str) -> Result<String> {
        let cipher = Self::strip(text);
        let cols = self.key.len();
        if cipher.len() % cols != 0 {
            return Err(CipherError::LengthMismatch {
                length: cipher.len(),
                expected_multiple: cols,
            });
        }
        let rows = cipher.len() / cols;

        // Each column is a contiguous run of `rows` ciphertext letters;
        // scatter the runs back to their original columns.
        let mut grid = vec![FILLER; cipher.len()];
        let mut run = 0;
        for col in self.column_order() {
            for row in 0..rows {
                grid[row * cols + col] = cipher[run];
                run += 1;
            }
        }
        Ok(grid.into_iter().collect())
    }
}
