//! Zigzag (rail fence) transposition.

use crate::error::{CipherError, Result};

use super::Cipher;

/// Rail fence transposition cipher.
///
/// Characters are written diagonally across `rails` rows, bouncing off
/// the top and bottom rails, then read off row by row. The grid is never
/// materialized; both directions derive the same rail-per-position walk
/// and so are guaranteed to round-trip.
///
/// # Examples
///
/// ```
/// use scytale::cipher::{Cipher, RailFenceCipher};
///
/// let cipher = RailFenceCipher::new(3);
/// let ciphertext = cipher.encrypt("WEAREDISCOVEREDFLEEATONCE").unwrap();
/// assert_eq!(ciphertext, "WECRLTEERDSOEEFEAOCAIVDEN");
/// assert_eq!(cipher.decrypt(&ciphertext).unwrap(), "WEAREDISCOVEREDFLEEATONCE");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RailFenceCipher {
    rails: usize,
}

impl RailFenceCipher {
    /// Creates a rail fence cipher. The rail count is validated against
    /// each text when encrypting or decrypting, since the upper bound
    /// depends on the text length.
    pub fn new(rails: usize) -> Self {
        Self { rails }
    }

    /// Rejects rail counts outside `[2, len]`.
    fn check_rails(&self, len: usize) -> Result<()> {
        if self.rails < 2 || self.rails > len {
            return Err(CipherError::InvalidKey(format!(
                "rail count must be between 2 and the text length ({}), got {}",
                len, self.rails
            )));
        }
        Ok(())
    }

    /// The rail index each text position lands on.
    ///
    /// The direction flips whenever the walk stands on the top or bottom
    /// rail, checked before each character is placed.
    fn walk(&self, len: usize) -> Vec<usize> {
        let mut pattern = Vec::with_capacity(len);
        let mut row = 0usize;
        let mut going_down = false;
        for _ in 0..len {
            if row == 0 || row == self.rails - 1 {
                going_down = !going_down;
            }
            pattern.push(row);
            if going_down {
                row += 1;
            } else {
                row -= 1;
            }
        }
        pattern
    }
}

impl Cipher for RailFenceCipher {
    fn encrypt(&self, text: &str) -> Result<String> {
        let chars: Vec<char> = text.chars().collect();
        self.check_rails(chars.len())?;

        let pattern = self.walk(chars.len());
        let mut rails: Vec<String> = vec![String::new(); self.rails];
        for (&rail, &c) in pattern.iter().zip(&chars) {
            rails[rail].push(c);
        }
        Ok(rails.concat())
    }

    fn decrypt(&self, text: &str) -> Result<String> {
        let chars: Vec<char> = text.chars().collect();
        self.check_rails(chars.len())?;

        // First pass: how many ciphertext characters each rail holds.
        let pattern = self.walk(chars.len());
        let mut counts = vec![0usize; self.rails];
        for &rail in &pattern {
            counts[rail] += 1;
        }

        // The ciphertext is the rails laid end to end; find where each
        // rail's run starts, then re-walk the zigzag reading them off.
        let mut cursors = Vec::with_capacity(self.rails);
        let mut offset = 0;
        for &count in &counts {
            cursors.push(offset);
            offset += count;
        }

        let mut out = String::with_capacity(chars.len());
        for &rail in &pattern {
            out.push(chars[cursors[rail]]);
            cursors[rail] += 1;
        }
        Ok(out)
    }
}
