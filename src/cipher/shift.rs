//! Shift (Caesar) cipher and its running-key (Vigenère) variant.

use crate::alphabet::shift_letter;
use crate::cipher::Cipher;
use crate::error::{CipherError, Result};

/// Constant-shift substitution cipher.
///
/// Rotates every letter by a fixed amount, preserving case and passing
/// non-letters through unchanged.
///
/// # Examples
///
/// ```
/// use scytale::cipher::{Cipher, ShiftCipher};
///
/// let cipher = ShiftCipher::new(3);
/// assert_eq!(cipher.encrypt("HELLO").unwrap(), "KHOOR");
/// assert_eq!(cipher.decrypt("KHOOR").unwrap(), "HELLO");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ShiftCipher {
    shift: i32,
}

impl ShiftCipher {
    /// Creates a shift cipher. Any integer is a valid key; shifts are
    /// taken modulo 26.
    pub fn new(shift: i32) -> Self {
        // Normalized to [0, 25] so negating it can never overflow.
        Self {
            shift: shift.rem_euclid(26),
        }
    }

    fn apply(&self, text: &str, sign: i32) -> String {
        let amount = sign * self.shift;
        text.chars().map(|c| shift_letter(c, amount)).collect()
    }
}

impl Cipher for ShiftCipher {
    fn encrypt(&self, text: &str) -> Result<String> {
        Ok(self.apply(text, 1))
    }

    fn decrypt(&self, text: &str) -> Result<String> {
        Ok(self.apply(text, -1))
    }
}

/// Running-key shift cipher: the shift amount varies per position
/// according to a repeating keyword.
///
/// The key index advances on every character of the input, alphabetic or
/// not. Interrupting text with punctuation therefore changes which key
/// letter lines up with the following letters; this matches the
/// absolute-position indexing policy the library commits to.
#[derive(Debug, Clone)]
pub struct RunningKeyCipher {
    /// Per-position shift amounts derived from the lowercased keyword.
    shifts: Vec<i32>,
}

impl RunningKeyCipher {
    /// Creates a running-key cipher from a keyword.
    ///
    /// # Errors
    ///
    /// Returns `InvalidKey` if the keyword is empty or contains
    /// non-alphabetic characters.
    pub fn new(keyword: &str) -> Result<Self> {
        if keyword.is_empty() {
            return Err(CipherError::InvalidKey(
                "running-key keyword must not be empty".to_string(),
            ));
        }
        if !keyword.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CipherError::InvalidKey(
                "running-key keyword must contain only letters".to_string(),
            ));
        }
        let shifts = keyword
            .chars()
            .map(|c| (c.to_ascii_lowercase() as u8 - b'a') as i32)
            .collect();
        Ok(Self { shifts })
    }

    fn apply(&self, text: &str, sign: i32) -> String {
        text.chars()
            .enumerate()
            .map(|(i, c)| shift_letter(c, sign * self.shifts[i % self.shifts.len()]))
            .collect()
    }
}

impl Cipher for RunningKeyCipher {
    fn encrypt(&self, text: &str) -> Result<String> {
        Ok(self.apply(text, 1))
    }

    fn decrypt(&self, text: &str) -> Result<String> {
        Ok(self.apply(text, -1))
    }
}
