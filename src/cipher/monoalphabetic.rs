//! Monoalphabetic substitution over a fixed 26-letter permutation.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::alphabet::letter_index;
use crate::cipher::Cipher;
use crate::config::ALPHABET;
use crate::error::{CipherError, Result};

/// Substitution cipher mapping each plaintext letter to a fixed
/// ciphertext letter.
///
/// The key is a permutation of A–Z: position `i` of the key is the
/// ciphertext letter for the `i`-th alphabet letter. Text is uppercased
/// before substitution (the classical form ignores case); non-letters
/// pass through unchanged.
///
/// # Examples
///
/// ```
/// use scytale::cipher::{Cipher, MonoalphabeticCipher};
///
/// let cipher = MonoalphabeticCipher::new("JITUAXYCEKBLNFRQVZMHOGSPWD").unwrap();
/// assert_eq!(cipher.encrypt("I LOVE CRYPTO").unwrap(), "E LRGA TZWQHR");
/// ```
#[derive(Debug, Clone)]
pub struct MonoalphabeticCipher {
    /// forward[i] = ciphertext letter for plaintext letter i.
    forward: [char; 26],
    /// inverse[i] = plaintext letter for ciphertext letter i.
    inverse: [char; 26],
}

impl MonoalphabeticCipher {
    /// Builds the cipher from a 26-letter permutation key.
    ///
    /// # Errors
    ///
    /// Returns `InvalidKey` if the key is not exactly 26 letters or is
    /// not a permutation of A–Z (a repeated letter would make the
    /// decryption mapping ambiguous).
    pub fn new(key: &str) -> Result<Self> {
        let letters: Vec<char> = key.chars().map(|c| c.to_ascii_uppercase()).collect();
        if letters.len() != 26 {
            return Err(CipherError::InvalidKey(format!(
                "substitution key must be 26 letters, got {}",
                letters.len()
            )));
        }

        let mut forward = ['\0'; 26];
        let mut inverse = ['\0'; 26];
        let mut seen = [false; 26];
        for (i, &c) in letters.iter().enumerate() {
            let idx = letter_index(c).ok_or_else(|| {
                CipherError::InvalidKey(format!("substitution key contains non-letter '{}'", c))
            })?;
            if seen[idx] {
                return Err(CipherError::InvalidKey(format!(
                    "substitution key repeats letter '{}'",
                    c
                )));
            }
            seen[idx] = true;
            forward[i] = c;
            inverse[idx] = (b'A' + i as u8) as char;
        }

        Ok(Self { forward, inverse })
    }

    /// The cipher's key as a 26-letter string.
    pub fn key(&self) -> String {
        self.forward.iter().collect()
    }

    fn map_through(table: &[char; 26], text: &str) -> String {
        // Full Unicode uppercasing, so non-ASCII letters pass through in
        // upper case like everything else.
        text.chars()
            .flat_map(char::to_uppercase)
            .map(|c| match letter_index(c) {
                Some(idx) => table[idx],
                None => c,
            })
            .collect()
    }
}

impl Cipher for MonoalphabeticCipher {
    fn encrypt(&self, text: &str) -> Result<String> {
        Ok(Self::map_through(&self.forward, text))
    }

    fn decrypt(&self, text: &str) -> Result<String> {
        Ok(Self::map_through(&self.inverse, text))
    }
}

/// Generates a uniformly random valid substitution key.
pub fn random_key<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut letters: Vec<char> = ALPHABET.chars().collect();
    letters.shuffle(rng);
    letters.into_iter().collect()
}
