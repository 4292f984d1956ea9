//! Cipher selection boundary.
//!
//! Request layers (HTTP handlers, prompts, test drivers) hand this
//! module a cipher name, a direction, and string-typed key and text;
//! it parses and validates the key for the selected cipher and runs
//! the transform. Malformed numeric keys fall back to the documented
//! defaults instead of failing, matching the lenient behavior expected
//! at this boundary; structural key errors still fail fast.

use std::fmt;
use std::str::FromStr;

use crate::cipher::{
    Cipher, ColumnarCipher, MonoalphabeticCipher, PlayfairCipher, RailFenceCipher,
    RunningKeyCipher, ShiftCipher,
};
use crate::config::{DEFAULT_RAILS, DEFAULT_SHIFT};
use crate::error::{CipherError, Result};

/// The ciphers reachable through the dispatch boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CipherKind {
    /// Constant shift (Caesar).
    Shift,
    /// Keyword-driven running-key shift (Vigenère).
    RunningKeyShift,
    /// 26-letter permutation substitution.
    Monoalphabetic,
    /// 5×5 digraph matrix (Playfair).
    DigraphMatrix,
    /// Zigzag transposition (rail fence).
    Zigzag,
    /// Keyword-ordered columnar transposition.
    Columnar,
}

impl CipherKind {
    /// The dispatch name of this cipher.
    pub fn name(&self) -> &'static str {
        match self {
            CipherKind::Shift => "shift",
            CipherKind::RunningKeyShift => "runningKeyShift",
            CipherKind::Monoalphabetic => "monoalphabetic",
            CipherKind::DigraphMatrix => "digraphMatrix",
            CipherKind::Zigzag => "zigzag",
            CipherKind::Columnar => "columnar",
        }
    }
}

impl fmt::Display for CipherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CipherKind {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "shift" => Ok(CipherKind::Shift),
            "runningKeyShift" => Ok(CipherKind::RunningKeyShift),
            "monoalphabetic" => Ok(CipherKind::Monoalphabetic),
            "digraphMatrix" => Ok(CipherKind::DigraphMatrix),
            "zigzag" => Ok(CipherKind::Zigzag),
            "columnar" => Ok(CipherKind::Columnar),
            other => Err(CipherError::UnknownCipher(other.to_string())),
        }
    }
}

/// Transform direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

/// Builds the cipher a request names and applies it to the text.
///
/// String keys are interpreted per cipher: `shift` and `zigzag` expect
/// a non-negative integer and fall back to 3 when the key is not one;
/// `monoalphabetic` requires a 26-letter permutation;
/// `runningKeyShift`, `digraphMatrix`, and `columnar` take keywords.
///
/// # Errors
///
/// Propagates each cipher's key and length errors (`InvalidKey`,
/// `LengthMismatch`, `LetterNotFound`).
///
/// # Examples
///
/// ```
/// use scytale::dispatch::{dispatch, CipherKind, Direction};
///
/// let out = dispatch(CipherKind::Shift, Direction::Encrypt, "3", "HELLO").unwrap();
/// assert_eq!(out, "KHOOR");
/// ```
pub fn dispatch(kind: CipherKind, direction: Direction, key: &str, text: &str) -> Result<String> {
    let cipher: Box<dyn Cipher> = match kind {
        CipherKind::Shift => Box::new(ShiftCipher::new(parse_numeric_key(key, DEFAULT_SHIFT))),
        CipherKind::RunningKeyShift => Box::new(RunningKeyCipher::new(key)?),
        CipherKind::Monoalphabetic => {
            Box::new(MonoalphabeticCipher::new(&key.to_ascii_uppercase())?)
        }
        CipherKind::DigraphMatrix => Box::new(PlayfairCipher::new(key)),
        CipherKind::Zigzag => Box::new(RailFenceCipher::new(parse_numeric_key(
            key,
            DEFAULT_RAILS as i32,
        ) as usize)),
        CipherKind::Columnar => Box::new(ColumnarCipher::new(key)?),
    };

    match direction {
        Direction::Encrypt => cipher.encrypt(text),
        Direction::Decrypt => cipher.decrypt(text),
    }
}

/// Parses a decimal key, falling back to the cipher's default when the
/// key is empty, signed, or otherwise not a plain digit string.
fn parse_numeric_key(key: &str, fallback: i32) -> i32 {
    if !key.is_empty() && key.chars().all(|c| c.is_ascii_digit()) {
        key.parse().unwrap_or(fallback)
    } else {
        fallback
    }
}
