//! Error types for the scytale library.
//!
//! All cipher routines fail fast at the point of use: a malformed key is
//! reported as an error rather than producing a plausible-looking but
//! wrong transform.

use thiserror::Error;

/// Main error type for all cipher and cryptanalysis operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// The supplied key does not satisfy the cipher's key contract.
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// A letter could not be located in the digraph matrix.
    ///
    /// Unreachable for a well-formed matrix; kept as a hard error so a
    /// construction bug can never degrade into garbled output.
    #[error("Letter '{0}' not found in the cipher matrix")]
    LetterNotFound(char),

    /// Ciphertext length is incompatible with the declared key.
    #[error("Ciphertext length {length} is not a multiple of {expected_multiple}")]
    LengthMismatch {
        /// Actual ciphertext length in letters.
        length: usize,
        /// Required divisor (column count, or 2 for digraphs).
        expected_multiple: usize,
    },

    /// The dispatch layer was asked for a cipher it does not know.
    #[error("Unknown cipher '{0}'")]
    UnknownCipher(String),
}

/// Type alias for Results using CipherError.
pub type Result<T> = std::result::Result<T, CipherError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_key() {
        let err = CipherError::InvalidKey("key must be 26 letters".to_string());
        assert_eq!(format!("{}", err), "Invalid key: key must be 26 letters");
    }

    #[test]
    fn test_display_letter_not_found() {
        let err = CipherError::LetterNotFound('J');
        assert_eq!(
            format!("{}", err),
            "Letter 'J' not found in the cipher matrix"
        );
    }

    #[test]
    fn test_display_length_mismatch() {
        let err = CipherError::LengthMismatch {
            length: 13,
            expected_multiple: 5,
        };
        assert_eq!(
            format!("{}", err),
            "Ciphertext length 13 is not a multiple of 5"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            CipherError::LetterNotFound('Q'),
            CipherError::LetterNotFound('Q')
        );
        assert_ne!(
            CipherError::LetterNotFound('Q'),
            CipherError::UnknownCipher("rot13".to_string())
        );
    }
}
