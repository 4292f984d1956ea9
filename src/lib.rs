//! Scytale - classical cipher and cryptanalysis library
//!
//! This library implements six pre-modern substitution and transposition
//! ciphers together with two cryptanalysis routines, preserving the
//! classical (insecure) semantics of each exactly — including the
//! weaknesses the cryptanalysis routines exploit.
//!
//! # Ciphers
//!
//! - **Shift** (Caesar): constant per-letter rotation
//! - **Running-key shift** (Vigenère): keyword-driven rotation
//! - **Monoalphabetic**: fixed 26-letter permutation mapping
//! - **Digraph matrix** (Playfair): 5×5 keyword matrix over letter pairs
//! - **Zigzag** (rail fence): diagonal transposition over N rails
//! - **Columnar**: key-ordered column transposition
//!
//! # Cryptanalysis
//!
//! - Bounded brute-force key search for monoalphabetic ciphertext
//! - Frequency-mapping decryption heuristic
//!
//! Every transform is a pure, synchronous function with no shared
//! state; calls are independent and may run concurrently without
//! coordination.
//!
//! # Security
//!
//! None. These are historical, instructional ciphers; do not use them
//! to protect anything.
//!
//! # Example
//!
//! ```
//! use scytale::cipher::{Cipher, ShiftCipher};
//!
//! let cipher = ShiftCipher::new(3);
//! let ciphertext = cipher.encrypt("HELLO").unwrap();
//! assert_eq!(ciphertext, "KHOOR");
//! assert_eq!(cipher.decrypt(&ciphertext).unwrap(), "HELLO");
//! ```

pub mod alphabet;
pub mod analysis;
pub mod cipher;
pub mod config;
pub mod dispatch;
pub mod error;

// Re-export commonly used types
pub use analysis::{brute_force_monoalphabetic, frequency_analysis, Candidate};
pub use cipher::{
    Cipher, ColumnarCipher, MonoalphabeticCipher, PlayfairCipher, PlayfairMatrix, RailFenceCipher,
    RunningKeyCipher, ShiftCipher,
};
pub use config::SearchBudget;
pub use dispatch::{dispatch, CipherKind, Direction};
pub use error::{CipherError, Result};
