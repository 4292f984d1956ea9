//! Configuration constants for the cipher and cryptanalysis routines.
//!
//! This module collects the fixed alphabets, filler conventions, and
//! default key fallbacks shared across the library, plus the bounds
//! applied to the brute-force search.

/// The ordered 26-letter alphabet used by every substitution cipher.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// The 25-letter alphabet of the digraph matrix cipher ("J" merged into "I").
pub const PLAYFAIR_ALPHABET: &str = "ABCDEFGHIKLMNOPQRSTUVWXYZ";

/// Padding letter used to complete digraphs and transposition grids.
pub const FILLER: char = 'X';

/// Shift applied when the dispatch layer receives a malformed numeric key.
pub const DEFAULT_SHIFT: i32 = 3;

/// Rail count applied when the dispatch layer receives a malformed numeric key.
pub const DEFAULT_RAILS: usize = 3;

/// English letters ordered by descending frequency in typical prose.
pub const ENGLISH_FREQUENCY_ORDER: &str = "etaoinshrdlcumwfgypbvkjxqz";

/// Small fixed set of common English words used to score candidate
/// decryptions during the brute-force search.
pub const COMMON_WORDS: [&str; 10] = [
    "the", "be", "to", "of", "and", "a", "in", "that", "have", "i",
];

/// A candidate decryption qualifies when it contains strictly more than
/// this many common-word tokens.
pub const QUALIFYING_SCORE: usize = 2;

/// Default trial budget for the brute-force search.
pub const DEFAULT_MAX_ATTEMPTS: u64 = 1000;

/// Default qualifying-hit budget for the brute-force search.
pub const DEFAULT_STOP_AFTER: usize = 5;

/// Bounds for the brute-force key search.
///
/// The full monoalphabetic key space has 26! members; the search is only
/// tractable because it stops at whichever of these limits is reached
/// first. Completeness is an explicit non-goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchBudget {
    /// Maximum number of candidate keys to try.
    pub max_attempts: u64,
    /// Stop after this many qualifying decryptions have been found.
    pub stop_after: usize,
}

impl Default for SearchBudget {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            stop_after: DEFAULT_STOP_AFTER,
        }
    }
}

impl SearchBudget {
    /// Creates a budget with explicit bounds.
    pub fn new(max_attempts: u64, stop_after: usize) -> Self {
        Self {
            max_attempts,
            stop_after,
        }
    }
}
