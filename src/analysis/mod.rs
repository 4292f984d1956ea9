//! Cryptanalysis routines for the monoalphabetic substitution cipher.
//!
//! Both routines are heuristics: the brute-force search covers only a
//! bounded slice of the 26! key space, and the frequency mapping is a
//! candidate decryption, not a definitive one.

pub mod brute_force;
pub mod frequency;

pub use brute_force::{brute_force_monoalphabetic, Candidate};
pub use frequency::frequency_analysis;
