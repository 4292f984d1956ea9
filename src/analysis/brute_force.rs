//! Bounded exhaustive-key search against monoalphabetic ciphertext.

use crate::cipher::{Cipher, MonoalphabeticCipher};
use crate::config::{SearchBudget, COMMON_WORDS, QUALIFYING_SCORE};
use crate::error::Result;

/// One qualifying decryption found by the search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// The 26-letter key that produced this decryption.
    pub key: String,
    /// The decrypted text.
    pub plaintext: String,
    /// Number of common-word tokens in the decryption.
    pub score: usize,
}

/// Tries candidate substitution keys against a ciphertext, collecting
/// decryptions that read like English.
///
/// Keys are the permutations of the alphabet in lexicographic order,
/// starting from the identity. Each decryption is scored by counting
/// its whitespace-delimited tokens that appear in a small common-word
/// set; a score above [`QUALIFYING_SCORE`] qualifies. Every qualifying
/// candidate is passed to `on_hit` as it is found and also returned.
///
/// The search halts at `budget.max_attempts` trials or
/// `budget.stop_after` hits, whichever comes first. The key space has
/// 26! members, so the bounded walk is a safety valve, not a coverage
/// guarantee — callers must not expect the search to be exhaustive.
///
/// # Examples
///
/// ```
/// use scytale::analysis::brute_force_monoalphabetic;
/// use scytale::config::SearchBudget;
///
/// let hits = brute_force_monoalphabetic(
///     "the cat and the hat",
///     SearchBudget::new(10, 1),
///     |_| {},
/// )
/// .unwrap();
/// assert_eq!(hits[0].plaintext, "THE CAT AND THE HAT");
/// ```
pub fn brute_force_monoalphabetic(
    ciphertext: &str,
    budget: SearchBudget,
    mut on_hit: impl FnMut(&Candidate),
) -> Result<Vec<Candidate>> {
    let mut perm: [u8; 26] = *b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    let mut hits = Vec::new();
    let mut attempts: u64 = 0;

    loop {
        let key: String = perm.iter().map(|&b| b as char).collect();
        let cipher = MonoalphabeticCipher::new(&key)?;
        let plaintext = cipher.decrypt(ciphertext)?;

        let score = common_word_score(&plaintext);
        if score > QUALIFYING_SCORE {
            let candidate = Candidate {
                key,
                plaintext,
                score,
            };
            on_hit(&candidate);
            hits.push(candidate);
        }

        attempts += 1;
        if attempts >= budget.max_attempts || hits.len() >= budget.stop_after {
            break;
        }
        if !next_permutation(&mut perm) {
            break;
        }
    }

    Ok(hits)
}

/// Counts whitespace-delimited tokens that are common English words.
fn common_word_score(text: &str) -> usize {
    text.to_lowercase()
        .split_whitespace()
        .filter(|word| COMMON_WORDS.contains(word))
        .count()
}

/// Advances a slice to its next lexicographic permutation; returns
/// false once the last permutation has been reached.
fn next_permutation(items: &mut [u8]) -> bool {
    if items.len() < 2 {
        return false;
    }

    // Longest non-increasing suffix; its predecessor is the pivot.
    let mut pivot = items.len() - 1;
    while pivot > 0 && items[pivot - 1] >= items[pivot] {
        pivot -= 1;
    }
    if pivot == 0 {
        return false;
    }
    let pivot = pivot - 1;

    // Rightmost element greater than the pivot.
    let mut swap = items.len() - 1;
    while items[swap] <= items[pivot] {
        swap -= 1;
    }
    items.swap(pivot, swap);
    items[pivot + 1..].reverse();
    true
}
