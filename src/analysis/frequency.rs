//! Frequency-based decryption heuristic.

use crate::alphabet::letter_index;
use crate::config::ENGLISH_FREQUENCY_ORDER;

/// Proposes a decryption of monoalphabetic ciphertext by letter
/// frequency.
///
/// The ciphertext is case-folded to lowercase, its letters ranked by
/// descending frequency (ties keep first-appearance order), and the
/// ranked list mapped positionally onto the canonical English frequency
/// order: the most common ciphertext letter becomes 'e', the next 't',
/// and so on. Unmapped characters pass through unchanged.
///
/// This is a heuristic. With short texts the ranking is noisy, so the
/// result is a candidate reading, not a definitive decryption.
///
/// # Examples
///
/// ```
/// use scytale::analysis::frequency_analysis;
///
/// assert_eq!(frequency_analysis("YVCCF NFICU"), "aoeet itnes");
/// ```
pub fn frequency_analysis(ciphertext: &str) -> String {
    let text = ciphertext.to_lowercase();

    // Count letters, remembering first-appearance order so the later
    // stable sort breaks frequency ties the same way every run.
    let mut counts: Vec<(char, usize)> = Vec::new();
    for c in text.chars().filter(|c| c.is_ascii_alphabetic()) {
        match counts.iter_mut().find(|(letter, _)| *letter == c) {
            Some((_, n)) => *n += 1,
            None => counts.push((c, 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    let mut mapping: [Option<char>; 26] = [None; 26];
    for ((letter, _), substitute) in counts.iter().zip(ENGLISH_FREQUENCY_ORDER.chars()) {
        if let Some(idx) = letter_index(*letter) {
            mapping[idx] = Some(substitute);
        }
    }

    text.chars()
        .map(|c| match letter_index(c) {
            Some(idx) => mapping[idx].unwrap_or(c),
            None => c,
        })
        .collect()
}
