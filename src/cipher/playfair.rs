//! Digraph matrix (Playfair-style) cipher.
//!
//! Letters are encrypted two at a time against a 5×5 matrix derived
//! from a keyword. "J" is merged into "I" so the 26-letter alphabet
//! fits the 25 cells.

use std::fmt;

use crate::config::{FILLER, PLAYFAIR_ALPHABET};
use crate::error::{CipherError, Result};

use super::Cipher;

const SIDE: usize = 5;

/// 5×5 key-derived letter matrix.
///
/// Construction: uppercase the keyword, replace "J" with "I", drop
/// duplicate letters keeping first occurrences, then append the rest of
/// the 25-letter alphabet in natural order. The result always holds
/// exactly 25 distinct letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayfairMatrix {
    /// Row-major cells; `cells[row * 5 + col]`.
    cells: [char; 25],
}

impl PlayfairMatrix {
    /// Derives the matrix from a keyword.
    ///
    /// Non-letter keyword characters are ignored, so any keyword
    /// (including the empty string, which yields the plain alphabet
    /// matrix) produces a valid matrix.
    pub fn new(keyword: &str) -> Self {
        let mut cells = ['\0'; 25];
        let mut len = 0;
        let keyword_letters = keyword.chars().filter_map(normalize_letter);
        for c in keyword_letters.chain(PLAYFAIR_ALPHABET.chars()) {
            if !cells[..len].contains(&c) {
                cells[len] = c;
                len += 1;
            }
        }
        debug_assert_eq!(len, 25);

        Self { cells }
    }

    /// Finds the (row, col) of a letter.
    ///
    /// # Errors
    ///
    /// Returns `LetterNotFound` if the letter is not one of the 25
    /// matrix letters. Callers that normalize their input first never
    /// hit this.
    pub fn locate(&self, letter: char) -> Result<(usize, usize)> {
        self.cells
            .iter()
            .position(|&c| c == letter)
            .map(|i| (i / SIDE, i % SIDE))
            .ok_or(CipherError::LetterNotFound(letter))
    }

    /// The letter at a (row, col) position, wrapping both coordinates
    /// modulo 5.
    pub fn at(&self, row: usize, col: usize) -> char {
        self.cells[(row % SIDE) * SIDE + (col % SIDE)]
    }
}

impl fmt::Display for PlayfairMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..SIDE {
            for col in 0..SIDE {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.at(row, col))?;
            }
            if row + 1 < SIDE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Uppercases a letter and merges "J" into "I"; non-letters map to None.
fn normalize_letter(c: char) -> Option<char> {
    if !c.is_ascii_alphabetic() {
        return None;
    }
    let c = c.to_ascii_uppercase();
    Some(if c == 'J' { 'I' } else { c })
}

/// Splits text into digraphs, inserting filler letters where the
/// classical rules require them.
///
/// The text is uppercased, "J" merged into "I", and non-letters dropped.
/// Walking the result: when a candidate pair would repeat a letter, the
/// filler is inserted after the first and pairing restarts from the
/// second; a trailing unpaired letter is completed with the filler.
///
/// A repeated filler in the input (e.g. "XX") yields a same-letter
/// digraph, exactly as the classical construction does; the same-row
/// rule still maps it reversibly.
pub fn split_digraphs(text: &str) -> Vec<(char, char)> {
    let letters: Vec<char> = text.chars().filter_map(normalize_letter).collect();
    let mut pairs = Vec::with_capacity(letters.len() / 2 + 1);

    let mut i = 0;
    while i < letters.len() {
        let a = letters[i];
        let b = if i + 1 < letters.len() {
            letters[i + 1]
        } else {
            FILLER
        };
        if a == b {
            pairs.push((a, FILLER));
            i += 1;
        } else {
            pairs.push((a, b));
            i += 2;
        }
    }
    pairs
}

/// Playfair-style digraph substitution cipher.
///
/// # Examples
///
/// ```
/// use scytale::cipher::{Cipher, PlayfairCipher};
///
/// let cipher = PlayfairCipher::new("ORCHID");
/// let ciphertext = cipher.encrypt("HIKETHEFOOTHILLS").unwrap();
/// assert_eq!(ciphertext, "IOMAYEFDCVHPIOSCSX");
/// assert_eq!(cipher.decrypt(&ciphertext).unwrap(), "HIKETHEFOXOTHILXLS");
/// ```
#[derive(Debug, Clone)]
pub struct PlayfairCipher {
    matrix: PlayfairMatrix,
}

impl PlayfairCipher {
    /// Creates the cipher, deriving the matrix from the keyword.
    pub fn new(keyword: &str) -> Self {
        Self {
            matrix: PlayfairMatrix::new(keyword),
        }
    }

    /// Creates the cipher around an existing matrix.
    pub fn with_matrix(matrix: PlayfairMatrix) -> Self {
        Self { matrix }
    }

    /// The cipher's matrix.
    pub fn matrix(&self) -> &PlayfairMatrix {
        &self.matrix
    }

    /// Transforms one digraph. `step` is +1 for encryption (right/below
    /// neighbors) and -1 for decryption (left/above); the rectangle rule
    /// is its own inverse.
    fn transform_pair(&self, a: char, b: char, step: usize) -> Result<(char, char)> {
        let (row_a, col_a) = self.matrix.locate(a)?;
        let (row_b, col_b) = self.matrix.locate(b)?;

        let pair = if row_a == row_b {
            (
                self.matrix.at(row_a, col_a + step),
                self.matrix.at(row_b, col_b + step),
            )
        } else if col_a == col_b {
            (
                self.matrix.at(row_a + step, col_a),
                self.matrix.at(row_b + step, col_b),
            )
        } else {
            (self.matrix.at(row_a, col_b), self.matrix.at(row_b, col_a))
        };
        Ok(pair)
    }

    fn transform(&self, pairs: &[(char, char)], step: usize) -> Result<String> {
        let mut out = String::with_capacity(pairs.len() * 2);
        for &(a, b) in pairs {
            let (x, y) = self.transform_pair(a, b, step)?;
            out.push(x);
            out.push(y);
        }
        Ok(out)
    }
}

impl Cipher for PlayfairCipher {
    /// Encrypts after digraph splitting; the output always has even
    /// length and may contain inserted filler letters.
    fn encrypt(&self, text: &str) -> Result<String> {
        self.transform(&split_digraphs(text), 1)
    }

    /// Decrypts ciphertext pairwise. Inserted fillers from encryption
    /// are retained in the output.
    ///
    /// # Errors
    ///
    /// Returns `LengthMismatch` if the ciphertext has an odd number of
    /// letters — valid Playfair ciphertext is always paired.
    fn decrypt(&self, text: &str) -> Result<String> {
        let letters: Vec<char> = text.chars().filter_map(normalize_letter).collect();
        if letters.len() % 2 != 0 {
            return Err(CipherError::LengthMismatch {
                length: letters.len(),
                expected_multiple: 2,
            });
        }
        let pairs: Vec<(char, char)> = letters.chunks(2).map(|p| (p[0], p[1])).collect();
        // +4 ≡ -1 (mod 5): one cell left / above.
        self.transform(&pairs, 4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_construction() {
        let matrix = PlayfairMatrix::new("ORCHID");
        assert_eq!(matrix.at(0, 0), 'O');
        assert_eq!(matrix.at(0, 4), 'I');
        assert_eq!(matrix.at(1, 0), 'D');
        assert_eq!(matrix.at(4, 4), 'Z');
        assert_eq!(matrix.locate('A').unwrap(), (1, 1));
    }

    #[test]
    fn test_matrix_merges_j_and_dedups() {
        // "JUKEBOX JUDGE" normalizes to IUKEBOXIUDGE; duplicates drop.
        let matrix = PlayfairMatrix::new("JUKEBOX JUDGE");
        let as_string: String = (0..25).map(|i| matrix.at(i / 5, i % 5)).collect();
        assert_eq!(as_string, "IUKEBOXDGACFHLMNPQRSTVWYZ");
    }

    #[test]
    fn test_empty_keyword_gives_plain_alphabet() {
        let matrix = PlayfairMatrix::new("");
        let as_string: String = (0..25).map(|i| matrix.at(i / 5, i % 5)).collect();
        assert_eq!(as_string, PLAYFAIR_ALPHABET);
    }

    #[test]
    fn test_locate_unknown_letter() {
        let matrix = PlayfairMatrix::new("ORCHID");
        assert_eq!(matrix.locate('J'), Err(CipherError::LetterNotFound('J')));
    }

    #[test]
    fn test_matrix_display() {
        let rendered = PlayfairMatrix::new("ORCHID").to_string();
        assert!(rendered.starts_with("O R C H I\nD A B E F"));
    }

    #[test]
    fn test_split_digraphs_inserts_fillers() {
        assert_eq!(
            split_digraphs("BALLOON"),
            vec![('B', 'A'), ('L', 'X'), ('L', 'O'), ('O', 'N')]
        );
    }

    #[test]
    fn test_split_digraphs_pads_odd_length() {
        assert_eq!(split_digraphs("CAT"), vec![('C', 'A'), ('T', 'X')]);
    }

    #[test]
    fn test_split_digraphs_strips_and_normalizes() {
        assert_eq!(
            split_digraphs("jam jar!"),
            vec![('I', 'A'), ('M', 'I'), ('A', 'R')]
        );
    }

    #[test]
    fn test_split_digraphs_repeated_filler() {
        // A repeated X still pairs; the same-row rule keeps it reversible.
        assert_eq!(split_digraphs("XX"), vec![('X', 'X'), ('X', 'X')]);
    }

    #[test]
    fn test_encrypt_known_answer() {
        let cipher = PlayfairCipher::new("ORCHID");
        assert_eq!(
            cipher.encrypt("HIKETHEFOOTHILLS").unwrap(),
            "IOMAYEFDCVHPIOSCSX"
        );
    }

    #[test]
    fn test_decrypt_known_answer() {
        let cipher = PlayfairCipher::new("ORCHID");
        assert_eq!(
            cipher.decrypt("IOMAYEFDCVHPIOSCSX").unwrap(),
            "HIKETHEFOXOTHILXLS"
        );
    }

    #[test]
    fn test_rectangle_rule_is_self_inverse() {
        let cipher = PlayfairCipher::new("ORCHID");
        // K(2,1) and E(1,3) share neither row nor column.
        let (x, y) = cipher.transform_pair('K', 'E', 1).unwrap();
        assert_eq!((x, y), ('M', 'A'));
        assert_eq!(cipher.transform_pair(x, y, 4).unwrap(), ('K', 'E'));
    }

    #[test]
    fn test_roundtrip_retains_fillers() {
        let cipher = PlayfairCipher::new("LARKSPUR");
        let plaintext = "SUMMER MEETINGS";
        let decrypted = cipher
            .decrypt(&cipher.encrypt(plaintext).unwrap())
            .unwrap();
        assert_eq!(decrypted, "SUMXMERMEXETINGS");
    }

    #[test]
    fn test_decrypt_odd_length_fails() {
        let cipher = PlayfairCipher::new("ORCHID");
        assert_eq!(
            cipher.decrypt("ABC"),
            Err(CipherError::LengthMismatch {
                length: 3,
                expected_multiple: 2
            })
        );
    }

    #[test]
    fn test_with_matrix() {
        let matrix = PlayfairMatrix::new("ORCHID");
        let cipher = PlayfairCipher::with_matrix(matrix.clone());
        assert_eq!(cipher.matrix(), &matrix);
    }
}
