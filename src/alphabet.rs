//! Modular letter arithmetic shared by every cipher.

/// Rotates a letter within its own case's 26-letter range.
///
/// Non-letters are returned unchanged, so callers can stream arbitrary
/// text through without filtering first. Negative amounts rotate
/// backwards.
///
/// # Examples
///
/// ```
/// use scytale::alphabet::shift_letter;
///
/// assert_eq!(shift_letter('A', 3), 'D');
/// assert_eq!(shift_letter('z', 1), 'a');
/// assert_eq!(shift_letter('D', -3), 'A');
/// assert_eq!(shift_letter('!', 13), '!');
/// ```
pub fn shift_letter(c: char, amount: i32) -> char {
    if !c.is_ascii_alphabetic() {
        return c;
    }
    let base = if c.is_ascii_lowercase() { b'a' } else { b'A' };
    let offset = (c as u8 - base) as i32;
    // Reduce the amount first so the sum cannot overflow i32.
    let rotated = ((offset + amount.rem_euclid(26)) % 26) as u8;
    (base + rotated) as char
}

/// Returns the 0-based alphabet index of a letter, ignoring case.
pub fn letter_index(c: char) -> Option<usize> {
    if c.is_ascii_alphabetic() {
        Some((c.to_ascii_uppercase() as u8 - b'A') as usize)
    } else {
        None
    }
}
