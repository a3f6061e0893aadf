//! Letter and index conversion over the 26-letter Latin alphabet.
//!
//! The signal path works on indices `0..26`; everything the operator types
//! or reads is an uppercase ASCII letter. These helpers are the only place
//! the two representations meet.

use crate::error::EnigmaError;

/// Number of letters on the keyboard and contacts on every wheel.
pub const ALPHABET_LEN: usize = 26;

/// Letters per block in a formatted message.
pub(crate) const BLOCK_LEN: usize = 4;

/// Blocks per line in a formatted message.
pub(crate) const BLOCKS_PER_LINE: usize = 4;

/// Returns `true` if `letter` is exactly one character in `A..=Z`.
pub fn is_single_ascii_uppercase_letter(letter: &str) -> bool {
    let mut chars = letter.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_uppercase())
}

/// Converts an uppercase letter to its 0-based index (`A` → 0).
///
/// # Errors
/// Returns [`EnigmaError::NotUppercaseLetter`] for anything outside `A..=Z`.
pub fn letter_index(letter: char) -> Result<u8, EnigmaError> {
    if letter.is_ascii_uppercase() {
        Ok(letter as u8 - b'A')
    } else {
        Err(EnigmaError::NotUppercaseLetter(letter.to_string()))
    }
}

/// Converts an index in `0..26` back to its uppercase letter.
///
/// Callers guarantee the range; indices only ever come out of the
/// permutation tables.
pub fn index_letter(index: u8) -> char {
    debug_assert!((index as usize) < ALPHABET_LEN);
    (b'A' + index) as char
}

/// Groups `letters` into blocks of four separated by spaces, four blocks
/// per line.
///
/// `"ABCDEFGHIJKLMNOPQR"` becomes `"ABCD EFGH IJKL MNOP\nQR"`.
pub(crate) fn group_blocks(letters: &[char]) -> String {
    letters
        .chunks(BLOCK_LEN * BLOCKS_PER_LINE)
        .map(|line| {
            line.chunks(BLOCK_LEN)
                .map(|block| block.iter().collect::<String>())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
