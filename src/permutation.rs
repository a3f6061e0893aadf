//! PermutationTable: forward and inverse lookup for one wheel's wiring.

use crate::error::{ConfigurationError, EnigmaError};
use crate::utils::alphabet::{letter_index, ALPHABET_LEN};

/// Fixed substitution built once from a 26-letter wiring string.
///
/// Index `i` of the wiring names the letter contact `i` is wired to, so
/// `"EKMF..."` maps `A → E`, `B → K`, and so on. The inverse map is filled
/// at construction, which keeps both directions O(1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermutationTable {
    forward: [u8; ALPHABET_LEN],
    inverse: [u8; ALPHABET_LEN],
}

impl PermutationTable {
    /// Builds the table from `wiring`.
    ///
    /// # Errors
    /// - [`EnigmaError::NotUppercaseLetter`] if the wiring contains a
    ///   character outside `A..=Z`.
    /// - [`ConfigurationError::MalformedWiring`] unless the wiring has 26
    ///   letters with none repeated.
    pub fn new(wiring: &str) -> Result<Self, EnigmaError> {
        let malformed = || ConfigurationError::MalformedWiring(wiring.to_string());
        if wiring.chars().count() != ALPHABET_LEN {
            return Err(malformed().into());
        }

        let mut forward = [0u8; ALPHABET_LEN];
        let mut inverse = [0u8; ALPHABET_LEN];
        let mut seen = [false; ALPHABET_LEN];
        for (raw, letter) in wiring.chars().enumerate() {
            let encoded = letter_index(letter)?;
            if std::mem::replace(&mut seen[encoded as usize], true) {
                return Err(malformed().into());
            }
            forward[raw] = encoded;
            inverse[encoded as usize] = raw as u8;
        }
        Ok(PermutationTable { forward, inverse })
    }

    /// Forward-mapped index of `index` (`0..26`).
    pub fn encode(&self, index: u8) -> u8 {
        self.forward[index as usize]
    }

    /// Inverse-mapped index of `index` (`0..26`).
    pub fn encode_inverse(&self, index: u8) -> u8 {
        self.inverse[index as usize]
    }

    /// Returns `true` if the table is its own inverse.
    pub fn is_involution(&self) -> bool {
        self.forward == self.inverse
    }
}
