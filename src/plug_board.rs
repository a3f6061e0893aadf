//! PlugBoard: symmetric letter swaps at both ends of the signal path.

use std::fmt;
use std::str::FromStr;

use crate::error::{ConfigurationError, EnigmaError, PlugBoardError};
use crate::utils::alphabet::{index_letter, letter_index, ALPHABET_LEN};

/// Maximum number of plug pairs a board accepts.
pub const MAX_PLUG_COUNT: usize = 10;

/// A cable joining two distinct letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlugPair {
    left: char,
    right: char,
}

impl PlugPair {
    /// Creates a pair from two uppercase letters.
    ///
    /// # Errors
    /// - [`EnigmaError::NotUppercaseLetter`] if either side is outside `A..=Z`.
    /// - [`PlugBoardError::DuplicatedLetter`] if both sides are the same letter.
    pub fn new(left: char, right: char) -> Result<Self, EnigmaError> {
        letter_index(left)?;
        letter_index(right)?;
        if left == right {
            return Err(PlugBoardError::DuplicatedLetter(left).into());
        }
        Ok(PlugPair { left, right })
    }

    /// First letter as given.
    pub fn left(&self) -> char {
        self.left
    }

    /// Second letter as given.
    pub fn right(&self) -> char {
        self.right
    }
}

impl fmt::Display for PlugPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.left, self.right)
    }
}

impl FromStr for PlugPair {
    type Err = EnigmaError;

    /// Parses the two-letter form, e.g. `"AB"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(left), Some(right), None) => PlugPair::new(left, right),
            _ => Err(ConfigurationError::MalformedSetting(s.to_string()).into()),
        }
    }
}

/// Involution over the alphabet: configured pairs swap, all other letters
/// pass through.
///
/// The same board is traversed on the way in and on the way out of the
/// machine; being its own inverse, one table serves both directions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlugBoard {
    wiring: [u8; ALPHABET_LEN],
    plug_count: usize,
}

impl PlugBoard {
    /// Builds a board from up to ten disjoint pairs.
    ///
    /// The board is assembled in a local table and only returned once every
    /// pair has been accepted.
    ///
    /// # Errors
    /// - [`PlugBoardError::TooManyPlugs`] if more than [`MAX_PLUG_COUNT`] pairs.
    /// - [`PlugBoardError::DuplicatedLetter`] if a letter appears in two pairs.
    pub fn new(plugs: &[PlugPair]) -> Result<Self, EnigmaError> {
        if plugs.len() > MAX_PLUG_COUNT {
            return Err(PlugBoardError::TooManyPlugs(plugs.len()).into());
        }

        let mut wiring = [0u8; ALPHABET_LEN];
        for (i, slot) in wiring.iter_mut().enumerate() {
            *slot = i as u8;
        }

        for plug in plugs {
            let left = letter_index(plug.left)?;
            let right = letter_index(plug.right)?;
            for (letter, index) in [(plug.left, left), (plug.right, right)] {
                if wiring[index as usize] != index {
                    return Err(PlugBoardError::DuplicatedLetter(letter).into());
                }
            }
            wiring[left as usize] = right;
            wiring[right as usize] = left;
        }

        Ok(PlugBoard {
            wiring,
            plug_count: plugs.len(),
        })
    }

    /// Number of configured pairs.
    pub fn plug_count(&self) -> usize {
        self.plug_count
    }

    /// Partner of `index`, or `index` itself if it is not plugged.
    pub fn encode(&self, index: u8) -> u8 {
        self.wiring[index as usize]
    }

    /// Same as [`encode`](Self::encode).
    pub fn encode_backward(&self, index: u8) -> u8 {
        self.encode(index)
    }

    /// Letter-level convenience over [`encode`](Self::encode).
    pub fn swap(&self, letter: char) -> Result<char, EnigmaError> {
        Ok(index_letter(self.encode(letter_index(letter)?)))
    }
}
