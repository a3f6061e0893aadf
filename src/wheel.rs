//! Wheel: a rotor or reflector mounted at a rotational offset.
//!
//! A [`Wheel`] wraps a [`PermutationTable`] with a position in `0..26`.
//! Rotors advance one position per [`Step::step`] and report a carry when
//! they wrap from `Z` back to `A`; reflectors never move.
//!
//! Stepping is a ripple-carry counter: the machine keeps its rotors in an
//! ordered slice (fastest first) and [`cascade`] walks it, stepping each
//! unit while the previous one carried. No wheel holds a reference to any
//! other.

use crate::error::EnigmaError;
use crate::permutation::PermutationTable;
use crate::utils::alphabet::{index_letter, letter_index, ALPHABET_LEN};

const MODULUS: u8 = ALPHABET_LEN as u8;

/// A unit that advances one position per keystroke.
pub trait Step {
    /// Advances by one position.
    ///
    /// # Returns
    /// `true` when this step completed a full revolution (wrapped to 0),
    /// meaning the next unit in the chain must step as well.
    fn step(&mut self) -> bool;
}

/// Steps `units` in order as an odometer: the first unit always steps,
/// each following unit steps only if the one before it carried.
///
/// # Returns
/// The number of units that stepped.
pub fn cascade<'a, S, I>(units: I) -> usize
where
    S: Step + 'a,
    I: IntoIterator<Item = &'a mut S>,
{
    let mut stepped = 0;
    for unit in units {
        stepped += 1;
        if !unit.step() {
            break;
        }
    }
    stepped
}

/// One wheel of the signal path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Wheel {
    /// A stepping rotor. `initial` is kept for [`Wheel::reset`].
    Rotor {
        table: PermutationTable,
        position: u8,
        initial: u8,
    },
    /// The reflector at the turning point of the path. Its backward pass is
    /// the identity and it never steps.
    Reflector { table: PermutationTable, position: u8 },
}

impl Wheel {
    /// Creates a rotor from its wiring and initial window letter.
    ///
    /// # Errors
    /// Returns [`EnigmaError::NotUppercaseLetter`] if `position` or a wiring
    /// character is outside `A..=Z`.
    pub fn rotor(wiring: &str, position: char) -> Result<Self, EnigmaError> {
        let position = letter_index(position)?;
        Ok(Wheel::Rotor {
            table: PermutationTable::new(wiring)?,
            position,
            initial: position,
        })
    }

    /// Creates a reflector from its wiring and fixed position letter.
    ///
    /// # Errors
    /// Returns [`EnigmaError::NotUppercaseLetter`] if `position` or a wiring
    /// character is outside `A..=Z`.
    pub fn reflector(wiring: &str, position: char) -> Result<Self, EnigmaError> {
        Ok(Wheel::Reflector {
            table: PermutationTable::new(wiring)?,
            position: letter_index(position)?,
        })
    }

    /// Current position in `0..26`.
    pub fn position(&self) -> u8 {
        match self {
            Wheel::Rotor { position, .. } | Wheel::Reflector { position, .. } => *position,
        }
    }

    /// Letter currently shown in the wheel's window.
    pub fn window(&self) -> char {
        index_letter(self.position())
    }

    /// The wiring of this wheel.
    pub fn table(&self) -> &PermutationTable {
        match self {
            Wheel::Rotor { table, .. } | Wheel::Reflector { table, .. } => table,
        }
    }

    /// Signal travelling toward the reflector: `table[(x + p) mod 26]`.
    pub fn encode_forward(&self, index: u8) -> u8 {
        let shifted = (index + self.position()) % MODULUS;
        self.table().encode(shifted)
    }

    /// Signal travelling back from the reflector.
    ///
    /// For a rotor this is `(inverse[x] - p + 26) mod 26`, the exact inverse
    /// of [`encode_forward`](Self::encode_forward) at the same position. For
    /// the reflector it is the identity.
    pub fn encode_backward(&self, index: u8) -> u8 {
        match self {
            Wheel::Rotor {
                table, position, ..
            } => (table.encode_inverse(index) + MODULUS - position) % MODULUS,
            Wheel::Reflector { .. } => index,
        }
    }

    /// Returns a rotor to its initial position. No-op for the reflector.
    pub fn reset(&mut self) {
        if let Wheel::Rotor {
            position, initial, ..
        } = self
        {
            *position = *initial;
        }
    }
}

impl Step for Wheel {
    fn step(&mut self) -> bool {
        match self {
            Wheel::Rotor { position, .. } => {
                *position = (*position + 1) % MODULUS;
                *position == 0
            }
            Wheel::Reflector { .. } => false,
        }
    }
}
