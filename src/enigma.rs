//! Enigma: the signal path composer.
//!
//! Assembles the plug board, the rotors and the reflector into one
//! per-letter transform, drives the stepping mechanism, and exposes
//! letter, word and message encoding.
//!
//! The path is two fixed stage lists evaluated in a loop:
//!
//! ```text
//! forward:  PlugBoard → Rotor(fast) → … → Rotor(slow) → Reflector
//! backward: Reflector → Rotor(slow) → … → Rotor(fast) → PlugBoard
//! ```
//!
//! Each rotor uses its live position in both directions, so the backward
//! leg undoes exactly what the forward leg did at the same key press.

use std::fmt;

use crate::config::MachineConfig;
use crate::error::EnigmaError;
use crate::plug_board::{PlugBoard, PlugPair};
use crate::utils::alphabet::{
    group_blocks, index_letter, is_single_ascii_uppercase_letter, letter_index,
};
use crate::wheel::{cascade, Wheel};

/// One stop of the signal on its way through the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    PlugBoard,
    /// Rotor by index, 0 being the fast operator-side rotor.
    Rotor(usize),
    Reflector,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::PlugBoard => write!(f, "plug board"),
            Stage::Rotor(i) => write!(f, "rotor {}", i),
            Stage::Reflector => write!(f, "reflector"),
        }
    }
}

/// Rotor cipher machine.
///
/// Encoding is self-reciprocal: a fresh machine with the same settings
/// turns the ciphertext back into the plaintext.
///
/// Every key press advances the rotors, so the machine is stateful and
/// `&mut self` is required to encode. Distinct instances share nothing.
///
/// # Examples
///
/// ```
/// use enigmacrypt::{Enigma, MachineConfig};
///
/// let config = MachineConfig::parse("I:A II:A III:A", "UKW:A", "").unwrap();
///
/// let mut encoder = Enigma::new(&config).unwrap();
/// let secret = encoder.encode_message("FOO BAR").unwrap();
/// assert_eq!(secret, "VSLR QF");
///
/// let mut decoder = Enigma::new(&config).unwrap();
/// assert_eq!(decoder.encode_message(&secret).unwrap(), "FOOB AR");
/// ```
#[derive(Debug, Clone)]
pub struct Enigma {
    plug_board: PlugBoard,
    /// Fast rotor first.
    rotors: Vec<Wheel>,
    reflector: Wheel,
    forward: Vec<Stage>,
    backward: Vec<Stage>,
    debug: bool,
    trace: Vec<String>,
}

impl Enigma {
    /// Builds a machine from a validated configuration.
    ///
    /// # Errors
    /// Propagates plug board errors; a validated configuration has none.
    pub fn new(config: &MachineConfig) -> Result<Self, EnigmaError> {
        let rotors: Vec<(&str, char)> = config
            .rotors()
            .iter()
            .map(|r| (r.rotor().wiring(), r.position()))
            .collect();
        let reflector = config.reflector();
        let mut enigma = Self::with_wirings(
            &rotors,
            (reflector.reflector().wiring(), reflector.position()),
            config.plugs(),
        )?;
        enigma.debug = config.debug();
        Ok(enigma)
    }

    /// Builds a machine from raw wirings, without topology checks.
    ///
    /// `rotors` lists `(wiring, initial position)` reflector side first;
    /// the last entry is the fast rotor.
    ///
    /// # Errors
    /// - [`EnigmaError::NotUppercaseLetter`] for a position or wiring
    ///   character outside `A..=Z`.
    /// - [`ConfigurationError::MalformedWiring`](crate::error::ConfigurationError::MalformedWiring)
    ///   for a wiring that is not a permutation of the alphabet.
    /// - [`EnigmaError::PlugBoard`] for invalid plug pairs.
    pub fn with_wirings(
        rotors: &[(&str, char)],
        reflector: (&str, char),
        plugs: &[PlugPair],
    ) -> Result<Self, EnigmaError> {
        let reflector = Wheel::reflector(reflector.0, reflector.1)?;

        // Each rotor carries into the one built before it, so the list is
        // reversed to keep the fast rotor at index 0.
        let mut wheels = rotors
            .iter()
            .map(|&(wiring, position)| Wheel::rotor(wiring, position))
            .collect::<Result<Vec<_>, _>>()?;
        wheels.reverse();

        let plug_board = PlugBoard::new(plugs)?;

        let mut forward = Vec::with_capacity(wheels.len() + 2);
        forward.push(Stage::PlugBoard);
        forward.extend((0..wheels.len()).map(Stage::Rotor));
        forward.push(Stage::Reflector);

        let mut backward = Vec::with_capacity(wheels.len() + 2);
        backward.push(Stage::Reflector);
        backward.extend((0..wheels.len()).rev().map(Stage::Rotor));
        backward.push(Stage::PlugBoard);

        tracing::debug!(
            rotors = wheels.len(),
            plugs = plug_board.plug_count(),
            "machine assembled"
        );

        Ok(Enigma {
            plug_board,
            rotors: wheels,
            reflector,
            forward,
            backward,
            debug: false,
            trace: Vec::new(),
        })
    }

    /// Enables or disables the debug trace.
    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }

    /// Stages toward the reflector, in traversal order.
    pub fn forward_stages(&self) -> &[Stage] {
        &self.forward
    }

    /// Stages back from the reflector, in traversal order.
    pub fn backward_stages(&self) -> &[Stage] {
        &self.backward
    }

    /// Current window letters, in configured order (fast rotor last).
    pub fn positions(&self) -> Vec<char> {
        self.rotors.iter().rev().map(Wheel::window).collect()
    }

    /// Returns every rotor to its initial position.
    ///
    /// The machine then behaves like a freshly built one with the same
    /// settings. The trace is left untouched.
    pub fn reset(&mut self) {
        for rotor in self.rotors.iter_mut() {
            rotor.reset();
        }
    }

    /// Lines recorded since the last [`take_trace`](Self::take_trace).
    pub fn trace(&self) -> &[String] {
        &self.trace
    }

    /// Drains and returns the recorded trace.
    pub fn take_trace(&mut self) -> Vec<String> {
        std::mem::take(&mut self.trace)
    }

    /// Advances the fast rotor, carrying into slower rotors on wrap.
    fn step(&mut self) {
        cascade(self.rotors.iter_mut());
    }

    /// Encodes a single-letter string.
    ///
    /// The rotors step before the input is checked, as on the physical
    /// machine where the key press moves the rotors: a rejected call still
    /// advances the mechanism.
    ///
    /// # Errors
    /// Returns [`EnigmaError::NotAsciiLetter`] unless `letter`, upper-cased,
    /// is exactly one character in `A..=Z`.
    pub fn encode_letter(&mut self, letter: &str) -> Result<char, EnigmaError> {
        self.step();

        let upper = letter.to_uppercase();
        if !is_single_ascii_uppercase_letter(&upper) {
            return Err(EnigmaError::NotAsciiLetter(letter.to_string()));
        }
        self.encode_stepped(char::from(upper.as_bytes()[0]))
    }

    /// Encodes one character; same contract as
    /// [`encode_letter`](Self::encode_letter).
    ///
    /// Characters whose upper case is a single `A..=Z` letter are accepted,
    /// so `ı` encodes like `I`.
    ///
    /// # Errors
    /// Returns [`EnigmaError::NotAsciiLetter`] unless `letter`, upper-cased,
    /// is one character in `A..=Z`.
    pub fn encode_char(&mut self, letter: char) -> Result<char, EnigmaError> {
        self.encode_letter(letter.encode_utf8(&mut [0; 4]))
    }

    /// Encodes each character of `word` in order.
    ///
    /// # Errors
    /// Stops at the first character that is not an ASCII letter and returns
    /// [`EnigmaError::NotAsciiLetter`]; the rotors keep the positions
    /// reached so far.
    pub fn encode_word(&mut self, word: &str) -> Result<String, EnigmaError> {
        word.chars().map(|c| self.encode_char(c)).collect()
    }

    /// Encodes a message and formats it in four-letter blocks, four blocks
    /// per line.
    ///
    /// Whitespace in the input is discarded before encoding.
    ///
    /// # Errors
    /// Returns [`EnigmaError::NotAsciiLetter`] for the first non-letter
    /// character; no partial output is returned.
    pub fn encode_message(&mut self, message: &str) -> Result<String, EnigmaError> {
        let letters = message
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| self.encode_char(c))
            .collect::<Result<Vec<char>, _>>()?;
        Ok(group_blocks(&letters))
    }

    /// Runs an uppercase letter through the path at the current positions.
    fn encode_stepped(&mut self, letter: char) -> Result<char, EnigmaError> {
        self.record(|| format!("Encode {}:", letter));

        let mut index = letter_index(letter)?;
        let mut lines = Vec::new();
        let path = self
            .forward
            .iter()
            .map(|&stage| (stage, true))
            .chain(self.backward.iter().map(|&stage| (stage, false)));
        for (stage, toward_reflector) in path {
            let out = self.apply(stage, index, toward_reflector);
            if self.debug {
                lines.push(format!(
                    "{}: {} -> {}",
                    stage,
                    index_letter(index),
                    index_letter(out)
                ));
            }
            index = out;
        }
        self.trace.extend(lines);

        let encoded = index_letter(index);
        self.record(|| format!("Encoded: {} -> {}", letter, encoded));
        Ok(encoded)
    }

    /// Applies one stage in the given direction.
    fn apply(&self, stage: Stage, index: u8, toward_reflector: bool) -> u8 {
        let out = match (stage, toward_reflector) {
            (Stage::PlugBoard, true) => self.plug_board.encode(index),
            (Stage::PlugBoard, false) => self.plug_board.encode_backward(index),
            (Stage::Rotor(i), true) => self.rotors[i].encode_forward(index),
            (Stage::Rotor(i), false) => self.rotors[i].encode_backward(index),
            (Stage::Reflector, true) => self.reflector.encode_forward(index),
            (Stage::Reflector, false) => self.reflector.encode_backward(index),
        };
        tracing::trace!(
            stage = %stage,
            from = %index_letter(index),
            to = %index_letter(out),
            "signal"
        );
        out
    }

    fn record(&mut self, line: impl FnOnce() -> String) {
        if self.debug {
            self.trace.push(line());
        }
    }
}
