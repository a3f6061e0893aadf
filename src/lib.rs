//! Rotor cipher machine emulator.
//!
//! Reproduces the letter-by-letter behaviour of an Enigma-style machine:
//! a stack of substitution rotors, a reflector, and a plug board, with the
//! rotors advancing like an odometer on every key press.
//!
//! # Architecture
//!
//! ```text
//! PermutationTable  (fixed wiring, forward + inverse lookup)
//!     ↑ wrapped by
//! Wheel             (Rotor { position } | Reflector, ripple-carry stepping)
//!     ↑ stacked with
//! PlugBoard         (≤ 10 symmetric swaps, traversed on entry and exit)
//!     ↑ composed by
//! Enigma            (stage lists, stepping, letter/word/message encoding)
//! ```
//!
//! [`MachineConfig`] validates the topology against the wiring
//! [`catalog`] before a machine is built.
//!
//! # Examples
//!
//! Encode, then decode with a fresh machine at the same settings:
//!
//! ```
//! use enigmacrypt::{Enigma, MachineConfig};
//!
//! let config =
//!     MachineConfig::parse("I:A II:A III:A", "UKW:A", "FG OP AC BD RS").unwrap();
//!
//! let mut encoder = Enigma::new(&config).unwrap();
//! let secret = encoder.encode_message("FOO BAR").unwrap();
//! assert_eq!(secret, "PMJL KE");
//!
//! let mut decoder = Enigma::new(&config).unwrap();
//! assert_eq!(decoder.encode_message(&secret).unwrap(), "FOOB AR");
//! ```
//!
//! Single letters step the rotors too:
//!
//! ```
//! use enigmacrypt::{Enigma, MachineConfig};
//!
//! let config = MachineConfig::parse("I:A II:A III:A", "UKW:A", "").unwrap();
//! let mut enigma = Enigma::new(&config).unwrap();
//!
//! assert_eq!(enigma.encode_letter("A").unwrap(), 'I');
//! assert_ne!(enigma.encode_letter("A").unwrap(), 'I');
//! ```

#![deny(clippy::all)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod permutation;
pub mod plug_board;
pub mod utils;
pub mod wheel;

mod enigma;

pub use catalog::{AvailableReflector, AvailableRotor};
pub use config::{MachineConfig, ReflectorSetting, RotorSetting};
pub use enigma::{Enigma, Stage};
pub use error::{ConfigurationError, EnigmaError, PlugBoardError};
pub use plug_board::{PlugBoard, PlugPair};
