//! Error types for the enigmacrypt library.

use thiserror::Error;

use crate::catalog::{AvailableReflector, AvailableRotor};

/// Errors produced by the enigmacrypt library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnigmaError {
    /// Input to a letter encoder is not exactly one A-Z letter once upper-cased.
    #[error("\"{0}\" is not an ASCII letter.")]
    NotAsciiLetter(String),
    /// A letter to index conversion received something other than one A-Z letter.
    #[error("\"{0}\" is not an ASCII uppercase letter.")]
    NotUppercaseLetter(String),
    /// The plug board could not be built.
    #[error(transparent)]
    PlugBoard(#[from] PlugBoardError),
    /// The machine topology or its textual form is invalid.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

/// Plug board construction failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlugBoardError {
    /// More than [`MAX_PLUG_COUNT`](crate::plug_board::MAX_PLUG_COUNT) pairs.
    #[error("PlugBoard can't contain more than 10 plugs, {0} given")]
    TooManyPlugs(usize),
    /// A letter is used by more than one plug, or plugged into itself.
    #[error("Letter \"{0}\" is plugged more than once")]
    DuplicatedLetter(char),
}

/// Machine topology and setting parse failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// Fewer than three rotors.
    #[error("Enigma needs at least three rotors, {0} given")]
    TooFewRotors(usize),
    /// More than four rotors.
    #[error("Enigma needs at most four rotors, {0} given")]
    TooManyRotors(usize),
    /// A thin rotor was placed in one of the first three slots.
    #[error("{slot} rotor must not be a thin rotor, {rotor} given")]
    ThinRotorMisplaced {
        slot: &'static str,
        rotor: AvailableRotor,
    },
    /// The fourth rotor of a four-rotor machine is not thin.
    #[error("fourth rotor must be a thin rotor, {0} given")]
    FourthRotorNotThin(AvailableRotor),
    /// Four rotors were given with a normal reflector.
    #[error("Reflector must be a thin reflector when four rotors given, {0} given")]
    ThinReflectorRequired(AvailableReflector),
    /// Three rotors were given with a thin reflector.
    #[error("Reflector must not be a thin reflector when three rotors given, {0} given")]
    ThinReflectorForbidden(AvailableReflector),
    /// No rotor with that name in the catalog.
    #[error("Unknown rotor \"{0}\"")]
    UnknownRotor(String),
    /// No reflector with that name in the catalog.
    #[error("Unknown reflector \"{0}\"")]
    UnknownReflector(String),
    /// A setting is not of the form `NAME:P` (or `AB` for a plug).
    #[error("Malformed setting \"{0}\"")]
    MalformedSetting(String),
    /// A wiring is not a permutation of the 26 letters.
    #[error("Wiring \"{0}\" is not a permutation of A-Z")]
    MalformedWiring(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_not_ascii_letter() {
        let err = EnigmaError::NotAsciiLetter("!".to_string());
        assert_eq!(format!("{}", err), "\"!\" is not an ASCII letter.");
    }

    #[test]
    fn test_display_not_uppercase_letter() {
        let err = EnigmaError::NotUppercaseLetter("a".to_string());
        assert_eq!(format!("{}", err), "\"a\" is not an ASCII uppercase letter.");
    }

    #[test]
    fn test_display_plug_board_is_transparent() {
        let err: EnigmaError = PlugBoardError::TooManyPlugs(11).into();
        assert_eq!(
            format!("{}", err),
            "PlugBoard can't contain more than 10 plugs, 11 given"
        );
    }

    #[test]
    fn test_display_malformed_wiring() {
        let err: EnigmaError = ConfigurationError::MalformedWiring("B".to_string()).into();
        assert_eq!(format!("{}", err), "Wiring \"B\" is not a permutation of A-Z");
    }

    #[test]
    fn test_display_thin_rotor_misplaced() {
        let err = ConfigurationError::ThinRotorMisplaced {
            slot: "second",
            rotor: AvailableRotor::Beta,
        };
        assert_eq!(
            format!("{}", err),
            "second rotor must not be a thin rotor, BETA given"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            EnigmaError::from(PlugBoardError::DuplicatedLetter('A')),
            EnigmaError::PlugBoard(PlugBoardError::DuplicatedLetter('A'))
        );
        assert_ne!(
            EnigmaError::NotAsciiLetter("1".to_string()),
            EnigmaError::NotUppercaseLetter("1".to_string())
        );
    }
}
