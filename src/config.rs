//! Machine configuration: which wheels go where, and which plugs are set.
//!
//! [`MachineConfig`] is the validated topology the [`Enigma`](crate::Enigma)
//! is built from. It owns the structural rules (rotor count, thin rotor and
//! reflector placement) so the signal path itself never re-checks them.

use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::{AvailableReflector, AvailableRotor};
use crate::error::{ConfigurationError, EnigmaError, PlugBoardError};
use crate::plug_board::{PlugBoard, PlugPair, MAX_PLUG_COUNT};
use crate::utils::alphabet::{index_letter, letter_index, ALPHABET_LEN};

/// Fewest rotors a machine can hold.
pub const MIN_ROTOR_COUNT: usize = 3;

/// Most rotors a machine can hold.
pub const MAX_ROTOR_COUNT: usize = 4;

/// Separator between wheel name and position in text settings.
const NAME_POSITION_SEPARATOR: char = ':';

const SLOT_NAMES: [&str; MIN_ROTOR_COUNT] = ["first", "second", "third"];

/// Splits `NAME:P` into its name and position letter.
fn split_setting(s: &str) -> Result<(&str, char), EnigmaError> {
    let malformed = || ConfigurationError::MalformedSetting(s.to_string());
    let (name, position) = s.split_once(NAME_POSITION_SEPARATOR).ok_or_else(malformed)?;
    let mut chars = position.chars();
    match (chars.next(), chars.next()) {
        (Some(p), None) => {
            letter_index(p)?;
            Ok((name, p))
        }
        _ => Err(malformed().into()),
    }
}

/// A rotor and its initial window letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotorSetting {
    rotor: AvailableRotor,
    position: char,
}

impl RotorSetting {
    /// # Errors
    /// Returns [`EnigmaError::NotUppercaseLetter`] if `position` is not in `A..=Z`.
    pub fn new(rotor: AvailableRotor, position: char) -> Result<Self, EnigmaError> {
        letter_index(position)?;
        Ok(RotorSetting { rotor, position })
    }

    /// Catalog rotor in this slot.
    pub fn rotor(&self) -> AvailableRotor {
        self.rotor
    }

    /// Window letter before the first key press.
    pub fn position(&self) -> char {
        self.position
    }
}

impl fmt::Display for RotorSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.rotor, NAME_POSITION_SEPARATOR, self.position)
    }
}

impl FromStr for RotorSetting {
    type Err = EnigmaError;

    /// Parses `NAME:P`, e.g. `"III:A"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, position) = split_setting(s)?;
        RotorSetting::new(name.parse()?, position)
    }
}

/// A reflector and its fixed position letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReflectorSetting {
    reflector: AvailableReflector,
    position: char,
}

impl ReflectorSetting {
    /// # Errors
    /// Returns [`EnigmaError::NotUppercaseLetter`] if `position` is not in `A..=Z`.
    pub fn new(reflector: AvailableReflector, position: char) -> Result<Self, EnigmaError> {
        letter_index(position)?;
        Ok(ReflectorSetting {
            reflector,
            position,
        })
    }

    /// Catalog reflector.
    pub fn reflector(&self) -> AvailableReflector {
        self.reflector
    }

    /// Fixed position letter.
    pub fn position(&self) -> char {
        self.position
    }
}

impl fmt::Display for ReflectorSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.reflector, NAME_POSITION_SEPARATOR, self.position
        )
    }
}

impl FromStr for ReflectorSetting {
    type Err = EnigmaError;

    /// Parses `NAME:P`, e.g. `"UKW:A"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, position) = split_setting(s)?;
        ReflectorSetting::new(name.parse()?, position)
    }
}

/// Validated machine topology.
///
/// Rotors are listed reflector side first: the last rotor is the fast one
/// that steps on every key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineConfig {
    rotors: Vec<RotorSetting>,
    reflector: ReflectorSetting,
    plugs: Vec<PlugPair>,
    debug: bool,
}

impl MachineConfig {
    /// Validates and assembles a configuration.
    ///
    /// # Errors
    /// - [`ConfigurationError::TooFewRotors`] / [`ConfigurationError::TooManyRotors`]
    ///   outside 3..=4 rotors.
    /// - [`ConfigurationError::ThinRotorMisplaced`] for a thin rotor in the
    ///   first three slots.
    /// - [`ConfigurationError::FourthRotorNotThin`] /
    ///   [`ConfigurationError::ThinReflectorRequired`] for a four-rotor
    ///   machine without thin fourth rotor and thin reflector.
    /// - [`ConfigurationError::ThinReflectorForbidden`] for a three-rotor
    ///   machine with a thin reflector.
    /// - Any [`PlugBoardError`] from the plug pairs.
    pub fn new(
        rotors: Vec<RotorSetting>,
        reflector: ReflectorSetting,
        plugs: Vec<PlugPair>,
    ) -> Result<Self, EnigmaError> {
        let count = rotors.len();
        if count < MIN_ROTOR_COUNT {
            return Err(ConfigurationError::TooFewRotors(count).into());
        }
        if count > MAX_ROTOR_COUNT {
            return Err(ConfigurationError::TooManyRotors(count).into());
        }

        for (setting, slot) in rotors.iter().zip(SLOT_NAMES) {
            if setting.rotor.is_thin() {
                return Err(ConfigurationError::ThinRotorMisplaced {
                    slot,
                    rotor: setting.rotor,
                }
                .into());
            }
        }

        if count == MAX_ROTOR_COUNT {
            let fourth = rotors[MAX_ROTOR_COUNT - 1].rotor;
            if !fourth.is_thin() {
                return Err(ConfigurationError::FourthRotorNotThin(fourth).into());
            }
            if !reflector.reflector.is_thin() {
                return Err(ConfigurationError::ThinReflectorRequired(reflector.reflector).into());
            }
        } else if reflector.reflector.is_thin() {
            return Err(ConfigurationError::ThinReflectorForbidden(reflector.reflector).into());
        }

        PlugBoard::new(&plugs)?;

        if !reflector.reflector.is_reciprocal() || reflector.position != 'A' {
            tracing::warn!(
                reflector = %reflector,
                "reflector is not self-reciprocal at this position; messages will not decode"
            );
        }

        Ok(MachineConfig {
            rotors,
            reflector,
            plugs,
            debug: false,
        })
    }

    /// Parses whitespace-separated settings.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigmacrypt::MachineConfig;
    ///
    /// let config = MachineConfig::parse("I:A II:A III:A", "UKW:A", "FG OP").unwrap();
    /// assert_eq!(config.rotors().len(), 3);
    /// assert_eq!(config.plugs().len(), 2);
    /// ```
    ///
    /// # Errors
    /// Any parse error of the individual settings, then any validation error
    /// of [`MachineConfig::new`].
    pub fn parse(rotors: &str, reflector: &str, plugs: &str) -> Result<Self, EnigmaError> {
        let rotors = rotors
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<RotorSetting>, _>>()?;
        let reflector = reflector.trim().parse()?;
        let plugs = plugs
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<PlugPair>, _>>()?;
        Self::new(rotors, reflector, plugs)
    }

    /// Generates a random three-rotor configuration from the thread-local
    /// generator.
    ///
    /// # Errors
    /// Returns [`PlugBoardError::TooManyPlugs`] if `plug_count` exceeds 10.
    pub fn random(plug_count: usize) -> Result<Self, EnigmaError> {
        Self::random_with(&mut rand::thread_rng(), plug_count)
    }

    /// Generates a random three-rotor configuration from `rng`.
    ///
    /// Picks three distinct normal rotors at random positions, a
    /// self-reciprocal normal reflector at `A`, and `plug_count` disjoint
    /// pairs. The result always decodes its own output.
    ///
    /// # Errors
    /// Returns [`PlugBoardError::TooManyPlugs`] if `plug_count` exceeds 10.
    pub fn random_with<R: Rng>(rng: &mut R, plug_count: usize) -> Result<Self, EnigmaError> {
        if plug_count > MAX_PLUG_COUNT {
            return Err(PlugBoardError::TooManyPlugs(plug_count).into());
        }

        let reflectors: Vec<AvailableReflector> = AvailableReflector::normal()
            .filter(|r| r.is_reciprocal())
            .collect();
        let reflector = reflectors[rng.gen_range(0..reflectors.len())];

        let normal: Vec<AvailableRotor> = AvailableRotor::normal().collect();
        let mut picked: Vec<AvailableRotor> = normal
            .choose_multiple(rng, MIN_ROTOR_COUNT)
            .copied()
            .collect();
        picked.shuffle(rng);
        let rotors = picked
            .into_iter()
            .map(|rotor| {
                let position = index_letter(rng.gen_range(0..ALPHABET_LEN as u8));
                RotorSetting::new(rotor, position)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut letters: Vec<char> = ('A'..='Z').collect();
        letters.shuffle(rng);
        let plugs = letters[..plug_count * 2]
            .chunks(2)
            .map(|pair| PlugPair::new(pair[0], pair[1]))
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(rotors, ReflectorSetting::new(reflector, 'A')?, plugs)
    }

    /// Enables or disables the per-letter debug trace.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Rotor settings, reflector side first.
    pub fn rotors(&self) -> &[RotorSetting] {
        &self.rotors
    }

    /// Reflector setting.
    pub fn reflector(&self) -> ReflectorSetting {
        self.reflector
    }

    /// Plug pairs in the order given.
    pub fn plugs(&self) -> &[PlugPair] {
        &self.plugs
    }

    /// Whether machines built from this config record a trace.
    pub fn debug(&self) -> bool {
        self.debug
    }

    /// Rotor settings in `NAME:P` form, space separated.
    pub fn rotors_string(&self) -> String {
        self.rotors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Plug pairs in `AB` form, space separated.
    pub fn plugs_string(&self) -> String {
        self.plugs
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for MachineConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "rotors: '{}'", self.rotors_string())?;
        writeln!(f, "reflector: '{}'", self.reflector)?;
        write!(f, "plugs: '{}'", self.plugs_string())
    }
}
