//! Catalog of historical rotor and reflector wirings.
//!
//! Every wiring is a 26-letter permutation of `A..=Z`. Tests assert that;
//! the machine trusts the catalog at run time.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigurationError;
use crate::permutation::PermutationTable;

/// Rotors that can be mounted in a machine.
///
/// `BETA` and `GAMMA` are thin rotors: they fit only in the fourth slot of
/// a four-rotor machine.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AvailableRotor {
    IC,
    IIC,
    IIIC,
    I,
    II,
    III,
    IK,
    IIK,
    IIIK,
    I1930,
    II1930,
    III1930,
    IV1938,
    V1938,
    VI1939,
    VII1939,
    VIII1939,
    Beta,
    Gamma,
}

impl AvailableRotor {
    /// Every rotor, in catalog order.
    pub const ALL: [AvailableRotor; 19] = [
        AvailableRotor::IC,
        AvailableRotor::IIC,
        AvailableRotor::IIIC,
        AvailableRotor::I,
        AvailableRotor::II,
        AvailableRotor::III,
        AvailableRotor::IK,
        AvailableRotor::IIK,
        AvailableRotor::IIIK,
        AvailableRotor::I1930,
        AvailableRotor::II1930,
        AvailableRotor::III1930,
        AvailableRotor::IV1938,
        AvailableRotor::V1938,
        AvailableRotor::VI1939,
        AvailableRotor::VII1939,
        AvailableRotor::VIII1939,
        AvailableRotor::Beta,
        AvailableRotor::Gamma,
    ];

    /// Catalog name, as used in `NAME:P` settings.
    pub fn name(self) -> &'static str {
        match self {
            AvailableRotor::IC => "IC",
            AvailableRotor::IIC => "IIC",
            AvailableRotor::IIIC => "IIIC",
            AvailableRotor::I => "I",
            AvailableRotor::II => "II",
            AvailableRotor::III => "III",
            AvailableRotor::IK => "IK",
            AvailableRotor::IIK => "IIK",
            AvailableRotor::IIIK => "IIIK",
            AvailableRotor::I1930 => "I1930",
            AvailableRotor::II1930 => "II1930",
            AvailableRotor::III1930 => "III1930",
            AvailableRotor::IV1938 => "IV1938",
            AvailableRotor::V1938 => "V1938",
            AvailableRotor::VI1939 => "VI1939",
            AvailableRotor::VII1939 => "VII1939",
            AvailableRotor::VIII1939 => "VIII1939",
            AvailableRotor::Beta => "BETA",
            AvailableRotor::Gamma => "GAMMA",
        }
    }

    /// The 26-letter wiring.
    pub fn wiring(self) -> &'static str {
        match self {
            AvailableRotor::IC => "DMTWSILRUYQNKFEJCAZBPGXOHV",
            AvailableRotor::IIC => "HQZGPJTMOBLNCIFDYAWVEUSRKX",
            AvailableRotor::IIIC => "UQNTLSZFMREHDPXKIBVYGJCWOA",
            AvailableRotor::I => "JGDQOXUSCAMIFRVTPNEWKBLZYH",
            AvailableRotor::II => "NTZPSFBOKMWRCJDIVLAEYUXHGQ",
            AvailableRotor::III => "JVIUBHTCDYAKEQZPOSGXNRMWFL",
            AvailableRotor::IK => "PEZUOHXSCVFMTBGLRINQJWAYDK",
            AvailableRotor::IIK => "ZOUESYDKFWPCIQXHMVBLGNJRAT",
            AvailableRotor::IIIK => "EHRVXGAOBQUSIMZFLYNWKTPDJC",
            AvailableRotor::I1930 => "EKMFLGDQVZNTOWYHXUSPAIBRCJ",
            AvailableRotor::II1930 => "AJDKSIRUXBLHWTMCQGZNPYFVOE",
            AvailableRotor::III1930 => "BDFHJLCPRTXVZNYEIWGAKMUSQO",
            AvailableRotor::IV1938 => "ESOVPZJAYQUIRHXLNFTGKDCMWB",
            AvailableRotor::V1938 => "VZBRGITYUPSDNHLXAWMJQOFECK",
            AvailableRotor::VI1939 => "JPGVOUMFYQBENHZRDKASXLICTW",
            AvailableRotor::VII1939 => "NZJHGRCXMYSWBOUFAIVLPEKQDT",
            AvailableRotor::VIII1939 => "FKQHTLXOCBJSPDZRAMEWNIUYGV",
            AvailableRotor::Beta => "LEYJVCNIXWPBQMDRTAKZGFUHOS",
            AvailableRotor::Gamma => "FSOKANUERHMBTIYCWLQPZXVGJD",
        }
    }

    /// Returns `true` for the thin fourth-slot rotors.
    pub fn is_thin(self) -> bool {
        matches!(self, AvailableRotor::Beta | AvailableRotor::Gamma)
    }

    /// Rotors allowed in the first three slots.
    pub fn normal() -> impl Iterator<Item = AvailableRotor> {
        Self::ALL.into_iter().filter(|r| !r.is_thin())
    }

    /// Rotors allowed only in the fourth slot.
    pub fn thin() -> impl Iterator<Item = AvailableRotor> {
        Self::ALL.into_iter().filter(|r| r.is_thin())
    }
}

impl fmt::Display for AvailableRotor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AvailableRotor {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.name() == s)
            .ok_or_else(|| ConfigurationError::UnknownRotor(s.to_string()))
    }
}

/// Reflectors that can close the signal path.
///
/// `REFBTHIN` and `REFCTHIN` are thin reflectors, required by (and only
/// allowed with) four-rotor machines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AvailableReflector {
    Ukw,
    Etw,
    UkwK,
    RefA,
    RefB,
    RefC,
    RefBThin,
    RefCThin,
    RefEtw,
}

impl AvailableReflector {
    /// Every reflector, in catalog order.
    pub const ALL: [AvailableReflector; 9] = [
        AvailableReflector::Ukw,
        AvailableReflector::Etw,
        AvailableReflector::UkwK,
        AvailableReflector::RefA,
        AvailableReflector::RefB,
        AvailableReflector::RefC,
        AvailableReflector::RefBThin,
        AvailableReflector::RefCThin,
        AvailableReflector::RefEtw,
    ];

    /// Catalog name, as used in `NAME:P` settings.
    pub fn name(self) -> &'static str {
        match self {
            AvailableReflector::Ukw => "UKW",
            AvailableReflector::Etw => "ETW",
            AvailableReflector::UkwK => "UKWK",
            AvailableReflector::RefA => "REFA",
            AvailableReflector::RefB => "REFB",
            AvailableReflector::RefC => "REFC",
            AvailableReflector::RefBThin => "REFBTHIN",
            AvailableReflector::RefCThin => "REFCTHIN",
            AvailableReflector::RefEtw => "REFETW",
        }
    }

    /// The 26-letter wiring.
    pub fn wiring(self) -> &'static str {
        match self {
            AvailableReflector::Ukw => "QYHOGNECVPUZTFDJAXWMKISRBL",
            AvailableReflector::Etw => "QWERTZUIOASDFGHJKPYXCVBNML",
            AvailableReflector::UkwK => "IMETCGFRAYSQBZXWLHKDVUPOJN",
            AvailableReflector::RefA => "EJMZALYXVBWFCRQUONTSPIKHGD",
            AvailableReflector::RefB => "YRUHQSLDPXNGOKMIEBFZCWVJAT",
            AvailableReflector::RefC => "FVPJIAOYEDRZXWGCTKUQSBNMHL",
            AvailableReflector::RefBThin => "ENKQAUYWJICOPBLMDXZVFTHRGS",
            AvailableReflector::RefCThin => "RDOBJNTKVEHMLFCWZAXGYIPSUQ",
            AvailableReflector::RefEtw => "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
        }
    }

    /// Returns `true` for the thin reflectors.
    pub fn is_thin(self) -> bool {
        matches!(
            self,
            AvailableReflector::RefBThin | AvailableReflector::RefCThin
        )
    }

    /// Returns `true` if the wiring is its own inverse.
    ///
    /// Only a self-reciprocal reflector (at position `A`) gives a machine
    /// that decodes its own output. `ETW` is an entry wheel wiring and is
    /// not.
    pub fn is_reciprocal(self) -> bool {
        PermutationTable::new(self.wiring()).is_ok_and(|table| table.is_involution())
    }

    /// Reflectors allowed with three rotors.
    pub fn normal() -> impl Iterator<Item = AvailableReflector> {
        Self::ALL.into_iter().filter(|r| !r.is_thin())
    }

    /// Reflectors allowed with four rotors.
    pub fn thin() -> impl Iterator<Item = AvailableReflector> {
        Self::ALL.into_iter().filter(|r| r.is_thin())
    }
}

impl fmt::Display for AvailableReflector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AvailableReflector {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.name() == s)
            .ok_or_else(|| ConfigurationError::UnknownReflector(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_permutation(wiring: &str) -> bool {
        let mut seen = [false; 26];
        wiring.len() == 26
            && wiring.bytes().all(|b| {
                b.is_ascii_uppercase() && !std::mem::replace(&mut seen[(b - b'A') as usize], true)
            })
    }

    #[test]
    fn test_rotor_wirings_are_permutations() {
        for rotor in AvailableRotor::ALL {
            assert!(is_permutation(rotor.wiring()), "{} is not a permutation", rotor);
        }
    }

    #[test]
    fn test_reflector_wirings_are_permutations() {
        for reflector in AvailableReflector::ALL {
            assert!(
                is_permutation(reflector.wiring()),
                "{} is not a permutation",
                reflector
            );
        }
    }

    #[test]
    fn test_names_are_unique_and_parse_back() {
        for rotor in AvailableRotor::ALL {
            assert_eq!(rotor.name().parse::<AvailableRotor>(), Ok(rotor));
        }
        for reflector in AvailableReflector::ALL {
            assert_eq!(reflector.name().parse::<AvailableReflector>(), Ok(reflector));
        }
    }

    #[test]
    fn test_unknown_names() {
        assert_eq!(
            "IX".parse::<AvailableRotor>(),
            Err(ConfigurationError::UnknownRotor("IX".to_string()))
        );
        assert_eq!(
            "ukw".parse::<AvailableReflector>(),
            Err(ConfigurationError::UnknownReflector("ukw".to_string()))
        );
    }

    #[test]
    fn test_thin_partitions() {
        let thin: Vec<_> = AvailableRotor::thin().collect();
        assert_eq!(thin, vec![AvailableRotor::Beta, AvailableRotor::Gamma]);
        assert_eq!(AvailableRotor::normal().count(), 17);

        let thin: Vec<_> = AvailableReflector::thin().collect();
        assert_eq!(
            thin,
            vec![AvailableReflector::RefBThin, AvailableReflector::RefCThin]
        );
    }

    #[test]
    fn test_reciprocal_reflectors() {
        let non_reciprocal: Vec<_> = AvailableReflector::ALL
            .into_iter()
            .filter(|r| !r.is_reciprocal())
            .collect();
        assert_eq!(non_reciprocal, vec![AvailableReflector::Etw]);
    }
}
