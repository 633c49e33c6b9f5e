use std::fmt;

use serde::{Deserialize, Serialize};

/// A key on the CHIP-8 hexadecimal keypad.
///
/// Each variant carries the nibble value the key feeds into the
/// interpreter, so `PadKey::KA as u8` is `0xA`. The enum is `repr(u8)` and
/// the discriminants are the authoritative key values.
#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum PadKey {
    K0 = 0x0,
    K1 = 0x1,
    K2 = 0x2,
    K3 = 0x3,
    K4 = 0x4,
    K5 = 0x5,
    K6 = 0x6,
    K7 = 0x7,
    K8 = 0x8,
    K9 = 0x9,
    KA = 0xA,
    KB = 0xB,
    KC = 0xC,
    KD = 0xD,
    KE = 0xE,
    KF = 0xF,
}

impl PadKey {
    /// All sixteen keys in canonical keypad order (`0`-`9`, then `A`-`F`).
    ///
    /// Generators iterate this array, so emitted mappings always appear in
    /// the same order.
    pub const ALL: [Self; 16] = [
        Self::K0,
        Self::K1,
        Self::K2,
        Self::K3,
        Self::K4,
        Self::K5,
        Self::K6,
        Self::K7,
        Self::K8,
        Self::K9,
        Self::KA,
        Self::KB,
        Self::KC,
        Self::KD,
        Self::KE,
        Self::KF,
    ];

    /// Returns the canonical name for this key (the enum variant string).
    pub const fn name(self) -> &'static str {
        match self {
            Self::K0 => "K0",
            Self::K1 => "K1",
            Self::K2 => "K2",
            Self::K3 => "K3",
            Self::K4 => "K4",
            Self::K5 => "K5",
            Self::K6 => "K6",
            Self::K7 => "K7",
            Self::K8 => "K8",
            Self::K9 => "K9",
            Self::KA => "KA",
            Self::KB => "KB",
            Self::KC => "KC",
            Self::KD => "KD",
            Self::KE => "KE",
            Self::KF => "KF",
        }
    }

    /// The uppercase hex digit for this key (`'0'`-`'9'`, `'A'`-`'F'`).
    ///
    /// This is the character substituted into generated source text, both
    /// in the `k<digit>` identifier and the `0x<digit>` literal.
    pub const fn digit(self) -> char {
        match self {
            Self::K0 => '0',
            Self::K1 => '1',
            Self::K2 => '2',
            Self::K3 => '3',
            Self::K4 => '4',
            Self::K5 => '5',
            Self::K6 => '6',
            Self::K7 => '7',
            Self::K8 => '8',
            Self::K9 => '9',
            Self::KA => 'A',
            Self::KB => 'B',
            Self::KC => 'C',
            Self::KD => 'D',
            Self::KE => 'E',
            Self::KF => 'F',
        }
    }

    /// Case-insensitive lookup of a key from its name.
    ///
    /// Accepts variant names like "K5" or "kf", and bare hex digits like
    /// "5" or "a".
    pub fn from_name(name: &str) -> Option<Self> {
        let digit = match name.as_bytes() {
            [b'k' | b'K', d] => *d as char,
            [d] => *d as char,
            _ => return None,
        };
        let value = digit.to_digit(16)?;
        Self::from_nibble(value as u8)
    }
}

impl fmt::Display for PadKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keypad_order_matches_values() {
        assert_eq!(PadKey::ALL.len(), 16);
        for (i, key) in PadKey::ALL.into_iter().enumerate() {
            assert_eq!(key.nibble() as usize, i);
        }
    }

    #[test]
    fn name_roundtrip_and_digit_shorthand() {
        for key in PadKey::ALL {
            assert_eq!(PadKey::from_name(key.name()), Some(key));
            assert_eq!(
                PadKey::from_name(&key.name().to_ascii_lowercase()),
                Some(key)
            );
            assert_eq!(PadKey::from_name(&key.digit().to_string()), Some(key));
        }
        assert_eq!(PadKey::from_name("kA"), Some(PadKey::KA));
        assert_eq!(PadKey::from_name("b"), Some(PadKey::KB));
        assert_eq!(PadKey::from_name("G"), None);
        assert_eq!(PadKey::from_name("k10"), None);
        assert_eq!(PadKey::from_name(""), None);
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(PadKey::K0.to_string(), "K0");
        assert_eq!(PadKey::KF.to_string(), "KF");
    }
}
