//! Nibble values (CHIP-8 keypad codes) and conversions.
//!
//! A "nibble" in this crate is the 4-bit value a keypad key feeds into the
//! interpreter: the `0x0`-`0xF` literal on the right-hand side of a keypad
//! dispatch arm. It is not an SDL scancode and not a host keyboard code;
//! values above `0xF` have no keypad key.

use crate::PadKey;

/// CHIP-8 keypad value (`0x0`-`0xF`).
pub type Nibble = u8;

/// Returns true if the nibble maps to a keypad key.
pub fn is_valid(n: Nibble) -> bool {
    PadKey::from_nibble(n).is_some()
}

impl TryFrom<Nibble> for PadKey {
    type Error = ();
    fn try_from(value: Nibble) -> Result<Self, Self::Error> {
        Self::from_nibble(value).ok_or(())
    }
}

impl From<PadKey> for Nibble {
    fn from(k: PadKey) -> Self {
        k as u8
    }
}

impl PadKey {
    /// Looks up a key from its keypad value.
    pub const fn from_nibble(n: Nibble) -> Option<Self> {
        match n {
            0x0 => Some(Self::K0),
            0x1 => Some(Self::K1),
            0x2 => Some(Self::K2),
            0x3 => Some(Self::K3),
            0x4 => Some(Self::K4),
            0x5 => Some(Self::K5),
            0x6 => Some(Self::K6),
            0x7 => Some(Self::K7),
            0x8 => Some(Self::K8),
            0x9 => Some(Self::K9),
            0xA => Some(Self::KA),
            0xB => Some(Self::KB),
            0xC => Some(Self::KC),
            0xD => Some(Self::KD),
            0xE => Some(Self::KE),
            0xF => Some(Self::KF),
            _ => None,
        }
    }

    /// Returns the keypad value for this key.
    pub const fn nibble(self) -> Nibble {
        self as u8
    }
}
