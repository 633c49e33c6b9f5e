//! chip8-keypad: The CHIP-8 hexadecimal keypad.
//!
//! - `PadKey`: Enum of the sixteen keypad keys `0`-`9`, `A`-`F`.
//! - `Nibble`: The 4-bit value a keypad key produces, with conversions.
//!
//! Keys carry their nibble value directly (`repr(u8)`), and `PadKey::ALL`
//! fixes the canonical keypad order used wherever keys are enumerated.
//! Variant names mirror the `k0`-`kF` members of the emulator's
//! `KeyScanCode` enum.

mod key;
pub use key::PadKey;

mod nibble;
pub use nibble::Nibble;
