//! Rendering of switch-case arms for the emulator's key handling.
//!
//! Two generators, matching the two switch statements in the emulator
//! source:
//! - keypad arms: `emuGL::KeyScanCode` -> CHIP-8 keypad value dispatch.
//! - SDL arms: `SDL_SCANCODE_*` -> `emuGL::KeyScanCode` translation.
//!
//! Output is pasted verbatim, so line shape and order are fixed: one arm
//! per token, in token-list order. Each generator comes in two forms, one
//! returning the rendered lines and one writing them to a sink.

use std::io::Write;

use chip8_keypad::PadKey;

use crate::{Error, Result};

/// Scoped name of the emulator's scancode enum in generated keypad arms.
const SCANCODE_PREFIX: &str = "emuGL::KeyScanCode";

/// Variable the keypad dispatch arms assign.
const KEYPAD_VAR: &str = "chip8Key";

/// SDL scancode suffixes, in the order the translation switch lists them:
/// digits in layout order, letters in QWERTY row order, then space.
const SDL_TOKENS: [&str; 37] = [
    "1", "2", "3", "4", "5", "6", "7", "8", "9", "0", "Q", "W", "E", "R", "T", "Y", "U", "I", "O",
    "P", "A", "S", "D", "F", "G", "H", "J", "K", "L", "Z", "X", "C", "V", "B", "N", "M", "SPACE",
];

/// Renders the dispatch arm for one keypad key.
pub fn keypad_arm(key: PadKey) -> String {
    let d = key.digit();
    format!("case {SCANCODE_PREFIX}::k{d}: {KEYPAD_VAR} = 0x{d}; break;")
}

/// Renders all sixteen keypad arms in keypad order.
pub fn keypad_arms() -> Vec<String> {
    PadKey::ALL.into_iter().map(keypad_arm).collect()
}

/// Writes the keypad arms to `out`, one per line.
pub fn write_keypad_arms<W: Write>(out: &mut W) -> Result<()> {
    for key in PadKey::ALL {
        writeln!(out, "{}", keypad_arm(key)).map_err(|source| Error::Write { source })?;
    }
    Ok(())
}

/// Renders the translation arm for one SDL token.
pub fn sdl_arm(token: &str) -> String {
    format!("case SDL_SCANCODE_{token}: return KeyScanCode::k{token};")
}

/// Renders all SDL translation arms in token order.
pub fn sdl_arms() -> Vec<String> {
    SDL_TOKENS.into_iter().map(sdl_arm).collect()
}

/// Writes the SDL arms to `out`, one per line.
pub fn write_sdl_arms<W: Write>(out: &mut W) -> Result<()> {
    for token in SDL_TOKENS {
        writeln!(out, "{}", sdl_arm(token)).map_err(|source| Error::Write { source })?;
    }
    Ok(())
}
