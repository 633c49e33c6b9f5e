use std::io;

use chip8_keypad::PadKey;
use keygen::emit;

#[test]
fn keypad_arm_per_key_in_order() {
    let lines = emit::keypad_arms();
    assert_eq!(lines.len(), 16);
    for (key, line) in PadKey::ALL.into_iter().zip(&lines) {
        let d = key.digit();
        assert_eq!(
            line,
            &format!("case emuGL::KeyScanCode::k{d}: chip8Key = 0x{d}; break;")
        );
    }
}

#[test]
fn keypad_known_lines() {
    let lines = emit::keypad_arms();
    assert_eq!(lines[0x0], "case emuGL::KeyScanCode::k0: chip8Key = 0x0; break;");
    assert_eq!(lines[0xA], "case emuGL::KeyScanCode::kA: chip8Key = 0xA; break;");
    assert_eq!(lines[0xF], "case emuGL::KeyScanCode::kF: chip8Key = 0xF; break;");
}

#[test]
fn keypad_output_is_deterministic() {
    let mut first = Vec::new();
    let mut second = Vec::new();
    emit::write_keypad_arms(&mut first).expect("write");
    emit::write_keypad_arms(&mut second).expect("write");
    assert_eq!(first, second);

    let text = String::from_utf8(first).expect("utf8");
    assert_eq!(text.lines().count(), 16);
}

#[test]
fn written_output_matches_rendered_lines() {
    let mut buf = Vec::new();
    emit::write_keypad_arms(&mut buf).expect("write");
    let text = String::from_utf8(buf).expect("utf8");
    let written: Vec<&str> = text.lines().collect();
    assert_eq!(written, emit::keypad_arms());

    let mut buf = Vec::new();
    emit::write_sdl_arms(&mut buf).expect("write");
    let text = String::from_utf8(buf).expect("utf8");
    let written: Vec<&str> = text.lines().collect();
    assert_eq!(written, emit::sdl_arms());
}

#[test]
fn sdl_arm_count_and_edges() {
    let lines = emit::sdl_arms();
    assert_eq!(lines.len(), 37);
    assert_eq!(
        lines.first().map(String::as_str),
        Some("case SDL_SCANCODE_1: return KeyScanCode::k1;")
    );
    assert_eq!(
        lines.last().map(String::as_str),
        Some("case SDL_SCANCODE_SPACE: return KeyScanCode::kSPACE;")
    );
}

/// Sink that refuses every write.
struct FailingWriter;

impl io::Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn write_failure_surfaces_as_error() {
    let err = emit::write_keypad_arms(&mut FailingWriter).expect_err("should fail");
    assert!(matches!(err, keygen::Error::Write { .. }));
}
