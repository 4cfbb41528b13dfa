//! Build environment knobs.
//!
//! Compiled into both the library and `build.rs` (through `#[path]`), so it
//! only depends on `core`.

/// Environment variable that overrides the poison byte at build time.
pub const POISON_BYTE_VAR: &str = "STANDALONE_RT_POISON_BYTE";

/// Poison byte used when [`POISON_BYTE_VAR`] is unset.
pub const DEFAULT_POISON_BYTE: u8 = 0xDD;

/// Parse a poison byte written in decimal or `0x` hex.
///
/// Zero is refused: poison must differ from zeroed memory.
pub const fn parse_poison_byte(raw: &str) -> Option<u8> {
    let trimmed = raw.as_bytes().trim_ascii();
    let (digits, radix): (&[u8], u32) = match trimmed {
        [b'0', b'x' | b'X', rest @ ..] => (rest, 16),
        _ => (trimmed, 10),
    };
    if digits.is_empty() {
        return None;
    }

    let mut value: u32 = 0;
    let mut i = 0;
    while i < digits.len() {
        let digit = match digits[i] {
            b @ b'0'..=b'9' => (b - b'0') as u32,
            b @ b'a'..=b'f' if radix == 16 => (b - b'a' + 10) as u32,
            b @ b'A'..=b'F' if radix == 16 => (b - b'A' + 10) as u32,
            _ => return None,
        };
        value = value * radix + digit;
        if value > u8::MAX as u32 {
            return None;
        }
        i += 1;
    }

    if value == 0 {
        None
    } else {
        Some(value as u8)
    }
}
