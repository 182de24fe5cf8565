//! Byte classification for base-36 alphanumeric digits.

/// Value stored for bytes that are not a digit in any base up to 36.
pub const SENTINEL: u8 = 36;

/// Largest radix the table can serve: one past the highest digit value.
pub const MAX_RADIX: u32 = SENTINEL as u32;

/// Digit value of `byte` in base 36, or [`SENTINEL`].
///
/// `'0'..='9'` map to 0-9 and letters map to 10-35 regardless of case.
pub const fn digit_value(byte: u8) -> u8 {
    match byte {
        b'0'..=b'9' => byte - b'0',
        b'a'..=b'z' => byte - b'a' + 10,
        b'A'..=b'Z' => byte - b'A' + 10,
        _ => SENTINEL,
    }
}

/// Whether `byte` is an alphanumeric digit.
pub const fn is_digit(byte: u8) -> bool {
    digit_value(byte) != SENTINEL
}
