//! Reading a previously emitted table back and checking it against the
//! generator.
//!
//! Accepts every [`Format`](crate::style::Format): bare rows, or a Rust/C
//! definition whose initializer follows the first `=`.

use crate::classify::SENTINEL;
use crate::error::TableError;
use crate::table::{DigitTable, TABLE_LEN};

/// Extract the table entries from `text`, in order.
pub fn parse_values(text: &str) -> Result<Vec<u8>, TableError> {
    let (body, first_line) = initializer_body(text)?;

    let mut values = Vec::with_capacity(TABLE_LEN);
    for (i, line) in body.lines().enumerate() {
        for token in line.split(',').flat_map(str::split_whitespace) {
            let value = token.parse::<u8>().map_err(|_| TableError::InvalidToken {
                token: token.to_string(),
                line: first_line + i,
            })?;
            values.push(value);
        }
    }
    Ok(values)
}

/// Check parsed entries against `table`, reporting the first problem.
pub fn check(table: &DigitTable, values: &[u8]) -> Result<(), TableError> {
    if values.len() != TABLE_LEN {
        return Err(TableError::WrongLength(values.len()));
    }
    for (byte, &found) in (0..=u8::MAX).zip(values) {
        if found > SENTINEL {
            return Err(TableError::OutOfRange { byte, value: found });
        }
        let expected = table.get(byte);
        if found != expected {
            return Err(TableError::Mismatch {
                byte,
                expected,
                found,
            });
        }
    }
    Ok(())
}

/// Locate the text holding the entries, and the 1-based line it starts on.
fn initializer_body(text: &str) -> Result<(&str, usize), TableError> {
    let Some(eq) = text.find('=') else {
        return Ok((text, 1));
    };
    let after = &text[eq + 1..];
    let Some(open) = after.find(['[', '{']) else {
        return Ok((after, line_of(text, eq + 1)));
    };
    let close_char = if after.as_bytes()[open] == b'[' { ']' } else { '}' };
    let start = eq + 1 + open + 1;
    let len = text[start..]
        .find(close_char)
        .ok_or(TableError::Unterminated(close_char))?;
    Ok((&text[start..start + len], line_of(text, start)))
}

fn line_of(text: &str, offset: usize) -> usize {
    text[..offset].matches('\n').count() + 1
}
