use std::io::{self, Write};

use crate::error::StyleError;
use crate::style::{Format, TableStyle};
use crate::table::{DigitTable, TABLE_LEN};

const INDENT: &str = "    ";

/// Render a table to a string, one `\n`-terminated line per output line.
pub fn render_to_string(table: &DigitTable, style: &TableStyle) -> Result<String, StyleError> {
    style.validate()?;
    let mut text = String::new();
    for line in render_lines(table, style) {
        text.push_str(&line);
        text.push('\n');
    }
    Ok(text)
}

/// Write a table to `out`.
///
/// An invalid style is reported as [`io::ErrorKind::InvalidInput`] before
/// anything is written.
pub fn write_table<W: Write>(table: &DigitTable, style: &TableStyle, mut out: W) -> io::Result<()> {
    style
        .validate()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    for line in render_lines(table, style) {
        writeln!(out, "{line}")?;
    }
    out.flush()
}

/// Produce the output lines without terminators. `style` must be valid.
fn render_lines(table: &DigitTable, style: &TableStyle) -> Vec<String> {
    let rows: Vec<String> = table
        .rows(style.row_width)
        .map(|row| join_row(row, &style.separator))
        .collect();

    match style.format {
        Format::Plain => rows
            .into_iter()
            .map(|mut row| {
                if style.trailing_separator {
                    row.push_str(&style.separator);
                }
                row
            })
            .collect(),
        Format::Rust => wrap(
            format!("pub static {}: [u8; {}] = [", style.name, TABLE_LEN),
            rows,
            style,
            "];",
        ),
        Format::C => wrap(
            format!("static const unsigned char {}[{}] = {{", style.name, TABLE_LEN),
            rows,
            style,
            "};",
        ),
    }
}

fn join_row(row: &[u8], separator: &str) -> String {
    row.iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Frame rows inside an array initializer. Every row but the last always
/// ends with a comma; trailing whitespace is dropped.
fn wrap(open: String, rows: Vec<String>, style: &TableStyle, close: &str) -> Vec<String> {
    let last = rows.len().saturating_sub(1);
    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(open);
    for (i, row) in rows.into_iter().enumerate() {
        let mut line = format!("{INDENT}{row}");
        if i != last || style.trailing_separator {
            line.push_str(&style.separator);
        }
        lines.push(line.trim_end().to_string());
    }
    lines.push(close.to_string());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::DIGIT_TABLE;

    fn plain_reference() -> String {
        let mut expected = String::new();
        for i in 0..16u32 {
            for j in 0..16u32 {
                let v = (i * 16 + j) as u8;
                let d = (v as char).to_digit(36).unwrap_or(36);
                expected.push_str(&format!("{d}, "));
            }
            expected.push('\n');
        }
        expected
    }

    #[test]
    fn default_style_is_bit_exact() {
        let text = render_to_string(&DIGIT_TABLE, &TableStyle::default()).unwrap();
        assert_eq!(text, plain_reference());
    }

    #[test]
    fn default_lines_shape() {
        let text = render_to_string(&DIGIT_TABLE, &TableStyle::default()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 16);
        for line in &lines {
            assert!(line.ends_with(", "));
            let values: Vec<&str> = line.trim_end_matches(", ").split(", ").collect();
            assert_eq!(values.len(), 16);
            assert!(values.iter().all(|v| (1..=2).contains(&v.len())));
        }
        assert_eq!(lines[0], "36, ".repeat(16));
        assert!(lines[3].starts_with("0, 1, 2, "));
    }

    #[test]
    fn trimmed_plain_rows() {
        let style = TableStyle {
            trailing_separator: false,
            ..TableStyle::default()
        };
        let text = render_to_string(&DIGIT_TABLE, &style).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 16);
        assert!(lines.iter().all(|l| !l.ends_with(' ') && !l.ends_with(',')));
        assert!(lines[4].ends_with(", 24"));
    }

    #[test]
    fn rust_item() {
        let style = TableStyle {
            format: Format::Rust,
            ..TableStyle::default()
        };
        let text = render_to_string(&DIGIT_TABLE, &style).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 18);
        assert_eq!(lines[0], "pub static DIGIT_LUT: [u8; 256] = [");
        assert_eq!(lines[4], "    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 36, 36, 36, 36, 36, 36,");
        assert!(lines[16].ends_with("36,"));
        assert_eq!(lines[17], "];");
    }

    #[test]
    fn c_definition_without_final_comma() {
        let style = TableStyle {
            format: Format::C,
            name: "digit_lut".to_string(),
            trailing_separator: false,
            ..TableStyle::default()
        };
        let text = render_to_string(&DIGIT_TABLE, &style).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "static const unsigned char digit_lut[256] = {");
        assert!(lines[15].ends_with("36,"));
        assert!(lines[16].ends_with("36"));
        assert_eq!(lines[17], "};");
    }

    #[test]
    fn custom_row_width() {
        let style = TableStyle {
            row_width: 64,
            ..TableStyle::default()
        };
        let text = render_to_string(&DIGIT_TABLE, &style).unwrap();
        assert_eq!(text.lines().count(), 4);
    }

    #[test]
    fn write_matches_string_rendering() {
        let style = TableStyle::default();
        let mut buf = Vec::new();
        write_table(&DIGIT_TABLE, &style, &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            render_to_string(&DIGIT_TABLE, &style).unwrap()
        );
    }

    #[test]
    fn invalid_style_writes_nothing() {
        let style = TableStyle {
            row_width: 3,
            ..TableStyle::default()
        };
        let mut buf = Vec::new();
        let err = write_table(&DIGIT_TABLE, &style, &mut buf).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert!(buf.is_empty());
    }
}
