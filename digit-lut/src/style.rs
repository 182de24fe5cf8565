use std::fmt;
use std::str::FromStr;

use crate::error::StyleError;
use crate::table::{ROW_WIDTH, TABLE_LEN};

/// How the table text is framed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Format {
    /// Bare rows of values, ready to paste inside an existing initializer.
    #[default]
    Plain,
    /// A complete `pub static NAME: [u8; 256]` item.
    Rust,
    /// A complete `static const unsigned char name[256]` definition.
    C,
}

impl Format {
    pub const NAMES: &'static [&'static str] = &["plain", "rust", "c"];

    pub fn name(self) -> &'static str {
        match self {
            Format::Plain => "plain",
            Format::Rust => "rust",
            Format::C => "c",
        }
    }
}

impl FromStr for Format {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "plain" => Ok(Format::Plain),
            "rust" | "rs" => Ok(Format::Rust),
            "c" => Ok(Format::C),
            _ => Err(StyleError::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rendering options for a generated table.
///
/// The default reproduces the classic layout: 16 plain rows of 16 values,
/// each value followed by `", "`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct TableStyle {
    pub format: Format,
    pub row_width: usize,
    pub separator: String,
    /// Emit the separator after the last value of each row.
    pub trailing_separator: bool,
    /// Item name used by the `rust` and `c` formats.
    pub name: String,
}

impl Default for TableStyle {
    fn default() -> Self {
        TableStyle {
            format: Format::Plain,
            row_width: ROW_WIDTH,
            separator: ", ".to_string(),
            trailing_separator: true,
            name: "DIGIT_LUT".to_string(),
        }
    }
}

impl TableStyle {
    /// Parse a TOML style file. Missing keys keep their defaults.
    #[cfg(feature = "serde")]
    pub fn from_toml(toml_str: &str) -> Result<TableStyle, StyleError> {
        let style: TableStyle =
            toml::from_str(toml_str).map_err(|e| StyleError::Config(e.to_string()))?;
        style.validate()?;
        Ok(style)
    }

    pub fn validate(&self) -> Result<(), StyleError> {
        if self.row_width == 0 {
            return Err(StyleError::ZeroRowWidth);
        }
        if TABLE_LEN % self.row_width != 0 {
            return Err(StyleError::RowWidthNotDivisor(self.row_width));
        }
        if !is_valid_separator(&self.separator) {
            return Err(StyleError::InvalidSeparator(self.separator.clone()));
        }
        if self.format != Format::Plain && !is_identifier(&self.name) {
            return Err(StyleError::InvalidName(self.name.clone()));
        }
        Ok(())
    }
}

fn is_valid_separator(sep: &str) -> bool {
    sep.matches(',').count() == 1 && sep.chars().all(|c| matches!(c, ',' | ' ' | '\t'))
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    name != "_" && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
