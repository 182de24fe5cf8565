use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StyleError {
    #[error("row width must be non-zero")]
    ZeroRowWidth,

    #[error("row width {0} does not divide 256")]
    RowWidthNotDivisor(usize),

    #[error("separator {0:?} must be a comma optionally padded with spaces or tabs")]
    InvalidSeparator(String),

    #[error("'{0}' is not a valid identifier")]
    InvalidName(String),

    #[error("unknown format '{0}', use 'plain', 'rust' or 'c'")]
    UnknownFormat(String),

    #[error("config error: {0}")]
    Config(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("invalid table entry '{token}' on line {line}")]
    InvalidToken { token: String, line: usize },

    #[error("unterminated initializer: no closing '{0}'")]
    Unterminated(char),

    #[error("table has {0} entries, expected 256")]
    WrongLength(usize),

    #[error("entry for byte {byte} is {value}, which exceeds the sentinel 36")]
    OutOfRange { byte: u8, value: u8 },

    #[error("entry for byte {byte} is {found}, expected {expected}")]
    Mismatch { byte: u8, expected: u8, found: u8 },
}
