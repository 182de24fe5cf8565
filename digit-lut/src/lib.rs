//! Generator for the 256-entry base-36 digit value lookup table.
//!
//! Every byte maps to its value as an alphanumeric digit (`'0'..='9'` to
//! 0-9, letters of either case to 10-35) or to [`SENTINEL`] (36).

pub mod classify;
pub mod error;
pub mod render;
pub mod style;
pub mod table;
pub mod verify;

pub use classify::{digit_value, SENTINEL};
pub use table::{DigitTable, DIGIT_TABLE};
