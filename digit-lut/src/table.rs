use crate::classify::{digit_value, SENTINEL};

/// Number of entries: one per byte value.
pub const TABLE_LEN: usize = 256;

/// Values per row in the default layout.
pub const ROW_WIDTH: usize = 16;

/// The precomputed table.
pub const DIGIT_TABLE: DigitTable = DigitTable::generate();

/// Digit value for every byte, indexed by the byte itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitTable {
    values: [u8; TABLE_LEN],
}

impl DigitTable {
    /// Classify all 256 byte values in increasing order.
    pub const fn generate() -> Self {
        let mut values = [SENTINEL; TABLE_LEN];
        let mut i = 0;
        while i < TABLE_LEN {
            values[i] = digit_value(i as u8);
            i += 1;
        }
        DigitTable { values }
    }

    pub const fn get(&self, byte: u8) -> u8 {
        self.values[byte as usize]
    }

    pub const fn as_array(&self) -> &[u8; TABLE_LEN] {
        &self.values
    }

    /// Split the table into rows of `width` values.
    ///
    /// Row `i` covers byte values `width * i` through `width * (i + 1) - 1`.
    /// Panics if `width` is zero.
    pub fn rows(&self, width: usize) -> std::slice::Chunks<'_, u8> {
        self.values.chunks(width)
    }

    /// Number of bytes that are valid digits.
    pub fn valid_count(&self) -> usize {
        self.values.iter().filter(|&&v| v != SENTINEL).count()
    }
}

impl Default for DigitTable {
    fn default() -> Self {
        DIGIT_TABLE
    }
}
