//! Decimalisation table: maps each hex digit of an encrypted block to a
//! decimal PIN digit.
//!
//! The table is a fixed 16-slot array indexed by source hex digit, so
//! substitution is positional - a repeated digit in the input is replaced
//! independently at each position, never by a global search-and-replace.

use crate::errors::{PinError, PinResult};
use crate::pin::VALIDATION_DATA_LEN;

const TABLE_SIZE: usize = 16;

lazy_static! {
    /// Built-in default table: digits 0-9 unchanged, A-F mapped to 0-5
    static ref DEFAULT_TABLE: DecimalisationTable = DecimalisationTable {
        digits: [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 0, 1, 2, 3, 4, 5],
    };
}

#[derive(Debug, Clone, PartialEq)]
pub struct DecimalisationTable {
    // decimal digit per source hex digit value 0x0..=0xF
    digits: [u8; TABLE_SIZE],
}

impl Default for DecimalisationTable {
    fn default() -> DecimalisationTable {
        DEFAULT_TABLE.clone()
    }
}

impl DecimalisationTable {
    /// Builds a table from 16 "src:dst" entries, e.g. `"A:0"`.
    ///
    /// Each source hex digit must appear exactly once and each destination
    /// must be a single decimal digit; anything else is a caller error.
    pub fn from_entries(entries: &[String]) -> PinResult<DecimalisationTable> {
        if entries.len() != TABLE_SIZE {
            return Err(PinError::Validation(format!(
                "decimalisation table must have {} entries, got {}",
                TABLE_SIZE,
                entries.len()
            )));
        }

        let mut digits = [0u8; TABLE_SIZE];
        let mut seen = [false; TABLE_SIZE];

        for entry in entries {
            let chars: Vec<char> = entry.chars().collect();
            if chars.len() != 3 || chars[1] != ':' {
                return Err(PinError::Validation(format!(
                    "malformed decimalisation table entry: {}",
                    entry
                )));
            }
            let src = hex_digit_value(chars[0]).ok_or_else(|| {
                PinError::Validation(format!("non-hex source digit in table entry: {}", entry))
            })?;
            if !chars[2].is_ascii_digit() {
                return Err(PinError::Validation(format!(
                    "non-decimal destination digit in table entry: {}",
                    entry
                )));
            }
            if seen[src] {
                return Err(PinError::Validation(format!(
                    "duplicate source digit in table entry: {}",
                    entry
                )));
            }
            seen[src] = true;
            digits[src] = chars[2] as u8 - b'0';
        }

        Ok(DecimalisationTable { digits })
    }

    /// Substitutes each hex digit of a 16-character block with its mapped
    /// decimal digit.
    pub fn substitute(&self, hex_digits: &str) -> PinResult<String> {
        if hex_digits.len() != VALIDATION_DATA_LEN {
            return Err(PinError::Validation(format!(
                "substitution input must be {} hex characters, got {}",
                VALIDATION_DATA_LEN,
                hex_digits.len()
            )));
        }

        let mut decimalised = String::with_capacity(VALIDATION_DATA_LEN);
        for c in hex_digits.chars() {
            let src = hex_digit_value(c).ok_or_else(|| {
                PinError::Validation(format!("non-hex character in substitution input: {}", c))
            })?;
            decimalised.push((b'0' + self.digits[src]) as char);
        }
        Ok(decimalised)
    }
}

fn hex_digit_value(c: char) -> Option<usize> {
    c.to_digit(16).map(|d| d as usize)
}
