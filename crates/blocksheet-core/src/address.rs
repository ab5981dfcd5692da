//! A1-style cell addresses and column letter conversion
//!
//! Column numbers are 1-based here (`A` = 1) because that is how data-block
//! origins and size rules count columns. [`CellAddress`] stores 0-based
//! offsets for grid placement.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Convert column letters to a 1-based column number (`A` = 1, `Z` = 26, `AA` = 27)
///
/// Letters are case-insensitive. Anything other than ASCII letters, or a
/// value that overflows `u32`, is an [`Error::InvalidAddress`].
pub fn column_to_number(letters: &str) -> Result<u32> {
    if letters.is_empty() {
        return Err(Error::InvalidAddress("empty column letters".into()));
    }

    let mut col: u32 = 0;
    for c in letters.chars() {
        if !c.is_ascii_alphabetic() {
            return Err(Error::InvalidAddress(format!(
                "invalid column letter '{}'",
                c
            )));
        }
        let digit = c.to_ascii_uppercase() as u32 - 'A' as u32 + 1;
        col = col
            .checked_mul(26)
            .and_then(|v| v.checked_add(digit))
            .ok_or_else(|| Error::InvalidAddress(format!("column '{}' too large", letters)))?;
    }

    Ok(col)
}

/// Convert a 1-based column number to letters (1 = `A`, 26 = `Z`, 27 = `AA`)
///
/// Column 0 has no letters and yields an empty string.
pub fn number_to_column(col: u32) -> String {
    let mut letters = Vec::new();
    let mut n = col;

    while n > 0 {
        letters.push((((n - 1) % 26) as u8 + b'A') as char);
        n = (n - 1) / 26;
    }

    letters.iter().rev().collect()
}

/// A cell position (e.g. "B3"), stored as 0-based row and column offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellAddress {
    /// Row index (0-based internally, 1-based in display)
    pub row: u32,
    /// Column index (0-based, A=0, B=1, ...)
    pub col: u32,
}

impl CellAddress {
    /// Create a new cell address from 0-based offsets
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Parse an address such as `"A1"` or `"xfd20"`
    ///
    /// The input is uppercased and must then be one or more letters followed
    /// by a row number without leading zeros. No `$` markers, whitespace or
    /// trailing characters are accepted.
    ///
    /// # Examples
    /// ```
    /// use blocksheet_core::CellAddress;
    ///
    /// let addr = CellAddress::parse("b2").unwrap();
    /// assert_eq!(addr.row, 1);
    /// assert_eq!(addr.col, 1);
    ///
    /// assert!(CellAddress::parse("A0").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let upper = s.to_uppercase();
        let bytes = upper.as_bytes();

        let letters_end = bytes
            .iter()
            .position(|b| !b.is_ascii_uppercase())
            .unwrap_or(bytes.len());
        if letters_end == 0 {
            return Err(Error::InvalidAddress(format!("no column letters in '{}'", s)));
        }

        let digits = &bytes[letters_end..];
        if digits.is_empty() {
            return Err(Error::InvalidAddress(format!("no row number in '{}'", s)));
        }
        if digits[0] == b'0' || !digits.iter().all(u8::is_ascii_digit) {
            return Err(Error::InvalidAddress(format!(
                "invalid row number in '{}'",
                s
            )));
        }

        let col = column_to_number(&upper[..letters_end])?;
        let row: u32 = upper[letters_end..]
            .parse()
            .map_err(|_| Error::InvalidAddress(format!("row number out of range in '{}'", s)))?;

        Ok(Self {
            row: row - 1,
            col: col - 1,
        })
    }

    /// Format as A1-style string
    pub fn to_a1_string(&self) -> String {
        format!("{}{}", number_to_column(self.col + 1), self.row + 1)
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for CellAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
