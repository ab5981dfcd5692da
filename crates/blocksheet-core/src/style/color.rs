//! Color representation

use std::fmt;

/// A validated RGB or ARGB color
///
/// Input colors are written as 6 (`RRGGBB`) or 8 (`AARRGGBB`) uppercase hex
/// digits. Anything else is not a color and is dropped by the style renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// RGB color (no alpha), rendered fully opaque
    Rgb { r: u8, g: u8, b: u8 },

    /// ARGB color with alpha channel
    Argb { a: u8, r: u8, g: u8, b: u8 },
}

impl Color {
    /// Create an RGB color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb { r, g, b }
    }

    /// Create an ARGB color
    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Color::Argb { a, r, g, b }
    }

    /// Parse a hex string such as `"FF0000"` or `"80FF0000"`
    ///
    /// Only uppercase hex digits are accepted and there is no `#` prefix.
    pub fn from_hex(hex: &str) -> Option<Self> {
        if !hex.bytes().all(|b| b.is_ascii_digit() || (b'A'..=b'F').contains(&b)) {
            return None;
        }

        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        match hex.len() {
            6 => Some(Color::Rgb {
                r: byte(0)?,
                g: byte(2)?,
                b: byte(4)?,
            }),
            8 => Some(Color::Argb {
                a: byte(0)?,
                r: byte(2)?,
                g: byte(4)?,
                b: byte(6)?,
            }),
            _ => None,
        }
    }

    /// Convert to ARGB hex string (8 characters, used by XLSX)
    ///
    /// RGB colors are promoted by prefixing `FF`, e.g. `"FFFF0000"` for opaque red.
    pub fn to_argb_hex(&self) -> String {
        match self {
            Color::Rgb { r, g, b } => format!("FF{:02X}{:02X}{:02X}", r, g, b),
            Color::Argb { a, r, g, b } => format!("{:02X}{:02X}{:02X}{:02X}", a, r, g, b),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Rgb { r, g, b } => write!(f, "{:02X}{:02X}{:02X}", r, g, b),
            Color::Argb { .. } => f.write_str(&self.to_argb_hex()),
        }
    }
}
