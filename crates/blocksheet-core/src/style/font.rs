//! Font style types

use serde::{Deserialize, Serialize};

/// Font settings of a named style
///
/// Enumerated fields (`u`, `vert_align`) and `color` are kept as written;
/// values outside their vocabulary are dropped when the font is rendered.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Font {
    /// Font size in points
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sz: Option<f64>,
    /// Font family name (e.g. "Calibri")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// RGB or ARGB hex color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Bold
    pub b: bool,
    /// Italic
    pub i: bool,
    /// Underline style, see [`Underline`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub u: Option<String>,
    /// Strikethrough
    pub strike: bool,
    /// Superscript/subscript, see [`FontVerticalAlign`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vert_align: Option<String>,
}

impl Font {
    /// Create an empty font rule
    pub fn new() -> Self {
        Self::default()
    }

    /// Set font size
    pub fn size(mut self, size: f64) -> Self {
        self.sz = Some(size);
        self
    }

    /// Set font name
    pub fn name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set color as a hex string
    pub fn color<S: Into<String>>(mut self, color: S) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set bold
    pub fn bold(mut self, bold: bool) -> Self {
        self.b = bold;
        self
    }

    /// Set italic
    pub fn italic(mut self, italic: bool) -> Self {
        self.i = italic;
        self
    }

    /// Set underline
    pub fn underline(mut self, underline: Underline) -> Self {
        self.u = Some(underline.as_str().to_string());
        self
    }

    /// Set strikethrough
    pub fn strike(mut self, strike: bool) -> Self {
        self.strike = strike;
        self
    }

    /// Set superscript/subscript
    pub fn vert_align(mut self, align: FontVerticalAlign) -> Self {
        self.vert_align = Some(align.as_str().to_string());
        self
    }
}

/// Underline style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Underline {
    /// Single underline
    Single,
    /// Double underline
    Double,
    /// Single accounting underline (extends to cell width)
    SingleAccounting,
    /// Double accounting underline
    DoubleAccounting,
}

impl Underline {
    pub fn as_str(&self) -> &'static str {
        match self {
            Underline::Single => "single",
            Underline::Double => "double",
            Underline::SingleAccounting => "singleAccounting",
            Underline::DoubleAccounting => "doubleAccounting",
        }
    }

    /// Look up a value by its OOXML name
    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "single" => Some(Underline::Single),
            "double" => Some(Underline::Double),
            "singleAccounting" => Some(Underline::SingleAccounting),
            "doubleAccounting" => Some(Underline::DoubleAccounting),
            _ => None,
        }
    }
}

/// Font vertical alignment (superscript/subscript)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontVerticalAlign {
    /// Superscript
    Superscript,
    /// Subscript
    Subscript,
}

impl FontVerticalAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            FontVerticalAlign::Superscript => "superscript",
            FontVerticalAlign::Subscript => "subscript",
        }
    }

    /// Look up a value by its OOXML name
    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "superscript" => Some(FontVerticalAlign::Superscript),
            "subscript" => Some(FontVerticalAlign::Subscript),
            _ => None,
        }
    }
}
