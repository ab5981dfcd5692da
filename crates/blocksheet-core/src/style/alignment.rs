//! Text alignment types

use serde::{Deserialize, Serialize};

/// Text alignment settings
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Alignment {
    /// Horizontal alignment, see [`HorizontalAlignment`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal: Option<String>,
    /// Vertical alignment, see [`VerticalAlignment`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical: Option<String>,
    /// Indent level; only honoured for left, right and distributed text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indent: Option<u32>,
    /// 0-90 counter-clockwise, 91-180 clockwise, 181-255 reserved encodings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_rotation: Option<u32>,
    /// Wrap text
    pub wrap_text: bool,
    /// Shrink to fit
    pub shrink_to_fit: bool,
}

impl Alignment {
    /// Create a new empty alignment
    pub fn new() -> Self {
        Self::default()
    }

    /// Center horizontally and vertically
    pub fn centered() -> Self {
        Self::new()
            .with_horizontal(HorizontalAlignment::Center)
            .with_vertical(VerticalAlignment::Center)
    }

    /// Set horizontal alignment
    pub fn with_horizontal(mut self, align: HorizontalAlignment) -> Self {
        self.horizontal = Some(align.as_str().to_string());
        self
    }

    /// Set vertical alignment
    pub fn with_vertical(mut self, align: VerticalAlignment) -> Self {
        self.vertical = Some(align.as_str().to_string());
        self
    }

    /// Set indent level
    pub fn with_indent(mut self, indent: u32) -> Self {
        self.indent = Some(indent);
        self
    }

    /// Set text rotation
    pub fn with_rotation(mut self, rotation: u32) -> Self {
        self.text_rotation = Some(rotation);
        self
    }

    /// Enable text wrapping
    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap_text = wrap;
        self
    }

    /// Enable shrink to fit
    pub fn with_shrink(mut self, shrink: bool) -> Self {
        self.shrink_to_fit = shrink;
        self
    }
}

/// Horizontal alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HorizontalAlignment {
    Left,
    Center,
    Right,
    /// Repeat content to fill cell width
    Fill,
    Justify,
    /// Center across selection
    CenterContinuous,
    Distributed,
}

impl HorizontalAlignment {
    pub fn as_str(&self) -> &'static str {
        match self {
            HorizontalAlignment::Left => "left",
            HorizontalAlignment::Center => "center",
            HorizontalAlignment::Right => "right",
            HorizontalAlignment::Fill => "fill",
            HorizontalAlignment::Justify => "justify",
            HorizontalAlignment::CenterContinuous => "centerContinuous",
            HorizontalAlignment::Distributed => "distributed",
        }
    }

    /// Look up a value by its OOXML name
    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "left" => Some(HorizontalAlignment::Left),
            "center" => Some(HorizontalAlignment::Center),
            "right" => Some(HorizontalAlignment::Right),
            "fill" => Some(HorizontalAlignment::Fill),
            "justify" => Some(HorizontalAlignment::Justify),
            "centerContinuous" => Some(HorizontalAlignment::CenterContinuous),
            "distributed" => Some(HorizontalAlignment::Distributed),
            _ => None,
        }
    }

    /// Whether an indent applies to this alignment
    pub fn allows_indent(&self) -> bool {
        matches!(
            self,
            HorizontalAlignment::Left | HorizontalAlignment::Right | HorizontalAlignment::Distributed
        )
    }
}

/// Vertical alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerticalAlignment {
    Top,
    Center,
    Bottom,
    Justify,
    Distributed,
}

impl VerticalAlignment {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerticalAlignment::Top => "top",
            VerticalAlignment::Center => "center",
            VerticalAlignment::Bottom => "bottom",
            VerticalAlignment::Justify => "justify",
            VerticalAlignment::Distributed => "distributed",
        }
    }

    /// Look up a value by its OOXML name
    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "top" => Some(VerticalAlignment::Top),
            "center" => Some(VerticalAlignment::Center),
            "bottom" => Some(VerticalAlignment::Bottom),
            "justify" => Some(VerticalAlignment::Justify),
            "distributed" => Some(VerticalAlignment::Distributed),
            _ => None,
        }
    }
}
