//! Border style types

use serde::{Deserialize, Serialize};

/// Border settings of a named style
///
/// `style` and `color` apply to every edge that does not set its own. The
/// diagonal is only drawn when `diagonal_up` or `diagonal_down` is set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Border {
    /// Line style shared by all edges, see [`BorderLineStyle`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    /// Color shared by all edges
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Draw the diagonal from bottom-left to top-right
    pub diagonal_up: bool,
    /// Draw the diagonal from top-left to bottom-right
    pub diagonal_down: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<BorderEdge>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<BorderEdge>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<BorderEdge>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<BorderEdge>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagonal: Option<BorderEdge>,
}

impl Border {
    /// Create an empty border rule
    pub fn new() -> Self {
        Self::default()
    }

    /// Same line style and color on all four sides
    pub fn all<C: Into<String>>(style: BorderLineStyle, color: C) -> Self {
        Self {
            style: Some(style.as_str().to_string()),
            color: Some(color.into()),
            ..Self::default()
        }
    }

    /// Set the left border
    pub fn with_left(mut self, edge: BorderEdge) -> Self {
        self.left = Some(edge);
        self
    }

    /// Set the right border
    pub fn with_right(mut self, edge: BorderEdge) -> Self {
        self.right = Some(edge);
        self
    }

    /// Set the top border
    pub fn with_top(mut self, edge: BorderEdge) -> Self {
        self.top = Some(edge);
        self
    }

    /// Set the bottom border
    pub fn with_bottom(mut self, edge: BorderEdge) -> Self {
        self.bottom = Some(edge);
        self
    }

    /// Set the diagonal line and the directions it is drawn in
    pub fn with_diagonal(mut self, edge: BorderEdge, up: bool, down: bool) -> Self {
        self.diagonal = Some(edge);
        self.diagonal_up = up;
        self.diagonal_down = down;
        self
    }
}

/// A single border edge
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BorderEdge {
    /// Line style, see [`BorderLineStyle`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    /// Line color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl BorderEdge {
    /// Create a new border edge
    pub fn new<C: Into<String>>(style: BorderLineStyle, color: C) -> Self {
        Self {
            style: Some(style.as_str().to_string()),
            color: Some(color.into()),
        }
    }

    /// Create a thin black border
    pub fn thin() -> Self {
        Self::new(BorderLineStyle::Thin, "000000")
    }
}

/// Border line styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BorderLineStyle {
    /// No border
    None,
    /// Hair line (very thin)
    Hair,
    /// Dotted line
    Dotted,
    /// Dash-dot-dot
    DashDotDot,
    /// Dash-dot
    DashDot,
    /// Dashed line
    Dashed,
    /// Thin line
    Thin,
    /// Medium dash-dot-dot
    MediumDashDotDot,
    /// Slant dash-dot
    SlantDashDot,
    /// Medium dash-dot
    MediumDashDot,
    /// Medium dashed
    MediumDashed,
    /// Medium line
    Medium,
    /// Thick line
    Thick,
    /// Double line
    Double,
}

impl BorderLineStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            BorderLineStyle::None => "none",
            BorderLineStyle::Hair => "hair",
            BorderLineStyle::Dotted => "dotted",
            BorderLineStyle::DashDotDot => "dashDotDot",
            BorderLineStyle::DashDot => "dashDot",
            BorderLineStyle::Dashed => "dashed",
            BorderLineStyle::Thin => "thin",
            BorderLineStyle::MediumDashDotDot => "mediumDashDotDot",
            BorderLineStyle::SlantDashDot => "slantDashDot",
            BorderLineStyle::MediumDashDot => "mediumDashDot",
            BorderLineStyle::MediumDashed => "mediumDashed",
            BorderLineStyle::Medium => "medium",
            BorderLineStyle::Thick => "thick",
            BorderLineStyle::Double => "double",
        }
    }

    /// Look up a value by its OOXML name
    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "none" => Some(BorderLineStyle::None),
            "hair" => Some(BorderLineStyle::Hair),
            "dotted" => Some(BorderLineStyle::Dotted),
            "dashDotDot" => Some(BorderLineStyle::DashDotDot),
            "dashDot" => Some(BorderLineStyle::DashDot),
            "dashed" => Some(BorderLineStyle::Dashed),
            "thin" => Some(BorderLineStyle::Thin),
            "mediumDashDotDot" => Some(BorderLineStyle::MediumDashDotDot),
            "slantDashDot" => Some(BorderLineStyle::SlantDashDot),
            "mediumDashDot" => Some(BorderLineStyle::MediumDashDot),
            "mediumDashed" => Some(BorderLineStyle::MediumDashed),
            "medium" => Some(BorderLineStyle::Medium),
            "thick" => Some(BorderLineStyle::Thick),
            "double" => Some(BorderLineStyle::Double),
            _ => None,
        }
    }
}
