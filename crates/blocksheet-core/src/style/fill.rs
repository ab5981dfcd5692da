//! Fill/background style types

use serde::{Deserialize, Serialize};

/// Pattern fill of a named style
///
/// For a solid fill the visible color is `fg_color`; the background only
/// shows through patterned fills.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Fill {
    /// Pattern name, see [`PatternType`]; unknown names render as `none`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern_type: Option<String>,
    /// Foreground color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fg_color: Option<String>,
    /// Background color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<String>,
}

impl Fill {
    /// Create a solid fill with the given color
    pub fn solid<C: Into<String>>(color: C) -> Self {
        Self {
            pattern_type: Some(PatternType::Solid.as_str().to_string()),
            fg_color: Some(color.into()),
            bg_color: None,
        }
    }

    /// Create a pattern fill
    pub fn pattern(pattern: PatternType) -> Self {
        Self {
            pattern_type: Some(pattern.as_str().to_string()),
            ..Self::default()
        }
    }

    /// Set the foreground color
    pub fn with_fg<C: Into<String>>(mut self, color: C) -> Self {
        self.fg_color = Some(color.into());
        self
    }

    /// Set the background color
    pub fn with_bg<C: Into<String>>(mut self, color: C) -> Self {
        self.bg_color = Some(color.into());
        self
    }
}

/// Pattern types for pattern fills
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternType {
    Solid,
    DarkHorizontal,
    LightHorizontal,
    DarkGray,
    DarkVertical,
    LightVertical,
    MediumGray,
    DarkDown,
    LightDown,
    LightGray,
    DarkUp,
    LightUp,
    Gray125,
    DarkGrid,
    LightGrid,
    Gray0625,
    DarkTrellis,
    LightTrellis,
}

impl PatternType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternType::Solid => "solid",
            PatternType::DarkHorizontal => "darkHorizontal",
            PatternType::LightHorizontal => "lightHorizontal",
            PatternType::DarkGray => "darkGray",
            PatternType::DarkVertical => "darkVertical",
            PatternType::LightVertical => "lightVertical",
            PatternType::MediumGray => "mediumGray",
            PatternType::DarkDown => "darkDown",
            PatternType::LightDown => "lightDown",
            PatternType::LightGray => "lightGray",
            PatternType::DarkUp => "darkUp",
            PatternType::LightUp => "lightUp",
            PatternType::Gray125 => "gray125",
            PatternType::DarkGrid => "darkGrid",
            PatternType::LightGrid => "lightGrid",
            PatternType::Gray0625 => "gray0625",
            PatternType::DarkTrellis => "darkTrellis",
            PatternType::LightTrellis => "lightTrellis",
        }
    }

    /// Look up a value by its OOXML name (`none` is not a pattern)
    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "solid" => Some(PatternType::Solid),
            "darkHorizontal" => Some(PatternType::DarkHorizontal),
            "lightHorizontal" => Some(PatternType::LightHorizontal),
            "darkGray" => Some(PatternType::DarkGray),
            "darkVertical" => Some(PatternType::DarkVertical),
            "lightVertical" => Some(PatternType::LightVertical),
            "mediumGray" => Some(PatternType::MediumGray),
            "darkDown" => Some(PatternType::DarkDown),
            "lightDown" => Some(PatternType::LightDown),
            "lightGray" => Some(PatternType::LightGray),
            "darkUp" => Some(PatternType::DarkUp),
            "lightUp" => Some(PatternType::LightUp),
            "gray125" => Some(PatternType::Gray125),
            "darkGrid" => Some(PatternType::DarkGrid),
            "lightGrid" => Some(PatternType::LightGrid),
            "gray0625" => Some(PatternType::Gray0625),
            "darkTrellis" => Some(PatternType::DarkTrellis),
            "lightTrellis" => Some(PatternType::LightTrellis),
            _ => None,
        }
    }
}
