//! Cell styling types
//!
//! This module contains the named-style input model:
//! - [`Style`] - Complete named style
//! - [`Font`] - Font settings
//! - [`Fill`] - Background fill
//! - [`Border`] - Cell borders
//! - [`Alignment`] - Text alignment
//! - [`Color`] - Validated color
//!
//! Enumerated attributes are stored as written and only interpreted when a
//! style is rendered, so unknown values degrade to "attribute absent".

mod alignment;
mod border;
mod color;
mod fill;
mod font;

pub use alignment::{Alignment, HorizontalAlignment, VerticalAlignment};
pub use border::{Border, BorderEdge, BorderLineStyle};
pub use color::Color;
pub use fill::{Fill, PatternType};
pub use font::{Font, FontVerticalAlign, Underline};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Reserved style name applied to cells without an explicit style
pub const DEFAULT_STYLE: &str = "default";

/// Named styles of one worksheet, in declaration order
pub type StyleTable = IndexMap<String, Style>;

/// Complete named style
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    /// Number format code, e.g. `#,##0.00`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<Border>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<Fill>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
}

impl Style {
    /// Create a new empty style
    pub fn new() -> Self {
        Self::default()
    }

    /// Set number format string
    pub fn format_code<S: Into<String>>(mut self, format: S) -> Self {
        self.format_code = Some(format.into());
        self
    }

    /// Set font
    pub fn font(mut self, font: Font) -> Self {
        self.font = Some(font);
        self
    }

    /// Set border
    pub fn border(mut self, border: Border) -> Self {
        self.border = Some(border);
        self
    }

    /// Set fill
    pub fn fill(mut self, fill: Fill) -> Self {
        self.fill = Some(fill);
        self
    }

    /// Set alignment
    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }
}

/// Resolved style name -> cellXfs index mapping of one worksheet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleIndex {
    indices: IndexMap<String, u32>,
}

impl StyleIndex {
    /// Create an empty index (every cell resolves to 0)
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the resolved index of a style name
    pub fn insert<S: Into<String>>(&mut self, name: S, index: u32) {
        self.indices.insert(name.into(), index);
    }

    /// Look up a style name
    pub fn get(&self, name: &str) -> Option<u32> {
        self.indices.get(name).copied()
    }

    /// Index of the `default` style, or 0 when the table has none
    pub fn default_index(&self) -> u32 {
        self.get(DEFAULT_STYLE).unwrap_or(0)
    }

    /// Index for a cell's style reference, falling back to the default
    pub fn resolve(&self, name: Option<&str>) -> u32 {
        match name {
            None => self.default_index(),
            Some(name) => self.get(name).unwrap_or_else(|| {
                log::warn!("unknown style '{}', using default", name);
                self.default_index()
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Iterate over names and indices in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.indices.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for StyleIndex {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        Self {
            indices: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
