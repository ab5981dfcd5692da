//! Worksheet input definition

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::layout::{DataBlock, SheetLayout};
use crate::size::{expand_sizes, flatten_sizes, SizeRange, SizeRule};
use crate::style::{StyleIndex, StyleTable};
use crate::{MAX_COLS, MAX_ROWS, MAX_SHEET_NAME_LEN};

const INVALID_NAME_CHARS: &[char] = &[':', '\\', '/', '?', '*', '[', ']'];

/// Check a sheet name and return the name as it will be stored
///
/// Empty names and names containing `: \ / ? * [ ]` are rejected. Names
/// longer than [`MAX_SHEET_NAME_LEN`] characters are truncated.
pub fn validate_sheet_name(name: &str) -> Result<String> {
    if name.is_empty() {
        return Err(Error::InvalidSheetName("Sheet name cannot be empty".into()));
    }

    if let Some(c) = name.chars().find(|c| INVALID_NAME_CHARS.contains(c)) {
        return Err(Error::InvalidSheetName(format!(
            "Sheet name cannot contain '{}'",
            c
        )));
    }

    if name.chars().count() > MAX_SHEET_NAME_LEN {
        let truncated: String = name.chars().take(MAX_SHEET_NAME_LEN).collect();
        log::warn!("sheet name '{}' truncated to '{}'", name, truncated);
        return Ok(truncated);
    }

    Ok(name.to_string())
}

/// Per-sheet layout options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SheetOptions {
    /// Ranges such as `"A1:C1"`, written as-is
    pub merge_cells: Vec<String>,
    pub col_widths: Vec<SizeRule>,
    pub row_heights: Vec<SizeRule>,
}

/// A worksheet: name, named styles, data blocks and layout options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WorksheetDef")]
pub struct Worksheet {
    name: String,
    styles: StyleTable,
    blocks: Vec<DataBlock>,
    options: SheetOptions,
}

impl Worksheet {
    /// Create a worksheet, validating its name
    pub fn new(name: &str, blocks: Vec<DataBlock>, styles: StyleTable) -> Result<Self> {
        Ok(Self {
            name: validate_sheet_name(name)?,
            styles,
            blocks,
            options: SheetOptions::default(),
        })
    }

    /// Set the layout options
    pub fn with_options(mut self, options: SheetOptions) -> Self {
        self.options = options;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn styles(&self) -> &StyleTable {
        &self.styles
    }

    pub fn blocks(&self) -> &[DataBlock] {
        &self.blocks
    }

    pub fn options(&self) -> &SheetOptions {
        &self.options
    }

    /// Merge every block into a cell grid using resolved style indices
    pub fn layout(&self, styles: &StyleIndex) -> Result<SheetLayout> {
        let mut layout = SheetLayout::new();
        for block in &self.blocks {
            layout.add_block(block, styles)?;
        }
        Ok(layout)
    }

    /// Concrete column width ranges
    pub fn col_widths(&self) -> Vec<SizeRange> {
        expand_sizes(&self.options.col_widths, MAX_COLS)
    }

    /// 1-based row number -> height
    pub fn row_heights(&self) -> BTreeMap<u32, f64> {
        flatten_sizes(&expand_sizes(&self.options.row_heights, MAX_ROWS))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BlocksDef {
    One(DataBlock),
    Many(Vec<DataBlock>),
}

#[derive(Deserialize)]
struct WorksheetDef {
    name: String,
    #[serde(default)]
    styles: StyleTable,
    blocks: BlocksDef,
    #[serde(default)]
    options: SheetOptions,
}

impl TryFrom<WorksheetDef> for Worksheet {
    type Error = Error;

    fn try_from(def: WorksheetDef) -> Result<Self> {
        let blocks = match def.blocks {
            BlocksDef::One(block) => vec![block],
            BlocksDef::Many(blocks) => blocks,
        };
        Ok(Worksheet::new(&def.name, blocks, def.styles)?.with_options(def.options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::CellValue;
    use crate::style::Style;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sheet_name_validation() {
        assert_eq!(validate_sheet_name("Report").unwrap(), "Report");
        assert!(validate_sheet_name("").is_err());
        for bad in ["a:b", "a\\b", "a/b", "a?b", "a*b", "[a", "a]"] {
            assert!(
                matches!(validate_sheet_name(bad), Err(Error::InvalidSheetName(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_long_sheet_name_is_truncated() {
        let long = "abcdefghijklmnopqrstuvwxyz0123456789";
        let name = validate_sheet_name(long).unwrap();
        assert_eq!(name, "abcdefghijklmnopqrstuvwxyz01234");
        assert_eq!(name.chars().count(), MAX_SHEET_NAME_LEN);

        let wide = "表".repeat(40);
        assert_eq!(validate_sheet_name(&wide).unwrap().chars().count(), 31);
    }

    #[test]
    fn test_layout_and_sizes() {
        let mut styles = StyleTable::new();
        styles.insert("default".into(), Style::new());
        let sheet = Worksheet::new(
            "Data",
            vec![DataBlock::new("A1", vec![vec!["x".into()]])],
            styles,
        )
        .unwrap()
        .with_options(SheetOptions {
            merge_cells: vec!["A1:B1".into()],
            col_widths: vec![SizeRule::sequence(2, vec![10.0, 20.0])],
            row_heights: vec![SizeRule::range(1, 2, 24.0)],
        });

        let index: StyleIndex = [("default", 1)].into_iter().collect();
        let layout = sheet.layout(&index).unwrap();
        assert_eq!(layout.get(0, 0).unwrap().value, CellValue::Text("x".into()));
        assert_eq!(layout.get(0, 0).unwrap().style, 1);

        assert_eq!(
            sheet.col_widths(),
            vec![SizeRange::new(2, 2, 10.0), SizeRange::new(3, 3, 20.0)]
        );
        assert_eq!(
            sheet.row_heights().into_iter().collect::<Vec<_>>(),
            vec![(1, 24.0), (2, 24.0)]
        );
    }

    #[test]
    fn test_deserialize_worksheet() {
        let json = r#"{
            "name": "option",
            "styles": {"header": {"font": {"b": true}}},
            "blocks": {"origin": "B2", "data": [[{"value": "Name", "style": "header"}], [1]]},
            "options": {"mergeCells": ["B2:D2"], "rowHeights": [{"min": 2, "size": 40}]}
        }"#;
        let sheet: Worksheet = serde_json::from_str(json).unwrap();
        assert_eq!(sheet.name(), "option");
        assert_eq!(sheet.blocks().len(), 1);
        assert_eq!(sheet.options().merge_cells, vec!["B2:D2".to_string()]);

        let bad = r#"{"name": "a/b", "blocks": []}"#;
        assert!(serde_json::from_str::<Worksheet>(bad).is_err());
    }
}
