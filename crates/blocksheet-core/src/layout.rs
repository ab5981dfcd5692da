//! Data blocks and the sparse cell grid they are merged into

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::address::CellAddress;
use crate::error::{Error, Result};
use crate::style::StyleIndex;

/// A cell value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Numeric value
    Number(f64),
    /// Text value
    Text(String),
}

impl CellValue {
    pub fn is_text(&self) -> bool {
        matches!(self, CellValue::Text(_))
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::Number(v)
    }
}

impl From<i32> for CellValue {
    fn from(v: i32) -> Self {
        CellValue::Number(v as f64)
    }
}

impl From<&str> for CellValue {
    fn from(v: &str) -> Self {
        CellValue::Text(v.to_string())
    }
}

impl From<String> for CellValue {
    fn from(v: String) -> Self {
        CellValue::Text(v)
    }
}

/// One input cell: a bare value, or a value with a style name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataCell {
    Number(f64),
    Text(String),
    Styled {
        value: CellValue,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        style: Option<String>,
    },
}

impl DataCell {
    /// A value rendered with the named style
    pub fn styled<V: Into<CellValue>, S: Into<String>>(value: V, style: S) -> Self {
        DataCell::Styled {
            value: value.into(),
            style: Some(style.into()),
        }
    }

    /// Coerce into a grid cell using the sheet's resolved style indices
    pub fn resolve(&self, styles: &StyleIndex) -> ResolvedCell {
        match self {
            DataCell::Number(n) => ResolvedCell::new(CellValue::Number(*n), styles.default_index()),
            DataCell::Text(s) => ResolvedCell::new(CellValue::Text(s.clone()), styles.default_index()),
            DataCell::Styled { value, style } => {
                ResolvedCell::new(value.clone(), styles.resolve(style.as_deref()))
            }
        }
    }
}

impl From<f64> for DataCell {
    fn from(v: f64) -> Self {
        DataCell::Number(v)
    }
}

impl From<i32> for DataCell {
    fn from(v: i32) -> Self {
        DataCell::Number(v as f64)
    }
}

impl From<&str> for DataCell {
    fn from(v: &str) -> Self {
        DataCell::Text(v.to_string())
    }
}

impl From<String> for DataCell {
    fn from(v: String) -> Self {
        DataCell::Text(v)
    }
}

/// An ordered row of input cells
pub type DataRow = Vec<DataCell>;

/// Rows of data anchored at an origin address such as `"B2"`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataBlock {
    pub origin: String,
    pub data: Vec<DataRow>,
}

impl DataBlock {
    pub fn new<S: Into<String>>(origin: S, data: Vec<DataRow>) -> Self {
        Self {
            origin: origin.into(),
            data,
        }
    }
}

/// A grid cell with its resolved cellXfs index
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCell {
    pub value: CellValue,
    pub style: u32,
}

impl ResolvedCell {
    pub fn new(value: CellValue, style: u32) -> Self {
        Self { value, style }
    }
}

/// Sparse cell grid of one worksheet
///
/// Keyed by 0-based `(row, col)`, so iteration is row-major and then by
/// column. Writing to an occupied position replaces the earlier cell.
#[derive(Debug, Clone, Default)]
pub struct SheetLayout {
    cells: BTreeMap<(u32, u32), ResolvedCell>,
}

impl SheetLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a block at its origin, overwriting any cells already there
    pub fn add_block(&mut self, block: &DataBlock, styles: &StyleIndex) -> Result<()> {
        let origin = CellAddress::parse(&block.origin)?;
        let out_of_range =
            || Error::InvalidAddress(format!("block at '{}' exceeds the sheet", block.origin));

        for (y, row) in block.data.iter().enumerate() {
            let r = u32::try_from(y)
                .ok()
                .and_then(|y| origin.row.checked_add(y))
                .filter(|r| *r < u32::MAX)
                .ok_or_else(out_of_range)?;
            for (x, cell) in row.iter().enumerate() {
                let c = u32::try_from(x)
                    .ok()
                    .and_then(|x| origin.col.checked_add(x))
                    .filter(|c| *c < u32::MAX)
                    .ok_or_else(out_of_range)?;
                self.cells.insert((r, c), cell.resolve(styles));
            }
        }

        Ok(())
    }

    /// Get the cell at 0-based offsets
    pub fn get(&self, row: u32, col: u32) -> Option<&ResolvedCell> {
        self.cells.get(&(row, col))
    }

    /// Iterate over all cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (CellAddress, &ResolvedCell)> {
        self.cells
            .iter()
            .map(|(&(row, col), cell)| (CellAddress::new(row, col), cell))
    }

    /// Cells of one 0-based row, ordered by column
    pub fn row_cells(&self, row: u32) -> impl Iterator<Item = (CellAddress, &ResolvedCell)> {
        self.cells
            .range((row, 0)..=(row, u32::MAX))
            .map(|(&(row, col), cell)| (CellAddress::new(row, col), cell))
    }

    /// Distinct 0-based row indices that hold at least one cell
    pub fn row_indices(&self) -> Vec<u32> {
        let mut rows: Vec<u32> = self.cells.keys().map(|&(row, _)| row).collect();
        rows.dedup();
        rows
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn index() -> StyleIndex {
        [("default", 1), ("header", 2)].into_iter().collect()
    }

    #[test]
    fn test_add_block_offsets() {
        let mut layout = SheetLayout::new();
        let block = DataBlock::new(
            "B3",
            vec![
                vec![DataCell::styled("Name", "header"), DataCell::styled("Score", "header")],
                vec!["Ann".into(), 90.into()],
            ],
        );
        layout.add_block(&block, &index()).unwrap();

        assert_eq!(layout.cell_count(), 4);
        assert_eq!(
            layout.get(2, 1),
            Some(&ResolvedCell::new("Name".into(), 2))
        );
        assert_eq!(layout.get(3, 2), Some(&ResolvedCell::new(90.into(), 1)));
        assert_eq!(layout.get(0, 0), None);
    }

    #[test]
    fn test_overlapping_blocks_last_write_wins() {
        let mut layout = SheetLayout::new();
        let styles = index();
        layout
            .add_block(&DataBlock::new("A1", vec![vec![1.into(), 2.into()]]), &styles)
            .unwrap();
        layout
            .add_block(&DataBlock::new("B1", vec![vec!["x".into()]]), &styles)
            .unwrap();

        assert_eq!(layout.cell_count(), 2);
        assert_eq!(layout.get(0, 1).unwrap().value, CellValue::Text("x".into()));
    }

    #[test]
    fn test_unknown_style_falls_back_to_default() {
        let mut layout = SheetLayout::new();
        let block = DataBlock::new("A1", vec![vec![DataCell::styled(5, "nope")]]);
        layout.add_block(&block, &index()).unwrap();
        assert_eq!(layout.get(0, 0).unwrap().style, 1);

        let mut bare = SheetLayout::new();
        bare.add_block(&block, &StyleIndex::new()).unwrap();
        assert_eq!(bare.get(0, 0).unwrap().style, 0);
    }

    #[test]
    fn test_invalid_origin() {
        let mut layout = SheetLayout::new();
        let err = layout
            .add_block(&DataBlock::new("A0", vec![vec![1.into()]]), &index())
            .unwrap_err();
        assert!(matches!(err, Error::InvalidAddress(_)));
    }

    #[test]
    fn test_row_major_iteration() {
        let mut layout = SheetLayout::new();
        let styles = StyleIndex::new();
        layout
            .add_block(&DataBlock::new("C2", vec![vec![1.into()]]), &styles)
            .unwrap();
        layout
            .add_block(&DataBlock::new("A2", vec![vec![2.into()]]), &styles)
            .unwrap();
        layout
            .add_block(&DataBlock::new("B1", vec![vec![3.into()]]), &styles)
            .unwrap();

        let order: Vec<String> = layout.iter().map(|(addr, _)| addr.to_string()).collect();
        assert_eq!(order, vec!["B1", "A2", "C2"]);
        assert_eq!(layout.row_indices(), vec![0, 1]);
        assert_eq!(layout.row_cells(1).count(), 2);
    }

    #[test]
    fn test_deserialize_cells() {
        let row: DataRow =
            serde_json::from_str(r#"[1, "two", {"value": 3, "style": "header"}, {"value": "four"}]"#)
                .unwrap();
        assert_eq!(
            row,
            vec![
                DataCell::Number(1.0),
                DataCell::Text("two".into()),
                DataCell::styled(3, "header"),
                DataCell::Styled {
                    value: "four".into(),
                    style: None
                },
            ]
        );
    }
}
