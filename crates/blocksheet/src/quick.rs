//! Quick tables: one captioned, bordered sheet with default styling
//!
//! ```rust
//! use blocksheet::quick::{quick_xlsx, QuickTable};
//!
//! let table = QuickTable::new(vec![
//!     vec![1.into(), "Ann".into(), 100.into()],
//!     vec![2.into(), "Bob".into(), 90.into()],
//! ])
//! .caption("Scores")
//! .headers(["#", "Name", "Score"]);
//!
//! let bytes = quick_xlsx(table, &[8.0, 20.0, 12.0]).unwrap();
//! assert!(bytes.starts_with(b"PK"));
//! ```

use blocksheet_core::{
    number_to_column, Alignment, Border, BorderLineStyle, DataBlock, DataCell, DataRow, Font,
    SheetOptions, SizeRule, Style, StyleTable, Worksheet, DEFAULT_STYLE,
};
use blocksheet_xlsx::{PackageAssembler, XlsxResult};
use serde::{Deserialize, Serialize};

/// Name of the only sheet of a quick workbook
pub const QUICK_SHEET_NAME: &str = "Sheet1";

/// Style of the caption row
pub const CAPTION_STYLE: &str = "caption";

/// Style of the header row
pub const HEADER_STYLE: &str = "header";

const CAPTION_ROW_HEIGHT: f64 = 24.0;

/// A table with an optional caption and header row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuickTable {
    /// Shown in row 1, bold and merged across the table width
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    /// Bold header row below the caption
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<Vec<String>>,
    pub data: Vec<DataRow>,
}

impl QuickTable {
    pub fn new(data: Vec<DataRow>) -> Self {
        Self {
            caption: None,
            headers: None,
            data,
        }
    }

    /// Set the caption
    pub fn caption<S: Into<String>>(mut self, caption: S) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Set the header row
    pub fn headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headers = Some(headers.into_iter().map(Into::into).collect());
        self
    }

    /// Columns spanned by the caption: header count, else first row length
    fn width(&self) -> usize {
        self.headers
            .as_ref()
            .map(Vec::len)
            .or_else(|| self.data.first().map(Vec::len))
            .filter(|w| *w > 0)
            .unwrap_or(1)
    }
}

/// Input of the quick builders: bare rows or a [`QuickTable`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuickInput {
    Rows(Vec<DataRow>),
    Table(QuickTable),
}

impl From<Vec<DataRow>> for QuickInput {
    fn from(rows: Vec<DataRow>) -> Self {
        QuickInput::Rows(rows)
    }
}

impl From<QuickTable> for QuickInput {
    fn from(table: QuickTable) -> Self {
        QuickInput::Table(table)
    }
}

fn quick_styles() -> StyleTable {
    let border = Border::all(BorderLineStyle::Thin, "000000");
    let alignment = Alignment::centered().with_wrap(true);
    let style = |font: Font| {
        Style::new()
            .font(font)
            .alignment(alignment.clone())
            .border(border.clone())
    };

    let mut styles = StyleTable::new();
    styles.insert(DEFAULT_STYLE.into(), style(Font::new().size(12.0)));
    styles.insert(
        CAPTION_STYLE.into(),
        style(Font::new().bold(true).size(18.0)),
    );
    styles.insert(
        HEADER_STYLE.into(),
        style(Font::new().bold(true).size(12.0)),
    );
    styles
}

/// Build the quick sheet
///
/// `col_widths` apply to columns 1, 2, ... in order; pass an empty slice to
/// keep the default widths.
pub fn quick_worksheet<I: Into<QuickInput>>(input: I, col_widths: &[f64]) -> XlsxResult<Worksheet> {
    let mut options = SheetOptions::default();
    let mut rows: Vec<DataRow> = Vec::new();

    match input.into() {
        QuickInput::Rows(data) => rows = data,
        QuickInput::Table(table) => {
            if let Some(caption) = &table.caption {
                let width = table.width();
                let mut title: DataRow = vec![DataCell::styled("", CAPTION_STYLE); width];
                title[0] = DataCell::styled(caption.as_str(), CAPTION_STYLE);
                rows.push(title);

                options.merge_cells = vec![format!("A1:{}1", number_to_column(width as u32))];
                options.row_heights = vec![SizeRule::single(1, CAPTION_ROW_HEIGHT)];
            }
            if let Some(headers) = &table.headers {
                rows.push(
                    headers
                        .iter()
                        .map(|h| DataCell::styled(h.as_str(), HEADER_STYLE))
                        .collect(),
                );
            }
            rows.extend(table.data);
        }
    }

    if !col_widths.is_empty() {
        options.col_widths = vec![SizeRule::sequence(1, col_widths.to_vec())];
    }

    let sheet = Worksheet::new(
        QUICK_SHEET_NAME,
        vec![DataBlock::new("A1", rows)],
        quick_styles(),
    )?;
    Ok(sheet.with_options(options))
}

/// Build an open one-sheet package for the quick sheet
pub fn quick_workbook<I: Into<QuickInput>>(
    input: I,
    col_widths: &[f64],
) -> XlsxResult<PackageAssembler> {
    let mut package = PackageAssembler::new();
    package.add_worksheet(quick_worksheet(input, col_widths)?)?;
    Ok(package)
}

/// Build the quick sheet and return the `.xlsx` bytes
pub fn quick_xlsx<I: Into<QuickInput>>(input: I, col_widths: &[f64]) -> XlsxResult<Vec<u8>> {
    quick_workbook(input, col_widths)?.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use blocksheet_core::{CellValue, SizeRange, StyleIndex};
    use pretty_assertions::assert_eq;

    fn rows() -> Vec<DataRow> {
        vec![
            vec![1.into(), "Ann".into(), 100.into()],
            vec![2.into(), "Bob".into(), 90.into()],
        ]
    }

    #[test]
    fn test_bare_rows() {
        let sheet = quick_worksheet(rows(), &[]).unwrap();
        assert_eq!(sheet.name(), "Sheet1");
        assert_eq!(sheet.blocks()[0].data, rows());
        assert_eq!(sheet.options(), &SheetOptions::default());
        let names: Vec<&str> = sheet.styles().keys().map(String::as_str).collect();
        assert_eq!(names, vec!["default", "caption", "header"]);
    }

    #[test]
    fn test_caption_and_headers() {
        let table = QuickTable::new(rows())
            .caption("Scores")
            .headers(["#", "Name", "Score"]);
        let sheet = quick_worksheet(table, &[8.0, 20.0]).unwrap();

        let data = &sheet.blocks()[0].data;
        assert_eq!(data.len(), 4);
        assert_eq!(data[0][0], DataCell::styled("Scores", "caption"));
        assert_eq!(data[0][2], DataCell::styled("", "caption"));
        assert_eq!(data[1][1], DataCell::styled("Name", "header"));

        let options = sheet.options();
        assert_eq!(options.merge_cells, vec!["A1:C1".to_string()]);
        assert_eq!(sheet.row_heights().get(&1), Some(&24.0));
        assert_eq!(
            sheet.col_widths(),
            vec![SizeRange::new(1, 1, 8.0), SizeRange::new(2, 2, 20.0)]
        );
    }

    #[test]
    fn test_caption_width_falls_back_to_first_row() {
        let table = QuickTable::new(vec![vec![1.into(), 2.into()]]).caption("T");
        let sheet = quick_worksheet(table, &[]).unwrap();
        assert_eq!(sheet.options().merge_cells, vec!["A1:B1".to_string()]);

        let empty = QuickTable::new(vec![]).caption("T");
        let sheet = quick_worksheet(empty, &[]).unwrap();
        assert_eq!(sheet.options().merge_cells, vec!["A1:A1".to_string()]);
    }

    #[test]
    fn test_bare_cells_use_default_style() {
        let sheet = quick_worksheet(rows(), &[]).unwrap();
        let index: StyleIndex = [("default", 1), ("caption", 2), ("header", 3)]
            .into_iter()
            .collect();
        let layout = sheet.layout(&index).unwrap();
        let cell = layout.get(1, 1).unwrap();
        assert_eq!(cell.value, CellValue::Text("Bob".into()));
        assert_eq!(cell.style, 1);
    }

    #[test]
    fn test_deserialize_input() {
        let rows: QuickInput = serde_json::from_str(r#"[[1, "a"], [2, "b"]]"#).unwrap();
        assert!(matches!(rows, QuickInput::Rows(ref r) if r.len() == 2));

        let table: QuickInput =
            serde_json::from_str(r#"{"caption": "T", "headers": ["x"], "data": [[1]]}"#).unwrap();
        match table {
            QuickInput::Table(t) => {
                assert_eq!(t.caption.as_deref(), Some("T"));
                assert_eq!(t.headers, Some(vec!["x".to_string()]));
            }
            other => panic!("expected a table, got {other:?}"),
        }
    }
}
