//! # blocksheet
//!
//! Generate styled `.xlsx` workbooks from blocks of row data.
//!
//! A workbook is a list of [`Worksheet`]s. Each sheet declares named
//! [`Style`]s and places [`DataBlock`]s (rows of values) at origin addresses
//! such as `"B2"`. [`PackageAssembler`] resolves the named styles of all
//! sheets into one shared style table and writes the OOXML package.
//!
//! ## Example
//!
//! ```rust
//! use blocksheet::prelude::*;
//!
//! let mut styles = StyleTable::new();
//! styles.insert("header".into(), Style::new().font(Font::new().bold(true)));
//!
//! let sheet = Worksheet::new(
//!     "Scores",
//!     vec![DataBlock::new("A1", vec![
//!         vec![DataCell::styled("Name", "header"), DataCell::styled("Score", "header")],
//!         vec!["Ann".into(), 90.into()],
//!     ])],
//!     styles,
//! )?;
//!
//! let mut package = PackageAssembler::new();
//! package.add_worksheet(sheet)?;
//! package.resolve_styles()?;
//! let bytes = package.to_bytes()?;
//! // std::fs::write("scores.xlsx", bytes)?;
//! # assert!(!bytes.is_empty());
//! # Ok::<(), XlsxError>(())
//! ```
//!
//! For a plain captioned table with default styling see [`quick`].

pub mod prelude;
pub mod quick;

// Re-export core types
pub use blocksheet_core::{
    column_to_number, number_to_column, validate_sheet_name, Alignment, Border, BorderEdge,
    BorderLineStyle, CellAddress, CellValue, Color, DataBlock, DataCell, DataRow, Error, Fill,
    Font, FontVerticalAlign, HorizontalAlignment, PatternType, Result, SheetOptions, SizeRule,
    SizeValue, Style, StyleIndex, StyleTable, Underline, VerticalAlignment, Worksheet,
    DEFAULT_STYLE, MAX_COLS, MAX_ROWS, MAX_SHEET_NAME_LEN,
};

// Re-export XLSX I/O
pub use blocksheet_xlsx::{
    ArchiveOptions, Compression, PackageAssembler, PackageParts, XlsxError, XlsxResult,
};

pub use quick::{quick_workbook, quick_worksheet, quick_xlsx, QuickInput, QuickTable};
