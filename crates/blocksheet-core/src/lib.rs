//! # blocksheet-core
//!
//! Input data model and sheet layout for the blocksheet workbook generator.
//!
//! This crate provides the types a workbook is described with:
//! - [`Style`] and [`StyleTable`] - Named cell styles (fonts, fills, borders, ...)
//! - [`DataBlock`] and [`DataCell`] - Rows of values anchored at an origin address
//! - [`Worksheet`] - A named sheet with its styles, blocks and [`SheetOptions`]
//! - [`SheetLayout`] - The sparse cell grid the blocks are merged into
//!
//! ## Example
//!
//! ```rust
//! use blocksheet_core::{DataBlock, DataCell, StyleIndex, StyleTable, Worksheet};
//!
//! let sheet = Worksheet::new(
//!     "Scores",
//!     vec![DataBlock::new("B2", vec![
//!         vec![DataCell::styled("Name", "header"), DataCell::styled("Score", "header")],
//!         vec!["Ann".into(), 90.into()],
//!     ])],
//!     StyleTable::new(),
//! )
//! .unwrap();
//!
//! let layout = sheet.layout(&StyleIndex::new()).unwrap();
//! assert_eq!(layout.cell_count(), 4);
//! ```

pub mod address;
pub mod error;
pub mod layout;
pub mod size;
pub mod style;
pub mod worksheet;

// Re-exports for convenience
pub use address::{column_to_number, number_to_column, CellAddress};
pub use error::{Error, Result};
pub use layout::{CellValue, DataBlock, DataCell, DataRow, ResolvedCell, SheetLayout};
pub use size::{expand_sizes, flatten_sizes, SizeRange, SizeRule, SizeValue};
pub use worksheet::{validate_sheet_name, SheetOptions, Worksheet};

// Re-export all style types for convenience
pub use style::{
    Alignment, Border, BorderEdge, BorderLineStyle, Color, Fill, Font, FontVerticalAlign,
    HorizontalAlignment, PatternType, Style, StyleIndex, StyleTable, Underline,
    VerticalAlignment, DEFAULT_STYLE,
};

/// Maximum length of a sheet name
pub const MAX_SHEET_NAME_LEN: usize = 31;

/// Maximum number of rows in a worksheet
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet
pub const MAX_COLS: u32 = 16_384;
