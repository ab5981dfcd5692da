//! Prelude module - common imports for blocksheet users
//!
//! ```rust
//! use blocksheet::prelude::*;
//! ```

pub use crate::{
    // Style types
    Alignment,
    ArchiveOptions,
    Border,
    BorderEdge,
    BorderLineStyle,
    // Cell types
    CellValue,
    DataBlock,
    DataCell,
    DataRow,
    Fill,
    Font,
    HorizontalAlignment,
    // Package assembly
    PackageAssembler,
    PatternType,
    // Quick tables
    QuickTable,
    SheetOptions,
    SizeRule,
    Style,
    StyleTable,
    VerticalAlignment,
    Worksheet,
    // Error types
    XlsxError,
    XlsxResult,
};
