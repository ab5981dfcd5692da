//! # blocksheet-xlsx
//!
//! XLSX (Office Open XML) package writer for blocksheet.
//!
//! [`PackageAssembler`] collects worksheets, resolves every sheet's named
//! styles into one shared style table, then renders and zips the package
//! parts.

pub mod error;
pub mod interner;
pub mod package;
pub mod styles;
pub mod template;
pub mod writer;

pub use error::{XlsxError, XlsxResult};
pub use interner::RuleInterner;
pub use package::PackageAssembler;
pub use styles::StyleResolver;
pub use writer::archive::{write_archive, ArchiveOptions, Compression, PackageParts};
