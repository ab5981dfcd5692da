//! Package assembly: worksheets in, one `.xlsx` archive out

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use blocksheet_core::{StyleIndex, Worksheet};

use crate::error::{XlsxError, XlsxResult};
use crate::styles::StyleResolver;
use crate::writer::archive::{write_archive, ArchiveOptions, PackageParts};
use crate::writer::{self, worksheet_part};

#[derive(Debug)]
enum State {
    /// Sheets may still be added
    Open,
    /// Styles consumed; holds one index per sheet
    Resolved(Vec<StyleIndex>),
}

/// Builds an XLSX package from worksheets
///
/// The assembler is either open or resolved. While open, worksheets can be
/// added. [`resolve_styles`](Self::resolve_styles) feeds every sheet's styles,
/// in sheet order, through one shared [`StyleResolver`] and moves it to the
/// resolved state; only then can parts be rendered.
///
/// # Example
///
/// ```rust
/// use blocksheet_core::{DataBlock, StyleTable, Worksheet};
/// use blocksheet_xlsx::PackageAssembler;
///
/// let sheet = Worksheet::new(
///     "Data",
///     vec![DataBlock::new("A1", vec![vec!["x".into()]])],
///     StyleTable::new(),
/// )
/// .unwrap();
///
/// let mut package = PackageAssembler::new();
/// package.add_worksheet(sheet).unwrap();
/// package.resolve_styles().unwrap();
/// let bytes = package.to_bytes().unwrap();
/// assert!(bytes.starts_with(b"PK"));
/// ```
#[derive(Debug)]
pub struct PackageAssembler {
    sheets: Vec<Worksheet>,
    resolver: StyleResolver,
    state: State,
    options: ArchiveOptions,
}

impl PackageAssembler {
    pub fn new() -> Self {
        Self {
            sheets: Vec::new(),
            resolver: StyleResolver::new(),
            state: State::Open,
            options: ArchiveOptions::default(),
        }
    }

    /// Create an open assembler holding `sheets`
    pub fn from_sheets(sheets: Vec<Worksheet>) -> Self {
        Self {
            sheets,
            ..Self::new()
        }
    }

    /// Set the archive options
    pub fn with_options(mut self, options: ArchiveOptions) -> Self {
        self.options = options;
        self
    }

    /// Add a worksheet, returning its 0-based index
    pub fn add_worksheet(&mut self, sheet: Worksheet) -> XlsxResult<usize> {
        if self.is_resolved() {
            return Err(XlsxError::Ordering(format!(
                "cannot add sheet '{}' after styles were resolved",
                sheet.name()
            )));
        }
        self.sheets.push(sheet);
        Ok(self.sheets.len() - 1)
    }

    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    pub fn worksheets(&self) -> &[Worksheet] {
        &self.sheets
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self.state, State::Resolved(_))
    }

    /// Resolve the styles of every sheet into the shared style table
    pub fn resolve_styles(&mut self) -> XlsxResult<()> {
        if self.is_resolved() {
            return Err(XlsxError::Ordering("styles were already resolved".into()));
        }

        let resolver = &mut self.resolver;
        let indices: Vec<StyleIndex> = self
            .sheets
            .iter()
            .map(|sheet| resolver.consume(sheet.styles()))
            .collect();

        log::debug!(
            "resolved styles of {} sheets: {} cellXfs, {} fonts, {} fills, {} borders, {} numFmts",
            self.sheets.len(),
            self.resolver.cell_xf_count(),
            self.resolver.font_count(),
            self.resolver.fill_count(),
            self.resolver.border_count(),
            self.resolver.num_fmt_count()
        );

        self.state = State::Resolved(indices);
        Ok(())
    }

    fn indices(&self) -> XlsxResult<&[StyleIndex]> {
        match &self.state {
            State::Resolved(indices) => Ok(indices),
            State::Open => Err(XlsxError::Ordering(
                "styles must be resolved before rendering".into(),
            )),
        }
    }

    /// Resolved style indices of the 0-based sheet `index`
    pub fn style_index(&self, index: usize) -> XlsxResult<&StyleIndex> {
        self.indices()?
            .get(index)
            .ok_or(XlsxError::MissingSheet(index))
    }

    /// Render the worksheet part of the 0-based sheet `index`
    ///
    /// Only reads the shared, already resolved state, so sheets can be
    /// rendered independently.
    pub fn render_sheet(&self, index: usize) -> XlsxResult<String> {
        let styles = self.style_index(index)?;
        let sheet = self
            .sheets
            .get(index)
            .ok_or(XlsxError::MissingSheet(index))?;

        let layout = sheet.layout(styles)?;
        Ok(writer::write_worksheet(
            &layout,
            &sheet.col_widths(),
            &sheet.row_heights(),
            &sheet.options().merge_cells,
        ))
    }

    /// Render the shared `xl/styles.xml` part
    pub fn render_styles(&self) -> XlsxResult<String> {
        self.indices()?;
        Ok(self.resolver.to_styles_xml())
    }

    /// Render every part of the package, in archive order
    pub fn render_parts(&self) -> XlsxResult<PackageParts> {
        self.indices()?;

        let names: Vec<&str> = self.sheets.iter().map(|s| s.name()).collect();
        let mut parts = PackageParts::new();
        parts.insert(writer::ROOT_RELS_PART, writer::write_root_rels());
        parts.insert(writer::APP_PART, writer::write_app(&names));
        parts.insert(
            writer::WORKBOOK_RELS_PART,
            writer::write_workbook_rels(names.len()),
        );
        parts.insert(writer::WORKBOOK_PART, writer::write_workbook(&names));
        parts.insert(writer::STYLES_PART, self.render_styles()?);
        for i in 0..self.sheets.len() {
            parts.insert(worksheet_part(i + 1), self.render_sheet(i)?);
        }
        parts.insert(
            writer::CONTENT_TYPES_PART,
            writer::write_content_types(names.len()),
        );

        log::debug!("rendered {} package parts", parts.len());
        Ok(parts)
    }

    /// Render and zip the package
    pub fn to_bytes(&self) -> XlsxResult<Vec<u8>> {
        let parts = self.render_parts()?;
        write_archive(&parts, &self.options)
    }

    /// Write the package to a writer
    pub fn write<W: Write>(&self, mut writer: W) -> XlsxResult<()> {
        writer.write_all(&self.to_bytes()?)?;
        writer.flush()?;
        Ok(())
    }

    /// Write the package to a file path
    pub fn write_file<P: AsRef<Path>>(&self, path: P) -> XlsxResult<()> {
        let file = File::create(path)?;
        self.write(BufWriter::new(file))
    }

    /// Resolve styles if still open, then return the archive bytes
    pub fn finish(mut self) -> XlsxResult<Vec<u8>> {
        if !self.is_resolved() {
            self.resolve_styles()?;
        }
        self.to_bytes()
    }
}

impl Default for PackageAssembler {
    fn default() -> Self {
        Self::new()
    }
}
