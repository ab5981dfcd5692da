//! Zip archive output

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::XlsxResult;

/// Zip compression used for every part
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Compression {
    #[default]
    Deflated,
    Stored,
}

impl Compression {
    fn method(self) -> CompressionMethod {
        match self {
            Compression::Deflated => CompressionMethod::Deflated,
            Compression::Stored => CompressionMethod::Stored,
        }
    }
}

/// Archive writer options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArchiveOptions {
    pub compression: Compression,
}

impl ArchiveOptions {
    /// Store parts without compression
    pub fn stored() -> Self {
        Self {
            compression: Compression::Stored,
        }
    }
}

/// Ordered set of package parts (`name -> bytes`)
#[derive(Debug, Clone, Default)]
pub struct PackageParts {
    parts: Vec<(String, Vec<u8>)>,
}

impl PackageParts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a part; a part with the same name is replaced in place
    pub fn insert<N: Into<String>, B: Into<Vec<u8>>>(&mut self, name: N, bytes: B) {
        let name = name.into();
        let bytes = bytes.into();
        match self.parts.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = bytes,
            None => self.parts.push((name, bytes)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&[u8]> {
        self.parts
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, b)| b.as_slice())
    }

    /// Part content as UTF-8 text
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(|b| std::str::from_utf8(b).ok())
    }

    /// Part names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.parts.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.parts.iter().map(|(n, b)| (n.as_str(), b.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

/// Zip every part, in order, into an in-memory archive
pub fn write_archive(parts: &PackageParts, options: &ArchiveOptions) -> XlsxResult<Vec<u8>> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let file_options =
        SimpleFileOptions::default().compression_method(options.compression.method());

    for (name, bytes) in parts.iter() {
        zip.start_file(name, file_options)?;
        zip.write_all(bytes)?;
    }

    let cursor = zip.finish()?;
    log::debug!(
        "wrote {} parts into a {} byte archive",
        parts.len(),
        cursor.get_ref().len()
    );
    Ok(cursor.into_inner())
}
