//! Worksheet part (`xl/worksheets/sheetN.xml`)

use std::collections::{BTreeMap, BTreeSet};

use blocksheet_core::{CellAddress, CellValue, ResolvedCell, SheetLayout, SizeRange};
use quick_xml::escape::escape;

use crate::template;

const WORKSHEET_TEMPLATE: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">{{cols}}
  <sheetData>{{rows}}
  </sheetData>{{mergeCells}}
</worksheet>"#;

/// Render one worksheet
///
/// `row_heights` is keyed by 1-based row number. A row is written when it
/// holds a cell or has a height, in ascending order.
pub fn write_worksheet(
    layout: &SheetLayout,
    col_widths: &[SizeRange],
    row_heights: &BTreeMap<u32, f64>,
    merge_cells: &[String],
) -> String {
    let rows = write_rows(layout, row_heights);
    let cols = write_cols(col_widths);
    let merges = write_merge_cells(merge_cells);

    template::render(
        WORKSHEET_TEMPLATE,
        &[
            ("cols", cols.as_str()),
            ("rows", rows.as_str()),
            ("mergeCells", merges.as_str()),
        ],
    )
}

fn write_cols(col_widths: &[SizeRange]) -> String {
    let cols: Vec<&SizeRange> = col_widths
        .iter()
        .filter(|col| {
            let valid = col.min >= 1 && col.min <= col.max;
            if !valid {
                log::warn!("skipping column width for columns {}..={}", col.min, col.max);
            }
            valid
        })
        .collect();
    if cols.is_empty() {
        return String::new();
    }

    let mut s = String::from("\n  <cols>");
    for col in cols {
        s.push_str(&format!(
            "\n    <col min=\"{}\" max=\"{}\" width=\"{}\" customWidth=\"1\"/>",
            col.min, col.max, col.size
        ));
    }
    s.push_str("\n  </cols>");
    s
}

fn write_rows(layout: &SheetLayout, row_heights: &BTreeMap<u32, f64>) -> String {
    let numbers: BTreeSet<u32> = layout
        .row_indices()
        .into_iter()
        .map(|row| row + 1)
        .chain(row_heights.keys().copied().filter(|n| *n >= 1))
        .collect();

    let mut s = String::new();
    for number in numbers {
        let height = row_heights
            .get(&number)
            .map(|ht| format!(" ht=\"{}\" customHeight=\"1\"", ht))
            .unwrap_or_default();

        let mut cells = layout.row_cells(number - 1).peekable();
        if cells.peek().is_none() {
            s.push_str(&format!("\n    <row r=\"{}\"{}/>", number, height));
            continue;
        }

        s.push_str(&format!("\n    <row r=\"{}\"{}>", number, height));
        for (addr, cell) in cells {
            s.push_str("\n      ");
            s.push_str(&write_cell(addr, cell));
        }
        s.push_str("\n    </row>");
    }
    s
}

fn write_cell(addr: CellAddress, cell: &ResolvedCell) -> String {
    let (is_text, value) = match &cell.value {
        CellValue::Number(n) if n.is_finite() => (false, n.to_string()),
        CellValue::Number(n) => {
            log::warn!("writing non-finite number {} at {} as text", n, addr);
            (true, n.to_string())
        }
        CellValue::Text(text) => (true, escape(text.as_str()).into_owned()),
    };

    let mut attrs = String::new();
    if is_text {
        attrs.push_str(" t=\"str\"");
    }
    if cell.style != 0 {
        attrs.push_str(&format!(" s=\"{}\"", cell.style));
    }

    format!("<c r=\"{}\"{}><v>{}</v></c>", addr, attrs, value)
}

fn write_merge_cells(ranges: &[String]) -> String {
    if ranges.is_empty() {
        return String::new();
    }

    let mut s = format!("\n  <mergeCells count=\"{}\">", ranges.len());
    for range in ranges {
        s.push_str(&format!("\n    <mergeCell ref=\"{}\"/>", escape(range.as_str())));
    }
    s.push_str("\n  </mergeCells>");
    s
}
