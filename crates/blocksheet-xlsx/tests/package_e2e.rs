//! End-to-end package tests (assemble -> zip -> reopen -> inspect parts)

use std::collections::HashMap;
use std::io::{Cursor, Read};

use blocksheet_core::{
    Alignment, Border, BorderLineStyle, DataBlock, DataCell, Fill, Font, SheetOptions, SizeRule,
    Style, StyleTable, Worksheet,
};
use blocksheet_xlsx::{ArchiveOptions, PackageAssembler, XlsxError};
use pretty_assertions::assert_eq;
use quick_xml::events::Event;
use quick_xml::Reader;

fn unzip(bytes: Vec<u8>) -> HashMap<String, String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut parts = HashMap::new();
    for i in 0..archive.len() {
        let mut file = archive.by_index(i).unwrap();
        let mut content = String::new();
        file.read_to_string(&mut content).unwrap();
        parts.insert(file.name().to_string(), content);
    }
    parts
}

/// Declared `count` of `container` and the number of `child` elements inside it
fn count_children(xml: &str, container: &str, child: &str) -> (usize, usize) {
    let mut reader = Reader::from_str(xml);
    let mut declared = 0;
    let mut actual = 0;
    let mut inside = false;

    loop {
        match reader.read_event().unwrap() {
            Event::Start(e) if e.name().as_ref() == container.as_bytes() => {
                inside = true;
                let attr = e.try_get_attribute("count").unwrap().unwrap();
                declared = attr.unescape_value().unwrap().parse().unwrap();
            }
            Event::End(e) if e.name().as_ref() == container.as_bytes() => inside = false,
            Event::Start(e) | Event::Empty(e)
                if inside && e.name().as_ref() == child.as_bytes() =>
            {
                actual += 1
            }
            Event::Eof => break,
            _ => {}
        }
    }

    (declared, actual)
}

fn styled_sheet() -> Worksheet {
    let border = Border::all(BorderLineStyle::Thin, "000000");
    let mut styles = StyleTable::new();
    styles.insert(
        "default".into(),
        Style::new().border(border.clone()).alignment(Alignment::centered()),
    );
    styles.insert(
        "header".into(),
        Style::new()
            .font(Font::new().bold(true).size(12.0))
            .fill(Fill::solid("DDEBF7"))
            .border(border),
    );
    styles.insert("percent".into(), Style::new().format_code("0.0%"));

    Worksheet::new(
        "Report",
        vec![DataBlock::new(
            "B2",
            vec![
                vec![DataCell::styled("Item", "header"), DataCell::styled("Share", "header")],
                vec!["apples".into(), DataCell::styled(0.25, "percent")],
            ],
        )],
        styles,
    )
    .unwrap()
    .with_options(SheetOptions {
        merge_cells: vec!["B1:C1".into()],
        col_widths: vec![SizeRule::sequence(2, vec![18.0, 10.0])],
        row_heights: vec![SizeRule::single(2, 20.0)],
    })
}

#[test]
fn test_single_cell_workbook() {
    let sheet = Worksheet::new(
        "Sheet1",
        vec![DataBlock::new("A1", vec![vec!["x".into()]])],
        StyleTable::new(),
    )
    .unwrap();

    let mut package = PackageAssembler::new();
    package.add_worksheet(sheet).unwrap();
    package.resolve_styles().unwrap();
    let parts = unzip(package.to_bytes().unwrap());

    let worksheets: Vec<&String> = parts
        .keys()
        .filter(|name| name.starts_with("xl/worksheets/"))
        .collect();
    assert_eq!(worksheets, vec!["xl/worksheets/sheet1.xml"]);

    let sheet_xml = &parts["xl/worksheets/sheet1.xml"];
    assert_eq!(sheet_xml.matches("<row ").count(), 1);
    assert_eq!(sheet_xml.matches("<c ").count(), 1);
    assert!(sheet_xml.contains("<c r=\"A1\" t=\"str\"><v>x</v></c>"));
    assert!(!sheet_xml.contains(" s=\""));
}

#[test]
fn test_package_has_fixed_part_set() {
    let mut package = PackageAssembler::from_sheets(vec![styled_sheet()]);
    package.resolve_styles().unwrap();
    let parts = unzip(package.to_bytes().unwrap());

    let mut names: Vec<&str> = parts.keys().map(String::as_str).collect();
    names.sort_unstable();
    assert_eq!(
        names,
        vec![
            "[Content_Types].xml",
            "_rels/.rels",
            "docProps/app.xml",
            "xl/_rels/workbook.xml.rels",
            "xl/styles.xml",
            "xl/workbook.xml",
            "xl/worksheets/sheet1.xml",
        ]
    );
}

#[test]
fn test_style_counts_match_elements() {
    let mut package = PackageAssembler::from_sheets(vec![styled_sheet()]);
    package.resolve_styles().unwrap();
    let parts = unzip(package.to_bytes().unwrap());
    let styles = &parts["xl/styles.xml"];

    for (container, child, expected) in [
        ("numFmts", "numFmt", 1),
        ("fonts", "font", 2),
        ("fills", "fill", 3),
        ("borders", "border", 2),
        ("cellXfs", "xf", 4),
    ] {
        let (declared, actual) = count_children(styles, container, child);
        assert_eq!(declared, actual, "{container} count attribute");
        assert_eq!(actual, expected, "{container} element count");
    }
}

#[test]
fn test_cells_reference_resolved_styles() {
    let mut package = PackageAssembler::from_sheets(vec![styled_sheet()]);
    package.resolve_styles().unwrap();
    let index = package.style_index(0).unwrap();
    assert_eq!(
        index.iter().collect::<Vec<_>>(),
        vec![("default", 1), ("header", 2), ("percent", 3)]
    );

    let xml = package.render_sheet(0).unwrap();
    assert!(xml.contains("<c r=\"B2\" t=\"str\" s=\"2\"><v>Item</v></c>"));
    assert!(xml.contains("<c r=\"B3\" t=\"str\" s=\"1\"><v>apples</v></c>"));
    assert!(xml.contains("<c r=\"C3\" s=\"3\"><v>0.25</v></c>"));
    assert!(xml.contains("<row r=\"2\" ht=\"20\" customHeight=\"1\">"));
    assert!(xml.contains("<col min=\"3\" max=\"3\" width=\"10\" customWidth=\"1\"/>"));
    assert!(xml.contains("<mergeCell ref=\"B1:C1\"/>"));
}

#[test]
fn test_size_positions_stay_inside_sheet() {
    let sheet = Worksheet::new(
        "Sizes",
        vec![DataBlock::new("A1", vec![vec![1.into()]])],
        StyleTable::new(),
    )
    .unwrap()
    .with_options(SheetOptions {
        merge_cells: vec![],
        col_widths: vec![
            SizeRule::single(0, 5.0),
            SizeRule::range(16_000, u32::MAX, 9.0),
        ],
        row_heights: vec![SizeRule::single(0, 20.0), SizeRule::single(2, 15.0)],
    });

    let mut package = PackageAssembler::from_sheets(vec![sheet]);
    package.resolve_styles().unwrap();
    let xml = package.render_sheet(0).unwrap();

    assert!(!xml.contains("r=\"0\""));
    assert!(!xml.contains("min=\"0\""));
    assert_eq!(xml.matches("<row ").count(), 2);
    assert!(xml.contains("<row r=\"2\" ht=\"15\" customHeight=\"1\"/>"));
    assert!(xml.contains("<col min=\"16000\" max=\"16384\" width=\"9\" customWidth=\"1\"/>"));
    assert_eq!(xml.matches("<col ").count(), 1);
}

#[test]
fn test_relationship_ids_line_up() {
    let sheets: Vec<Worksheet> = ["One", "Two", "Three"]
        .iter()
        .map(|name| {
            Worksheet::new(
                name,
                vec![DataBlock::new("A1", vec![vec![1.into()]])],
                StyleTable::new(),
            )
            .unwrap()
        })
        .collect();
    let mut package =
        PackageAssembler::from_sheets(sheets).with_options(ArchiveOptions::stored());
    package.resolve_styles().unwrap();
    let parts = unzip(package.to_bytes().unwrap());

    let workbook = &parts["xl/workbook.xml"];
    let rels = &parts["xl/_rels/workbook.xml.rels"];
    let content_types = &parts["[Content_Types].xml"];
    for (i, name) in ["One", "Two", "Three"].iter().enumerate() {
        let n = i + 1;
        assert!(workbook.contains(&format!(
            "<sheet name=\"{name}\" sheetId=\"{n}\" r:id=\"rId{n}\"/>"
        )));
        assert!(rels.contains(&format!(
            "Id=\"rId{n}\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet\" Target=\"worksheets/sheet{n}.xml\""
        )));
        assert!(content_types.contains(&format!("/xl/worksheets/sheet{n}.xml")));
        assert!(parts.contains_key(&format!("xl/worksheets/sheet{n}.xml")));
    }
    assert!(rels.contains("Id=\"rId4\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles\""));
    assert!(parts["docProps/app.xml"].contains("<vt:i4>3</vt:i4>"));
}

#[test]
fn test_rendering_open_package_fails_for_any_content() {
    for sheet in [styled_sheet(), Worksheet::new("Empty", vec![], StyleTable::new()).unwrap()] {
        let package = PackageAssembler::from_sheets(vec![sheet]);
        assert!(matches!(package.render_sheet(0), Err(XlsxError::Ordering(_))));
        assert!(matches!(package.to_bytes(), Err(XlsxError::Ordering(_))));
    }
}

#[test]
fn test_write_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.xlsx");

    let mut package = PackageAssembler::from_sheets(vec![styled_sheet()]);
    package.resolve_styles().unwrap();
    package.write_file(&path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    let parts = unzip(bytes);
    assert!(parts["xl/worksheets/sheet1.xml"].contains("apples"));
}
