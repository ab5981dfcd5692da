//! Package part renderers
//!
//! Each function renders one fixed OOXML part. Worksheets are numbered
//! 1..=N everywhere: part name `sheet{i}.xml`, `sheetId="{i}"` and
//! relationship `rId{i}`. The styles relationship takes `rId{N+1}`.

pub mod archive;
pub mod sheet;

use quick_xml::escape::escape;

use crate::template;

pub use sheet::write_worksheet;

pub const CONTENT_TYPES_PART: &str = "[Content_Types].xml";
pub const ROOT_RELS_PART: &str = "_rels/.rels";
pub const APP_PART: &str = "docProps/app.xml";
pub const WORKBOOK_PART: &str = "xl/workbook.xml";
pub const WORKBOOK_RELS_PART: &str = "xl/_rels/workbook.xml.rels";
pub const STYLES_PART: &str = "xl/styles.xml";

/// Part name of the 1-based worksheet `number`
pub fn worksheet_part(number: usize) -> String {
    format!("xl/worksheets/sheet{}.xml", number)
}

const CONTENT_TYPES_TEMPLATE: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>{{sheets}}
  <Override PartName="/xl/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml"/>
  <Override PartName="/docProps/app.xml" ContentType="application/vnd.openxmlformats-officedocument.extended-properties+xml"/>
</Types>"#;

const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>
  <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties" Target="docProps/app.xml"/>
</Relationships>"#;

const APP_TEMPLATE: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">
  <Application>Microsoft Excel</Application>
  <HeadingPairs>
    <vt:vector size="2" baseType="variant">
      <vt:variant>
        <vt:lpstr>Worksheets</vt:lpstr>
      </vt:variant>
      <vt:variant>
        <vt:i4>{{count}}</vt:i4>
      </vt:variant>
    </vt:vector>
  </HeadingPairs>
  <TitlesOfParts>
    <vt:vector size="{{count}}" baseType="lpstr">{{titles}}
    </vt:vector>
  </TitlesOfParts>
</Properties>"#;

const WORKBOOK_TEMPLATE: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
  <sheets>{{sheets}}
  </sheets>
</workbook>"#;

const WORKBOOK_RELS_TEMPLATE: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">{{sheets}}
  <Relationship Id="rId{{stylesId}}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
</Relationships>"#;

/// `[Content_Types].xml` listing every worksheet part
pub fn write_content_types(sheet_count: usize) -> String {
    let sheets: String = (1..=sheet_count)
        .map(|i| {
            format!(
                "\n  <Override PartName=\"/{}\" ContentType=\"application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml\"/>",
                worksheet_part(i)
            )
        })
        .collect();
    template::render(CONTENT_TYPES_TEMPLATE, &[("sheets", sheets.as_str())])
}

/// `_rels/.rels`
pub fn write_root_rels() -> String {
    template::render(ROOT_RELS, &[])
}

/// `docProps/app.xml` counting and naming the sheets
pub fn write_app<S: AsRef<str>>(sheet_names: &[S]) -> String {
    let count = sheet_names.len().to_string();
    let titles: String = sheet_names
        .iter()
        .map(|name| format!("\n      <vt:lpstr>{}</vt:lpstr>", escape(name.as_ref())))
        .collect();
    template::render(
        APP_TEMPLATE,
        &[("count", count.as_str()), ("titles", titles.as_str())],
    )
}

/// `xl/workbook.xml`
pub fn write_workbook<S: AsRef<str>>(sheet_names: &[S]) -> String {
    let sheets: String = sheet_names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            format!(
                "\n    <sheet name=\"{}\" sheetId=\"{}\" r:id=\"rId{}\"/>",
                escape(name.as_ref()),
                i + 1,
                i + 1
            )
        })
        .collect();
    template::render(WORKBOOK_TEMPLATE, &[("sheets", sheets.as_str())])
}

/// `xl/_rels/workbook.xml.rels`
pub fn write_workbook_rels(sheet_count: usize) -> String {
    let sheets: String = (1..=sheet_count)
        .map(|i| {
            format!(
                "\n  <Relationship Id=\"rId{}\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet\" Target=\"worksheets/sheet{}.xml\"/>",
                i, i
            )
        })
        .collect();
    let styles_id = (sheet_count + 1).to_string();
    template::render(
        WORKBOOK_RELS_TEMPLATE,
        &[("sheets", sheets.as_str()), ("stylesId", styles_id.as_str())],
    )
}
