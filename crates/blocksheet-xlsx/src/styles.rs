//! Shared style table (styles.xml) for XLSX writing
//!
//! Every sub-object of a named style is rendered to its styles.xml element
//! text and interned, so equal fonts, fills, borders and number formats are
//! written once. The composite `<xf>` built from those ids is interned too;
//! its id is the cell style index (`s` attribute) of every cell using it.

use blocksheet_core::{
    Alignment, Border, BorderEdge, BorderLineStyle, Color, Fill, Font, FontVerticalAlign,
    HorizontalAlignment, PatternType, Style, StyleIndex, StyleTable, Underline,
    VerticalAlignment,
};
use quick_xml::escape::escape;

use crate::interner::{RuleInterner, RULE_ID_TOKEN};
use crate::template;

/// First id of custom number formats (0-163 are builtin)
pub const FIRST_CUSTOM_NUM_FMT: u32 = 164;

/// First id of custom fills (`none` and `gray125` are builtin)
pub const FIRST_CUSTOM_FILL: u32 = 2;

const BUILTIN_FONT: &str = r#"<font><sz val="11"/><name val="Calibri"/><family val="2"/></font>"#;
const BUILTIN_FILLS: [&str; 2] = [
    r#"<fill><patternFill patternType="none"/></fill>"#,
    r#"<fill><patternFill patternType="gray125"/></fill>"#,
];
const BUILTIN_BORDER: &str = "<border><left/><right/><top/><bottom/><diagonal/></border>";
const BUILTIN_XF: &str = r#"<xf numFmtId="0" fontId="0" fillId="0" borderId="0" xfId="0"/>"#;

const STYLES_TEMPLATE: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">{{numFmts}}
  <fonts count="{{fontCount}}">{{fonts}}
  </fonts>
  <fills count="{{fillCount}}">{{fills}}
  </fills>
  <borders count="{{borderCount}}">{{borders}}
  </borders>
  <cellStyleXfs count="1">
    <xf numFmtId="0" fontId="0" fillId="0" borderId="0"/>
  </cellStyleXfs>
  <cellXfs count="{{xfCount}}">{{cellXfs}}
  </cellXfs>
  <cellStyles count="1">
    <cellStyle name="Normal" xfId="0" builtinId="0"/>
  </cellStyles>
  <dxfs count="0"/>
  <tableStyles count="0" defaultTableStyle="TableStyleMedium9" defaultPivotStyle="PivotStyleLight16"/>
</styleSheet>"#;

/// Workbook-wide style resolver
///
/// Feed each sheet's [`StyleTable`] through [`StyleResolver::consume`] in
/// sheet order, then render the shared part with
/// [`StyleResolver::to_styles_xml`].
#[derive(Debug)]
pub struct StyleResolver {
    num_fmts: RuleInterner,
    fonts: RuleInterner,
    borders: RuleInterner,
    fills: RuleInterner,
    cell_xfs: RuleInterner,
}

impl StyleResolver {
    pub fn new() -> Self {
        Self {
            num_fmts: RuleInterner::with_id_token(FIRST_CUSTOM_NUM_FMT),
            fonts: RuleInterner::new(),
            borders: RuleInterner::new(),
            fills: RuleInterner::with_start(FIRST_CUSTOM_FILL),
            cell_xfs: RuleInterner::new(),
        }
    }

    /// Resolve one named style to its cellXfs index
    pub fn resolve(&mut self, style: &Style) -> u32 {
        let num_fmt_id = match style.format_code.as_deref() {
            Some(code) if !code.is_empty() => self.num_fmts.push(&write_num_fmt(code)),
            _ => 0,
        };
        let font_id = style
            .font
            .as_ref()
            .map_or(0, |font| self.fonts.push(&write_font(font)));
        let border_id = style
            .border
            .as_ref()
            .map_or(0, |border| self.borders.push(&write_border(border)));
        let fill_id = style
            .fill
            .as_ref()
            .map_or(0, |fill| self.fills.push(&write_fill(fill)));

        let xf = write_xf(
            XfIds {
                num_fmt_id,
                font_id,
                fill_id,
                border_id,
            },
            style.alignment.as_ref(),
        );
        self.cell_xfs.push(&xf)
    }

    /// Resolve every style of a sheet, in declaration order
    pub fn consume(&mut self, styles: &StyleTable) -> StyleIndex {
        let mut index = StyleIndex::new();
        for (name, style) in styles {
            index.insert(name.as_str(), self.resolve(style));
        }
        index
    }

    pub fn font_count(&self) -> usize {
        self.fonts.len() + 1
    }

    pub fn fill_count(&self) -> usize {
        self.fills.len() + BUILTIN_FILLS.len()
    }

    pub fn border_count(&self) -> usize {
        self.borders.len() + 1
    }

    pub fn num_fmt_count(&self) -> usize {
        self.num_fmts.len()
    }

    pub fn cell_xf_count(&self) -> usize {
        self.cell_xfs.len() + 1
    }

    /// Render the complete `xl/styles.xml` part
    pub fn to_styles_xml(&self) -> String {
        let num_fmts = if self.num_fmts.is_empty() {
            String::new()
        } else {
            format!(
                "\n  <numFmts count=\"{}\">{}\n  </numFmts>",
                self.num_fmt_count(),
                join_elements(self.num_fmts.rules())
            )
        };

        let fonts = join_elements(std::iter::once(BUILTIN_FONT.to_string()).chain(self.fonts.rules()));
        let fills = join_elements(
            BUILTIN_FILLS
                .iter()
                .map(|f| f.to_string())
                .chain(self.fills.rules()),
        );
        let borders =
            join_elements(std::iter::once(BUILTIN_BORDER.to_string()).chain(self.borders.rules()));
        let cell_xfs =
            join_elements(std::iter::once(BUILTIN_XF.to_string()).chain(self.cell_xfs.rules()));

        let font_count = self.font_count().to_string();
        let fill_count = self.fill_count().to_string();
        let border_count = self.border_count().to_string();
        let xf_count = self.cell_xf_count().to_string();

        template::render(
            STYLES_TEMPLATE,
            &[
                ("numFmts", num_fmts.as_str()),
                ("fontCount", font_count.as_str()),
                ("fonts", fonts.as_str()),
                ("fillCount", fill_count.as_str()),
                ("fills", fills.as_str()),
                ("borderCount", border_count.as_str()),
                ("borders", borders.as_str()),
                ("xfCount", xf_count.as_str()),
                ("cellXfs", cell_xfs.as_str()),
            ],
        )
    }
}

impl Default for StyleResolver {
    fn default() -> Self {
        Self::new()
    }
}

fn join_elements<I: IntoIterator<Item = String>>(elements: I) -> String {
    let mut s = String::new();
    for element in elements {
        s.push_str("\n    ");
        s.push_str(&element);
    }
    s
}

#[derive(Debug, Clone, Copy)]
struct XfIds {
    num_fmt_id: u32,
    font_id: u32,
    fill_id: u32,
    border_id: u32,
}

/// ARGB hex of a color string, or `None` when it is not a valid color
fn argb(color: Option<&str>) -> Option<String> {
    let color = color?;
    match Color::from_hex(color) {
        Some(c) => Some(c.to_argb_hex()),
        None => {
            log::warn!("dropping invalid color '{}'", color);
            None
        }
    }
}

fn write_num_fmt(code: &str) -> String {
    format!(
        "<numFmt numFmtId=\"{}\" formatCode=\"{}\"/>",
        RULE_ID_TOKEN,
        escape(code)
    )
}

fn write_font(font: &Font) -> String {
    let mut s = String::from("<font>");
    if let Some(sz) = font.sz.filter(|sz| *sz != 0.0 && !sz.is_nan()) {
        s.push_str(&format!("<sz val=\"{}\"/>", sz));
    }
    if let Some(name) = font.name.as_deref().filter(|n| !n.is_empty()) {
        s.push_str(&format!("<name val=\"{}\"/>", escape(name)));
    }
    if let Some(rgb) = argb(font.color.as_deref()) {
        s.push_str(&format!("<color rgb=\"{}\"/>", rgb));
    }
    if font.b {
        s.push_str("<b/>");
    }
    if font.i {
        s.push_str("<i/>");
    }
    if let Some(u) = font.u.as_deref().and_then(Underline::from_name) {
        s.push_str(&format!("<u val=\"{}\"/>", u.as_str()));
    }
    if font.strike {
        s.push_str("<strike/>");
    }
    if let Some(va) = font.vert_align.as_deref().and_then(FontVerticalAlign::from_name) {
        s.push_str(&format!("<vertAlign val=\"{}\"/>", va.as_str()));
    }
    s.push_str("</font>");
    s
}

fn write_border_edge(tag: &str, edge: Option<&BorderEdge>, border: &Border) -> String {
    let style = edge
        .and_then(|e| e.style.as_deref())
        .or(border.style.as_deref())
        .and_then(BorderLineStyle::from_name)
        .filter(|s| *s != BorderLineStyle::None);

    let Some(style) = style else {
        return format!("<{tag}/>");
    };

    let color = edge
        .and_then(|e| e.color.as_deref())
        .or(border.color.as_deref());
    let color_tag = argb(color)
        .map(|rgb| format!("<color rgb=\"{}\" />", rgb))
        .unwrap_or_default();

    format!("<{tag} style=\"{}\">{}</{tag}>", style.as_str(), color_tag)
}

fn write_border(border: &Border) -> String {
    let mut attrs = String::new();
    if border.diagonal_up {
        attrs.push_str(" diagonalUp=\"1\"");
    }
    if border.diagonal_down {
        attrs.push_str(" diagonalDown=\"1\"");
    }

    let mut s = format!("<border{}>", attrs);
    s.push_str(&write_border_edge("left", border.left.as_ref(), border));
    s.push_str(&write_border_edge("right", border.right.as_ref(), border));
    s.push_str(&write_border_edge("top", border.top.as_ref(), border));
    s.push_str(&write_border_edge("bottom", border.bottom.as_ref(), border));
    if border.diagonal_up || border.diagonal_down {
        s.push_str(&write_border_edge("diagonal", border.diagonal.as_ref(), border));
    } else {
        s.push_str("<diagonal/>");
    }
    s.push_str("</border>");
    s
}

fn write_fill_color(tag: &str, color: Option<&str>) -> String {
    match argb(color) {
        Some(rgb) => format!("<{tag} rgb=\"{}\"/>", rgb),
        None => format!("<{tag} auto=\"1\"/>"),
    }
}

fn write_fill(fill: &Fill) -> String {
    let pattern = fill
        .pattern_type
        .as_deref()
        .and_then(PatternType::from_name)
        .map_or("none", |p| p.as_str());

    format!(
        "<fill><patternFill patternType=\"{}\">{}{}</patternFill></fill>",
        pattern,
        write_fill_color("fgColor", fill.fg_color.as_deref()),
        write_fill_color("bgColor", fill.bg_color.as_deref()),
    )
}

fn write_alignment(al: &Alignment) -> String {
    let horizontal = al.horizontal.as_deref().and_then(HorizontalAlignment::from_name);

    let mut s = String::from("<alignment");
    if let Some(h) = horizontal {
        s.push_str(&format!(" horizontal=\"{}\"", h.as_str()));
    }
    if let Some(v) = al.vertical.as_deref().and_then(VerticalAlignment::from_name) {
        s.push_str(&format!(" vertical=\"{}\"", v.as_str()));
    }
    if let Some(indent) = al.indent.filter(|i| *i != 0) {
        if horizontal.is_some_and(|h| h.allows_indent()) {
            s.push_str(&format!(" indent=\"{}\"", indent));
        }
    }
    if let Some(rotation) = al.text_rotation.filter(|r| *r != 0) {
        s.push_str(&format!(" textRotation=\"{}\"", rotation));
    }
    if al.wrap_text {
        s.push_str(" wrapText=\"1\"");
    }
    if al.shrink_to_fit {
        s.push_str(" shrinkToFit=\"1\"");
    }
    s.push_str("/>");
    s
}

fn write_xf(ids: XfIds, alignment: Option<&Alignment>) -> String {
    format!(
        "<xf numFmtId=\"{}\" fontId=\"{}\" fillId=\"{}\" borderId=\"{}\" xfId=\"0\">{}</xf>",
        ids.num_fmt_id,
        ids.font_id,
        ids.fill_id,
        ids.border_id,
        alignment.map(write_alignment).unwrap_or_default()
    )
}
