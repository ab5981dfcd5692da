//! Example: build a styled two-sheet workbook and a quick table

use blocksheet::prelude::*;
use blocksheet::quick::quick_xlsx;

fn main() -> XlsxResult<()> {
    let border = Border::all(BorderLineStyle::Thin, "000000");

    let mut styles = StyleTable::new();
    styles.insert(
        "default".into(),
        Style::new()
            .border(border.clone())
            .alignment(Alignment::centered()),
    );
    styles.insert(
        "caption".into(),
        Style::new()
            .font(Font::new().size(24.0).bold(true))
            .border(border.clone())
            .alignment(Alignment::centered()),
    );
    styles.insert(
        "header".into(),
        Style::new()
            .font(Font::new().bold(true))
            .fill(Fill::solid("DDEBF7"))
            .border(border),
    );

    let data = vec![
        vec![
            DataCell::styled("Report card", "caption"),
            DataCell::styled("", "caption"),
            DataCell::styled("", "caption"),
        ],
        vec![
            DataCell::styled("#", "header"),
            DataCell::styled("Name", "header"),
            DataCell::styled("Score", "header"),
        ],
        vec![1.into(), "Ann".into(), 100.into()],
        vec![2.into(), "Bob".into(), 90.into()],
        vec![3.into(), "Cy".into(), 80.into()],
    ];

    let sheet = Worksheet::new("Scores", vec![DataBlock::new("A1", data)], styles)?
        .with_options(SheetOptions {
            merge_cells: vec!["A1:C1".into()],
            col_widths: vec![SizeRule::sequence(1, vec![8.0, 20.0, 12.0])],
            row_heights: vec![SizeRule::single(1, 40.0), SizeRule::range(2, 5, 20.0)],
        });

    let mut package = PackageAssembler::new();
    package.add_worksheet(sheet)?;
    package.resolve_styles()?;
    package.write_file("/tmp/scores.xlsx")?;
    println!("Created /tmp/scores.xlsx");

    let quick = QuickTable::new(vec![vec![1.into(), "Ann".into()], vec![2.into(), "Bob".into()]])
        .caption("Quick")
        .headers(["#", "Name"]);
    std::fs::write("/tmp/quick.xlsx", quick_xlsx(quick, &[8.0, 20.0])?)?;
    println!("Created /tmp/quick.xlsx");

    Ok(())
}
