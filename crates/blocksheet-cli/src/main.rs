//! Blocksheet CLI - JSON workbook descriptions to XLSX

use anyhow::{bail, Context, Result};
use blocksheet::prelude::*;
use blocksheet::quick::{quick_workbook, QuickInput};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "blocksheet")]
#[command(author, version, about = "Generate styled XLSX workbooks from JSON")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a workbook from `{"sheets": [...]}`
    Build {
        /// Input JSON file
        input: PathBuf,

        /// Output XLSX file
        #[arg(short, long)]
        output: PathBuf,

        /// Store parts without compression
        #[arg(long)]
        store: bool,
    },

    /// Build a one-sheet table from rows or `{"caption", "headers", "data"}`
    Quick {
        /// Input JSON file
        input: PathBuf,

        /// Output XLSX file
        #[arg(short, long)]
        output: PathBuf,

        /// Column width, repeat once per column starting at column A
        #[arg(short = 'w', long = "col-width")]
        col_widths: Vec<f64>,

        /// Store parts without compression
        #[arg(long)]
        store: bool,
    },
}

#[derive(Deserialize)]
struct WorkbookFile {
    sheets: Vec<Worksheet>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            input,
            output,
            store,
        } => build(&input, &output, archive_options(store)),
        Commands::Quick {
            input,
            output,
            col_widths,
            store,
        } => quick(&input, &output, &col_widths, archive_options(store)),
    }
}

fn archive_options(store: bool) -> ArchiveOptions {
    if store {
        ArchiveOptions::stored()
    } else {
        ArchiveOptions::default()
    }
}

fn read_json<T: for<'de> Deserialize<'de>>(input: &Path) -> Result<T> {
    let text = fs::read_to_string(input)
        .with_context(|| format!("Failed to read '{}'", input.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Failed to parse '{}'", input.display()))
}

fn build(input: &Path, output: &Path, options: ArchiveOptions) -> Result<()> {
    let file: WorkbookFile = read_json(input)?;
    if file.sheets.is_empty() {
        bail!("'{}' does not define any sheets", input.display());
    }

    let mut package = PackageAssembler::from_sheets(file.sheets).with_options(options);
    package
        .resolve_styles()
        .context("Failed to resolve styles")?;
    write_package(&package, output)
}

fn quick(input: &Path, output: &Path, col_widths: &[f64], options: ArchiveOptions) -> Result<()> {
    let data: QuickInput = read_json(input)?;

    let mut package = quick_workbook(data, col_widths)
        .context("Failed to build quick table")?
        .with_options(options);
    package
        .resolve_styles()
        .context("Failed to resolve styles")?;
    write_package(&package, output)
}

fn write_package(package: &PackageAssembler, output: &Path) -> Result<()> {
    package
        .write_file(output)
        .with_context(|| format!("Failed to write '{}'", output.display()))?;

    let names: Vec<&str> = package.worksheets().iter().map(|s| s.name()).collect();
    eprintln!(
        "Wrote {} ({} sheet{}: {})",
        output.display(),
        names.len(),
        if names.len() == 1 { "" } else { "s" },
        names.join(", ")
    );
    Ok(())
}
