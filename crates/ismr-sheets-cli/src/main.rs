//! ismr CLI - ISMR text to XLSX conversion tool

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use ismr_sheets::prelude::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ismr")]
#[command(
    author,
    version,
    about = "Convert delimited ISMR text files into a multi-sheet XLSX workbook"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert one or more ISMR files into a single workbook
    Convert {
        /// Input text files (.ismr or .txt)
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Output workbook path
        #[arg(short, long, default_value = "ismr_merged_output.xlsx")]
        output: PathBuf,

        /// Mark the first data row of every sheet as a header
        /// (bold + frozen top row)
        #[arg(long)]
        header: bool,
    },

    /// Show information about a workbook
    Info {
        /// Input workbook file
        input: PathBuf,
    },

    /// List all sheets in a workbook
    Sheets {
        /// Input workbook file
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            inputs,
            output,
            header,
        } => run_convert(&inputs, &output, header),
        Commands::Info { input } => show_info(&input),
        Commands::Sheets { input } => list_sheets(&input),
    }
}

fn run_convert(inputs: &[PathBuf], output: &PathBuf, header: bool) -> Result<()> {
    let files: Vec<InputFile> = inputs
        .iter()
        .map(|path| {
            InputFile::from_path(path)
                .with_context(|| format!("Failed to read '{}'", path.display()))
        })
        .collect::<Result<_>>()?;

    let result = convert(&files, &ConvertOptions { use_header: header })
        .context("Conversion failed")?;

    for status in &result.statuses {
        println!("{}", format_status(status));
    }

    match result.workbook {
        Some(ref bytes) => {
            std::fs::write(output, &bytes)
                .with_context(|| format!("Failed to write '{}'", output.display()))?;
            eprintln!(
                "Wrote {} sheet(s) to '{}'",
                result.success_count(),
                output.display()
            );
            Ok(())
        }
        None => bail!("No sheets were produced; nothing written"),
    }
}

fn format_status(status: &FileStatus) -> String {
    match &status.outcome {
        FileOutcome::Success { sheet, rows } => format!(
            "ok      {}: {} row(s) -> sheet \"{}\"",
            status.file_name, rows, sheet
        ),
        FileOutcome::Warning(reason) => format!("warning {}: {}", status.file_name, reason),
        FileOutcome::Error(reason) => format!("error   {}: {}", status.file_name, reason),
    }
}

fn show_info(input: &PathBuf) -> Result<()> {
    let workbook = XlsxReader::read_file(input)
        .with_context(|| format!("Failed to open '{}'", input.display()))?;

    println!("File: {}", input.display());
    println!("Sheets: {}", workbook.sheet_count());

    for (i, sheet) in workbook.sheets().enumerate() {
        println!();
        println!("  Sheet {}: \"{}\"", i, sheet.name());
        println!(
            "    Size: {} rows x {} columns",
            sheet.row_count(),
            sheet.column_count()
        );
        println!(
            "    Header row: {}",
            if sheet.header_row() { "yes (frozen)" } else { "no" }
        );
    }

    Ok(())
}

fn list_sheets(input: &PathBuf) -> Result<()> {
    let workbook = XlsxReader::read_file(input)
        .with_context(|| format!("Failed to open '{}'", input.display()))?;

    for (i, sheet) in workbook.sheets().enumerate() {
        println!("{}\t{}", i, sheet.name());
    }

    Ok(())
}
