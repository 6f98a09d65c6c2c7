//! Listing output in table, JSON, CSV and TSV form.

use crate::error::CliError;
use crate::utils::format_timestamp;
use clap::ValueEnum;
use encanto::config::OutputFormat;
use encanto::{Brand, Category, Product, ProductImage};
use serde::Serialize;
use std::io::Write;

/// Output format flag for list commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum FormatArg {
    /// Tab-separated table format (human-readable)
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// TSV format (tab-separated values)
    Tsv,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Table => OutputFormat::Table,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Csv => OutputFormat::Csv,
            FormatArg::Tsv => OutputFormat::Tsv,
        }
    }
}

/// The `--format` flag if given, else the configured default.
pub fn choose_format(flag: Option<FormatArg>, config: &encanto::Config) -> OutputFormat {
    flag.map_or_else(|| config.output_format(), OutputFormat::from)
}

/// A record that can be printed as one row.
pub trait Row: Serialize {
    /// Column headers for CSV/TSV output.
    const HEADERS: &'static [&'static str];

    /// Cell values in header order.
    ///
    /// Category paths are shown with `separator`.
    fn cells(&self, separator: &str) -> Vec<String>;
}

impl Row for Category {
    const HEADERS: &'static [&'static str] = &["id", "path", "image", "created_at", "updated_at"];

    fn cells(&self, separator: &str) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.path.to_string_with(separator),
            self.image.clone().unwrap_or_default(),
            format_timestamp(self.timestamps.created_at),
            format_timestamp(self.timestamps.updated_at),
        ]
    }
}

impl Row for Brand {
    const HEADERS: &'static [&'static str] = &["id", "name", "description", "image", "created_at"];

    fn cells(&self, _separator: &str) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.description.clone(),
            self.image.clone().unwrap_or_default(),
            format_timestamp(self.timestamps.created_at),
        ]
    }
}

impl Row for Product {
    const HEADERS: &'static [&'static str] = &[
        "id",
        "name",
        "price",
        "quantity",
        "category",
        "brand",
        "created_at",
    ];

    fn cells(&self, _separator: &str) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.price.to_string(),
            self.quantity.to_string(),
            self.category.to_string(),
            self.brand.to_string(),
            format_timestamp(self.timestamps.created_at),
        ]
    }
}

impl Row for ProductImage {
    const HEADERS: &'static [&'static str] = &["id", "product", "image", "created_at"];

    fn cells(&self, _separator: &str) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.product.to_string(),
            self.image.clone(),
            format_timestamp(self.created_at),
        ]
    }
}

/// Write `rows` to `out` in `format`.
pub fn write_rows<T: Row, W: Write>(
    out: &mut W,
    format: OutputFormat,
    rows: &[T],
    separator: &str,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Table => write_table(out, rows, separator),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, rows)?;
            writeln!(out)?;
            Ok(())
        }
        OutputFormat::Csv => write_delimited(out, rows, separator, b','),
        OutputFormat::Tsv => write_delimited(out, rows, separator, b'\t'),
    }
}

/// Write `rows` to stdout in `format`.
pub fn print_rows<T: Row>(format: OutputFormat, rows: &[T], separator: &str) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    write_rows(&mut handle, format, rows, separator)
}

/// Print one value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    serde_json::to_writer_pretty(&mut handle, value)?;
    writeln!(handle)?;
    Ok(())
}

fn write_table<T: Row, W: Write>(out: &mut W, rows: &[T], separator: &str) -> Result<(), CliError> {
    let header_line = T::HEADERS
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(out, "{header_line}")?;

    for row in rows {
        let cells: Vec<String> = row
            .cells(separator)
            .into_iter()
            .map(|cell| if cell.is_empty() { "-".into() } else { cell })
            .collect();
        writeln!(out, "{}", cells.join("\t"))?;
    }
    Ok(())
}

fn write_delimited<T: Row, W: Write>(
    out: &mut W,
    rows: &[T],
    separator: &str,
    delimiter: u8,
) -> Result<(), CliError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(out);

    writer.write_record(T::HEADERS)?;
    for row in rows {
        writer.write_record(row.cells(separator))?;
    }
    writer.flush()?;
    Ok(())
}
