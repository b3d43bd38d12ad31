//! Output rendering: table or JSON, selected by `--output`.

use clap::ValueEnum;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::error::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Render a list of entities as a table of rows, or as a JSON array.
pub fn render_list<T, R>(
    format: OutputFormat,
    items: &[T],
    to_row: impl Fn(&T) -> R,
) -> Result<String, CliError>
where
    T: Serialize,
    R: Tabled,
{
    match format {
        OutputFormat::Table => {
            let rows: Vec<R> = items.iter().map(to_row).collect();
            Ok(Table::new(rows).with(Style::sharp()).to_string())
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(items)?),
    }
}

/// Render a single entity as a key/value detail block, or as JSON.
pub fn render_single<T>(
    format: OutputFormat,
    item: &T,
    detail: impl Fn(&T) -> String,
) -> Result<String, CliError>
where
    T: Serialize,
{
    match format {
        OutputFormat::Table => Ok(detail(item)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(item)?),
    }
}

/// Print rendered output unless `--quiet` was given.
pub fn print_output(out: &str, quiet: bool) {
    if !quiet {
        println!("{out}");
    }
}

/// Render an optional string field for a detail block.
pub fn or_dash(value: Option<&str>) -> String {
    value.map_or_else(|| "-".into(), ToOwned::to_owned)
}
