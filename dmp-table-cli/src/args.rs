//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;
use dmp_table_lib::model::SortDirection;

/// Sort and page a table document, then print the rendered table.
#[derive(Debug, Parser)]
#[command(name = "dmp-table", version)]
pub struct Cli {
    /// JSON table document (`label`, `className`, `columnData`, `rowData`).
    pub document: PathBuf,

    /// Set a column's direction: `id`, `id:asc`, `id:desc` or `id:none`.
    /// Repeat to sort by several columns.
    #[arg(long = "sort", value_name = "COLUMN[:DIR]", value_parser = parse_sort)]
    pub sorts: Vec<SortArg>,

    /// Activate a column header, applied after every `--sort`.
    #[arg(long = "click", value_name = "COLUMN")]
    pub clicks: Vec<String>,

    /// Delegate sorting to a simulated backend instead of sorting in memory.
    #[arg(long)]
    pub remote: bool,

    /// Page to show (1-based). Enables pagination.
    #[arg(long)]
    pub page: Option<usize>,

    /// Rows per page. Enables pagination.
    #[arg(long, value_name = "N")]
    pub per_page: Option<usize>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Write logs to this file instead of stderr.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// One `--sort` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortArg {
    /// Column id.
    pub column: String,
    /// Requested direction; `None` removes the column from the sort.
    pub direction: Option<SortDirection>,
}

/// Parses `id[:asc|desc|none]`.
pub fn parse_sort(s: &str) -> Result<SortArg, String> {
    let (column, direction) = match s.split_once(':') {
        Some((column, dir)) => {
            let direction = match dir.to_ascii_lowercase().as_str() {
                "asc" | "ascending" => Some(SortDirection::Ascending),
                "desc" | "descending" => Some(SortDirection::Descending),
                "none" | "clear" => None,
                other => return Err(format!("unknown sort direction '{}'", other)),
            };
            (column, direction)
        }
        None => (s, Some(SortDirection::Ascending)),
    };
    if column.is_empty() {
        return Err("column id must not be empty".to_string());
    }
    Ok(SortArg {
        column: column.to_string(),
        direction,
    })
}
