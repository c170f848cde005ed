mod args;
mod error;

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use clap::Parser;
use dmp_table::{SortChangeHandler, Table, TableProps};
use dmp_table_lib::TableDocument;
use dmp_table_lib::model::{ColumnSet, Row};
use dmp_table_lib::page::Pagination;
use dmp_table_lib::query::OrderBy;
use dmp_table_lib::sort::sort_rows_by;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode, WriteLogger};

use args::Cli;
use error::CliError;

const DEFAULT_PER_PAGE: usize = 10;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose, cli.log_file.as_deref()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<(), CliError> {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    match log_file {
        Some(path) => {
            let file = File::create(path).map_err(|source| CliError::LogFile {
                path: path.to_path_buf(),
                source,
            })?;
            WriteLogger::init(level, Config::default(), file)?;
        }
        None => {
            TermLogger::init(
                level,
                Config::default(),
                TerminalMode::Stderr,
                ColorChoice::Auto,
            )?;
        }
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    let doc = TableDocument::from_path(&cli.document)?;
    log::info!(
        "Loaded '{}' with {} columns and {} rows",
        doc.label,
        doc.column_data.len(),
        doc.row_data.len()
    );

    let backend = doc.row_data.clone();
    let mut props = TableProps::from(doc);
    if cli.page.is_some() || cli.per_page.is_some() {
        let pagination = Pagination::new(
            cli.page.unwrap_or(1),
            cli.per_page.unwrap_or(DEFAULT_PER_PAGE),
        )?;
        props = props.paginate(pagination);
    }

    let table = Table::new(props);
    if cli.remote {
        table.set_on_sort_change(Some(remote_handler(&table, backend)));
    }

    for sort in &cli.sorts {
        let outcome = table.sort_column(&sort.column, sort.direction);
        if outcome.is_changed() {
            log::info!("--sort {}: {:?}", sort.column, outcome);
        } else {
            log::warn!("--sort {} had no effect", sort.column);
        }
    }
    for column in &cli.clicks {
        let outcome = table.on_header_click(column);
        if outcome.is_changed() {
            log::info!("--click {}: {:?}", column, outcome);
        } else {
            log::warn!("--click {} had no effect", column);
        }
    }

    // Sort interactions reset to the first page; honour the requested one.
    if let Some(page) = cli.page {
        table.go_to_page(page)?;
    }

    print!("{}", table.view());
    if cli.remote
        && let Some(order) = OrderBy::from_columns(&table.columns())
    {
        println!("$orderby={}", order);
    }
    Ok(())
}

/// Builds a handler that stands in for a backend query: it orders the
/// original rows by the delegated column state and feeds them back in.
fn remote_handler(table: &Table<Row>, backend: Vec<Row>) -> SortChangeHandler {
    let handle = table.downgrade();
    Arc::new(move |columns: &ColumnSet| {
        let Some(table) = handle.upgrade() else {
            return;
        };
        match OrderBy::from_columns(columns) {
            Some(order) => {
                log::info!("Re-querying {} rows with $orderby={}", backend.len(), order);
                table.set_rows(sort_rows_by(&backend, &order));
            }
            None => {
                log::info!("Sort cleared; restoring backend order");
                table.set_rows(backend.clone());
            }
        }
    })
}
