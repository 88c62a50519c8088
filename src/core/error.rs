//! Error taxonomy for the generation pipeline
//!
//! Four families: configuration (missing columns, missing settings),
//! selection (bad or empty row choice), not-found (quote number matches
//! nothing), and I/O (sheet, store, converter). Everything is surfaced
//! synchronously; nothing is retried.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum QuoteError {
    // --- configuration ---
    #[error("required column \"{0}\" was not found in the header row")]
    #[diagnostic(
        code(quotegen::config::missing_column),
        help("check the first row of the sheet export, or remap the column under `columns:` in quotegen.yaml")
    )]
    MissingColumn(String),

    #[error("no sheet export configured")]
    #[diagnostic(
        code(quotegen::config::no_sheet),
        help("pass --sheet <FILE> or set `sheet:` in quotegen.yaml")
    )]
    NoSheet,

    #[error("supplier settings file not found: {}", .0.display())]
    #[diagnostic(
        code(quotegen::config::no_settings),
        help("run `quotegen init` to scaffold a settings.csv, or point `settings:` at an existing one")
    )]
    SettingsNotFound(PathBuf),

    // --- selection ---
    #[error("no row or quote number selected")]
    #[diagnostic(
        code(quotegen::select::nothing_selected),
        help("pass a quote number, or --row <N> to pick it from the sheet")
    )]
    NothingSelected,

    #[error("row {0} is the header row; select a data row")]
    #[diagnostic(code(quotegen::select::header_row))]
    HeaderRowSelected(usize),

    #[error("row {row} is out of range; the sheet has {total} rows")]
    #[diagnostic(code(quotegen::select::out_of_range))]
    RowOutOfRange { row: usize, total: usize },

    #[error("row {0} has an empty quote number")]
    #[diagnostic(code(quotegen::select::empty_quote_no))]
    EmptyQuoteNo(usize),

    // --- not found ---
    #[error("no rows match quote number \"{0}\"")]
    #[diagnostic(code(quotegen::quote::not_found))]
    QuoteNotFound(String),

    #[error("the sheet has no data rows")]
    #[diagnostic(code(quotegen::sheet::empty))]
    EmptySheet,

    // --- I/O and external collaborators ---
    #[error("failed to read {}", .path.display())]
    #[diagnostic(code(quotegen::io::read))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}", .path.display())]
    #[diagnostic(code(quotegen::io::write))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error in {}: {source}", .path.display())]
    #[diagnostic(code(quotegen::io::csv))]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("PDF converter `{command}` failed: {detail}")]
    #[diagnostic(
        code(quotegen::render::converter),
        help("the converter is invoked as `<command> <input.html> <output.pdf>`; check `pdf_command:` in quotegen.yaml")
    )]
    Converter { command: String, detail: String },

    #[error("template error: {0}")]
    #[diagnostic(code(quotegen::render::template))]
    Template(#[from] tera::Error),

    #[error("failed to initialise the Korean collator: {0}")]
    #[diagnostic(code(quotegen::quote::collator))]
    Collator(String),
}
