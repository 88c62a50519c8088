//! Command implementations

pub mod completions;
pub mod generate;
pub mod init;
pub mod list;
pub mod preview;

use std::path::{Path, PathBuf};

use miette::Result;

use crate::core::{Config, QuoteError};
use crate::quote::{self, model, totals, RenderModel};
use crate::render::OutputStore;
use crate::settings;
use crate::sheet::{select, Columns, Grid};

/// Sheet/settings/output overrides shared by the data-driven commands
#[derive(clap::Args, Debug)]
pub struct SourceArgs {
    /// Sheet export (CSV) holding the quote rows
    #[arg(long, short = 's')]
    pub sheet: Option<PathBuf>,

    /// Supplier settings file (key/value CSV)
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Directory the output folder is created under
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

impl SourceArgs {
    /// Layer these command-line overrides on top of the loaded config
    pub fn apply(&self, config: &mut Config) {
        if self.sheet.is_some() {
            config.sheet = self.sheet.clone();
        }
        if self.settings.is_some() {
            config.settings = self.settings.clone();
        }
        if self.output.is_some() {
            config.output_root = self.output.clone();
        }
    }
}

/// Load the sheet export and resolve the required columns
pub(crate) fn load_sheet(config: &Config) -> Result<(PathBuf, Grid, Columns)> {
    let sheet_path = config.sheet.clone().ok_or(QuoteError::NoSheet)?;
    let grid = Grid::from_csv_path(&sheet_path)?;
    let columns = Columns::resolve(&grid, &config.columns())?;
    Ok((sheet_path, grid, columns))
}

/// Resolve the target quote number from an explicit argument or a
/// 1-based row position; supplying neither is a selection error.
pub(crate) fn resolve_quote_no(
    grid: &Grid,
    columns: &Columns,
    quote_no: Option<&str>,
    row: Option<usize>,
) -> Result<String> {
    match (quote_no, row) {
        (Some(no), _) => {
            let trimmed = no.trim();
            if trimmed.is_empty() {
                return Err(QuoteError::NothingSelected.into());
            }
            Ok(trimmed.to_string())
        }
        (None, Some(row)) => Ok(select::quote_no_at_row(grid, row, columns)?),
        (None, None) => Err(QuoteError::NothingSelected.into()),
    }
}

/// Run the aggregation pipeline up to the render model.
///
/// The seal image is looked up in the output store's folder, so the
/// store is opened here and returned for the caller's write phase.
pub(crate) fn build_model(
    config: &Config,
    sheet_path: &Path,
    grid: &Grid,
    columns: &Columns,
    quote_no: &str,
) -> Result<(RenderModel, OutputStore)> {
    let quote = quote::aggregate::aggregate(grid, columns, quote_no, &config.discount_sentinel())?;
    let totals = totals::calculate(&quote.items, quote.discount.amount, config.rounding());

    let settings_path = config
        .settings
        .clone()
        .unwrap_or_else(|| sheet_path.with_file_name("settings.csv"));
    let mut supplier = settings::load_profile(&settings_path)?;

    let store = OutputStore::open(&config.output_root(), &config.folder_name())?;
    supplier.seal_image = settings::load_seal(store.dir(), &config.seal_file());

    Ok((model::build(&quote, &totals, &supplier), store))
}
