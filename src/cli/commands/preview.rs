//! `quotegen preview` command - render the HTML without the PDF step

use console::style;
use miette::Result;

use crate::cli::GlobalOpts;
use crate::core::{Config, QuoteError};
use crate::render::QuoteRenderer;

use super::{build_model, load_sheet, resolve_quote_no, SourceArgs};

#[derive(clap::Args, Debug)]
pub struct PreviewArgs {
    /// Quote number to preview
    pub quote_no: Option<String>,

    /// Pick the quote number from a 1-based sheet row instead
    #[arg(long, conflicts_with = "quote_no")]
    pub row: Option<usize>,

    #[command(flatten)]
    pub source: SourceArgs,
}

pub fn run(args: PreviewArgs, global: &GlobalOpts) -> Result<()> {
    let mut config = Config::load();
    args.source.apply(&mut config);

    let (sheet_path, grid, columns) = load_sheet(&config)?;
    let quote_no = resolve_quote_no(&grid, &columns, args.quote_no.as_deref(), args.row)?;
    let (model, store) = build_model(&config, &sheet_path, &grid, &columns, &quote_no)?;

    let renderer = QuoteRenderer::new()?;
    let html = renderer.render_html(&model)?;

    let name = format!("{quote_no}.preview.html");
    let staged = store.staging_path(&name);
    std::fs::write(&staged, &html).map_err(|source| QuoteError::Write {
        path: staged.clone(),
        source,
    })?;
    let target = store.commit(&staged, &name)?;

    if global.quiet {
        println!("{}", store.url(&target));
    } else {
        println!(
            "{} Preview written to {}",
            style("✓").green(),
            style(store.url(&target)).cyan()
        );
        println!("  Open it in a browser to check the layout before generating the PDF.");
    }
    Ok(())
}
