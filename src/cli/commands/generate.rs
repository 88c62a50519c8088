//! `quotegen generate` command - produce and store the quotation PDF

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{Config, QuoteError};
use crate::quote::Rounding;
use crate::render::{pdf, QuoteRenderer};

use super::{build_model, load_sheet, resolve_quote_no, SourceArgs};

#[derive(clap::Args, Debug)]
pub struct GenerateArgs {
    /// Quote number to generate
    pub quote_no: Option<String>,

    /// Pick the quote number from a 1-based sheet row instead
    #[arg(long, conflicts_with = "quote_no")]
    pub row: Option<usize>,

    #[command(flatten)]
    pub source: SourceArgs,

    /// Tax rounding policy (overrides config)
    #[arg(long, value_enum)]
    pub rounding: Option<Rounding>,

    /// Stop after the HTML stage and store the HTML artifact
    #[arg(long)]
    pub html_only: bool,

    /// Keep the intermediate HTML next to the PDF
    #[arg(long, conflicts_with = "html_only")]
    pub keep_html: bool,
}

pub fn run(args: GenerateArgs, global: &GlobalOpts) -> Result<()> {
    let mut config = Config::load();
    args.source.apply(&mut config);
    if args.rounding.is_some() {
        config.rounding = args.rounding;
    }

    let (sheet_path, grid, columns) = load_sheet(&config)?;
    let quote_no = resolve_quote_no(&grid, &columns, args.quote_no.as_deref(), args.row)?;
    let (model, store) = build_model(&config, &sheet_path, &grid, &columns, &quote_no)?;

    if global.format == OutputFormat::Json {
        println!(
            "{}",
            serde_json::to_string_pretty(&model).into_diagnostic()?
        );
        return Ok(());
    }

    let renderer = QuoteRenderer::new()?;
    let html = renderer.render_html(&model)?;

    let html_name = format!("{quote_no}.html");
    if args.html_only {
        let staged = store.staging_path(&html_name);
        std::fs::write(&staged, &html).map_err(|source| QuoteError::Write {
            path: staged.clone(),
            source,
        })?;
        let target = store.commit(&staged, &html_name)?;
        notify_stored(global, "quotation HTML", &store.url(&target));
        return Ok(());
    }

    // Stage the HTML and the PDF, commit only on converter success
    let html_staged = store.staging_path(&html_name);
    std::fs::write(&html_staged, &html).map_err(|source| QuoteError::Write {
        path: html_staged.clone(),
        source,
    })?;

    let pdf_name = format!("{quote_no}.pdf");
    let pdf_staged = store.staging_path(&pdf_name);
    if let Err(e) = pdf::convert(&config.pdf_command(), &html_staged, &pdf_staged) {
        store.discard(&html_staged);
        store.discard(&pdf_staged);
        return Err(e.into());
    }

    let target = store.commit(&pdf_staged, &pdf_name)?;
    if args.keep_html {
        store.commit(&html_staged, &html_name)?;
    } else {
        store.discard(&html_staged);
    }

    notify_stored(global, "quotation PDF", &store.url(&target));
    Ok(())
}

fn notify_stored(global: &GlobalOpts, what: &str, url: &str) {
    if global.quiet {
        println!("{url}");
        return;
    }
    println!(
        "{} Stored {} at {}",
        style("✓").green(),
        what,
        style(url).cyan()
    );
}
