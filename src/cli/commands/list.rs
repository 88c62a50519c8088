//! `quotegen list` command - summarize the quotes in the sheet export

use console::style;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use std::collections::HashSet;
use tabled::{builder::Builder, settings::Style};

use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::Config;
use crate::quote::{aggregate, totals};

use super::{load_sheet, SourceArgs};

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(Debug, Serialize)]
struct QuoteSummary {
    quote_no: String,
    date: String,
    company: String,
    items: usize,
    has_discount: bool,
    total: i64,
}

pub fn run(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let mut config = Config::load();
    args.source.apply(&mut config);

    let (_, grid, columns) = load_sheet(&config)?;
    let sentinel = config.discount_sentinel();
    let rounding = config.rounding();

    // Distinct quote numbers in first-seen sheet order
    let mut seen = HashSet::new();
    let mut quote_nos = Vec::new();
    for row in grid.rows() {
        let no = grid.cell(row, columns.quote_no).trim();
        if !no.is_empty() && seen.insert(no.to_string()) {
            quote_nos.push(no.to_string());
        }
    }

    let mut summaries = Vec::new();
    for no in &quote_nos {
        let quote = aggregate::aggregate(&grid, &columns, no, &sentinel)?;
        let totals = totals::calculate(&quote.items, quote.discount.amount, rounding);
        summaries.push(QuoteSummary {
            quote_no: quote.header.quote_no,
            date: quote.header.date,
            company: quote.header.company,
            items: quote.items.len(),
            has_discount: quote.discount.present,
            total: totals.total,
        });
    }

    if global.format == OutputFormat::Json {
        println!(
            "{}",
            serde_json::to_string_pretty(&summaries).into_diagnostic()?
        );
        return Ok(());
    }

    let mut builder = Builder::default();
    builder.push_record(["QUOTE NO", "DATE", "COMPANY", "ITEMS", "TOTAL"]);
    for s in &summaries {
        builder.push_record([
            s.quote_no.clone(),
            s.date.clone(),
            s.company.clone(),
            s.items.to_string(),
            s.total.to_string(),
        ]);
    }
    println!("{}", builder.build().with(Style::sharp()));

    if !global.quiet {
        println!("{}", style(format!("{} quote(s)", summaries.len())).dim());
    }
    Ok(())
}
