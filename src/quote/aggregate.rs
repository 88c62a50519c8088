//! Quote aggregation - filter, sort, and group rows into one quote
//!
//! Rows are matched by trimmed string equality on the quote-number
//! column, sorted by item name under Korean collation (a codepoint sort
//! would misplace mixed jamo and Latin names), and the discount sentinel
//! rows are pulled out into separate discount metadata.

use icu_collator::{Collator, CollatorOptions, Strength};
use icu_locid::locale;
use serde::Serialize;

use crate::core::QuoteError;
use crate::quote::totals;
use crate::sheet::{Columns, Grid};

/// One sellable line of the quotation
#[derive(Debug, Clone, Serialize)]
pub struct LineItem {
    pub name: String,
    pub spec: String,
    pub qty: f64,
    pub unit_price: f64,
    /// qty × unit price, reduced to whole currency units
    pub amount: i64,
    pub note: String,
}

/// Descriptive metadata of the quote, taken from the first row in
/// sorted order (all rows of one quote are assumed homogeneous here)
#[derive(Debug, Clone, Serialize)]
pub struct QuoteHeader {
    pub quote_no: String,
    pub date: String,
    pub company: String,
    pub recipient: String,
}

/// Accumulated discount adjustment (signed; stored amounts are
/// typically negative)
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct Discount {
    pub amount: i64,
    pub present: bool,
}

/// The aggregated quote handed to the total calculator and the
/// render model builder
#[derive(Debug, Clone)]
pub struct AggregatedQuote {
    pub header: QuoteHeader,
    pub items: Vec<LineItem>,
    pub discount: Discount,
}

/// Build a collator for Korean-locale string comparison
fn korean_collator() -> Result<Collator, QuoteError> {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Tertiary);
    let data_locale = locale!("ko").into();
    Collator::try_new(&data_locale, options).map_err(|e| QuoteError::Collator(e.to_string()))
}

/// Aggregate all rows matching `quote_no` into one structured quote.
///
/// Rows whose trimmed item name equals `discount_sentinel` are excluded
/// from the item list; their amounts accumulate into the discount
/// metadata instead.
pub fn aggregate(
    grid: &Grid,
    columns: &Columns,
    quote_no: &str,
    discount_sentinel: &str,
) -> Result<AggregatedQuote, QuoteError> {
    let mut matched: Vec<&Vec<String>> = grid
        .rows()
        .iter()
        .filter(|row| grid.cell(row, columns.quote_no).trim() == quote_no)
        .collect();

    if matched.is_empty() {
        return Err(QuoteError::QuoteNotFound(quote_no.to_string()));
    }

    // Stable sort keeps the original sheet order among equal item names
    let collator = korean_collator()?;
    matched.sort_by(|a, b| {
        let name_a = grid.cell(a, columns.item).trim();
        let name_b = grid.cell(b, columns.item).trim();
        collator.compare(name_a, name_b)
    });

    // Header comes from the first row in sorted order, not sheet order
    let first = matched[0];
    let header = QuoteHeader {
        quote_no: grid.cell(first, columns.quote_no).trim().to_string(),
        date: grid.cell(first, columns.date).trim().to_string(),
        company: grid.cell(first, columns.company).trim().to_string(),
        recipient: grid.cell(first, columns.recipient).trim().to_string(),
    };

    let mut items = Vec::new();
    let mut discount = Discount::default();

    for row in matched {
        let name = grid.cell(row, columns.item).trim().to_string();
        let qty = totals::coerce_numeric(grid.cell(row, columns.qty));
        let unit_price = totals::coerce_numeric(grid.cell(row, columns.unit_price));
        let item = LineItem {
            amount: totals::to_currency(qty * unit_price),
            name,
            spec: grid.cell(row, columns.spec).to_string(),
            qty,
            unit_price,
            note: grid.cell(row, columns.note).to_string(),
        };

        if item.name == discount_sentinel {
            discount.present = true;
            discount.amount += item.amount;
            continue;
        }
        items.push(item);
    }

    Ok(AggregatedQuote {
        header,
        items,
        discount,
    })
}
