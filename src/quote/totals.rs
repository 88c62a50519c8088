//! Total calculation - supply, tax, and grand total
//!
//! All monetary values are whole currency units (KRW has no subunit);
//! any intermediate floating-point result is reduced to an integer
//! before it is surfaced.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::quote::aggregate::LineItem;

/// Fixed VAT rate
const TAX_RATE: f64 = 0.10;

/// Tax rounding policy. The two deployed sheet variants disagree
/// (one truncates, one rounds), so this is explicit configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Rounding {
    /// Round half away from zero
    #[default]
    HalfUp,
    /// Truncate toward zero
    Floor,
}

impl Rounding {
    fn apply(self, value: f64) -> i64 {
        match self {
            Rounding::HalfUp => value.round() as i64,
            Rounding::Floor => value.trunc() as i64,
        }
    }
}

/// Computed monetary summary of one quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Totals {
    /// Pre-tax subtotal after the discount adjustment
    pub supply: i64,
    pub tax: i64,
    pub total: i64,
}

/// Compute supply, tax, and total from the visible items plus the
/// signed discount amount. The discount is added as stored; callers
/// keep it negative for an actual price reduction.
pub fn calculate(items: &[LineItem], discount_amount: i64, rounding: Rounding) -> Totals {
    let supply: i64 = items.iter().map(|item| item.amount).sum::<i64>() + discount_amount;
    let tax = rounding.apply(supply as f64 * TAX_RATE);
    Totals {
        supply,
        tax,
        total: supply + tax,
    }
}

/// Coerce raw cell text to a number, defaulting anything unparseable
/// (including the empty string) to zero. Never fails.
pub fn coerce_numeric(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    // tolerate exported thousands separators like "50,000"
    trimmed.replace(',', "").parse().unwrap_or(0.0)
}

/// Reduce a floating-point amount to whole currency units
pub fn to_currency(value: f64) -> i64 {
    value.round() as i64
}
