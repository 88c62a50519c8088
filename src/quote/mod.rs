//! Quote aggregation, totals, and the render model

pub mod aggregate;
pub mod model;
pub mod totals;

pub use aggregate::{AggregatedQuote, Discount, LineItem, QuoteHeader};
pub use model::RenderModel;
pub use totals::{Rounding, Totals};
