//! quotegen: spreadsheet-to-PDF quotation generator
//!
//! Reads a sheet export (CSV), aggregates the rows belonging to one
//! quote number, computes totals, and renders a printable quotation
//! through an HTML template and an external PDF converter.

pub mod cli;
pub mod core;
pub mod quote;
pub mod render;
pub mod settings;
pub mod sheet;
