//! Core module - configuration and error types

pub mod config;
pub mod error;

pub use config::{ColumnNames, Config};
pub use error::QuoteError;
