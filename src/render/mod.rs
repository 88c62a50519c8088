//! Document rendering and storage

pub mod pdf;
pub mod store;
pub mod template;

pub use store::OutputStore;
pub use template::QuoteRenderer;
