//! Extraction application layer

mod extract;

pub use extract::{extract, Extractor};
