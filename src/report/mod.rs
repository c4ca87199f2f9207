//! Report module - exporting and summarizing generated documents

pub mod export;
pub mod summary;

pub use export::*;
pub use summary::*;
