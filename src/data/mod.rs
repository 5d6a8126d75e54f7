//! Data module - sample table loading and writing

mod loader;
mod writer;

pub use loader::{LoaderError, SampleTable};
pub use writer::{write_table, WriterError};
