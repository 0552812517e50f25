//! Reading observation tables and writing forecast tables.

pub mod formatter;
pub mod loader;

pub use formatter::{format_table, write_table, OutputConfig};
pub use loader::{load_table, load_table_from_reader, load_table_with, LoaderConfig};
