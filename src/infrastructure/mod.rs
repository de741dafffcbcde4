//! Infrastructure layer - File and text I/O

pub mod config;
pub mod csv_io;
pub mod files;

pub use config::{load_rule_book, RulesFile};
pub use csv_io::{parse_table, parse_table_with, write_table, CsvFormat, ExtraFields};
pub use files::{derived_output_path, read_input, write_output_atomic};
