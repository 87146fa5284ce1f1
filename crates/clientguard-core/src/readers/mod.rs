mod config;
pub mod csv_reader;

pub use config::{ReaderConfig, ReaderConfigBuilder};
pub use csv_reader::{read_csv, validate_csv};
