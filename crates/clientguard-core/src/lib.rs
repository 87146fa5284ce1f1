//! Validation of customer record files.
//!
//! A [`Dataset`] (loaded with [`read_csv`] or built in memory) is handed to
//! a [`CustomerValidator`], which checks it against the customer schema:
//! required columns, parseable birth dates, unique ids and valid emails.
//!
//! ```no_run
//! use clientguard_core::validate_csv;
//!
//! let mut validator = validate_csv("data/clientes.csv")?;
//! if !validator.validate() {
//!     for error in validator.errors() {
//!         println!("{error}");
//!     }
//! }
//! # Ok::<(), clientguard_core::ReaderError>(())
//! ```

pub mod dataset;
pub mod email;
pub mod errors;
pub mod readers;
pub mod results;
pub mod rules;
pub mod utils;
pub mod validator;

pub use dataset::Dataset;
pub use email::{EmailCheck, EmailSyntax};
pub use errors::{DatasetError, EmailError, ReaderError};
pub use readers::{read_csv, validate_csv, ReaderConfig, ReaderConfigBuilder};
pub use results::{RuleResult, ValidationIssue, ValidationResult, HEADER_ROW_OFFSET};
pub use utils::date_parser::DateParser;
pub use validator::CustomerValidator;
