use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    /// Columns handed to the dataset do not share the same number of rows
    #[error("Column '{column}' has {found} rows, expected {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        found: usize,
    },

    /// The Arrow kernel produced an error (e.g., unsupported cast to Utf8)
    #[error("Arrow computation error: {0}")]
    ArrowError(#[from] arrow::error::ArrowError),
}

#[derive(Error, Debug)]
pub enum ReaderError {
    #[error("File not found: '{path}'")]
    FileNotFound { path: String },

    #[error("CSV file is empty: '{path}'")]
    EmptyFile { path: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    ArrowError(#[from] arrow::error::ArrowError),

    #[error(transparent)]
    DatasetError(#[from] DatasetError),
}

/// Reason an email address was rejected. The `Display` output is relayed
/// verbatim in validation messages.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    #[error("The email address is empty")]
    Empty,

    #[error("The email address is not valid. It must have exactly one @-sign")]
    AtSignCount,

    #[error("There must be something before the @-sign")]
    EmptyLocalPart,

    #[error("There must be something after the @-sign")]
    EmptyDomain,

    #[error("The email address is too long ({0} characters, at most 254 allowed)")]
    TooLong(usize),

    #[error("The email address is too long before the @-sign ({0} characters, at most 64 allowed)")]
    LocalPartTooLong(usize),

    #[error("The email address contains invalid characters before the @-sign: {0}")]
    InvalidLocalCharacters(String),

    #[error("An email address cannot start or end with a period before the @-sign")]
    LocalPartDotEdge,

    #[error("An email address cannot have two periods in a row")]
    ConsecutiveDots,

    #[error("The part after the @-sign contains invalid characters: {0}")]
    InvalidDomainCharacters(String),

    #[error("The part after the @-sign is not valid. It should have a period")]
    DomainWithoutDot,

    #[error("An email address cannot have a period immediately after the @-sign or at the end")]
    DomainDotEdge,

    #[error("The part after the @-sign contains a label that starts or ends with a hyphen: '{0}'")]
    LabelHyphenEdge(String),

    #[error("The part after the @-sign contains a label longer than 63 characters")]
    LabelTooLong,

    #[error("The part after the @-sign is not valid. The top-level domain cannot be numeric")]
    NumericTopLevelDomain,

    /// Reason supplied by a custom [`EmailCheck`](crate::email::EmailCheck)
    #[error("{0}")]
    Rejected(String),
}
