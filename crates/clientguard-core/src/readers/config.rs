/// Options for reading customer CSV files. The first line is always the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderConfig {
    pub delimiter: u8,
    pub quote: u8,
    pub batch_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            batch_size: 8 * 1024,
        }
    }
}

pub struct ReaderConfigBuilder {
    delimiter: u8,
    quote: u8,
    batch_size: usize,
}

impl Default for ReaderConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReaderConfigBuilder {
    /// Create a new [`ReaderConfigBuilder`]
    pub fn new() -> Self {
        let reader = ReaderConfig::default();
        Self {
            delimiter: reader.delimiter,
            quote: reader.quote,
            batch_size: reader.batch_size,
        }
    }

    /// Build a [`ReaderConfig`]
    pub fn build(self) -> ReaderConfig {
        ReaderConfig {
            delimiter: self.delimiter,
            quote: self.quote,
            batch_size: self.batch_size.max(1),
        }
    }

    pub fn with_delimiter(self, delimiter: u8) -> Self {
        Self { delimiter, ..self }
    }

    pub fn with_quote(self, quote: u8) -> Self {
        Self { quote, ..self }
    }

    pub fn with_batch_size(self, batch_size: usize) -> Self {
        Self { batch_size, ..self }
    }
}
