use std::{collections::HashMap, fs::File, io, path::Path, sync::Arc};

use arrow::{
    compute::concat_batches,
    csv::{reader::Format, ReaderBuilder},
    datatypes::{DataType, Field, Schema},
};
use tracing::{debug, error, warn};

use crate::{
    dataset::Dataset, errors::ReaderError, readers::config::ReaderConfig,
    validator::CustomerValidator,
};

fn open(path: &Path) -> Result<File, ReaderError> {
    File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => {
            error!(path = %path.display(), "csv file not found");
            ReaderError::FileNotFound {
                path: path.display().to_string(),
            }
        }
        _ => ReaderError::IoError(e),
    })
}

/// Build a Utf8-only schema from the CSV header line.
///
/// A repeated header name gets a `.N` suffix (`email`, `email.1`, ...) so
/// each column stays addressable; only the unsuffixed one is validated.
fn csv_generate_schema(path: &Path, config: &ReaderConfig) -> Result<Schema, ReaderError> {
    let file = open(path)?;
    let format = Format::default()
        .with_header(true)
        .with_delimiter(config.delimiter)
        .with_quote(config.quote);
    let (inferred, _) = format.infer_schema(file, Some(0))?;

    if inferred.fields().is_empty() {
        return Err(ReaderError::EmptyFile {
            path: path.display().to_string(),
        });
    }

    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut fields = Vec::with_capacity(inferred.fields().len());
    for field in inferred.fields() {
        let name = field.name().trim();
        let mut unique = name.to_string();
        if let Some(count) = seen.get_mut(name) {
            loop {
                unique = format!("{}.{}", name, count);
                *count += 1;
                if !inferred.fields().iter().any(|f| f.name().trim() == unique) {
                    break;
                }
            }
            warn!(path = %path.display(), column = name, renamed = %unique, "duplicate csv header");
        } else {
            seen.insert(name.to_string(), 1);
        }
        fields.push(Field::new(unique, DataType::Utf8, true));
    }
    Ok(Schema::new(fields))
}

/// Load a CSV file into a [`Dataset`], every column read as text.
///
/// Empty cells become nulls, and so do the missing trailing cells of a
/// row shorter than the header.
pub fn read_csv<P: AsRef<Path>>(path: P, config: &ReaderConfig) -> Result<Dataset, ReaderError> {
    let path = path.as_ref();
    let schema = Arc::new(csv_generate_schema(path, config)?);

    let reader = ReaderBuilder::new(schema.clone())
        .with_header(true)
        .with_delimiter(config.delimiter)
        .with_quote(config.quote)
        .with_batch_size(config.batch_size)
        .with_truncated_rows(true)
        .build(open(path)?)?;

    let batches = reader.collect::<Result<Vec<_>, _>>()?;
    let batch = concat_batches(&schema, &batches)?;
    debug!(
        path = %path.display(),
        rows = batch.num_rows(),
        columns = batch.num_columns(),
        "csv loaded"
    );

    Ok(Dataset::new(batch)?)
}

/// Load a CSV file with the default [`ReaderConfig`] and wrap it in a
/// [`CustomerValidator`]. No validator is built when the file cannot be read.
pub fn validate_csv<P: AsRef<Path>>(path: P) -> Result<CustomerValidator, ReaderError> {
    read_csv(path, &ReaderConfig::default()).map(CustomerValidator::new)
}
