use std::sync::Arc;

use arrow::{
    compute::{self},
    datatypes::{DataType, Field, Schema},
};
use arrow_array::{Array, ArrayRef, RecordBatch, StringArray};

use crate::errors::DatasetError;

/// In-memory table of customer records.
///
/// Every column is held as a `Utf8` array, nulls stand for empty or
/// missing cells. Row order is the order of the source file.
#[derive(Debug, Clone)]
pub struct Dataset {
    batch: RecordBatch,
}

impl Dataset {
    /// Wrap a `RecordBatch`, casting any non-Utf8 column to Utf8.
    pub fn new(batch: RecordBatch) -> Result<Self, DatasetError> {
        let schema = batch.schema();
        if schema.fields().iter().all(|f| f.data_type() == &DataType::Utf8) {
            return Ok(Self { batch });
        }

        let mut fields = Vec::with_capacity(schema.fields().len());
        let mut columns: Vec<ArrayRef> = Vec::with_capacity(schema.fields().len());
        for (field, array) in schema.fields().iter().zip(batch.columns()) {
            let casted = if field.data_type() == &DataType::Utf8 {
                array.clone()
            } else {
                compute::cast(array, &DataType::Utf8)?
            };
            fields.push(Field::new(field.name(), DataType::Utf8, true));
            columns.push(casted);
        }

        let batch = RecordBatch::try_new(Arc::new(Schema::new(fields)), columns)?;
        Ok(Self { batch })
    }

    /// Build a dataset from named columns of optional string cells.
    pub fn from_columns(columns: Vec<(&str, Vec<Option<&str>>)>) -> Result<Self, DatasetError> {
        let expected = columns.first().map(|(_, values)| values.len()).unwrap_or(0);
        let mut fields = Vec::with_capacity(columns.len());
        let mut arrays: Vec<ArrayRef> = Vec::with_capacity(columns.len());

        for (name, values) in columns {
            if values.len() != expected {
                return Err(DatasetError::LengthMismatch {
                    column: name.to_string(),
                    expected,
                    found: values.len(),
                });
            }
            fields.push(Field::new(name, DataType::Utf8, true));
            arrays.push(Arc::new(StringArray::from(values)));
        }

        let batch = if arrays.is_empty() {
            RecordBatch::new_empty(Arc::new(Schema::empty()))
        } else {
            RecordBatch::try_new(Arc::new(Schema::new(fields)), arrays)?
        };
        Ok(Self { batch })
    }

    pub fn num_rows(&self) -> usize {
        self.batch.num_rows()
    }

    /// Column names in schema order
    pub fn column_names(&self) -> Vec<&str> {
        self.batch
            .schema_ref()
            .fields()
            .iter()
            .map(|f| f.name().as_str())
            .collect()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.batch.schema_ref().column_with_name(name).is_some()
    }

    /// First column with this name. The CSV reader renames repeated
    /// headers, but a batch built elsewhere may still carry duplicates.
    pub fn column(&self, name: &str) -> Option<&StringArray> {
        self.batch
            .column_by_name(name)
            .and_then(|array| array.as_any().downcast_ref::<StringArray>())
    }

    pub fn batch(&self) -> &RecordBatch {
        &self.batch
    }
}
