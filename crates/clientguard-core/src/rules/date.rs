use crate::{
    dataset::Dataset,
    results::{csv_line, ValidationIssue},
    utils::date_parser::DateParser,
};

/// Flags every cell of a date column the [`DateParser`] cannot read.
/// Null cells are flagged as well.
pub struct DateFormatCheck {
    column: String,
    parser: DateParser,
}

impl DateFormatCheck {
    pub const NAME: &'static str = "DateFormat";

    pub fn new(column: String, parser: DateParser) -> Self {
        Self { column, parser }
    }

    pub fn name(&self) -> &'static str {
        Self::NAME
    }

    pub fn validate(&self, dataset: &Dataset, issues: &mut Vec<ValidationIssue>) -> usize {
        let Some(array) = dataset.column(&self.column) else {
            return 0;
        };

        let before = issues.len();
        for (row, value) in array.iter().enumerate() {
            let valid = value.is_some_and(|v| self.parser.is_date(v));
            if !valid {
                issues.push(ValidationIssue::InvalidDate {
                    line: csv_line(row),
                    column: self.column.clone(),
                    value: value.unwrap_or_default().to_string(),
                });
            }
        }
        issues.len() - before
    }
}
