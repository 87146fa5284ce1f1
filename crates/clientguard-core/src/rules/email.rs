use crate::{
    dataset::Dataset,
    email::EmailCheck,
    results::{csv_line, ValidationIssue},
};

/// Runs an [`EmailCheck`] over every cell of the email column and relays
/// the rejection reasons. A null cell is checked as an empty string.
pub struct EmailSyntaxCheck {
    column: String,
}

impl EmailSyntaxCheck {
    pub const NAME: &'static str = "EmailSyntax";

    pub fn new(column: String) -> Self {
        Self { column }
    }

    pub fn name(&self) -> &'static str {
        Self::NAME
    }

    pub fn validate<E: EmailCheck>(
        &self,
        dataset: &Dataset,
        email_check: &E,
        issues: &mut Vec<ValidationIssue>,
    ) -> usize {
        let Some(array) = dataset.column(&self.column) else {
            return 0;
        };

        let before = issues.len();
        for (row, value) in array.iter().enumerate() {
            let value = value.unwrap_or_default();
            if let Err(reason) = email_check.check(value) {
                issues.push(ValidationIssue::InvalidEmail {
                    line: csv_line(row),
                    value: value.to_string(),
                    reason: reason.to_string(),
                });
            }
        }
        issues.len() - before
    }
}
