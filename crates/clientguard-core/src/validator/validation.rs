//! Customer record validator.
//!
//! [`CustomerValidator`] owns a [`Dataset`] and runs a fixed list of checks
//! over it, in this order:
//!
//! 1. required columns present
//! 2. birth date parseable
//! 3. customer id unique
//! 4. email syntactically valid
//!
//! Every check runs on every call, whatever the outcome of the previous
//! ones. Findings are collected as [`ValidationIssue`]s and never returned
//! as errors.

use tracing::{debug, info};

use crate::{
    dataset::Dataset,
    email::{EmailCheck, EmailSyntax},
    results::{RuleResult, ValidationIssue, ValidationResult},
    rules::{
        DateFormatCheck, EmailSyntaxCheck, RequiredColumnsCheck, UnicityCheck, BIRTH_DATE_COLUMN,
        EMAIL_COLUMN, ID_COLUMN, REQUIRED_COLUMNS,
    },
    utils::date_parser::DateParser,
};

pub struct CustomerValidator<E = EmailSyntax> {
    dataset: Dataset,
    required_check: RequiredColumnsCheck,
    date_check: DateFormatCheck,
    unicity_check: UnicityCheck,
    email_rule: EmailSyntaxCheck,
    email_check: E,
    issues: Vec<ValidationIssue>,
}

impl CustomerValidator<EmailSyntax> {
    /// Create a validator with the ISO date policy and structural email checks
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset,
            required_check: RequiredColumnsCheck::new(&REQUIRED_COLUMNS),
            date_check: DateFormatCheck::new(BIRTH_DATE_COLUMN.to_string(), DateParser::default()),
            unicity_check: UnicityCheck::new(ID_COLUMN.to_string()),
            email_rule: EmailSyntaxCheck::new(EMAIL_COLUMN.to_string()),
            email_check: EmailSyntax::new(),
            issues: Vec::new(),
        }
    }
}

impl<E: EmailCheck> CustomerValidator<E> {
    /// Replace the date parsing policy used for the birth date column
    pub fn with_date_parser(self, parser: DateParser) -> Self {
        Self {
            date_check: DateFormatCheck::new(BIRTH_DATE_COLUMN.to_string(), parser),
            ..self
        }
    }

    /// Replace the email capability
    pub fn with_email_check<F: EmailCheck>(self, email_check: F) -> CustomerValidator<F> {
        CustomerValidator {
            dataset: self.dataset,
            required_check: self.required_check,
            date_check: self.date_check,
            unicity_check: self.unicity_check,
            email_rule: self.email_rule,
            email_check,
            issues: Vec::new(),
        }
    }

    /// Run all checks. Returns `true` iff no issue was found.
    ///
    /// Issues from a previous call are discarded first, so repeated calls on
    /// the same validator give the same issue list.
    pub fn validate(&mut self) -> bool {
        self.issues.clear();
        let mut issues = Vec::new();

        let n = self.required_check.validate(&self.dataset, &mut issues);
        debug!(rule = self.required_check.name(), issues = n, "check done");

        let n = self.date_check.validate(&self.dataset, &mut issues);
        debug!(rule = self.date_check.name(), issues = n, "check done");

        let n = self.unicity_check.validate(&self.dataset, &mut issues);
        debug!(rule = self.unicity_check.name(), issues = n, "check done");

        let n = self
            .email_rule
            .validate(&self.dataset, &self.email_check, &mut issues);
        debug!(rule = self.email_rule.name(), issues = n, "check done");

        self.issues = issues;
        let result = self.result();
        info!(
            rows = result.total_rows,
            issues = result.error_count(),
            passed = result.is_passed(),
            "validation finished"
        );
        self.issues.is_empty()
    }

    /// Messages of the last run, in the order they were found
    pub fn errors(&self) -> Vec<String> {
        self.issues.iter().map(ToString::to_string).collect()
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Per-check counts of the last run
    pub fn result(&self) -> ValidationResult {
        let mut result = ValidationResult::new(self.dataset.num_rows());
        for rule_name in [
            self.required_check.name(),
            self.date_check.name(),
            self.unicity_check.name(),
            self.email_rule.name(),
        ] {
            let error_count = self
                .issues
                .iter()
                .filter(|issue| issue.rule_name() == rule_name)
                .count();
            result.record_rule(RuleResult::new(rule_name.to_string(), error_count));
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::EmailError;

    fn valid_dataset() -> Dataset {
        Dataset::from_columns(vec![
            ("id", vec![Some("1"), Some("2"), Some("3")]),
            ("nome", vec![Some("Ana"), Some("Bruno"), Some("Carla")]),
            (
                "email",
                vec![
                    Some("ana@example.com"),
                    Some("bruno@example.com"),
                    Some("carla@example.com"),
                ],
            ),
            (
                "data_nascimento",
                vec![Some("1990-05-15"), Some("1985-12-01"), Some("2000-01-31")],
            ),
        ])
        .unwrap()
    }

    #[test]
    fn test_valid_dataset_passes() {
        let mut validator = CustomerValidator::new(valid_dataset());
        assert!(validator.validate());
        assert!(validator.errors().is_empty());
        assert!(validator.result().is_passed());
    }

    #[test]
    fn test_one_issue_per_category() {
        let dataset = Dataset::from_columns(vec![
            ("id", vec![Some("1"), Some("2"), Some("2")]),
            ("nome", vec![Some("Ana"), Some("Bruno"), Some("Carla")]),
            (
                "email",
                vec![
                    Some("ana@example.com"),
                    Some("diego.martins@"),
                    Some("carla@example.com"),
                ],
            ),
            (
                "data_nascimento",
                vec![Some("1990-05-15"), Some("1985-12-01"), Some("25-03-1998")],
            ),
        ])
        .unwrap();

        let mut validator = CustomerValidator::new(dataset);
        assert!(!validator.validate());
        assert_eq!(
            validator.errors(),
            vec![
                "Row 4: invalid date format for '25-03-1998' in column 'data_nascimento'."
                    .to_string(),
                "Duplicate ids found: [2]".to_string(),
                "Row 3: invalid email: 'diego.martins@'. Reason: There must be something after the @-sign."
                    .to_string(),
            ]
        );

        let result = validator.result();
        assert!(!result.is_passed());
        assert_eq!(result.total_rows, 3);
        assert_eq!(result.error_count(), validator.errors().len());
        let counts: Vec<usize> = result.rule_results().iter().map(|r| r.error_count).collect();
        assert_eq!(counts, vec![0, 1, 1, 1]);
    }

    #[test]
    fn test_missing_columns_skips_column_checks() {
        let dataset = Dataset::from_columns(vec![("nome", vec![Some("Ana")])]).unwrap();
        let mut validator = CustomerValidator::new(dataset);
        assert!(!validator.validate());
        assert_eq!(
            validator.errors(),
            vec!["Missing required columns: ['id', 'email', 'data_nascimento']".to_string()]
        );
    }

    #[test]
    fn test_validate_is_idempotent() {
        let dataset = Dataset::from_columns(vec![
            ("id", vec![Some("1"), Some("1")]),
            ("email", vec![Some("bad"), Some("ana@example.com")]),
        ])
        .unwrap();
        let mut validator = CustomerValidator::new(dataset);
        assert!(!validator.validate());
        let first = validator.errors();
        assert!(!validator.validate());
        assert_eq!(first, validator.errors());
        assert_eq!(first.len(), 3);
    }

    #[test]
    fn test_custom_policies() {
        let dataset = Dataset::from_columns(vec![
            ("id", vec![Some("1")]),
            ("nome", vec![Some("Ana")]),
            ("email", vec![Some("ana@blocked.com")]),
            ("data_nascimento", vec![Some("25-03-1998")]),
        ])
        .unwrap();

        let mut validator = CustomerValidator::new(dataset)
            .with_date_parser(DateParser::day_first())
            .with_email_check(|value: &str| {
                if value.ends_with("@blocked.com") {
                    Err(EmailError::Rejected("blocked domain".to_string()))
                } else {
                    Ok(())
                }
            });

        assert!(!validator.validate());
        assert_eq!(
            validator.errors(),
            vec!["Row 2: invalid email: 'ana@blocked.com'. Reason: blocked domain.".to_string()]
        );
    }
}
