use thiserror::Error;

/// Offset between a 0-based row position and the line number in the
/// source CSV (1-based, header on line 1).
pub const HEADER_ROW_OFFSET: usize = 2;

/// Converts a 0-based row position to its CSV line number.
pub fn csv_line(row_index: usize) -> usize {
    row_index + HEADER_ROW_OFFSET
}

/// A single finding of a validation run. `Display` renders the message
/// exposed through [`CustomerValidator::errors`](crate::CustomerValidator::errors).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    /// Schema error, one per run
    #[error("Missing required columns: [{}]", quote_list(.missing))]
    MissingColumns { missing: Vec<String> },

    /// Format error, one per offending row
    #[error("Row {line}: invalid date format for '{value}' in column '{column}'.")]
    InvalidDate {
        line: usize,
        column: String,
        value: String,
    },

    /// Uniqueness violation, one per run
    #[error("Duplicate ids found: [{}]", .values.join(", "))]
    DuplicateIds { values: Vec<String> },

    /// Syntax error, one per offending row
    #[error("Row {line}: invalid email: '{value}'. Reason: {reason}.")]
    InvalidEmail {
        line: usize,
        value: String,
        reason: String,
    },
}

impl ValidationIssue {
    /// Name of the check that raised the issue
    pub fn rule_name(&self) -> &'static str {
        match self {
            ValidationIssue::MissingColumns { .. } => crate::rules::RequiredColumnsCheck::NAME,
            ValidationIssue::InvalidDate { .. } => crate::rules::DateFormatCheck::NAME,
            ValidationIssue::DuplicateIds { .. } => crate::rules::UnicityCheck::NAME,
            ValidationIssue::InvalidEmail { .. } => crate::rules::EmailSyntaxCheck::NAME,
        }
    }

    /// CSV line the issue points at, row-level issues only
    pub fn line(&self) -> Option<usize> {
        match self {
            ValidationIssue::InvalidDate { line, .. } | ValidationIssue::InvalidEmail { line, .. } => {
                Some(*line)
            }
            _ => None,
        }
    }
}

fn quote_list(values: &[String]) -> String {
    values
        .iter()
        .map(|v| format!("'{}'", v))
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub total_rows: usize,
    passed: bool,
    rule_results: Vec<RuleResult>,
}

impl ValidationResult {
    pub fn new(total_rows: usize) -> Self {
        Self {
            total_rows,
            passed: true,
            rule_results: Vec::new(),
        }
    }

    pub fn record_rule(&mut self, rule_result: RuleResult) {
        if rule_result.error_count > 0 {
            self.passed = false;
        }
        self.rule_results.push(rule_result);
    }

    pub fn is_passed(&self) -> bool {
        self.passed
    }

    pub fn rule_results(&self) -> &[RuleResult] {
        &self.rule_results
    }

    pub fn error_count(&self) -> usize {
        self.rule_results.iter().map(|r| r.error_count).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleResult {
    pub rule_name: String,
    pub error_count: usize,
}

impl RuleResult {
    pub fn new(rule_name: String, error_count: usize) -> Self {
        Self {
            rule_name,
            error_count,
        }
    }
}
