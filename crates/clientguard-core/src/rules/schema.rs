use crate::{dataset::Dataset, results::ValidationIssue};

/// Reports required columns absent from the dataset, as a single issue.
pub struct RequiredColumnsCheck {
    required: Vec<String>,
}

impl RequiredColumnsCheck {
    pub const NAME: &'static str = "RequiredColumns";

    pub fn new(required: &[&str]) -> Self {
        Self {
            required: required.iter().map(|c| c.to_string()).collect(),
        }
    }

    pub fn name(&self) -> &'static str {
        Self::NAME
    }

    /// Missing names keep the order of the required list.
    pub fn validate(&self, dataset: &Dataset, issues: &mut Vec<ValidationIssue>) -> usize {
        let missing: Vec<String> = self
            .required
            .iter()
            .filter(|column| !dataset.has_column(column))
            .cloned()
            .collect();

        if missing.is_empty() {
            return 0;
        }
        issues.push(ValidationIssue::MissingColumns { missing });
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::REQUIRED_COLUMNS;

    #[test]
    fn test_all_present() {
        let dataset = Dataset::from_columns(vec![
            ("id", vec![Some("1")]),
            ("nome", vec![Some("Ana")]),
            ("email", vec![Some("ana@example.com")]),
            ("data_nascimento", vec![Some("1990-01-01")]),
            ("cidade", vec![Some("Recife")]),
        ])
        .unwrap();
        let mut issues = Vec::new();
        let n = RequiredColumnsCheck::new(&REQUIRED_COLUMNS).validate(&dataset, &mut issues);
        assert_eq!(n, 0);
        assert!(issues.is_empty());
    }

    #[test]
    fn test_missing_in_required_order() {
        let dataset = Dataset::from_columns(vec![
            ("data_nascimento", vec![Some("1990-01-01")]),
            ("nome", vec![Some("Ana")]),
        ])
        .unwrap();
        let mut issues = Vec::new();
        let n = RequiredColumnsCheck::new(&REQUIRED_COLUMNS).validate(&dataset, &mut issues);
        assert_eq!(n, 1);
        assert_eq!(
            issues,
            vec![ValidationIssue::MissingColumns {
                missing: vec!["id".to_string(), "email".to_string()]
            }]
        );
    }

    #[test]
    fn test_empty_dataset_misses_everything() {
        let dataset = Dataset::from_columns(vec![]).unwrap();
        let mut issues = Vec::new();
        RequiredColumnsCheck::new(&REQUIRED_COLUMNS).validate(&dataset, &mut issues);
        assert_eq!(
            issues[0].to_string(),
            "Missing required columns: ['id', 'nome', 'email', 'data_nascimento']"
        );
    }
}
