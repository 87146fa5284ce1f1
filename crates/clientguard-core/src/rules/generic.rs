use std::collections::HashMap;

use crate::{dataset::Dataset, results::ValidationIssue, utils::hasher::Xxh3Builder};

/// Detects values that appear on more than one row of a column.
///
/// Values are compared after trimming; nulls and blank cells are ignored. All duplicated
/// values are reported together in a single issue, in first-seen order.
#[derive(Clone)]
pub struct UnicityCheck {
    column: String,
}

impl UnicityCheck {
    pub const NAME: &'static str = "UnicityCheck";

    pub fn new(column: String) -> Self {
        Self { column }
    }

    pub fn name(&self) -> &'static str {
        Self::NAME
    }

    /// Distinct duplicated values, in order of first appearance
    pub fn duplicates<'a, I>(&self, values: I) -> Vec<&'a str>
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        let mut counts: HashMap<&str, usize, Xxh3Builder> = HashMap::with_hasher(Xxh3Builder);
        let mut first_seen = Vec::new();

        for value in values.into_iter().flatten() {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            let count = counts.entry(value).or_insert(0);
            if *count == 0 {
                first_seen.push(value);
            }
            *count += 1;
        }

        first_seen
            .into_iter()
            .filter(|value| counts.get(value).is_some_and(|&count| count > 1))
            .collect()
    }

    pub fn validate(&self, dataset: &Dataset, issues: &mut Vec<ValidationIssue>) -> usize {
        let Some(array) = dataset.column(&self.column) else {
            return 0;
        };

        let duplicated = self.duplicates(array.iter());
        if duplicated.is_empty() {
            return 0;
        }
        issues.push(ValidationIssue::DuplicateIds {
            values: duplicated.into_iter().map(str::to_string).collect(),
        });
        1
    }
}
