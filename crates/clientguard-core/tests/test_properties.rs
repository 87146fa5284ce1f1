//! Property-based tests for the customer validator.

use clientguard_core::{CustomerValidator, Dataset};
use proptest::prelude::*;

const COLUMNS: [&str; 4] = ["id", "nome", "email", "data_nascimento"];

fn cell() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        "[0-9]{1,2}".prop_map(Some),
        "[a-z]{1,6}@[a-z]{1,6}\\.com".prop_map(Some),
        "(19|20)[0-9]{2}-0[1-9]-1[0-9]".prop_map(Some),
        ".{0,12}".prop_map(Some),
    ]
}

/// Random subset of the required columns (plus an optional extra) with random cells
fn dataset() -> impl Strategy<Value = Dataset> {
    (
        proptest::collection::vec(any::<bool>(), 5),
        0usize..8,
    )
        .prop_flat_map(|(present, rows)| {
            let names: Vec<&'static str> = COLUMNS
                .iter()
                .copied()
                .chain(std::iter::once("cidade"))
                .zip(present)
                .filter(|(_, keep)| *keep)
                .map(|(name, _)| name)
                .collect();
            let n = names.len();
            (
                Just(names),
                proptest::collection::vec(proptest::collection::vec(cell(), rows), n),
            )
        })
        .prop_map(|(names, cells)| {
            let columns = names
                .iter()
                .zip(cells.iter())
                .map(|(name, values)| (*name, values.iter().map(|v| v.as_deref()).collect()))
                .collect();
            Dataset::from_columns(columns).unwrap()
        })
}

proptest! {
    #[test]
    fn passed_iff_no_errors(dataset in dataset()) {
        let mut validator = CustomerValidator::new(dataset);
        let passed = validator.validate();
        prop_assert_eq!(passed, validator.errors().is_empty());
        prop_assert_eq!(passed, validator.result().is_passed());
    }

    #[test]
    fn validate_idempotent(dataset in dataset()) {
        let mut validator = CustomerValidator::new(dataset);
        let r1 = validator.validate();
        let e1 = validator.errors();
        let r2 = validator.validate();
        let e2 = validator.errors();
        prop_assert_eq!(r1, r2);
        prop_assert_eq!(e1, e2);
    }

    #[test]
    fn one_missing_columns_message(dataset in dataset()) {
        let missing: Vec<&str> = COLUMNS
            .iter()
            .copied()
            .filter(|c| !dataset.has_column(c))
            .collect();
        let mut validator = CustomerValidator::new(dataset);
        validator.validate();

        let messages: Vec<String> = validator
            .errors()
            .into_iter()
            .filter(|e| e.starts_with("Missing required columns"))
            .collect();
        if missing.is_empty() {
            prop_assert!(messages.is_empty());
        } else {
            let quoted: Vec<String> = missing.iter().map(|c| format!("'{}'", c)).collect();
            prop_assert_eq!(
                messages,
                vec![format!("Missing required columns: [{}]", quoted.join(", "))]
            );
        }
    }

    #[test]
    fn at_most_one_duplicate_message(dataset in dataset()) {
        let mut validator = CustomerValidator::new(dataset);
        validator.validate();
        let n = validator
            .errors()
            .iter()
            .filter(|e| e.starts_with("Duplicate ids found"))
            .count();
        prop_assert!(n <= 1);
    }
}
