use crate::StorageError;
use crate::types::{ViolationKind, check_input};

use super::create_test_input;

#[test]
fn test_valid_input_passes() {
    assert!(check_input(&create_test_input("Ann", "123-4567890"), &[]).is_ok());
}

#[test]
fn test_short_fields_reported_in_declaration_order() {
    let err = check_input(&create_test_input("Al", "123"), &[]).unwrap_err();
    let StorageError::Validation(violations) = err else {
        panic!("expected validation error, got {err:?}");
    };
    assert_eq!(violations.len(), 2);
    assert_eq!(violations[0].path, "name");
    assert_eq!(violations[0].kind, ViolationKind::MinLength);
    assert_eq!(
        violations[0].message,
        "Path `name` (`Al`) is shorter than the minimum allowed length (3)."
    );
    assert_eq!(violations[1].path, "number");
    assert!(violations[1].message.contains("minimum allowed length (8)"));
}

#[test]
fn test_taken_name_reports_unique() {
    let err = check_input(&create_test_input("Ann", "123-4567890"), &["name"]).unwrap_err();
    assert!(err.is_duplicate());
}

#[test]
fn test_length_takes_precedence_over_uniqueness() {
    let err = check_input(&create_test_input("Al", "123-4567890"), &["name"]).unwrap_err();
    let StorageError::Validation(violations) = err else {
        panic!("expected validation error");
    };
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].kind, ViolationKind::MinLength);
}

#[test]
fn test_unique_and_length_collected_together() {
    let err = check_input(&create_test_input("Ann", "123"), &["name"]).unwrap_err();
    let StorageError::Validation(violations) = err else {
        panic!("expected validation error");
    };
    let kinds: Vec<_> = violations.iter().map(|v| (v.path.as_str(), v.kind)).collect();
    assert_eq!(kinds, [("name", ViolationKind::Unique), ("number", ViolationKind::MinLength)]);
}
