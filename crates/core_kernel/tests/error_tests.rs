//! Tests for core_kernel error types

use core_kernel::error::{CoreError, RecordError};
use core_kernel::{FieldKind, Role};

#[test]
fn test_core_error_validation() {
    let error = CoreError::validation("Invalid input");

    match error {
        CoreError::Validation(msg) => assert_eq!(msg, "Invalid input"),
        _ => panic!("Expected Validation error"),
    }
}

#[test]
fn test_core_error_from_record_error() {
    let record_error = RecordError::UnknownField("bogus".to_string());
    let core_error: CoreError = record_error.into();

    assert!(matches!(core_error, CoreError::Record(_)));
}

#[test]
fn test_record_error_display_names_expected_kind() {
    let error = RecordError::InvalidValue {
        field: "incidentDate",
        expected: FieldKind::Date,
        found: "\"soon\"".to_string(),
    };

    assert_eq!(
        error.to_string(),
        "Invalid value for incidentDate: expected date, found \"soon\""
    );
}

#[test]
fn test_unknown_role_error() {
    let error = "AUDITOR".parse::<Role>().unwrap_err();

    assert!(matches!(error, CoreError::UnknownVariant { kind: "role", .. }));
    assert_eq!(error.to_string(), "Unknown role: AUDITOR");
}
