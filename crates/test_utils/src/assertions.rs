//! Custom Test Assertions
//!
//! Assertion helpers for workflow verdicts that print the full verdict on
//! failure instead of a bare boolean.

use domain_claims::{ValidationResult, WorkflowError};

/// Asserts that a verdict accepted the update
pub fn assert_valid(result: &ValidationResult) {
    assert!(
        result.valid,
        "Expected update to be accepted, got {:?}: {:?}",
        result.error_code, result.error
    );
    assert!(result.error.is_none());
    assert!(result.error_code.is_none());
}

/// Asserts that a verdict rejected the update with the given error code
///
/// # Panics
///
/// Panics if the update was accepted or rejected with a different code
pub fn assert_rejected(result: &ValidationResult, code: &str) {
    assert!(!result.valid, "Expected rejection with {code}, update was accepted");
    assert_eq!(
        result.error_code.as_deref(),
        Some(code),
        "Unexpected rejection: {:?}",
        result.error
    );
    assert!(!result.create_linked_record);
    assert!(!result.recompute_derived_duration);
    assert!(result.linked_record_payload.is_none());
}

/// Asserts that the rejection message mentions every given fragment
pub fn assert_error_mentions(result: &ValidationResult, fragments: &[&str]) {
    let message = result.error.as_deref().unwrap_or_default();
    for fragment in fragments {
        assert!(
            message.contains(fragment),
            "Expected error to mention {fragment:?}, got {message:?}"
        );
    }
}

/// Asserts that a typed error carries the given code
pub fn assert_workflow_error<T: std::fmt::Debug>(result: &Result<T, WorkflowError>, code: &str) {
    match result {
        Ok(value) => panic!("Expected {code}, got Ok({value:?})"),
        Err(err) => assert_eq!(err.code(), code, "Unexpected error: {err}"),
    }
}
