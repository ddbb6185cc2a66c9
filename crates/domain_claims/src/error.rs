//! Claims workflow errors
//!
//! One error per rejected update. Every variant names the fields or values
//! involved so the message can be shown to the user as is.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fmt;
use thiserror::Error;

use core_kernel::Role;

use crate::field::{ClaimField, RequiredField};
use crate::status::ClaimStatus;

/// Which date-ordering rule was broken
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRule {
    /// The incident happened after the claim was submitted
    IncidentAfterSubmission,
    /// The settlement is not strictly after the submission
    SettlementNotAfterSubmission,
}

impl fmt::Display for DateRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateRule::IncidentAfterSubmission => {
                f.write_str("incidentDate must not be after submittedDate")
            }
            DateRule::SettlementNotAfterSubmission => {
                f.write_str("settlementDate must be after submittedDate")
            }
        }
    }
}

/// Errors that reject a claim update
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    #[error("Role {role} is not allowed to edit a claim in status {status}")]
    PermissionDenied { status: ClaimStatus, role: Role },

    #[error("Fields not editable in status {status}: {}", join(.fields))]
    ForbiddenFields {
        status: ClaimStatus,
        fields: Vec<ClaimField>,
    },

    #[error("Fields cannot be cleared: {}", join(.fields))]
    ClearedRequiredFields { fields: Vec<ClaimField> },

    #[error("A claim in status {status} must have: {}", join(.fields))]
    ViolatedInvariants {
        status: ClaimStatus,
        fields: Vec<ClaimField>,
    },

    #[error("{rule} ({first} vs {second})")]
    DateOrderingViolation {
        rule: DateRule,
        first: NaiveDate,
        second: NaiveDate,
    },

    #[error(
        "amountSubmitted {submitted:.2} does not match the sum of settlement amounts {computed:.2}"
    )]
    FinancialReconciliationMismatch { submitted: Decimal, computed: Decimal },

    #[error("Cannot change status from {from} to {to}")]
    IllegalTransition { from: ClaimStatus, to: ClaimStatus },

    #[error("Changing status from {from} to {to} requires: {}", join(.fields))]
    MissingTransitionRequirements {
        from: ClaimStatus,
        to: ClaimStatus,
        fields: Vec<RequiredField>,
    },
}

impl WorkflowError {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            WorkflowError::PermissionDenied { .. } => "PERMISSION_DENIED",
            WorkflowError::ForbiddenFields { .. } => "FORBIDDEN_FIELDS",
            WorkflowError::ClearedRequiredFields { .. } => "CLEARED_REQUIRED_FIELDS",
            WorkflowError::ViolatedInvariants { .. } => "VIOLATED_INVARIANTS",
            WorkflowError::DateOrderingViolation { .. } => "DATE_ORDERING_VIOLATION",
            WorkflowError::FinancialReconciliationMismatch { .. } => {
                "FINANCIAL_RECONCILIATION_MISMATCH"
            }
            WorkflowError::IllegalTransition { .. } => "ILLEGAL_TRANSITION",
            WorkflowError::MissingTransitionRequirements { .. } => {
                "MISSING_TRANSITION_REQUIREMENTS"
            }
        }
    }
}

fn join<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
