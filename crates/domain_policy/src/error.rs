//! Policy domain errors

use thiserror::Error;

use core_kernel::Role;

use crate::status::PolicyStatus;

/// Errors that can occur in the policy domain
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    /// Caller's role may not edit a policy in this status
    #[error("Role {role} is not allowed to edit a policy in status {status}")]
    PermissionDenied { status: PolicyStatus, role: Role },

    /// Invalid state transition attempted
    #[error("Cannot change status from {from} to {to}")]
    InvalidStateTransition { from: PolicyStatus, to: PolicyStatus },
}
