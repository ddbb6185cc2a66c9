//! Policy transition checks
//!
//! Policies follow the same pattern as claims without field-level rules:
//! a permission gate followed by a lookup in the transition graph.

use core_kernel::{Lifecycle, Role};

use crate::error::PolicyError;
use crate::status::PolicyStatus;

/// Checks that `role` may move a policy from `current` to `target`
pub fn validate_transition(
    current: PolicyStatus,
    target: PolicyStatus,
    role: Role,
) -> Result<(), PolicyError> {
    if !current.can_edit(role) {
        return Err(PolicyError::PermissionDenied {
            status: current,
            role,
        });
    }

    if current != target && !current.can_transition_to(target) {
        return Err(PolicyError::InvalidStateTransition {
            from: current,
            to: target,
        });
    }

    tracing::debug!(%current, %target, %role, "policy transition accepted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activate_draft() {
        assert!(
            validate_transition(PolicyStatus::Draft, PolicyStatus::Active, Role::Admin).is_ok()
        );
    }

    #[test]
    fn test_reactivate_suspended() {
        assert!(validate_transition(
            PolicyStatus::Suspended,
            PolicyStatus::Active,
            Role::ClaimsManager
        )
        .is_ok());
    }

    #[test]
    fn test_expired_cannot_reactivate() {
        let result = validate_transition(PolicyStatus::Expired, PolicyStatus::Active, Role::Admin);
        assert!(matches!(result, Err(PolicyError::InvalidStateTransition { .. })));
    }

    #[test]
    fn test_client_cannot_edit() {
        let result =
            validate_transition(PolicyStatus::Active, PolicyStatus::Suspended, Role::ClientAdmin);
        assert!(matches!(result, Err(PolicyError::PermissionDenied { .. })));
    }
}
