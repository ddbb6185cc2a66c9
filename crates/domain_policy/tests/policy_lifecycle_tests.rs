//! Policy Lifecycle Tests
//!
//! Graph properties of the policy status machine and the transition gate.

use core_kernel::{Lifecycle, PermissionTier, Role};
use domain_policy::{validate_transition, PolicyError, PolicyStatus};
use proptest::prelude::*;
use test_utils::{internal_role_strategy, policy_status_strategy, role_strategy};

mod graph {
    use super::*;

    #[test]
    fn test_terminal_states_have_no_exits() {
        for status in [PolicyStatus::Expired, PolicyStatus::Cancelled] {
            assert!(status.is_terminal());
            assert!(status.allowed_next().is_empty());
        }
    }

    #[test]
    fn test_nothing_returns_to_draft() {
        for status in PolicyStatus::ALL {
            assert!(!status.allowed_next().contains(&PolicyStatus::Draft));
        }
    }

    #[test]
    fn test_every_non_terminal_can_cancel() {
        for status in PolicyStatus::ALL.iter().filter(|s| !s.is_terminal()) {
            assert!(status.can_transition_to(PolicyStatus::Cancelled), "{status}");
        }
    }

    #[test]
    fn test_every_status_reachable_from_draft() {
        let reachable = PolicyStatus::Draft.reachable_from();
        for status in PolicyStatus::ALL.iter().filter(|s| **s != PolicyStatus::Draft) {
            assert!(reachable.contains(status), "{status} unreachable");
        }
    }

    #[test]
    fn test_status_serde_names() {
        let json = serde_json::to_string(&PolicyStatus::Suspended).unwrap();
        assert_eq!(json, "\"SUSPENDED\"");
        assert_eq!("suspended".parse::<PolicyStatus>().unwrap(), PolicyStatus::Suspended);
    }
}

mod permissions {
    use super::*;

    #[test]
    fn test_terminal_policy_needs_admin() {
        let result = validate_transition(
            PolicyStatus::Cancelled,
            PolicyStatus::Cancelled,
            Role::ClaimsManager,
        );
        assert_eq!(
            result,
            Err(PolicyError::PermissionDenied {
                status: PolicyStatus::Cancelled,
                role: Role::ClaimsManager,
            })
        );
        assert!(
            validate_transition(PolicyStatus::Cancelled, PolicyStatus::Cancelled, Role::Admin)
                .is_ok()
        );
    }

    #[test]
    fn test_error_message_names_status() {
        let err = validate_transition(PolicyStatus::Expired, PolicyStatus::Active, Role::SuperAdmin)
            .unwrap_err();
        assert_eq!(err.to_string(), "Cannot change status from EXPIRED to ACTIVE");
    }
}

proptest! {
    #[test]
    fn illegal_edges_always_rejected(
        from in policy_status_strategy(),
        to in policy_status_strategy(),
        role in internal_role_strategy(),
    ) {
        prop_assume!(from != to);
        prop_assume!(from.can_edit(role));
        let result = validate_transition(from, to, role);
        if from.can_transition_to(to) {
            prop_assert!(result.is_ok());
        } else {
            prop_assert_eq!(result, Err(PolicyError::InvalidStateTransition { from, to }));
        }
    }

    #[test]
    fn non_internal_roles_never_pass(
        from in policy_status_strategy(),
        to in policy_status_strategy(),
        role in role_strategy(),
    ) {
        prop_assume!(!PermissionTier::Internal.includes(role));
        let is_permission_denied = matches!(
            validate_transition(from, to, role),
            Err(PolicyError::PermissionDenied { .. })
        );
        prop_assert!(is_permission_denied);
    }
}
