//! Property-Based Test Generators
//!
//! Provides proptest strategies for workflow inputs.

use chrono::NaiveDate;
use core_kernel::{FieldName, Lifecycle, Role};
use domain_claims::{ClaimField, ClaimStatus};
use domain_policy::PolicyStatus;
use proptest::prelude::*;
use proptest::sample::select;
use rust_decimal::Decimal;

/// Strategy for any claim status
pub fn claim_status_strategy() -> impl Strategy<Value = ClaimStatus> {
    select(ClaimStatus::ALL)
}

/// Strategy for any `(from, to)` pair of claim statuses
pub fn claim_status_pair_strategy() -> impl Strategy<Value = (ClaimStatus, ClaimStatus)> {
    (claim_status_strategy(), claim_status_strategy())
}

/// Strategy for any policy status
pub fn policy_status_strategy() -> impl Strategy<Value = PolicyStatus> {
    select(PolicyStatus::ALL)
}

/// Strategy for any role
pub fn role_strategy() -> impl Strategy<Value = Role> {
    select(Role::ALL)
}

/// Strategy for roles in the internal tier
pub fn internal_role_strategy() -> impl Strategy<Value = Role> {
    select(core_kernel::PermissionTier::Internal.roles())
}

/// Strategy for any claim field
pub fn claim_field_strategy() -> impl Strategy<Value = ClaimField> {
    select(ClaimField::ALL)
}

/// Strategy for non-negative amounts with two decimal places
pub fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for five settlement amounts, returned with their exact sum
pub fn settlement_split_strategy() -> impl Strategy<Value = ([Decimal; 5], Decimal)> {
    proptest::array::uniform5(amount_strategy()).prop_map(|parts| {
        let total = parts.iter().copied().sum();
        (parts, total)
    })
}

/// Strategy for dates within a few years of 2024
pub fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0i64..2000i64).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2022, 1, 1).unwrap() + chrono::Duration::days(offset)
    })
}
