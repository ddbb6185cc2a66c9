//! Claim lifecycle configuration
//!
//! For each status: which fields may be edited, where the claim may move
//! next, and which editable fields may never be cleared.
//!
//! ```text
//! DRAFT -> VALIDATION -> SUBMITTED <-> PENDING_INFO
//!            |              |
//!            v              v
//!         RETURNED       SETTLED          (any non-terminal) -> CANCELLED
//! ```

use serde::Serialize;

use crate::field::groups::*;
use crate::field::{ClaimField, FieldSet};
use crate::status::ClaimStatus;

/// Per-status lifecycle configuration
#[derive(Debug, Clone, Copy)]
pub struct LifecycleEntry {
    pub editable_fields: FieldSet,
    pub allowed_next: &'static [ClaimStatus],
    pub non_nullable_fields: &'static [ClaimField],
}

/// Returns the lifecycle entry for a status
pub fn lifecycle_entry(status: ClaimStatus) -> LifecycleEntry {
    use ClaimField::*;
    use ClaimStatus::*;

    match status {
        Draft => LifecycleEntry {
            editable_fields: FieldSet(&[DRAFT_FIELDS]),
            allowed_next: &[Validation, Cancelled],
            non_nullable_fields: &[PolicyId, AffiliateId],
        },
        Validation => LifecycleEntry {
            editable_fields: FieldSet(&[DRAFT_FIELDS, VALIDATION_EXTRA_FIELDS]),
            allowed_next: &[Submitted, Returned, Cancelled],
            non_nullable_fields: INTAKE_FIELDS,
        },
        Submitted => LifecycleEntry {
            editable_fields: FieldSet(&[VALIDATION_EXTRA_FIELDS, SETTLEMENT_FIELDS]),
            allowed_next: &[PendingInfo, Settled, Cancelled],
            non_nullable_fields: VALIDATION_EXTRA_FIELDS,
        },
        PendingInfo => LifecycleEntry {
            editable_fields: FieldSet(&[PENDING_INFO_FIELDS]),
            allowed_next: &[Submitted, Cancelled],
            non_nullable_fields: &[Description, IncidentDate, AmountSubmitted],
        },
        Returned | Settled | Cancelled => LifecycleEntry {
            editable_fields: FieldSet::EMPTY,
            allowed_next: &[],
            non_nullable_fields: &[],
        },
    }
}

/// Serializable view of a lifecycle entry, for callers rendering forms
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LifecycleView {
    pub status: ClaimStatus,
    pub editable_fields: Vec<ClaimField>,
    pub allowed_next: Vec<ClaimStatus>,
    pub non_nullable_fields: Vec<ClaimField>,
    pub state_invariants: Vec<ClaimField>,
}

impl LifecycleView {
    pub fn of(status: ClaimStatus) -> Self {
        let entry = lifecycle_entry(status);
        Self {
            status,
            editable_fields: entry.editable_fields.fields(),
            allowed_next: entry.allowed_next.to_vec(),
            non_nullable_fields: entry.non_nullable_fields.to_vec(),
            state_invariants: crate::requirements::state_invariants(status).fields(),
        }
    }
}
