//! Claim update validation
//!
//! A single synchronous decision per call: given the persisted claim, the
//! proposed partial update, any transition-only input and the caller's role,
//! decide whether the update is legal and report the side effects the caller
//! must perform in the same transaction.
//!
//! Gates run in a fixed order and the first failure is returned:
//!
//! 1. permission
//! 2. editable fields
//! 3. non-nullable fields
//! 4. state invariants on the merged claim
//! 5. cross-field business rules on the merged claim
//! 6. transition graph and requirements (only when the status changes)

use serde::{Deserialize, Serialize};

use core_kernel::{FieldName, Lifecycle, Record, Role};

use crate::claim::{ClaimRecord, ClaimUpdate};
use crate::error::WorkflowError;
use crate::field::{ClaimField, RequiredField};
use crate::lifecycle::lifecycle_entry;
use crate::requirements::{resolve_requirements, state_invariants, RequirementSource};
use crate::rules::check_business_rules;
use crate::status::ClaimStatus;
use crate::transition::{ReprocessPayload, TransitionPayload};

/// Everything the engine looks at
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ValidationInput {
    pub current: ClaimRecord,
    pub updates: ClaimUpdate,
    pub role: Role,
    #[serde(default)]
    pub transition: TransitionPayload,
}

impl ValidationInput {
    pub fn new(current: ClaimRecord, updates: ClaimUpdate, role: Role) -> Self {
        Self {
            current,
            updates,
            role,
            transition: TransitionPayload::default(),
        }
    }

    pub fn with_transition(mut self, transition: TransitionPayload) -> Self {
        self.transition = transition;
        self
    }

    pub fn validate(&self) -> ValidationResult {
        validate(self)
    }
}

/// A status change that passed the transition gate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusChange {
    pub from: ClaimStatus,
    pub to: ClaimStatus,
    pub requirement_source: RequirementSource,
}

/// What an accepted update asks of the caller
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub status_change: Option<StatusChange>,
    pub create_linked_record: bool,
    pub recompute_derived_duration: bool,
    pub linked_record_payload: Option<ReprocessPayload>,
}

/// Verdict in the shape callers surface to the UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub valid: bool,
    pub error: Option<String>,
    pub error_code: Option<String>,
    pub create_linked_record: bool,
    pub recompute_derived_duration: bool,
    pub linked_record_payload: Option<ReprocessPayload>,
}

impl From<Result<ValidationOutcome, WorkflowError>> for ValidationResult {
    fn from(result: Result<ValidationOutcome, WorkflowError>) -> Self {
        match result {
            Ok(outcome) => ValidationResult {
                valid: true,
                error: None,
                error_code: None,
                create_linked_record: outcome.create_linked_record,
                recompute_derived_duration: outcome.recompute_derived_duration,
                linked_record_payload: outcome.linked_record_payload,
            },
            Err(err) => ValidationResult {
                valid: false,
                error: Some(err.to_string()),
                error_code: Some(err.code().to_string()),
                create_linked_record: false,
                recompute_derived_duration: false,
                linked_record_payload: None,
            },
        }
    }
}

/// Validates a claim update and reports the verdict
pub fn validate(input: &ValidationInput) -> ValidationResult {
    check_update(&input.current, &input.updates, &input.transition, input.role).into()
}

/// Runs every gate, returning the first failure
pub fn check_update(
    current: &ClaimRecord,
    updates: &ClaimUpdate,
    transition: &TransitionPayload,
    role: Role,
) -> Result<ValidationOutcome, WorkflowError> {
    let status = current.status;
    let target = updates.status_change(status);

    let result = run_gates(current, updates, transition, role);
    match &result {
        Ok(_) => tracing::debug!(
            claim_id = %current.id,
            %status,
            target = ?target,
            %role,
            "claim update accepted"
        ),
        Err(err) => tracing::debug!(
            claim_id = %current.id,
            %status,
            target = ?target,
            %role,
            code = err.code(),
            "claim update rejected"
        ),
    }
    result
}

fn run_gates(
    current: &ClaimRecord,
    updates: &ClaimUpdate,
    transition: &TransitionPayload,
    role: Role,
) -> Result<ValidationOutcome, WorkflowError> {
    let status = current.status;
    let entry = lifecycle_entry(status);

    if !status.can_edit(role) {
        return Err(WorkflowError::PermissionDenied { status, role });
    }

    let attempted: Vec<ClaimField> = updates.fields.fields().collect();

    let forbidden: Vec<ClaimField> = attempted
        .iter()
        .copied()
        .filter(|field| !entry.editable_fields.contains(*field))
        .collect();
    if !forbidden.is_empty() {
        return Err(WorkflowError::ForbiddenFields {
            status,
            fields: forbidden,
        });
    }

    let cleared: Vec<ClaimField> = attempted
        .iter()
        .copied()
        .filter(|field| entry.non_nullable_fields.contains(field))
        .filter(|field| !updates.fields.is_filled(*field))
        .collect();
    if !cleared.is_empty() {
        return Err(WorkflowError::ClearedRequiredFields { fields: cleared });
    }

    let merged = current.fields.merged_with(&updates.fields);

    let violated: Vec<ClaimField> = state_invariants(status)
        .fields()
        .into_iter()
        .filter(|field| !merged.is_filled(*field))
        .collect();
    if !violated.is_empty() {
        return Err(WorkflowError::ViolatedInvariants {
            status,
            fields: violated,
        });
    }

    check_business_rules(&merged)?;

    let Some(to) = updates.status_change(status) else {
        return Ok(ValidationOutcome::default());
    };

    check_transition(current, &merged, transition, to)
}

fn check_transition(
    current: &ClaimRecord,
    merged: &Record<ClaimField>,
    transition: &TransitionPayload,
    to: ClaimStatus,
) -> Result<ValidationOutcome, WorkflowError> {
    let from = current.status;

    if !from.can_transition_to(to) {
        return Err(WorkflowError::IllegalTransition { from, to });
    }

    let requirements = resolve_requirements(from, to);
    let missing: Vec<RequiredField> = requirements
        .required
        .iter()
        .copied()
        .filter(|field| !is_supplied(*field, merged, transition))
        .collect();
    if !missing.is_empty() {
        return Err(WorkflowError::MissingTransitionRequirements {
            from,
            to,
            fields: missing,
        });
    }

    let linked_record_payload = if requirements.creates_linked_record {
        ReprocessPayload::from_transition(current.id, transition)
    } else {
        None
    };

    Ok(ValidationOutcome {
        status_change: Some(StatusChange {
            from,
            to,
            requirement_source: requirements.source,
        }),
        create_linked_record: requirements.creates_linked_record,
        recompute_derived_duration: requirements.recomputes_derived_duration,
        linked_record_payload,
    })
}

/// Requirement source: the merged claim plus transition-only input
fn is_supplied(
    field: RequiredField,
    merged: &Record<ClaimField>,
    transition: &TransitionPayload,
) -> bool {
    match field {
        RequiredField::Claim(field) => merged.is_filled(field),
        RequiredField::Transition(field) => transition.is_filled(field),
    }
}

/// Every claim field a caller may currently touch, for form rendering
pub fn editable_fields(status: ClaimStatus, role: Role) -> Vec<ClaimField> {
    if !status.can_edit(role) {
        return Vec::new();
    }
    let entry = lifecycle_entry(status);
    ClaimField::ALL
        .iter()
        .copied()
        .filter(|field| entry.editable_fields.contains(*field))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editable_fields_follow_permission() {
        assert!(editable_fields(ClaimStatus::Draft, Role::ClientUser).is_empty());

        let fields = editable_fields(ClaimStatus::PendingInfo, Role::ClaimsAnalyst);
        assert_eq!(
            fields,
            vec![
                ClaimField::Diagnosis,
                ClaimField::Description,
                ClaimField::IncidentDate,
                ClaimField::AmountSubmitted,
            ]
        );
    }

    #[test]
    fn test_terminal_status_offers_nothing_even_to_admins() {
        assert!(editable_fields(ClaimStatus::Settled, Role::SuperAdmin).is_empty());
    }
}
