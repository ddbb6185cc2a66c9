//! Requirement tables
//!
//! Three independent tables drive what must be filled in:
//!
//! - entry requirements: fields needed to move *into* a status
//! - transition requirements: extra input for one specific edge, including
//!   the wildcard `* -> CANCELLED`, plus the side effects the edge triggers
//! - state invariants: fields that must stay filled *while in* a status
//!
//! For a given transition exactly one of the exact edge, the wildcard edge or
//! the target's entry requirements applies. They are never unioned.

use serde::Serialize;
use std::fmt;

use crate::field::groups::*;
use crate::field::{FieldSet, RequiredField, TransitionField};
use crate::status::ClaimStatus;

/// Key of the transition requirements table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionKey {
    /// A literal `(from, to)` edge
    Exact(ClaimStatus, ClaimStatus),
    /// Any status into the given target
    AnyTo(ClaimStatus),
}

impl fmt::Display for TransitionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransitionKey::Exact(from, to) => write!(f, "{from} -> {to}"),
            TransitionKey::AnyTo(to) => write!(f, "* -> {to}"),
        }
    }
}

/// Extra requirements and side effects of one transition
#[derive(Debug, Clone, Copy)]
pub struct TransitionRequirement {
    pub claim_fields: FieldSet,
    pub transition_fields: &'static [TransitionField],
    pub creates_linked_record: bool,
    pub recomputes_derived_duration: bool,
}

impl TransitionRequirement {
    const fn fields(
        claim_fields: FieldSet,
        transition_fields: &'static [TransitionField],
    ) -> Self {
        Self {
            claim_fields,
            transition_fields,
            creates_linked_record: false,
            recomputes_derived_duration: false,
        }
    }
}

/// Fields that must be filled to enter a status
pub fn entry_requirements(status: ClaimStatus) -> Option<FieldSet> {
    use ClaimStatus::*;

    match status {
        Validation => Some(FieldSet(&[INTAKE_FIELDS])),
        Submitted => Some(FieldSet(&[INTAKE_FIELDS, VALIDATION_EXTRA_FIELDS])),
        PendingInfo => Some(FieldSet(&[VALIDATION_EXTRA_FIELDS])),
        Settled => Some(FieldSet(&[
            INTAKE_FIELDS,
            VALIDATION_EXTRA_FIELDS,
            SETTLEMENT_REQUIRED_FIELDS,
        ])),
        Draft | Returned | Cancelled => None,
    }
}

/// Looks up the transition requirements table
pub fn transition_requirement(key: TransitionKey) -> Option<TransitionRequirement> {
    use ClaimStatus::*;
    use TransitionField::*;

    match key {
        TransitionKey::Exact(Validation, Returned) => Some(TransitionRequirement::fields(
            FieldSet::EMPTY,
            &[ReturnReason],
        )),
        TransitionKey::Exact(Submitted, PendingInfo) => Some(TransitionRequirement::fields(
            FieldSet(&[VALIDATION_EXTRA_FIELDS]),
            &[PendingReason],
        )),
        TransitionKey::Exact(PendingInfo, Submitted) => Some(TransitionRequirement {
            claim_fields: FieldSet(&[VALIDATION_EXTRA_FIELDS]),
            transition_fields: &[ReprocessDate, ReprocessDescription],
            creates_linked_record: true,
            recomputes_derived_duration: true,
        }),
        TransitionKey::AnyTo(Cancelled) => Some(TransitionRequirement::fields(
            FieldSet::EMPTY,
            &[CancellationReason],
        )),
        _ => None,
    }
}

/// Fields that must hold while a claim sits in a status
pub fn state_invariants(status: ClaimStatus) -> FieldSet {
    use ClaimStatus::*;

    match status {
        Validation => FieldSet(&[INTAKE_FIELDS]),
        Submitted | PendingInfo => FieldSet(&[INTAKE_FIELDS, VALIDATION_EXTRA_FIELDS]),
        Draft | Returned | Settled | Cancelled => FieldSet::EMPTY,
    }
}

/// Where the requirements of a transition came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RequirementSource {
    ExactTransition,
    WildcardTransition,
    EntryRequirement,
    None,
}

/// Requirements in force for one transition
#[derive(Debug, Clone)]
pub struct ResolvedRequirements {
    pub source: RequirementSource,
    pub required: Vec<RequiredField>,
    pub creates_linked_record: bool,
    pub recomputes_derived_duration: bool,
}

/// Resolves the single requirement source for `from -> to`
pub fn resolve_requirements(from: ClaimStatus, to: ClaimStatus) -> ResolvedRequirements {
    let from_table = |source, requirement: TransitionRequirement| {
        let mut required: Vec<RequiredField> = requirement
            .claim_fields
            .fields()
            .into_iter()
            .map(RequiredField::from)
            .collect();
        required.extend(
            requirement
                .transition_fields
                .iter()
                .copied()
                .map(RequiredField::from),
        );
        ResolvedRequirements {
            source,
            required,
            creates_linked_record: requirement.creates_linked_record,
            recomputes_derived_duration: requirement.recomputes_derived_duration,
        }
    };

    if let Some(requirement) = transition_requirement(TransitionKey::Exact(from, to)) {
        return from_table(RequirementSource::ExactTransition, requirement);
    }
    if to == ClaimStatus::Cancelled {
        if let Some(requirement) = transition_requirement(TransitionKey::AnyTo(to)) {
            return from_table(RequirementSource::WildcardTransition, requirement);
        }
    }
    match entry_requirements(to) {
        Some(fields) => ResolvedRequirements {
            source: RequirementSource::EntryRequirement,
            required: fields.fields().into_iter().map(RequiredField::from).collect(),
            creates_linked_record: false,
            recomputes_derived_duration: false,
        },
        None => ResolvedRequirements {
            source: RequirementSource::None,
            required: Vec::new(),
            creates_linked_record: false,
            recomputes_derived_duration: false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::ClaimField;

    #[test]
    fn test_exact_edge_wins_over_entry_requirements() {
        let resolved = resolve_requirements(ClaimStatus::PendingInfo, ClaimStatus::Submitted);
        assert_eq!(resolved.source, RequirementSource::ExactTransition);
        assert!(resolved.creates_linked_record);
        assert!(resolved.recomputes_derived_duration);
        // Entry requirements for SUBMITTED are not unioned in
        assert!(!resolved
            .required
            .contains(&RequiredField::Claim(ClaimField::CareType)));
    }

    #[test]
    fn test_cancel_falls_back_to_wildcard() {
        let resolved = resolve_requirements(ClaimStatus::Submitted, ClaimStatus::Cancelled);
        assert_eq!(resolved.source, RequirementSource::WildcardTransition);
        assert_eq!(
            resolved.required,
            vec![RequiredField::Transition(TransitionField::CancellationReason)]
        );
    }

    #[test]
    fn test_plain_edge_uses_entry_requirements() {
        let resolved = resolve_requirements(ClaimStatus::Draft, ClaimStatus::Validation);
        assert_eq!(resolved.source, RequirementSource::EntryRequirement);
        assert_eq!(resolved.required.len(), INTAKE_FIELDS.len());
    }

    #[test]
    fn test_settled_entry_excludes_notes() {
        let fields = entry_requirements(ClaimStatus::Settled).unwrap();
        assert!(fields.contains(ClaimField::SettlementNumber));
        assert!(!fields.contains(ClaimField::SettlementNotes));
    }

    #[test]
    fn test_transition_key_display() {
        let key = TransitionKey::AnyTo(ClaimStatus::Cancelled);
        assert_eq!(key.to_string(), "* -> CANCELLED");
    }
}
