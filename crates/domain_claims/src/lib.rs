//! Claims Workflow Domain
//!
//! This crate decides whether a proposed edit to a claim is legal and, when
//! the edit moves the claim through its lifecycle, which side effects the
//! caller must perform alongside it.
//!
//! # Claim Lifecycle
//!
//! ```text
//! DRAFT -> VALIDATION -> SUBMITTED -> SETTLED
//!              |           ^    |
//!              v           |    v
//!           RETURNED     PENDING_INFO
//!
//! Any non-terminal status -> CANCELLED
//! ```
//!
//! The engine is a pure function of its input. It owns no state and performs
//! no I/O; persisting the merged claim and any linked record is the caller's
//! job, in one transaction.

pub mod claim;
pub mod error;
pub mod field;
pub mod lifecycle;
pub mod requirements;
pub mod rules;
pub mod status;
pub mod transition;
pub mod validation;

pub use claim::{ClaimRecord, ClaimUpdate};
pub use error::{DateRule, WorkflowError};
pub use field::{ClaimField, FieldSet, RequiredField, TransitionField};
pub use lifecycle::{lifecycle_entry, LifecycleEntry, LifecycleView};
pub use requirements::{
    entry_requirements, resolve_requirements, state_invariants, transition_requirement,
    RequirementSource, TransitionKey, TransitionRequirement,
};
pub use status::ClaimStatus;
pub use transition::{ReprocessPayload, ReprocessRecord, TransitionPayload};
pub use validation::{
    check_update, editable_fields, validate, StatusChange, ValidationInput, ValidationOutcome,
    ValidationResult,
};
