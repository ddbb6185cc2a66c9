//! Test Data Builders
//!
//! Builder patterns for validation inputs, so tests specify only the
//! relevant parts of an update.

use chrono::NaiveDate;
use core_kernel::{FieldValue, Role};
use domain_claims::{
    ClaimField, ClaimRecord, ClaimStatus, ClaimUpdate, TransitionPayload, ValidationInput,
};

use crate::fixtures::ClaimFixtures;

/// Builder for constructing a validation input
pub struct ValidationInputBuilder {
    current: ClaimRecord,
    updates: ClaimUpdate,
    role: Role,
    transition: TransitionPayload,
}

impl ValidationInputBuilder {
    /// Starts from a consistent claim in `status`, edited by a claims analyst
    pub fn new(status: ClaimStatus) -> Self {
        Self::from_claim(ClaimFixtures::for_status(status))
    }

    pub fn from_claim(current: ClaimRecord) -> Self {
        Self {
            current,
            updates: ClaimUpdate::new(),
            role: Role::ClaimsAnalyst,
            transition: TransitionPayload::default(),
        }
    }

    /// Sets the caller role
    pub fn role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    /// Changes a field on the persisted claim before validation
    pub fn current(mut self, field: ClaimField, value: impl Into<FieldValue>) -> Self {
        self.current.fields.set(field, value);
        self
    }

    /// Removes a field from the persisted claim
    pub fn without(mut self, field: ClaimField) -> Self {
        self.current.fields.remove(field);
        self
    }

    /// Proposes a new value
    pub fn set(mut self, field: ClaimField, value: impl Into<FieldValue>) -> Self {
        self.updates.fields.set(field, value);
        self
    }

    /// Proposes clearing a field
    pub fn clear(mut self, field: ClaimField) -> Self {
        self.updates.fields.clear(field);
        self
    }

    /// Proposes a status change
    pub fn to(mut self, status: ClaimStatus) -> Self {
        self.updates.status = Some(status);
        self
    }

    pub fn cancellation_reason(mut self, reason: &str) -> Self {
        self.transition.cancellation_reason = Some(reason.to_string());
        self
    }

    pub fn return_reason(mut self, reason: &str) -> Self {
        self.transition.return_reason = Some(reason.to_string());
        self
    }

    pub fn pending_reason(mut self, reason: &str) -> Self {
        self.transition.pending_reason = Some(reason.to_string());
        self
    }

    pub fn reprocess(mut self, date: NaiveDate, description: &str) -> Self {
        self.transition.reprocess_date = Some(date);
        self.transition.reprocess_description = Some(description.to_string());
        self
    }

    pub fn build(self) -> ValidationInput {
        ValidationInput::new(self.current, self.updates, self.role)
            .with_transition(self.transition)
    }
}
