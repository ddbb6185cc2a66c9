//! Claim records as seen by the workflow engine

use serde::{Deserialize, Serialize};

use core_kernel::{ClaimId, FieldValue, Record};

use crate::field::ClaimField;
use crate::status::ClaimStatus;

/// The persisted claim row: identity, status and a flat field record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimRecord {
    pub id: ClaimId,
    pub status: ClaimStatus,
    #[serde(flatten)]
    pub fields: Record<ClaimField>,
}

impl ClaimRecord {
    pub fn new(id: ClaimId, status: ClaimStatus) -> Self {
        Self {
            id,
            status,
            fields: Record::new(),
        }
    }

    pub fn with(mut self, field: ClaimField, value: impl Into<FieldValue>) -> Self {
        self.fields.set(field, value);
        self
    }

    /// Applies a validated update, returning the row the caller persists
    pub fn apply(&self, update: &ClaimUpdate) -> ClaimRecord {
        ClaimRecord {
            id: self.id,
            status: update.status.unwrap_or(self.status),
            fields: self.fields.merged_with(&update.fields),
        }
    }
}

/// A partial update: only present keys change, `null` clears a field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ClaimStatus>,
    #[serde(flatten)]
    pub fields: Record<ClaimField>,
}

impl ClaimUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: ClaimStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn set(mut self, field: ClaimField, value: impl Into<FieldValue>) -> Self {
        self.fields.set(field, value);
        self
    }

    pub fn clear(mut self, field: ClaimField) -> Self {
        self.fields.clear(field);
        self
    }

    /// Target status when the update actually changes it
    pub fn status_change(&self, current: ClaimStatus) -> Option<ClaimStatus> {
        self.status.filter(|target| *target != current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_update_parses_status_and_fields() {
        let update: ClaimUpdate = serde_json::from_str(
            r#"{"status": "SUBMITTED", "claimNumber": "CN-1", "amountSubmitted": null}"#,
        )
        .unwrap();

        assert_eq!(update.status, Some(ClaimStatus::Submitted));
        assert_eq!(update.fields.text(ClaimField::ClaimNumber), Some("CN-1"));
        assert_eq!(update.fields.get(ClaimField::AmountSubmitted), Some(&FieldValue::Null));
    }

    #[test]
    fn test_update_rejects_unknown_keys() {
        let result: Result<ClaimUpdate, _> = serde_json::from_str(r#"{"reason": "x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_apply_merges_fields() {
        let current = ClaimRecord::new(ClaimId::new(), ClaimStatus::Submitted)
            .with(ClaimField::AmountSubmitted, dec!(100));
        let update = ClaimUpdate::new()
            .status(ClaimStatus::Settled)
            .set(ClaimField::AmountApproved, dec!(100));

        let next = current.apply(&update);
        assert_eq!(next.status, ClaimStatus::Settled);
        assert_eq!(next.fields.amount(ClaimField::AmountSubmitted), Some(dec!(100)));
        assert_eq!(next.fields.amount(ClaimField::AmountApproved), Some(dec!(100)));
    }

    #[test]
    fn test_same_status_is_not_a_change() {
        let update = ClaimUpdate::new().status(ClaimStatus::Draft);
        assert_eq!(update.status_change(ClaimStatus::Draft), None);
    }
}
