//! Transition-only input and the linked records transitions produce

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::{business_days_between, ClaimId, ReprocessId};

use crate::field::TransitionField;

/// Input supplied only to satisfy a transition's requirements.
///
/// Passed next to the claim update, never merged into the claim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TransitionPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancellation_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reprocess_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reprocess_description: Option<String>,
}

impl TransitionPayload {
    pub fn cancellation(reason: impl Into<String>) -> Self {
        Self {
            cancellation_reason: Some(reason.into()),
            ..Self::default()
        }
    }

    pub fn reprocess(date: NaiveDate, description: impl Into<String>) -> Self {
        Self {
            reprocess_date: Some(date),
            reprocess_description: Some(description.into()),
            ..Self::default()
        }
    }

    /// True when the field holds a non-blank value
    pub fn is_filled(&self, field: TransitionField) -> bool {
        let text = |value: &Option<String>| {
            value.as_deref().map(|s| !s.trim().is_empty()).unwrap_or(false)
        };
        match field {
            TransitionField::CancellationReason => text(&self.cancellation_reason),
            TransitionField::ReturnReason => text(&self.return_reason),
            TransitionField::PendingReason => text(&self.pending_reason),
            TransitionField::ReprocessDate => self.reprocess_date.is_some(),
            TransitionField::ReprocessDescription => text(&self.reprocess_description),
        }
    }
}

/// A reprocessing note the caller persists next to the claim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReprocessPayload {
    pub claim_id: ClaimId,
    pub reprocess_date: NaiveDate,
    pub description: String,
}

impl ReprocessPayload {
    /// Builds the payload from a transition payload, if both parts are present
    pub fn from_transition(claim_id: ClaimId, payload: &TransitionPayload) -> Option<Self> {
        let date = payload.reprocess_date?;
        let description = payload
            .reprocess_description
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())?;
        Some(Self {
            claim_id,
            reprocess_date: date,
            description: description.to_string(),
        })
    }

    /// Business days from the reprocess date to `end`, the derived duration
    /// the caller stores in `businessDays`
    pub fn business_days_until(&self, end: NaiveDate) -> i64 {
        business_days_between(self.reprocess_date, end)
    }

    /// Assigns an identifier for persistence
    pub fn into_record(self) -> ReprocessRecord {
        ReprocessRecord {
            id: ReprocessId::new_v7(),
            claim_id: self.claim_id,
            reprocess_date: self.reprocess_date,
            description: self.description,
        }
    }
}

/// A persisted reprocessing note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReprocessRecord {
    pub id: ReprocessId,
    pub claim_id: ClaimId,
    pub reprocess_date: NaiveDate,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_reason_is_not_filled() {
        let payload = TransitionPayload::cancellation("   ");
        assert!(!payload.is_filled(TransitionField::CancellationReason));
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let result: Result<TransitionPayload, _> =
            serde_json::from_str(r#"{"cancelReason": "dup"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_reprocess_payload_requires_both_parts() {
        let claim_id = ClaimId::new();
        let mut payload = TransitionPayload::reprocess(
            NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
            "Medical report attached",
        );
        assert!(ReprocessPayload::from_transition(claim_id, &payload).is_some());

        payload.reprocess_description = None;
        assert!(ReprocessPayload::from_transition(claim_id, &payload).is_none());
    }

    #[test]
    fn test_business_days_until() {
        let payload = ReprocessPayload {
            claim_id: ClaimId::new(),
            reprocess_date: NaiveDate::from_ymd_opt(2024, 4, 5).unwrap(),
            description: "docs".to_string(),
        };
        // Friday to the following Friday
        assert_eq!(
            payload.business_days_until(NaiveDate::from_ymd_opt(2024, 4, 12).unwrap()),
            5
        );
    }
}
