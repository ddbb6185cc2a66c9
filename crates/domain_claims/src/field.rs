//! Claim fields and the named groups the lifecycle tables are built from

use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{FieldKind, FieldName};

/// A persisted attribute of a claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ClaimField {
    PolicyId,
    AffiliateId,
    PatientId,
    CareType,
    Diagnosis,
    Description,
    IncidentDate,
    AmountSubmitted,
    ClaimNumber,
    SubmittedDate,
    AmountApproved,
    AmountDenied,
    AmountUnprocessed,
    DeductibleApplied,
    CopayApplied,
    SettlementDate,
    SettlementNumber,
    SettlementNotes,
    BusinessDays,
}

impl FieldName for ClaimField {
    const ALL: &'static [Self] = &[
        ClaimField::PolicyId,
        ClaimField::AffiliateId,
        ClaimField::PatientId,
        ClaimField::CareType,
        ClaimField::Diagnosis,
        ClaimField::Description,
        ClaimField::IncidentDate,
        ClaimField::AmountSubmitted,
        ClaimField::ClaimNumber,
        ClaimField::SubmittedDate,
        ClaimField::AmountApproved,
        ClaimField::AmountDenied,
        ClaimField::AmountUnprocessed,
        ClaimField::DeductibleApplied,
        ClaimField::CopayApplied,
        ClaimField::SettlementDate,
        ClaimField::SettlementNumber,
        ClaimField::SettlementNotes,
        ClaimField::BusinessDays,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            ClaimField::PolicyId => "policyId",
            ClaimField::AffiliateId => "affiliateId",
            ClaimField::PatientId => "patientId",
            ClaimField::CareType => "careType",
            ClaimField::Diagnosis => "diagnosis",
            ClaimField::Description => "description",
            ClaimField::IncidentDate => "incidentDate",
            ClaimField::AmountSubmitted => "amountSubmitted",
            ClaimField::ClaimNumber => "claimNumber",
            ClaimField::SubmittedDate => "submittedDate",
            ClaimField::AmountApproved => "amountApproved",
            ClaimField::AmountDenied => "amountDenied",
            ClaimField::AmountUnprocessed => "amountUnprocessed",
            ClaimField::DeductibleApplied => "deductibleApplied",
            ClaimField::CopayApplied => "copayApplied",
            ClaimField::SettlementDate => "settlementDate",
            ClaimField::SettlementNumber => "settlementNumber",
            ClaimField::SettlementNotes => "settlementNotes",
            ClaimField::BusinessDays => "businessDays",
        }
    }

    fn kind(&self) -> FieldKind {
        use ClaimField::*;
        match self {
            PolicyId | AffiliateId | PatientId => FieldKind::Reference,
            IncidentDate | SubmittedDate | SettlementDate => FieldKind::Date,
            AmountSubmitted | AmountApproved | AmountDenied | AmountUnprocessed
            | DeductibleApplied | CopayApplied => FieldKind::Amount,
            BusinessDays => FieldKind::Count,
            CareType | Diagnosis | Description | ClaimNumber | SettlementNumber
            | SettlementNotes => FieldKind::Text,
        }
    }
}

impl fmt::Display for ClaimField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input that exists only to satisfy a transition; never persisted on the claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransitionField {
    CancellationReason,
    ReturnReason,
    PendingReason,
    ReprocessDate,
    ReprocessDescription,
}

impl TransitionField {
    pub const ALL: &'static [TransitionField] = &[
        TransitionField::CancellationReason,
        TransitionField::ReturnReason,
        TransitionField::PendingReason,
        TransitionField::ReprocessDate,
        TransitionField::ReprocessDescription,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TransitionField::CancellationReason => "cancellationReason",
            TransitionField::ReturnReason => "returnReason",
            TransitionField::PendingReason => "pendingReason",
            TransitionField::ReprocessDate => "reprocessDate",
            TransitionField::ReprocessDescription => "reprocessDescription",
        }
    }
}

/// A field a transition may require: persisted or transition-only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RequiredField {
    Claim(ClaimField),
    Transition(TransitionField),
}

impl RequiredField {
    pub fn as_str(self) -> &'static str {
        match self {
            RequiredField::Claim(f) => f.as_str(),
            RequiredField::Transition(f) => f.as_str(),
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ClaimField> for RequiredField {
    fn from(field: ClaimField) -> Self {
        RequiredField::Claim(field)
    }
}

impl From<TransitionField> for RequiredField {
    fn from(field: TransitionField) -> Self {
        RequiredField::Transition(field)
    }
}

/// A union of field groups, kept as references to the groups themselves
#[derive(Debug, Clone, Copy)]
pub struct FieldSet(pub &'static [&'static [ClaimField]]);

impl FieldSet {
    pub const EMPTY: FieldSet = FieldSet(&[]);

    pub fn contains(&self, field: ClaimField) -> bool {
        self.0.iter().any(|group| group.contains(&field))
    }

    /// Fields of the union in table order, without repeats
    pub fn fields(&self) -> Vec<ClaimField> {
        let mut out: Vec<ClaimField> = Vec::new();
        for field in self.0.iter().flat_map(|group| group.iter()) {
            if !out.contains(field) {
                out.push(*field);
            }
        }
        out
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|group| group.is_empty())
    }
}

/// Named field groups. The lifecycle tables reference these instead of
/// repeating field lists.
pub mod groups {
    use super::ClaimField::{self, *};

    /// Fields captured while drafting
    pub const DRAFT_FIELDS: &[ClaimField] = &[
        PolicyId,
        AffiliateId,
        PatientId,
        CareType,
        Diagnosis,
        Description,
        IncidentDate,
        AmountSubmitted,
    ];

    /// Draft fields every claim must carry once it leaves DRAFT
    pub const INTAKE_FIELDS: &[ClaimField] = &[
        PolicyId,
        AffiliateId,
        PatientId,
        CareType,
        Description,
        IncidentDate,
        AmountSubmitted,
    ];

    /// Added during internal validation
    pub const VALIDATION_EXTRA_FIELDS: &[ClaimField] = &[ClaimNumber, SubmittedDate];

    /// Recorded from the insurer's settlement
    pub const SETTLEMENT_FIELDS: &[ClaimField] = &[
        AmountApproved,
        AmountDenied,
        AmountUnprocessed,
        DeductibleApplied,
        CopayApplied,
        SettlementDate,
        SettlementNumber,
        SettlementNotes,
    ];

    /// Settlement fields that must be present to settle
    pub const SETTLEMENT_REQUIRED_FIELDS: &[ClaimField] = &[
        AmountApproved,
        AmountDenied,
        AmountUnprocessed,
        DeductibleApplied,
        CopayApplied,
        SettlementDate,
        SettlementNumber,
    ];

    /// What the insurer may ask to be corrected
    pub const PENDING_INFO_FIELDS: &[ClaimField] =
        &[Diagnosis, Description, IncidentDate, AmountSubmitted];

    /// Maintained by the caller, never edited directly
    pub const DERIVED_FIELDS: &[ClaimField] = &[BusinessDays];

    /// Amounts that must reconcile once all are present
    pub const RECONCILED_AMOUNT_FIELDS: &[ClaimField] = &[
        AmountApproved,
        AmountDenied,
        AmountUnprocessed,
        DeductibleApplied,
        CopayApplied,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_are_unique() {
        let mut names: Vec<_> = ClaimField::ALL.iter().map(|f| f.as_str()).collect();
        names.extend(TransitionField::ALL.iter().map(|f| f.as_str()));
        let count = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), count);
    }

    #[test]
    fn test_serde_name_matches_as_str() {
        for field in ClaimField::ALL {
            let json = serde_json::to_string(field).unwrap();
            assert_eq!(json, format!("\"{}\"", field.as_str()));
        }
        for field in TransitionField::ALL {
            let json = serde_json::to_string(field).unwrap();
            assert_eq!(json, format!("\"{}\"", field.as_str()));
        }
    }

    #[test]
    fn test_intake_is_subset_of_draft() {
        for field in groups::INTAKE_FIELDS {
            assert!(groups::DRAFT_FIELDS.contains(field));
        }
    }
}
