//! Pre-built Test Fixtures
//!
//! Claims in every lifecycle status, each satisfying that status's invariants
//! and the cross-field rules, so tests only spell out what they change.

use chrono::NaiveDate;
use core_kernel::{ClaimId, PartyId, PolicyId};
use domain_claims::{ClaimField, ClaimRecord, ClaimStatus};
use rust_decimal_macros::dec;

/// Fixture for dates used across claim fixtures
pub struct DateFixtures;

impl DateFixtures {
    /// Incident date (Mon, Mar 4 2024)
    pub fn incident() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 4).unwrap()
    }

    /// Submission to the insurer (Tue, Mar 5 2024)
    pub fn submitted() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
    }

    /// Insurer settlement (Fri, Mar 29 2024)
    pub fn settlement() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 29).unwrap()
    }

    /// Information re-supplied after a pending request (Mon, Mar 18 2024)
    pub fn reprocess() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 18).unwrap()
    }
}

/// Fixture for claims in each status
pub struct ClaimFixtures;

impl ClaimFixtures {
    /// A fresh draft with only its relations
    pub fn draft() -> ClaimRecord {
        ClaimRecord::new(ClaimId::new(), ClaimStatus::Draft)
            .with(ClaimField::PolicyId, *PolicyId::new().as_uuid())
            .with(ClaimField::AffiliateId, *PartyId::new().as_uuid())
    }

    /// A draft with every intake field filled
    pub fn complete_draft() -> ClaimRecord {
        Self::draft()
            .with(ClaimField::PatientId, *PartyId::new().as_uuid())
            .with(ClaimField::CareType, "OUTPATIENT")
            .with(ClaimField::Diagnosis, "J06.9")
            .with(ClaimField::Description, "Emergency room visit")
            .with(ClaimField::IncidentDate, DateFixtures::incident())
            .with(ClaimField::AmountSubmitted, dec!(100))
    }

    pub fn validation() -> ClaimRecord {
        Self::in_status(Self::complete_draft(), ClaimStatus::Validation)
    }

    /// Submitted, with claim number and submission date
    pub fn submitted() -> ClaimRecord {
        Self::in_status(Self::validation(), ClaimStatus::Submitted)
            .with(ClaimField::ClaimNumber, "INS-2024-0001")
            .with(ClaimField::SubmittedDate, DateFixtures::submitted())
    }

    pub fn pending_info() -> ClaimRecord {
        Self::in_status(Self::submitted(), ClaimStatus::PendingInfo)
    }

    /// Submitted with a full, reconciling settlement recorded
    pub fn ready_to_settle() -> ClaimRecord {
        Self::submitted()
            .with(ClaimField::AmountApproved, dec!(60))
            .with(ClaimField::AmountDenied, dec!(20))
            .with(ClaimField::AmountUnprocessed, dec!(10))
            .with(ClaimField::DeductibleApplied, dec!(5))
            .with(ClaimField::CopayApplied, dec!(5))
            .with(ClaimField::SettlementDate, DateFixtures::settlement())
            .with(ClaimField::SettlementNumber, "SET-88")
    }

    pub fn settled() -> ClaimRecord {
        Self::in_status(Self::ready_to_settle(), ClaimStatus::Settled)
    }

    pub fn returned() -> ClaimRecord {
        Self::in_status(Self::validation(), ClaimStatus::Returned)
    }

    pub fn cancelled() -> ClaimRecord {
        Self::in_status(Self::draft(), ClaimStatus::Cancelled)
    }

    /// A consistent claim for any status
    pub fn for_status(status: ClaimStatus) -> ClaimRecord {
        match status {
            ClaimStatus::Draft => Self::complete_draft(),
            ClaimStatus::Validation => Self::validation(),
            ClaimStatus::Submitted => Self::submitted(),
            ClaimStatus::PendingInfo => Self::pending_info(),
            ClaimStatus::Returned => Self::returned(),
            ClaimStatus::Settled => Self::settled(),
            ClaimStatus::Cancelled => Self::cancelled(),
        }
    }

    fn in_status(mut claim: ClaimRecord, status: ClaimStatus) -> ClaimRecord {
        claim.status = status;
        claim
    }
}
