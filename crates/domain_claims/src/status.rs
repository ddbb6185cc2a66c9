//! Claim lifecycle states

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::{CoreError, Lifecycle};

/// Claim status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClaimStatus {
    /// Being captured by the back office
    Draft,
    /// Internal review before submission to the insurer
    Validation,
    /// Submitted to the insurer
    Submitted,
    /// Insurer asked for more information
    PendingInfo,
    /// Sent back to the client as not submittable
    Returned,
    /// Settled by the insurer
    Settled,
    /// Cancelled
    Cancelled,
}

impl ClaimStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ClaimStatus::Draft => "DRAFT",
            ClaimStatus::Validation => "VALIDATION",
            ClaimStatus::Submitted => "SUBMITTED",
            ClaimStatus::PendingInfo => "PENDING_INFO",
            ClaimStatus::Returned => "RETURNED",
            ClaimStatus::Settled => "SETTLED",
            ClaimStatus::Cancelled => "CANCELLED",
        }
    }
}

impl Lifecycle for ClaimStatus {
    const ALL: &'static [Self] = &[
        ClaimStatus::Draft,
        ClaimStatus::Validation,
        ClaimStatus::Submitted,
        ClaimStatus::PendingInfo,
        ClaimStatus::Returned,
        ClaimStatus::Settled,
        ClaimStatus::Cancelled,
    ];

    fn allowed_next(self) -> &'static [Self] {
        crate::lifecycle::lifecycle_entry(self).allowed_next
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClaimStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::unknown_variant("claim status", s))
    }
}
