//! Policy lifecycle states

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::{CoreError, Lifecycle};

/// Policy status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PolicyStatus {
    /// Being set up, not yet in force
    Draft,
    /// In force
    Active,
    /// Temporarily not covering claims
    Suspended,
    /// Ran to the end of its term
    Expired,
    /// Cancelled
    Cancelled,
}

impl PolicyStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PolicyStatus::Draft => "DRAFT",
            PolicyStatus::Active => "ACTIVE",
            PolicyStatus::Suspended => "SUSPENDED",
            PolicyStatus::Expired => "EXPIRED",
            PolicyStatus::Cancelled => "CANCELLED",
        }
    }
}

impl Lifecycle for PolicyStatus {
    const ALL: &'static [Self] = &[
        PolicyStatus::Draft,
        PolicyStatus::Active,
        PolicyStatus::Suspended,
        PolicyStatus::Expired,
        PolicyStatus::Cancelled,
    ];

    fn allowed_next(self) -> &'static [Self] {
        use PolicyStatus::*;
        match self {
            Draft => &[Active, Cancelled],
            Active => &[Suspended, Expired, Cancelled],
            Suspended => &[Active, Cancelled],
            Expired | Cancelled => &[],
        }
    }
}

impl fmt::Display for PolicyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::unknown_variant("policy status", s))
    }
}
