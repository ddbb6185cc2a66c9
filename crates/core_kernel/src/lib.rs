//! Core Kernel - Foundational types for the claims workflow
//!
//! This crate provides the building blocks shared by the workflow domains:
//! - Flat field records with typed values and emptiness semantics
//! - Roles and permission tiers
//! - The lifecycle abstraction implemented by every status enum
//! - Business-day arithmetic for derived durations

pub mod calendar;
pub mod error;
pub mod identifiers;
pub mod lifecycle;
pub mod record;
pub mod role;

pub use calendar::{business_days_between, is_business_day};
pub use error::{CoreError, RecordError};
pub use identifiers::{ClaimId, PartyId, PolicyId, ReprocessId};
pub use lifecycle::Lifecycle;
pub use record::{FieldKind, FieldName, FieldValue, Record};
pub use role::{PermissionTier, Role};
