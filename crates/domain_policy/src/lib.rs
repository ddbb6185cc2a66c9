//! Policy Lifecycle Domain
//!
//! The policy side of the workflow: a plain transition graph guarded by the
//! same permission tiers as claims.
//!
//! # Policy Lifecycle
//!
//! ```text
//! DRAFT -> ACTIVE <-> SUSPENDED
//!            |
//!            v
//!         EXPIRED            (any non-terminal) -> CANCELLED
//! ```

pub mod error;
pub mod lifecycle;
pub mod status;

pub use error::PolicyError;
pub use lifecycle::validate_transition;
pub use status::PolicyStatus;
