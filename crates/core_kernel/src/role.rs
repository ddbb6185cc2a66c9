//! Caller roles and permission tiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Role of the caller, resolved from the session before the engine runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    SuperAdmin,
    Admin,
    ClaimsManager,
    ClaimsAnalyst,
    ClientAdmin,
    ClientUser,
}

/// Permission tier required to edit an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PermissionTier {
    /// Back-office staff; may edit entities in non-terminal states
    Internal,
    /// Administrators; may also touch entities in terminal states
    Admin,
}

const INTERNAL_ROLES: &[Role] = &[
    Role::SuperAdmin,
    Role::Admin,
    Role::ClaimsManager,
    Role::ClaimsAnalyst,
];

const ADMIN_ROLES: &[Role] = &[Role::SuperAdmin, Role::Admin];

impl PermissionTier {
    /// Roles belonging to this tier
    pub fn roles(self) -> &'static [Role] {
        match self {
            PermissionTier::Internal => INTERNAL_ROLES,
            PermissionTier::Admin => ADMIN_ROLES,
        }
    }

    pub fn includes(self, role: Role) -> bool {
        self.roles().contains(&role)
    }
}

impl Role {
    pub const ALL: &'static [Role] = &[
        Role::SuperAdmin,
        Role::Admin,
        Role::ClaimsManager,
        Role::ClaimsAnalyst,
        Role::ClientAdmin,
        Role::ClientUser,
    ];

    pub fn is_internal(self) -> bool {
        PermissionTier::Internal.includes(self)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::SuperAdmin => "SUPER_ADMIN",
            Role::Admin => "ADMIN",
            Role::ClaimsManager => "CLAIMS_MANAGER",
            Role::ClaimsAnalyst => "CLAIMS_ANALYST",
            Role::ClientAdmin => "CLIENT_ADMIN",
            Role::ClientUser => "CLIENT_USER",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .iter()
            .copied()
            .find(|r| r.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::unknown_variant("role", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_tier_is_subset_of_internal() {
        for role in PermissionTier::Admin.roles() {
            assert!(role.is_internal(), "{role} is admin but not internal");
        }
    }

    #[test]
    fn test_client_roles_have_no_tier() {
        assert!(!Role::ClientAdmin.is_internal());
        assert!(!Role::ClientUser.is_internal());
    }

    #[test]
    fn test_parse_role() {
        assert_eq!("claims_manager".parse::<Role>().unwrap(), Role::ClaimsManager);
        assert!("auditor".parse::<Role>().is_err());
    }
}
