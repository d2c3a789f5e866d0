//! Organization roles and role-tier predicates.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role a user holds within one organization.
///
/// Multi-tenant: a user may hold different roles in different organizations,
/// but permission evaluation only ever consults the role in the currently
/// active organization.
///
/// # Example
///
/// ```rust
/// use maintrack_authz::OrganizationRole;
///
/// let role = OrganizationRole::Admin;
/// assert!(role.is_admin_tier());
/// assert!(role.is_member_tier());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrganizationRole {
    /// Organization owner with full permissions.
    Owner,
    /// Administrator with management permissions.
    Admin,
    /// Regular member with day-to-day permissions.
    #[default]
    Member,
    /// Read-only participant.
    Viewer,
}

impl OrganizationRole {
    /// All roles, highest tier first.
    pub const ALL: [Self; 4] = [Self::Owner, Self::Admin, Self::Member, Self::Viewer];

    /// Roles counted as organization administrators.
    pub const ADMIN_TIER: [Self; 2] = [Self::Owner, Self::Admin];

    /// Roles counted as at-least-member tier. Includes admins and owners:
    /// this tests "member or better", not "exactly member".
    pub const MEMBER_TIER: [Self; 3] = [Self::Owner, Self::Admin, Self::Member];

    /// Get the string representation of the role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Admin => "admin",
            Self::Member => "member",
            Self::Viewer => "viewer",
        }
    }

    /// Get the hierarchy level (higher = more permissions).
    #[must_use]
    pub fn hierarchy_level(&self) -> u8 {
        match self {
            Self::Owner => 4,
            Self::Admin => 3,
            Self::Member => 2,
            Self::Viewer => 1,
        }
    }

    /// Check if this role has at least the permissions of another role.
    #[must_use]
    pub fn has_at_least(&self, other: &Self) -> bool {
        self.hierarchy_level() >= other.hierarchy_level()
    }

    /// Owner or admin.
    #[must_use]
    pub fn is_admin_tier(&self) -> bool {
        matches!(self, Self::Owner | Self::Admin)
    }

    /// Owner, admin, or member (superset of the admin tier).
    #[must_use]
    pub fn is_member_tier(&self) -> bool {
        matches!(self, Self::Owner | Self::Admin | Self::Member)
    }
}

/// Error returned when parsing a role string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRoleError {
    invalid_value: String,
}

impl fmt::Display for ParseRoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid role: '{}' (expected: owner, admin, member, or viewer)",
            self.invalid_value
        )
    }
}

impl std::error::Error for ParseRoleError {}

impl FromStr for OrganizationRole {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "owner" => Ok(Self::Owner),
            "admin" => Ok(Self::Admin),
            "member" => Ok(Self::Member),
            "viewer" => Ok(Self::Viewer),
            _ => Err(ParseRoleError {
                invalid_value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for OrganizationRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_tiers() {
        assert!(OrganizationRole::Owner.is_admin_tier());
        assert!(OrganizationRole::Admin.is_admin_tier());
        assert!(!OrganizationRole::Member.is_admin_tier());
        assert!(!OrganizationRole::Viewer.is_admin_tier());

        assert!(OrganizationRole::Owner.is_member_tier());
        assert!(OrganizationRole::Admin.is_member_tier());
        assert!(OrganizationRole::Member.is_member_tier());
        assert!(!OrganizationRole::Viewer.is_member_tier());
    }

    #[test]
    fn test_member_tier_includes_admin_tier() {
        // "at least member" must be a superset of "admin"
        for role in OrganizationRole::ALL {
            if role.is_admin_tier() {
                assert!(role.is_member_tier(), "{role} is admin tier but not member tier");
            }
        }
    }

    #[test]
    fn test_role_hierarchy() {
        let owner = OrganizationRole::Owner;
        let admin = OrganizationRole::Admin;
        let member = OrganizationRole::Member;
        let viewer = OrganizationRole::Viewer;

        assert!(owner.has_at_least(&admin));
        assert!(admin.has_at_least(&member));
        assert!(member.has_at_least(&viewer));
        assert!(!viewer.has_at_least(&member));
        assert!(!member.has_at_least(&admin));
        assert!(!admin.has_at_least(&owner));
    }

    #[test]
    fn test_role_parsing() {
        assert_eq!("owner".parse::<OrganizationRole>().unwrap(), OrganizationRole::Owner);
        assert_eq!("ADMIN".parse::<OrganizationRole>().unwrap(), OrganizationRole::Admin);
        assert_eq!("Viewer".parse::<OrganizationRole>().unwrap(), OrganizationRole::Viewer);
        assert!("manager".parse::<OrganizationRole>().is_err());
    }

    #[test]
    fn test_role_display() {
        assert_eq!(OrganizationRole::Owner.to_string(), "owner");
        assert_eq!(OrganizationRole::Viewer.to_string(), "viewer");
    }

    #[test]
    fn test_role_serialization() {
        let role = OrganizationRole::Viewer;
        let json = serde_json::to_string(&role).unwrap();
        assert_eq!(json, "\"viewer\"");

        let parsed: OrganizationRole = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, role);
    }
}
