//! Organization-level permission policy.

use crate::config::AuthzConfig;
use crate::context::SessionSnapshot;
use serde::{Deserialize, Serialize};

/// Organization-level capabilities.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationPermissions {
    /// Manage organization settings.
    pub can_manage: bool,
    /// Invite new members.
    pub can_invite_members: bool,
    /// Create teams.
    pub can_create_teams: bool,
    /// View billing. Governed by [`AuthzConfig::billing_roles`].
    pub can_view_billing: bool,
}

impl OrganizationPermissions {
    /// Evaluate organization-level capabilities.
    #[must_use]
    pub fn for_context(snapshot: &SessionSnapshot, config: &AuthzConfig) -> Self {
        let admin = snapshot.is_org_admin();
        Self {
            can_manage: admin,
            can_invite_members: admin,
            can_create_teams: admin,
            can_view_billing: snapshot.has_role(&config.billing_roles),
        }
    }

    /// All flags false.
    #[must_use]
    pub fn denied() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::OrganizationContext;
    use crate::role::OrganizationRole;

    fn snapshot(role: OrganizationRole) -> SessionSnapshot {
        SessionSnapshot::new(OrganizationContext::new("org_1", role))
    }

    #[test]
    fn test_no_organization_denies_all() {
        let perms =
            OrganizationPermissions::for_context(&SessionSnapshot::anonymous(), &AuthzConfig::new());
        assert_eq!(perms, OrganizationPermissions::denied());
    }

    #[test]
    fn test_admin_tier_manages() {
        let config = AuthzConfig::new();
        for role in [OrganizationRole::Owner, OrganizationRole::Admin] {
            let perms = OrganizationPermissions::for_context(&snapshot(role), &config);
            assert!(perms.can_manage);
            assert!(perms.can_invite_members);
            assert!(perms.can_create_teams);
            assert!(perms.can_view_billing);
        }
        for role in [OrganizationRole::Member, OrganizationRole::Viewer] {
            let perms = OrganizationPermissions::for_context(&snapshot(role), &config);
            assert_eq!(perms, OrganizationPermissions::denied());
        }
    }

    #[test]
    fn test_billing_roles_configurable() {
        let config = AuthzConfig::new().billing_roles(vec![OrganizationRole::Owner]);

        let owner = OrganizationPermissions::for_context(&snapshot(OrganizationRole::Owner), &config);
        assert!(owner.can_view_billing);

        let admin = OrganizationPermissions::for_context(&snapshot(OrganizationRole::Admin), &config);
        assert!(admin.can_manage);
        assert!(!admin.can_view_billing);
    }
}
