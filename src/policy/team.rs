//! Team permission policy.

use crate::context::SessionSnapshot;
use serde::{Deserialize, Serialize};

/// Permissions over one team. Teams own themselves: the "binding" checked
/// here is the team's own ID.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamPermissions {
    /// View the team.
    pub can_view: bool,
    /// Create teams.
    pub can_create: bool,
    /// Edit the team.
    pub can_edit: bool,
    /// Delete the team.
    pub can_delete: bool,
}

impl TeamPermissions {
    /// Evaluate permissions for the given team (`None` for a class-level
    /// check with no team in hand).
    #[must_use]
    pub fn for_instance(snapshot: &SessionSnapshot, team_id: Option<&str>) -> Self {
        if snapshot.organization.is_none() {
            return Self::denied();
        }

        let team_member = team_id.is_some_and(|t| snapshot.is_team_member(t));
        let team_manager = team_id.is_some_and(|t| snapshot.is_team_manager(t));

        Self {
            can_view: snapshot.is_org_member() || team_member,
            can_create: snapshot.is_org_admin(),
            can_edit: snapshot.is_org_admin() || team_manager,
            can_delete: snapshot.is_org_admin(),
        }
    }

    /// All flags false.
    #[must_use]
    pub fn denied() -> Self {
        Self::default()
    }
}

/// Aggregate team capabilities. All admin-tier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamClassPermissions {
    /// View the full team list.
    pub can_view_all: bool,
    /// Create teams.
    pub can_create_any: bool,
    /// Manage any team.
    pub can_manage_any: bool,
}

impl TeamClassPermissions {
    /// Evaluate class-level team capabilities.
    #[must_use]
    pub fn for_class(snapshot: &SessionSnapshot) -> Self {
        let admin = snapshot.is_org_admin();
        Self {
            can_view_all: admin,
            can_create_any: admin,
            can_manage_any: admin,
        }
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
        let anon = SessionSnapshot::anonymous().with_managed_team("team_a");
        assert_eq!(
            TeamPermissions::for_instance(&anon, Some("team_a")),
            TeamPermissions::denied()
        );
    }

    #[test]
    fn test_manager_edits_own_team_only() {
        let s = snapshot(OrganizationRole::Member).with_managed_team("team_a");

        assert!(TeamPermissions::for_instance(&s, Some("team_a")).can_edit);
        assert!(!TeamPermissions::for_instance(&s, Some("team_b")).can_edit);
        assert!(!TeamPermissions::for_instance(&s, None).can_edit);
    }

    #[test]
    fn test_member_views_but_cannot_manage() {
        let perms = TeamPermissions::for_instance(&snapshot(OrganizationRole::Member), Some("t"));
        assert!(perms.can_view);
        assert!(!perms.can_create);
        assert!(!perms.can_edit);
        assert!(!perms.can_delete);
    }

    #[test]
    fn test_admin_full_access() {
        let perms = TeamPermissions::for_instance(&snapshot(OrganizationRole::Owner), None);
        assert!(perms.can_view && perms.can_create && perms.can_edit && perms.can_delete);
    }

    #[test]
    fn test_class_level_all_admin_tier() {
        let member = TeamClassPermissions::for_class(&snapshot(OrganizationRole::Member));
        assert_eq!(member, TeamClassPermissions::default());

        let admin = TeamClassPermissions::for_class(&snapshot(OrganizationRole::Admin));
        assert!(admin.can_view_all && admin.can_create_any && admin.can_manage_any);
    }
}
