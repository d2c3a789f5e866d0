//! Session snapshots and permission context.
//!
//! A [`SessionSnapshot`] is the immutable input to every permission
//! evaluation: the active organization (if any), the teams the user belongs
//! to, and the teams the user manages. Callers rebuild it from their session
//! data on each evaluation; nothing here is cached or mutated in place.

use crate::role::OrganizationRole;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The organization a session is currently scoped to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationContext {
    /// Organization ID.
    pub id: String,

    /// The user's role within this organization.
    pub user_role: OrganizationRole,

    /// The user's ID, when the caller has it at hand.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl OrganizationContext {
    /// Create a new organization context.
    pub fn new(id: impl Into<String>, user_role: OrganizationRole) -> Self {
        Self {
            id: id.into(),
            user_role,
            user_id: None,
        }
    }

    /// Attach the user ID.
    #[must_use]
    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }
}

/// Immutable view of a user's session, consumed by permission evaluation.
///
/// When `organization` is `None` (no organization selected), every derived
/// permission is `false` - the fail-closed default.
///
/// # Example
///
/// ```rust
/// use maintrack_authz::{OrganizationContext, OrganizationRole, SessionSnapshot};
///
/// let snapshot = SessionSnapshot::new(OrganizationContext::new(
///     "org_1",
///     OrganizationRole::Member,
/// ))
/// .with_team("team_a")
/// .with_managed_team("team_b");
///
/// assert!(snapshot.is_org_member());
/// assert!(snapshot.is_team_member("team_a"));
/// assert!(snapshot.is_team_manager("team_b"));
/// assert!(!snapshot.is_team_manager("team_a"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// The currently selected organization, if any.
    pub organization: Option<OrganizationContext>,

    /// IDs of teams the user belongs to.
    pub team_ids: HashSet<String>,

    /// IDs of teams the user manages. Managing a team implies membership.
    pub managed_team_ids: HashSet<String>,
}

impl SessionSnapshot {
    /// Snapshot scoped to an organization, with no team relationships yet.
    #[must_use]
    pub fn new(organization: OrganizationContext) -> Self {
        Self {
            organization: Some(organization),
            team_ids: HashSet::new(),
            managed_team_ids: HashSet::new(),
        }
    }

    /// Snapshot with no active organization. Denies everything.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Add a team the user belongs to.
    #[must_use]
    pub fn with_team(mut self, team_id: impl Into<String>) -> Self {
        self.team_ids.insert(team_id.into());
        self
    }

    /// Add a team the user manages.
    #[must_use]
    pub fn with_managed_team(mut self, team_id: impl Into<String>) -> Self {
        self.managed_team_ids.insert(team_id.into());
        self
    }

    /// The permission context derived from this snapshot, or `None` when no
    /// organization is active.
    #[must_use]
    pub fn context(&self) -> Option<PermissionContext<'_>> {
        self.organization.as_ref().map(|org| PermissionContext {
            organization_id: &org.id,
            user_role: org.user_role,
            user_id: org.user_id.as_deref(),
            team_ids: &self.team_ids,
        })
    }

    /// True iff an organization is active and the user's role is one of
    /// `roles`. False with no active organization.
    #[must_use]
    pub fn has_role(&self, roles: &[OrganizationRole]) -> bool {
        self.organization
            .as_ref()
            .is_some_and(|org| roles.contains(&org.user_role))
    }

    /// Owner or admin of the active organization.
    #[must_use]
    pub fn is_org_admin(&self) -> bool {
        self.has_role(&OrganizationRole::ADMIN_TIER)
    }

    /// At-least-member tier of the active organization (includes admins and
    /// owners).
    #[must_use]
    pub fn is_org_member(&self) -> bool {
        self.has_role(&OrganizationRole::MEMBER_TIER)
    }

    /// True iff the user belongs to the given team. Managers count as
    /// members.
    #[must_use]
    pub fn is_team_member(&self, team_id: &str) -> bool {
        self.team_ids.contains(team_id) || self.managed_team_ids.contains(team_id)
    }

    /// True iff the user has manager rights over the given team,
    /// independent of org-wide role.
    #[must_use]
    pub fn is_team_manager(&self, team_id: &str) -> bool {
        self.managed_team_ids.contains(team_id)
    }
}

/// Borrowed view of the evaluation inputs for the active organization.
///
/// Derived fresh from a [`SessionSnapshot`] on demand; never persisted.
#[derive(Clone, Copy, Debug)]
pub struct PermissionContext<'a> {
    /// The active organization's ID.
    pub organization_id: &'a str,

    /// The user's role in the active organization.
    pub user_role: OrganizationRole,

    /// The user's ID, if known.
    pub user_id: Option<&'a str>,

    /// Teams the user belongs to.
    pub team_ids: &'a HashSet<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member_snapshot() -> SessionSnapshot {
        SessionSnapshot::new(OrganizationContext::new("org_1", OrganizationRole::Member))
            .with_team("team_a")
    }

    #[test]
    fn test_has_role_requires_active_organization() {
        let snapshot = SessionSnapshot::anonymous();
        assert!(!snapshot.has_role(&OrganizationRole::ALL));
        assert!(!snapshot.is_org_admin());
        assert!(!snapshot.is_org_member());
    }

    #[test]
    fn test_role_predicates() {
        for role in OrganizationRole::ALL {
            let snapshot = SessionSnapshot::new(OrganizationContext::new("org_1", role));
            assert_eq!(snapshot.is_org_admin(), role.is_admin_tier());
            assert_eq!(snapshot.is_org_member(), role.is_member_tier());
        }
    }

    #[test]
    fn test_org_member_superset_of_org_admin() {
        for role in OrganizationRole::ALL {
            let snapshot = SessionSnapshot::new(OrganizationContext::new("org_1", role));
            if snapshot.is_org_admin() {
                assert!(snapshot.is_org_member());
            }
        }
    }

    #[test]
    fn test_team_membership() {
        let snapshot = member_snapshot();
        assert!(snapshot.is_team_member("team_a"));
        assert!(!snapshot.is_team_member("team_b"));
        assert!(!snapshot.is_team_manager("team_a"));
    }

    #[test]
    fn test_managers_are_members() {
        let snapshot = SessionSnapshot::new(OrganizationContext::new(
            "org_1",
            OrganizationRole::Member,
        ))
        .with_managed_team("team_m");

        assert!(snapshot.is_team_manager("team_m"));
        assert!(snapshot.is_team_member("team_m"));
    }

    #[test]
    fn test_context_derivation() {
        let snapshot = member_snapshot();
        let ctx = snapshot.context().unwrap();
        assert_eq!(ctx.organization_id, "org_1");
        assert_eq!(ctx.user_role, OrganizationRole::Member);
        assert!(ctx.team_ids.contains("team_a"));

        assert!(SessionSnapshot::anonymous().context().is_none());
    }

    #[test]
    fn test_snapshot_serialization() {
        let snapshot = member_snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let parsed: SessionSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, snapshot);
    }
}
