//! Backward-compatible flat permission facade.
//!
//! Older call sites query permissions through flat method names instead of
//! the per-entity permission sets. This adapter re-exposes the engine's
//! decisions under those names. No new logic lives here.

use crate::engine::PermissionEngine;
use crate::policy::WorkOrderRef;

/// Flat-method adapter over [`PermissionEngine`].
///
/// # Example
///
/// ```rust
/// use maintrack_authz::{
///     LegacyPermissionChecker, OrganizationContext, OrganizationRole, PermissionEngine,
///     SessionSnapshot,
/// };
///
/// let engine = PermissionEngine::new(SessionSnapshot::new(OrganizationContext::new(
///     "org_1",
///     OrganizationRole::Admin,
/// )));
/// let checker = LegacyPermissionChecker::new(engine);
///
/// assert!(checker.can_manage_organization());
/// assert!(checker.can_edit_equipment(None));
/// ```
#[derive(Clone, Debug)]
pub struct LegacyPermissionChecker {
    engine: PermissionEngine,
}

impl LegacyPermissionChecker {
    /// Wrap an engine.
    #[must_use]
    pub fn new(engine: PermissionEngine) -> Self {
        Self { engine }
    }

    /// The wrapped engine.
    #[must_use]
    pub fn engine(&self) -> &PermissionEngine {
        &self.engine
    }

    // === Teams ===

    /// Edit rights over the given team.
    #[must_use]
    pub fn can_manage_team(&self, team_id: &str) -> bool {
        self.engine.team(Some(team_id)).can_edit
    }

    /// View rights over the given team.
    #[must_use]
    pub fn can_view_team(&self, team_id: &str) -> bool {
        self.engine.team(Some(team_id)).can_view
    }

    /// Create teams in the organization.
    #[must_use]
    pub fn can_create_teams(&self) -> bool {
        self.engine.organization().can_create_teams
    }

    // === Equipment ===

    /// View equipment bound to the given team (`None` = unbound).
    #[must_use]
    pub fn can_view_equipment(&self, team_id: Option<&str>) -> bool {
        self.engine.equipment(team_id).can_view
    }

    /// Edit equipment bound to the given team.
    #[must_use]
    pub fn can_edit_equipment(&self, team_id: Option<&str>) -> bool {
        self.engine.equipment(team_id).can_edit
    }

    /// Create equipment.
    #[must_use]
    pub fn can_create_equipment(&self) -> bool {
        self.engine.equipment_class().can_create_any
    }

    /// Delete equipment.
    #[must_use]
    pub fn can_delete_equipment(&self) -> bool {
        self.engine.equipment(None).can_delete
    }

    // === Work orders ===

    /// View a work order bound to the given team.
    #[must_use]
    pub fn can_view_work_order(&self, team_id: Option<&str>) -> bool {
        self.engine.work_order(self.work_order_ref(team_id).as_ref()).can_view
    }

    /// Edit a work order bound to the given team.
    #[must_use]
    pub fn can_edit_work_order(&self, team_id: Option<&str>) -> bool {
        self.engine.work_order(self.work_order_ref(team_id).as_ref()).can_edit
    }

    /// Assign a work order bound to the given team.
    #[must_use]
    pub fn can_assign_work_order(&self, team_id: Option<&str>) -> bool {
        self.engine.work_order(self.work_order_ref(team_id).as_ref()).can_assign
    }

    /// Change status of a work order bound to the given team.
    #[must_use]
    pub fn can_change_work_order_status(&self, team_id: Option<&str>) -> bool {
        self.engine
            .work_order(self.work_order_ref(team_id).as_ref())
            .can_change_status
    }

    /// Create work orders.
    #[must_use]
    pub fn can_create_work_orders(&self) -> bool {
        self.engine.work_order_class().can_create_any
    }

    // === Organization ===

    /// Manage the organization.
    #[must_use]
    pub fn can_manage_organization(&self) -> bool {
        self.engine.organization().can_manage
    }

    /// Invite members.
    #[must_use]
    pub fn can_invite_members(&self) -> bool {
        self.engine.organization().can_invite_members
    }

    /// View billing.
    #[must_use]
    pub fn can_view_billing(&self) -> bool {
        self.engine.organization().can_view_billing
    }

    // Old call sites only ever passed a team ID, so the synthesized
    // reference carries a placeholder work order ID.
    fn work_order_ref(&self, team_id: Option<&str>) -> Option<WorkOrderRef> {
        team_id.map(|t| WorkOrderRef::new("legacy").with_team(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{OrganizationContext, SessionSnapshot};
    use crate::role::OrganizationRole;

    fn checker(snapshot: SessionSnapshot) -> LegacyPermissionChecker {
        LegacyPermissionChecker::new(PermissionEngine::new(snapshot))
    }

    #[test]
    fn test_facade_matches_engine_decisions() {
        let snapshot = SessionSnapshot::new(OrganizationContext::new(
            "org_1",
            OrganizationRole::Member,
        ))
        .with_team("team_a");
        let checker = checker(snapshot);

        assert!(checker.can_view_equipment(Some("team_a")));
        assert!(!checker.can_edit_equipment(Some("team_a")));
        assert!(checker.can_view_work_order(Some("team_a")));
        assert!(checker.can_change_work_order_status(Some("team_a")));
        assert!(!checker.can_assign_work_order(Some("team_a")));
        assert!(checker.can_create_work_orders());
        assert!(!checker.can_create_equipment());
        assert!(!checker.can_manage_organization());
    }

    #[test]
    fn test_facade_manager_paths() {
        let snapshot = SessionSnapshot::new(OrganizationContext::new(
            "org_1",
            OrganizationRole::Member,
        ))
        .with_managed_team("team_a");
        let checker = checker(snapshot);

        assert!(checker.can_manage_team("team_a"));
        assert!(!checker.can_manage_team("team_b"));
        assert!(checker.can_edit_work_order(Some("team_a")));
        assert!(checker.can_assign_work_order(Some("team_a")));
    }

    #[test]
    fn test_facade_denies_without_organization() {
        let checker = checker(SessionSnapshot::anonymous());
        assert!(!checker.can_view_team("team_a"));
        assert!(!checker.can_view_equipment(None));
        assert!(!checker.can_create_work_orders());
        assert!(!checker.can_view_billing());
    }
}
