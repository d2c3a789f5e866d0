//! Permission engine.
//!
//! Binds a [`SessionSnapshot`] and an [`AuthzConfig`] and exposes the full
//! capability surface: per-entity instance and class permissions plus the
//! utility predicates.

use crate::config::AuthzConfig;
use crate::context::{PermissionContext, SessionSnapshot};
use crate::error::Result;
use crate::policy::{
    EquipmentClassPermissions, EquipmentPermissions, OrganizationPermissions,
    TeamClassPermissions, TeamPermissions, WorkOrderClassPermissions,
    WorkOrderDetailedPermissions, WorkOrderPermissions, WorkOrderRef,
};
use crate::provider::SessionProvider;
use crate::role::OrganizationRole;
use tracing::instrument;

/// Evaluates permissions against one session snapshot.
///
/// Evaluation is pure and synchronous: the engine holds an immutable
/// snapshot, and every method recomputes its result from it. Build a fresh
/// engine per request (or per render) so staleness is bounded by the
/// caller's session refresh.
///
/// # Example
///
/// ```rust
/// use maintrack_authz::{
///     OrganizationContext, OrganizationRole, PermissionEngine, SessionSnapshot, WorkOrderRef,
/// };
///
/// let snapshot = SessionSnapshot::new(OrganizationContext::new(
///     "org_1",
///     OrganizationRole::Member,
/// ))
/// .with_team("team_a");
///
/// let engine = PermissionEngine::new(snapshot);
/// let wo = WorkOrderRef::new("wo_1").with_team("team_a");
///
/// let perms = engine.work_order(Some(&wo));
/// assert!(perms.can_view);
/// assert!(perms.can_change_status);
/// assert!(!perms.can_edit);
/// ```
#[derive(Clone, Debug)]
pub struct PermissionEngine {
    snapshot: SessionSnapshot,
    config: AuthzConfig,
}

impl PermissionEngine {
    /// Create an engine over a snapshot with the default configuration.
    #[must_use]
    pub fn new(snapshot: SessionSnapshot) -> Self {
        Self::with_config(snapshot, AuthzConfig::default())
    }

    /// Create an engine over a snapshot with a custom configuration.
    #[must_use]
    pub fn with_config(snapshot: SessionSnapshot, config: AuthzConfig) -> Self {
        Self { snapshot, config }
    }

    /// Load the user's session from a provider and build an engine over it.
    #[instrument(skip(provider))]
    pub async fn load<P: SessionProvider>(provider: &P, user_id: &str) -> Result<Self> {
        let snapshot = provider.load_snapshot(user_id).await?;
        Ok(Self::new(snapshot))
    }

    /// The snapshot this engine evaluates against.
    #[must_use]
    pub fn snapshot(&self) -> &SessionSnapshot {
        &self.snapshot
    }

    /// The permission context, or `None` when no organization is active.
    #[must_use]
    pub fn context(&self) -> Option<PermissionContext<'_>> {
        self.snapshot.context()
    }

    // === Utility predicates ===

    /// True iff the user's role in the active organization is one of `roles`.
    #[must_use]
    pub fn has_role(&self, roles: &[OrganizationRole]) -> bool {
        self.snapshot.has_role(roles)
    }

    /// Owner or admin of the active organization.
    #[must_use]
    pub fn is_org_admin(&self) -> bool {
        self.snapshot.is_org_admin()
    }

    /// At-least-member tier of the active organization.
    #[must_use]
    pub fn is_org_member(&self) -> bool {
        self.snapshot.is_org_member()
    }

    /// True iff the user belongs to the given team.
    #[must_use]
    pub fn is_team_member(&self, team_id: &str) -> bool {
        self.snapshot.is_team_member(team_id)
    }

    /// True iff the user manages the given team.
    #[must_use]
    pub fn is_team_manager(&self, team_id: &str) -> bool {
        self.snapshot.is_team_manager(team_id)
    }

    // === Equipment ===

    /// Permissions for equipment with the given owning-team binding.
    #[must_use]
    pub fn equipment(&self, team_id: Option<&str>) -> EquipmentPermissions {
        EquipmentPermissions::for_instance(&self.snapshot, team_id)
    }

    /// Aggregate equipment capabilities.
    #[must_use]
    pub fn equipment_class(&self) -> EquipmentClassPermissions {
        EquipmentClassPermissions::for_class(&self.snapshot)
    }

    // === Work orders ===

    /// Permissions for the given work order (`None` for the no-instance
    /// defaults).
    #[must_use]
    pub fn work_order(&self, work_order: Option<&WorkOrderRef>) -> WorkOrderPermissions {
        WorkOrderPermissions::for_instance(&self.snapshot, work_order)
    }

    /// Field-level permissions for the given work order.
    #[must_use]
    pub fn work_order_detailed(&self, work_order: &WorkOrderRef) -> WorkOrderDetailedPermissions {
        WorkOrderDetailedPermissions::for_work_order(&self.snapshot, work_order)
    }

    /// Aggregate work order capabilities.
    #[must_use]
    pub fn work_order_class(&self) -> WorkOrderClassPermissions {
        WorkOrderClassPermissions::for_class(&self.snapshot)
    }

    // === Teams ===

    /// Permissions for the given team.
    #[must_use]
    pub fn team(&self, team_id: Option<&str>) -> TeamPermissions {
        TeamPermissions::for_instance(&self.snapshot, team_id)
    }

    /// Aggregate team capabilities.
    #[must_use]
    pub fn team_class(&self) -> TeamClassPermissions {
        TeamClassPermissions::for_class(&self.snapshot)
    }

    // === Organization ===

    /// Organization-level capabilities.
    #[must_use]
    pub fn organization(&self) -> OrganizationPermissions {
        OrganizationPermissions::for_context(&self.snapshot, &self.config)
    }
}
