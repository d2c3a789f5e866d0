//! Equipment permission policy.

use crate::context::SessionSnapshot;
use serde::{Deserialize, Serialize};

/// Permissions over one piece of equipment.
///
/// Equipment optionally belongs to one team; team members can view it and
/// team managers can edit it without being org admins.
///
/// # Example
///
/// ```rust
/// use maintrack_authz::{
///     EquipmentPermissions, OrganizationContext, OrganizationRole, SessionSnapshot,
/// };
///
/// let snapshot = SessionSnapshot::new(OrganizationContext::new(
///     "org_1",
///     OrganizationRole::Viewer,
/// ))
/// .with_managed_team("team_a");
///
/// let perms = EquipmentPermissions::for_instance(&snapshot, Some("team_a"));
/// assert!(perms.can_view);
/// assert!(perms.can_edit);
/// assert!(!perms.can_delete);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentPermissions {
    /// View the equipment.
    pub can_view: bool,
    /// Create equipment.
    pub can_create: bool,
    /// Edit the equipment.
    pub can_edit: bool,
    /// Delete the equipment.
    pub can_delete: bool,
}

impl EquipmentPermissions {
    /// Evaluate permissions for equipment with the given owning-team
    /// binding (`None` when the equipment is not bound to a team).
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

/// Aggregate equipment capabilities, with no specific instance in hand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentClassPermissions {
    /// View the full equipment list.
    pub can_view_all: bool,
    /// Create equipment anywhere in the organization.
    pub can_create_any: bool,
}

impl EquipmentClassPermissions {
    /// Evaluate class-level equipment capabilities.
    #[must_use]
    pub fn for_class(snapshot: &SessionSnapshot) -> Self {
        Self {
            can_view_all: snapshot.is_org_member(),
            can_create_any: snapshot.is_org_admin(),
        }
    }
}
