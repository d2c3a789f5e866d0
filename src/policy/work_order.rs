//! Work order permission policy.

use crate::context::SessionSnapshot;
use serde::{Deserialize, Serialize};

/// Minimal view of a work order for permission evaluation.
///
/// The policy only ever consults the owning-team binding; callers with a
/// richer work-order type construct this view from it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkOrderRef {
    /// Work order ID.
    pub id: String,

    /// The team this work order is assigned to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
}

impl WorkOrderRef {
    /// Create a reference to a work order with no team binding.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            team_id: None,
        }
    }

    /// Bind the work order to a team.
    #[must_use]
    pub fn with_team(mut self, team_id: impl Into<String>) -> Self {
        self.team_id = Some(team_id.into());
        self
    }
}

/// Permissions over one work order.
///
/// Status changes are deliberately looser than edits: any member of the
/// owning team may move a work order through its statuses, while editing
/// the work order itself takes team-manager or org-admin rights.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkOrderPermissions {
    /// View the work order.
    pub can_view: bool,
    /// Create work orders.
    pub can_create: bool,
    /// Edit the work order.
    pub can_edit: bool,
    /// Delete the work order.
    pub can_delete: bool,
    /// Assign the work order to a user.
    pub can_assign: bool,
    /// Move the work order through its statuses.
    pub can_change_status: bool,
    /// Add notes to the work order.
    pub can_add_notes: bool,
    /// Attach images to the work order.
    pub can_add_images: bool,
}

impl WorkOrderPermissions {
    /// Evaluate permissions for the given work order, or class-level
    /// defaults when no work order is in hand (`None`).
    #[must_use]
    pub fn for_instance(snapshot: &SessionSnapshot, work_order: Option<&WorkOrderRef>) -> Self {
        if snapshot.organization.is_none() {
            return Self::denied();
        }

        let team_id = work_order.and_then(|wo| wo.team_id.as_deref());
        let team_member = team_id.is_some_and(|t| snapshot.is_team_member(t));
        let team_manager = team_id.is_some_and(|t| snapshot.is_team_manager(t));

        Self {
            can_view: snapshot.is_org_member() || team_member,
            can_create: snapshot.is_org_member(),
            can_edit: snapshot.is_org_admin() || team_manager,
            can_delete: snapshot.is_org_admin(),
            can_assign: snapshot.is_org_admin() || team_manager,
            can_change_status: snapshot.is_org_admin() || team_member,
            can_add_notes: snapshot.is_org_member() || team_member,
            can_add_images: snapshot.is_org_member() || team_member,
        }
    }

    /// All flags false.
    #[must_use]
    pub fn denied() -> Self {
        Self::default()
    }
}

/// Aggregate work order capabilities, with no specific instance in hand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkOrderClassPermissions {
    /// View the full work order list. Admin-tier, unlike equipment's
    /// member-tier `can_view_all`.
    pub can_view_all: bool,
    /// Create work orders anywhere in the organization.
    pub can_create_any: bool,
    /// Assign any work order.
    pub can_assign_any: bool,
}

impl WorkOrderClassPermissions {
    /// Evaluate class-level work order capabilities.
    #[must_use]
    pub fn for_class(snapshot: &SessionSnapshot) -> Self {
        Self {
            can_view_all: snapshot.is_org_admin(),
            can_create_any: snapshot.is_org_member(),
            can_assign_any: snapshot.is_org_admin(),
        }
    }
}

/// Field-level permissions over one work order.
///
/// Recomputed from the team relationships directly: structural fields
/// (priority, assignment) take manager rights, while progress fields (due
/// date, description, status, notes, images) are open to any member of the
/// owning team.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkOrderDetailedPermissions {
    /// Edit the work order at all.
    pub can_edit: bool,
    /// Change priority.
    pub can_edit_priority: bool,
    /// Change assignment.
    pub can_edit_assignment: bool,
    /// Change the due date.
    pub can_edit_due_date: bool,
    /// Edit the description.
    pub can_edit_description: bool,
    /// Move the work order through its statuses.
    pub can_change_status: bool,
    /// Add notes.
    pub can_add_notes: bool,
    /// Attach images.
    pub can_add_images: bool,
}

impl WorkOrderDetailedPermissions {
    /// Evaluate field-level permissions for the given work order.
    #[must_use]
    pub fn for_work_order(snapshot: &SessionSnapshot, work_order: &WorkOrderRef) -> Self {
        if snapshot.organization.is_none() {
            return Self::denied();
        }

        let admin = snapshot.is_org_admin();
        let team_id = work_order.team_id.as_deref();
        let manager = team_id.is_some_and(|t| snapshot.is_team_manager(t));
        let member = team_id.is_some_and(|t| snapshot.is_team_member(t));

        let structural = admin || manager;
        let progress = admin || manager || member;

        Self {
            can_edit: structural,
            can_edit_priority: structural,
            can_edit_assignment: structural,
            can_edit_due_date: progress,
            can_edit_description: progress,
            can_change_status: progress,
            can_add_notes: progress,
            can_add_images: progress,
        }
    }

    /// All flags false.
    #[must_use]
    pub fn denied() -> Self {
        Self::default()
    }
}
