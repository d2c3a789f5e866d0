//! maintrack-authz - role- and team-scoped permissions for multi-tenant
//! maintenance platforms.
//!
//! Derives fine-grained permission flags (view/create/edit/delete/assign/
//! change-status) over three entity kinds - equipment, work orders, teams -
//! plus organization-level capabilities, from a user's organization role and
//! team relationships.
//!
//! # Design
//!
//! - **Pure evaluation** - permissions are functions of an immutable
//!   [`SessionSnapshot`]; same inputs, same flags, no hidden state.
//! - **Fail-closed** - no active organization means every flag is false.
//! - **Trait-based provider seam** - implement [`SessionProvider`] for your
//!   session store; the engine never does I/O during evaluation.
//!
//! # Quick start
//!
//! ```rust
//! use maintrack_authz::{
//!     OrganizationContext, OrganizationRole, PermissionEngine, SessionSnapshot, WorkOrderRef,
//! };
//!
//! let snapshot = SessionSnapshot::new(OrganizationContext::new(
//!     "org_1",
//!     OrganizationRole::Member,
//! ))
//! .with_team("team_maintenance");
//!
//! let engine = PermissionEngine::new(snapshot);
//!
//! let wo = WorkOrderRef::new("wo_42").with_team("team_maintenance");
//! let perms = engine.work_order(Some(&wo));
//!
//! assert!(perms.can_view);
//! assert!(perms.can_change_status); // any team member may move statuses
//! assert!(!perms.can_edit); // editing takes manager or admin rights
//! ```
//!
//! # Features
//!
//! - `test-authz` - exports [`InMemorySessionProvider`] for downstream test
//!   suites.

mod config;
mod context;
mod engine;
mod error;
mod legacy;
mod policy;
mod provider;
mod role;


// Configuration exports
pub use config::AuthzConfig;

// Context exports
pub use context::{OrganizationContext, PermissionContext, SessionSnapshot};

// Engine exports
pub use engine::PermissionEngine;

// Error exports
pub use error::{AuthzError, Result};

// Legacy facade exports
pub use legacy::LegacyPermissionChecker;

// Policy exports
pub use policy::{
    EquipmentClassPermissions, EquipmentPermissions, OrganizationPermissions,
    TeamClassPermissions, TeamPermissions, WorkOrderClassPermissions,
    WorkOrderDetailedPermissions, WorkOrderPermissions, WorkOrderRef,
};

// Provider exports
pub use provider::SessionProvider;

// Role exports
pub use role::{OrganizationRole, ParseRoleError};

// Test exports
#[cfg(any(test, feature = "test-authz"))]
pub use test::InMemorySessionProvider;
