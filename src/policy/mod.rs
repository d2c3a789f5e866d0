//! Per-entity permission policies.
//!
//! Each entity kind gets two explicit evaluation paths:
//! - **instance-level**: permissions for one concrete entity, consulting its
//!   owning-team binding (`for_instance` constructors);
//! - **class-level**: aggregate capabilities over the whole entity kind
//!   (`for_class` constructors), used before any instance exists.
//!
//! All evaluation is pure over a [`SessionSnapshot`](crate::SessionSnapshot):
//! same inputs, same flags. With no active organization every flag is false.

mod equipment;
mod organization;
mod team;
mod work_order;

pub use equipment::{EquipmentClassPermissions, EquipmentPermissions};
pub use organization::OrganizationPermissions;
pub use team::{TeamClassPermissions, TeamPermissions};
pub use work_order::{
    WorkOrderClassPermissions, WorkOrderDetailedPermissions, WorkOrderPermissions, WorkOrderRef,
};
