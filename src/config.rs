//! Authorization configuration.

use crate::role::OrganizationRole;

/// Configuration for permission evaluation.
///
/// Most rules are fixed policy; the few that are expected to diverge by
/// deployment are configurable here.
///
/// # Example
///
/// ```rust
/// use maintrack_authz::{AuthzConfig, OrganizationRole};
///
/// // Restrict billing to owners only.
/// let config = AuthzConfig::new().billing_roles(vec![OrganizationRole::Owner]);
/// ```
#[derive(Clone, Debug)]
pub struct AuthzConfig {
    /// Roles allowed to view billing.
    ///
    /// Defaults to owner and admin. Kept as a separately named rule rather
    /// than reusing the admin tier so the role set can diverge without a
    /// policy change.
    pub billing_roles: Vec<OrganizationRole>,
}

impl Default for AuthzConfig {
    fn default() -> Self {
        Self {
            billing_roles: vec![OrganizationRole::Owner, OrganizationRole::Admin],
        }
    }
}

impl AuthzConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the roles allowed to view billing.
    #[must_use]
    pub fn billing_roles(mut self, roles: Vec<OrganizationRole>) -> Self {
        self.billing_roles = roles;
        self
    }
}
