//! Session provider trait.
//!
//! The permission engine evaluates purely over a [`SessionSnapshot`]; this
//! trait is the seam to whatever actually knows the user's organization and
//! team relationships (a database, a session service, a JWT).

use crate::context::{OrganizationContext, SessionSnapshot};
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashSet;
use tracing::debug;

/// Source of organization and team relationship data for a user.
///
/// Implement this against your storage layer. The engine never calls it
/// during evaluation - snapshots are loaded up front and evaluated purely.
///
/// # Example
///
/// ```rust,ignore
/// use maintrack_authz::{OrganizationContext, SessionProvider};
/// use async_trait::async_trait;
///
/// struct DbSessionProvider { pool: DbPool }
///
/// #[async_trait]
/// impl SessionProvider for DbSessionProvider {
///     async fn current_organization(
///         &self,
///         user_id: &str,
///     ) -> maintrack_authz::Result<Option<OrganizationContext>> {
///         let row = self.pool.active_membership(user_id).await?;
///         Ok(row.map(|r| OrganizationContext::new(r.org_id, r.role).with_user_id(user_id)))
///     }
///
///     // ... remaining methods query the teams tables
/// }
/// ```
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// The organization the user currently has selected, with their role in
    /// it. `None` when no organization is selected.
    async fn current_organization(&self, user_id: &str) -> Result<Option<OrganizationContext>>;

    /// IDs of all teams the user belongs to.
    async fn user_team_ids(&self, user_id: &str) -> Result<HashSet<String>>;

    /// Whether the user belongs to the given team.
    async fn has_team_access(&self, user_id: &str, team_id: &str) -> Result<bool> {
        Ok(self.user_team_ids(user_id).await?.contains(team_id))
    }

    /// Whether the user has manager rights over the given team.
    async fn can_manage_team(&self, user_id: &str, team_id: &str) -> Result<bool>;

    /// Assemble a full session snapshot for the user.
    ///
    /// The default implementation probes `can_manage_team` for each team the
    /// user belongs to. Override when manager relationships can be fetched
    /// in one query.
    async fn load_snapshot(&self, user_id: &str) -> Result<SessionSnapshot> {
        let organization = self.current_organization(user_id).await?;
        let team_ids = self.user_team_ids(user_id).await?;

        let mut managed_team_ids = HashSet::new();
        for team_id in &team_ids {
            if self.can_manage_team(user_id, team_id).await? {
                managed_team_ids.insert(team_id.clone());
            }
        }

        debug!(
            user_id,
            org = organization.as_ref().map(|o| o.id.as_str()),
            teams = team_ids.len(),
            managed = managed_team_ids.len(),
            "session snapshot loaded"
        );

        Ok(SessionSnapshot {
            organization,
            team_ids,
            managed_team_ids,
        })
    }
}
