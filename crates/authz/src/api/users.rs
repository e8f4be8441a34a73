//! User associations to roles and groups
//!
//! Users are not a stored entity here; only their associations are
//! manipulated, addressed by an externally supplied user id. The
//! singular/plural method pairs replace the upstream API's
//! one-or-many parameter shapes.

use crate::dispatch::Dispatcher;
use crate::error::Result;
use crate::types::{Group, ShortRole};

/// Facade over `/users/{id}/roles`, `/users/{id}/groups` and group
/// membership removal
pub struct Users<'a> {
    dispatch: &'a Dispatcher,
}

impl<'a> Users<'a> {
    pub(crate) fn new(dispatch: &'a Dispatcher) -> Self {
        Self { dispatch }
    }

    /// Roles currently associated with the user
    pub async fn roles(&self, user_id: &str) -> Result<Vec<ShortRole>> {
        self.dispatch.get(&format!("/users/{user_id}/roles"), &[]).await
    }

    /// Associate several roles at once
    pub async fn add_roles(&self, user_id: &str, role_ids: &[&str]) -> Result<()> {
        self.dispatch
            .patch(&format!("/users/{user_id}/roles"), role_ids)
            .await
    }

    /// Associate a single role
    pub async fn add_role(&self, user_id: &str, role_id: &str) -> Result<()> {
        self.add_roles(user_id, &[role_id]).await
    }

    /// Drop several role associations at once
    pub async fn remove_roles(&self, user_id: &str, role_ids: &[&str]) -> Result<()> {
        self.dispatch
            .delete_with_body(&format!("/users/{user_id}/roles"), role_ids)
            .await
    }

    /// Drop a single role association
    pub async fn remove_role(&self, user_id: &str, role_id: &str) -> Result<()> {
        self.remove_roles(user_id, &[role_id]).await
    }

    /// Groups currently associated with the user
    pub async fn groups(&self, user_id: &str) -> Result<Vec<Group>> {
        self.dispatch.get(&format!("/users/{user_id}/groups"), &[]).await
    }

    /// Associate several groups at once
    pub async fn add_groups(&self, user_id: &str, group_ids: &[&str]) -> Result<()> {
        self.dispatch
            .patch(&format!("/users/{user_id}/groups"), group_ids)
            .await
    }

    /// Associate a single group
    pub async fn add_group(&self, user_id: &str, group_id: &str) -> Result<()> {
        self.add_groups(user_id, &[group_id]).await
    }

    /// Remove the user from a group
    ///
    /// Addressed through the group's member list, so the cached `/groups`
    /// tree is what gets staled; `/users/{id}/groups` entries are not
    /// touched by this call.
    pub async fn remove_from_group(&self, group_id: &str, user_id: &str) -> Result<()> {
        self.dispatch
            .delete_with_body(&format!("/groups/{group_id}/members"), &[user_id])
            .await
    }
}
