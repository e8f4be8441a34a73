//! Role CRUD

use crate::dispatch::Dispatcher;
use crate::error::Result;
use crate::types::{NewRole, Role, RolesEnvelope, ShortRole};

/// Facade over the `/roles` resource family
pub struct Roles<'a> {
    dispatch: &'a Dispatcher,
}

impl<'a> Roles<'a> {
    pub(crate) fn new(dispatch: &'a Dispatcher) -> Self {
        Self { dispatch }
    }

    /// All roles visible to the client
    pub async fn list(&self) -> Result<Vec<Role>> {
        let envelope: RolesEnvelope = self.dispatch.get("/roles", &[]).await?;
        Ok(envelope.roles)
    }

    /// Single role by id (short projection)
    pub async fn get(&self, id: &str) -> Result<ShortRole> {
        self.dispatch.get(&format!("/roles/{id}"), &[]).await
    }

    /// Create a role; permissions are attached by id
    pub async fn create(&self, role: &NewRole) -> Result<Role> {
        self.dispatch.post("/roles", role).await
    }

    /// Full-body replace keyed by the entity's id
    pub async fn update(&self, role: &Role) -> Result<Role> {
        let body = NewRole::from(role);
        self.dispatch.put(&format!("/roles/{}", role.id), &body).await
    }

    /// Delete by id
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.dispatch.delete(&format!("/roles/{id}")).await
    }
}
