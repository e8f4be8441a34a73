//! Permission CRUD

use crate::dispatch::Dispatcher;
use crate::error::Result;
use crate::types::{NewPermission, Permission, PermissionsEnvelope, ShortPermission};

/// Facade over the `/permissions` resource family
pub struct Permissions<'a> {
    dispatch: &'a Dispatcher,
}

impl<'a> Permissions<'a> {
    pub(crate) fn new(dispatch: &'a Dispatcher) -> Self {
        Self { dispatch }
    }

    /// All permissions visible to the client
    pub async fn list(&self) -> Result<Vec<Permission>> {
        let envelope: PermissionsEnvelope = self.dispatch.get("/permissions", &[]).await?;
        Ok(envelope.permissions)
    }

    /// Single permission by id (short projection)
    pub async fn get(&self, id: &str) -> Result<ShortPermission> {
        self.dispatch.get(&format!("/permissions/{id}"), &[]).await
    }

    /// Create a permission; the server assigns the id and echoes the entity
    pub async fn create(&self, permission: &NewPermission) -> Result<Permission> {
        self.dispatch.post("/permissions", permission).await
    }

    /// Full-body replace keyed by the entity's id
    pub async fn update(&self, permission: &Permission) -> Result<Permission> {
        let body = NewPermission::from(permission);
        self.dispatch
            .put(&format!("/permissions/{}", permission.id), &body)
            .await
    }

    /// Delete by id
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.dispatch.delete(&format!("/permissions/{id}")).await
    }
}
