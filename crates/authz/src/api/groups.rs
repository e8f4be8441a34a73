//! Group CRUD and the expanded read variant

use crate::dispatch::Dispatcher;
use crate::error::Result;
use crate::types::{ExpandedGroup, Group, GroupsEnvelope, NewGroup};

/// Facade over the `/groups` resource family
pub struct Groups<'a> {
    dispatch: &'a Dispatcher,
}

impl<'a> Groups<'a> {
    pub(crate) fn new(dispatch: &'a Dispatcher) -> Self {
        Self { dispatch }
    }

    /// All groups visible to the client
    pub async fn list(&self) -> Result<Vec<Group>> {
        let envelope: GroupsEnvelope = self.dispatch.get("/groups", &[]).await?;
        Ok(envelope.groups)
    }

    /// Single group by id
    pub async fn get(&self, id: &str) -> Result<Group> {
        self.dispatch.get(&format!("/groups/{id}"), &[]).await
    }

    /// Group with resolved member and role data
    ///
    /// Sent with the `expand` query marker, which also keys a cache slot
    /// distinct from the plain fetch.
    pub async fn get_expanded(&self, id: &str) -> Result<ExpandedGroup> {
        self.dispatch
            .get(&format!("/groups/{id}"), &[("expand", "true")])
            .await
    }

    /// Create a group; the server assigns the id and echoes the entity
    pub async fn create(&self, group: &NewGroup) -> Result<Group> {
        self.dispatch.post("/groups", group).await
    }

    /// Full-body replace keyed by the entity's id
    pub async fn update(&self, group: &Group) -> Result<Group> {
        let body = NewGroup::from(group);
        self.dispatch.put(&format!("/groups/{}", group.id), &body).await
    }

    /// Delete by id
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.dispatch.delete(&format!("/groups/{id}")).await
    }
}
