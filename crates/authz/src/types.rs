//! Wire types for the authorization-extension resources
//!
//! The extension API names its id field `_id` and camelCases the
//! application fields; the structs here map that onto snake_case Rust.
//! "Short" variants are the reduced projections certain read endpoints
//! return. `New*` payloads are the creation shapes (the server assigns
//! the id).

use serde::{Deserialize, Serialize};

/// Permission as stored by the extension API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Permission {
    /// Server-assigned identifier
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub application_type: String,
    pub application_id: String,
}

/// Reduced permission projection returned by single-item reads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortPermission {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub description: String,
}

/// Creation/replacement payload for a permission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPermission {
    pub name: String,
    pub description: String,
    pub application_type: String,
    pub application_id: String,
}

impl From<&Permission> for NewPermission {
    fn from(permission: &Permission) -> Self {
        Self {
            name: permission.name.clone(),
            description: permission.description.clone(),
            application_type: permission.application_type.clone(),
            application_id: permission.application_id.clone(),
        }
    }
}

/// Role as stored by the extension API
///
/// Permissions are referenced by id only; the role does not own their
/// lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub application_type: String,
    pub application_id: String,
    #[serde(default)]
    pub permissions: Vec<String>,
}

/// Reduced role projection returned by single-item and user-role reads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortRole {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub description: String,
}

/// Creation/replacement payload for a role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRole {
    pub name: String,
    pub description: String,
    pub application_type: String,
    pub application_id: String,
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl From<&Role> for NewRole {
    fn from(role: &Role) -> Self {
        Self {
            name: role.name.clone(),
            description: role.description.clone(),
            application_type: role.application_type.clone(),
            application_id: role.application_id.clone(),
            permissions: role.permissions.clone(),
        }
    }
}

/// Group as stored by the extension API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub description: String,
}

/// Group with resolved member and role data
///
/// Same identity as [`Group`]; the extra fields are what the `expand`
/// marker asks the server to resolve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpandedGroup {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    /// User ids of group members
    #[serde(default)]
    pub members: Vec<String>,
    /// Roles mapped onto the group
    #[serde(default)]
    pub roles: Vec<ShortRole>,
}

/// Creation/replacement payload for a group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewGroup {
    pub name: String,
    pub description: String,
}

impl From<&Group> for NewGroup {
    fn from(group: &Group) -> Self {
        Self {
            name: group.name.clone(),
            description: group.description.clone(),
        }
    }
}

// List endpoints wrap their items in a single-field envelope; the facades
// unwrap these before handing results back.

#[derive(Debug, Deserialize)]
pub(crate) struct PermissionsEnvelope {
    pub permissions: Vec<Permission>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RolesEnvelope {
    pub roles: Vec<Role>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GroupsEnvelope {
    pub groups: Vec<Group>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn permission_maps_underscore_id_and_camel_case_fields() {
        let permission: Permission = serde_json::from_value(json!({
            "_id": "8d58891a-bd3e-4364-8c18-0f119d72ee5d",
            "name": "read:things",
            "description": "E",
            "applicationType": "client",
            "applicationId": "client-id",
        }))
        .unwrap();

        assert_eq!(permission.id, "8d58891a-bd3e-4364-8c18-0f119d72ee5d");
        assert_eq!(permission.application_type, "client");

        let body = serde_json::to_value(NewPermission::from(&permission)).unwrap();
        assert_eq!(body.get("_id"), None);
        assert_eq!(body["applicationId"], "client-id");
    }

    #[test]
    fn expanded_group_defaults_resolved_fields() {
        let group: ExpandedGroup = serde_json::from_value(json!({
            "_id": "1234",
            "name": "RandomGroup",
            "description": "E",
        }))
        .unwrap();

        assert!(group.members.is_empty());
        assert!(group.roles.is_empty());
    }

    #[test]
    fn list_envelopes_unwrap_their_items() {
        let envelope: GroupsEnvelope = serde_json::from_value(json!({
            "groups": [{"_id": "1", "name": "g", "description": "d"}],
        }))
        .unwrap();
        assert_eq!(envelope.groups.len(), 1);
        assert_eq!(envelope.groups[0].id, "1");
    }
}
