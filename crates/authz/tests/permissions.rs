//! Permission CRUD against a mocked extension API

mod common;

use auth0_authz::types::{NewPermission, Permission};
use common::{TEST_CLIENT_ID, authenticated_client};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PERMISSION_ID: &str = "8d58891a-bd3e-4364-8c18-0f119d72ee5d";

fn created_body() -> serde_json::Value {
    json!({
        "_id": PERMISSION_ID,
        "name": "RandomPermission",
        "description": "E",
        "applicationType": "client",
        "applicationId": TEST_CLIENT_ID,
    })
}

#[tokio::test]
async fn creates_a_permission() {
    let server = MockServer::start().await;
    let client = authenticated_client(&server).await;

    Mock::given(method("POST"))
        .and(path("/permissions"))
        .and(body_json(json!({
            "name": "RandomPermission",
            "description": "E",
            "applicationType": "client",
            "applicationId": TEST_CLIENT_ID,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(created_body()))
        .expect(1)
        .mount(&server)
        .await;

    let created = client
        .permissions()
        .create(&NewPermission {
            name: "RandomPermission".to_string(),
            description: "E".to_string(),
            application_type: "client".to_string(),
            application_id: TEST_CLIENT_ID.to_string(),
        })
        .await
        .unwrap();

    assert_eq!(created.id, PERMISSION_ID);
    assert_eq!(created.application_type, "client");
}

#[tokio::test]
async fn gets_a_permission_as_short_projection() {
    let server = MockServer::start().await;
    let client = authenticated_client(&server).await;

    Mock::given(method("GET"))
        .and(path(format!("/permissions/{PERMISSION_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_id": PERMISSION_ID,
            "name": "RandomPermission",
            "description": "description",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let permission = client.permissions().get(PERMISSION_ID).await.unwrap();
    assert_eq!(permission.id, PERMISSION_ID);
    assert_eq!(permission.name, "RandomPermission");
}

#[tokio::test]
async fn updates_a_permission_with_a_full_body_put() {
    let server = MockServer::start().await;
    let client = authenticated_client(&server).await;

    let mut permission: Permission = serde_json::from_value(created_body()).unwrap();
    permission.name = "NEW NAME".to_string();
    permission.description = "NEW DESCRIPTION".to_string();

    Mock::given(method("PUT"))
        .and(path(format!("/permissions/{PERMISSION_ID}")))
        .and(body_json(json!({
            "name": "NEW NAME",
            "description": "NEW DESCRIPTION",
            "applicationType": "client",
            "applicationId": TEST_CLIENT_ID,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_id": PERMISSION_ID,
            "name": "NEW NAME",
            "description": "NEW DESCRIPTION",
            "applicationType": "client",
            "applicationId": TEST_CLIENT_ID,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let updated = client.permissions().update(&permission).await.unwrap();
    assert_eq!(updated.name, "NEW NAME");
    assert_eq!(updated.description, "NEW DESCRIPTION");
}

#[tokio::test]
async fn lists_permissions_from_the_envelope() {
    let server = MockServer::start().await;
    let client = authenticated_client(&server).await;

    Mock::given(method("GET"))
        .and(path("/permissions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"permissions": [created_body()]})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let permissions = client.permissions().list().await.unwrap();
    assert_eq!(permissions.len(), 1);
    assert!(permissions.iter().any(|p| p.id == PERMISSION_ID));
}

#[tokio::test]
async fn deletes_a_permission() {
    let server = MockServer::start().await;
    let client = authenticated_client(&server).await;

    Mock::given(method("DELETE"))
        .and(path(format!("/permissions/{PERMISSION_ID}")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client.permissions().delete(PERMISSION_ID).await.unwrap();
}

#[tokio::test]
async fn non_success_response_propagates_verbatim() {
    let server = MockServer::start().await;
    let client = authenticated_client(&server).await;

    Mock::given(method("GET"))
        .and(path("/permissions"))
        .respond_with(
            ResponseTemplate::new(403).set_body_string("{\"error\":\"insufficient_scope\"}"),
        )
        .mount(&server)
        .await;

    let err = client.permissions().list().await.unwrap_err();
    match err {
        auth0_authz::Error::Api { status, body } => {
            assert_eq!(status.as_u16(), 403);
            assert!(body.contains("insufficient_scope"));
        }
        other => panic!("expected Error::Api, got {other:?}"),
    }
}
