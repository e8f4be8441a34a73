//! Shared wiremock scaffolding for the integration suite

// not every test binary uses every helper
#![allow(dead_code)]

use auth0_authz::{AuthzClient, AuthzConfig};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_CLIENT_ID: &str = "test-client-id";

/// Stub the identity provider's token endpoint with a long-lived token
pub async fn stub_token_endpoint(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "VALID_TOKEN",
            "expires_in": 86_400,
        })))
        .mount(server)
        .await;
}

/// Client wired to `server` for both the token and extension endpoints
pub fn test_client(server: &MockServer) -> AuthzClient {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let config = AuthzConfig::new(
        TEST_CLIENT_ID,
        "test-client-secret",
        &server.uri(),
        &server.uri(),
    )
    .expect("mock server URI parses");
    AuthzClient::new(config).expect("client builds")
}

/// Authenticated client against `server`
pub async fn authenticated_client(server: &MockServer) -> AuthzClient {
    stub_token_endpoint(server).await;
    let client = test_client(server);
    client.authenticate().await.expect("authentication succeeds");
    assert!(client.is_authenticated());
    client
}
