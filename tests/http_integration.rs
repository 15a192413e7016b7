//! Integration tests for the app clients over HTTP using wiremock
//!
//! These tests drive `HttpRequestHandler` against mocked Firebase Management
//! endpoints, covering the request shapes and how responses surface through
//! the typed clients.

use firebase_apps::gcp::auth::GcpCredentials;
use firebase_apps::project_management::{
    AppPlatform, HttpRequestHandler, ProjectManagement, ProjectManagementError,
};
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{bearer_token, body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const APP_ID: &str = "1:1234:web:abcd";
const WEB_APP_PATH: &str = "/v1beta1/projects/-/webApps/1:1234:web:abcd";

fn project_management(server: &MockServer) -> ProjectManagement {
    let handler = HttpRequestHandler::with_base_url(
        GcpCredentials::from_static_token("test-token"),
        &format!("{}/v1beta1", server.uri()),
    )
    .expect("Handler should build");
    ProjectManagement::new(Arc::new(handler))
}

mod web_app_tests {
    use super::*;

    /// Metadata is fetched with the bearer token and mapped to the typed value
    #[tokio::test]
    async fn test_get_metadata_success() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(WEB_APP_PATH))
            .and(bearer_token("test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "projects/proj1/webApps/1:1234:web:abcd",
                "appId": APP_ID,
                "displayName": "My App",
                "projectId": "proj1",
                "webId": "ZmFrZQ"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let metadata = project_management(&server)
            .web_app(APP_ID)
            .unwrap()
            .get_metadata()
            .await
            .expect("Metadata should load");

        assert_eq!(metadata.platform, AppPlatform::Web);
        assert_eq!(metadata.resource_name, "projects/proj1/webApps/1:1234:web:abcd");
        assert_eq!(metadata.app_id, APP_ID);
        assert_eq!(metadata.display_name.as_deref(), Some("My App"));
        assert_eq!(metadata.project_id, "proj1");
    }

    /// A 200 with a payload missing `projectId` is a response-shape error
    #[tokio::test]
    async fn test_get_metadata_missing_project_id() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(WEB_APP_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "projects/proj1/webApps/1:1234:web:abcd",
                "appId": APP_ID
            })))
            .mount(&server)
            .await;

        let err = project_management(&server)
            .web_app(APP_ID)
            .unwrap()
            .get_metadata()
            .await
            .expect_err("Should reject payload");

        assert!(matches!(err, ProjectManagementError::InvalidServerResponse { .. }));
        assert!(err.to_string().contains("projectId"));
    }

    /// An empty 200 body becomes null, which is not an object
    #[tokio::test]
    async fn test_get_metadata_empty_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(WEB_APP_PATH))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let err = project_management(&server)
            .web_app(APP_ID)
            .unwrap()
            .get_metadata()
            .await
            .expect_err("Should reject empty body");

        assert_eq!(err.code(), "invalid-server-response");
        assert!(err.to_string().contains("must be a non-null object"));
    }

    /// HTTP errors surface as transport errors, not response-shape errors
    #[tokio::test]
    async fn test_get_metadata_404_is_transport_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(WEB_APP_PATH))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "error": {"code": 404, "message": "Requested entity was not found."}
            })))
            .mount(&server)
            .await;

        let err = project_management(&server)
            .web_app(APP_ID)
            .unwrap()
            .get_metadata()
            .await
            .expect_err("Should fail");

        assert_eq!(err.code(), "transport");
        assert!(err.to_string().contains("API request failed: 404"));
    }

    /// Rename issues a PATCH with the update mask and new name
    #[tokio::test]
    async fn test_set_display_name_sends_patch() {
        let server = MockServer::start().await;

        Mock::given(method("PATCH"))
            .and(path(WEB_APP_PATH))
            .and(bearer_token("test-token"))
            .and(query_param("update_mask", "display_name"))
            .and(body_json(json!({"displayName": "Renamed"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "projects/proj1/webApps/1:1234:web:abcd",
                "displayName": "Renamed"
            })))
            .expect(1)
            .mount(&server)
            .await;

        project_management(&server)
            .web_app(APP_ID)
            .unwrap()
            .set_display_name("Renamed")
            .await
            .expect("Rename should succeed");
    }

    /// Rename failures propagate unchanged
    #[tokio::test]
    async fn test_set_display_name_403() {
        let server = MockServer::start().await;

        Mock::given(method("PATCH"))
            .and(path(WEB_APP_PATH))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let err = project_management(&server)
            .web_app(APP_ID)
            .unwrap()
            .set_display_name("Renamed")
            .await
            .expect_err("Should fail");

        let inner = err.into_transport().expect("Should be a transport error");
        assert!(inner.to_string().contains("403"));
    }

    /// Config is fetched from the `/config` sub-resource and decoded
    #[tokio::test]
    async fn test_get_config_decodes_contents() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("{}/config", WEB_APP_PATH)))
            .and(bearer_token("test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "configFilename": "firebase-config.json",
                "configFileContents": "eyJhcGlLZXkiOiJrZXkifQ=="
            })))
            .mount(&server)
            .await;

        let config = project_management(&server)
            .web_app(APP_ID)
            .unwrap()
            .get_config()
            .await
            .expect("Config should load");

        assert_eq!(config, r#"{"apiKey":"key"}"#);
    }

    /// Malformed base64 is a response-shape error
    #[tokio::test]
    async fn test_get_config_malformed_base64() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("{}/config", WEB_APP_PATH)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "configFileContents": "not base64 !!"
            })))
            .mount(&server)
            .await;

        let err = project_management(&server)
            .web_app(APP_ID)
            .unwrap()
            .get_config()
            .await
            .expect_err("Should reject");

        assert_eq!(err.code(), "invalid-server-response");
        assert_eq!(
            err.response(),
            Some(&json!({"configFileContents": "not base64 !!"}))
        );
    }
}

mod mobile_app_tests {
    use super::*;

    #[tokio::test]
    async fn test_ios_and_android_use_their_collections() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1beta1/projects/-/iosApps/ios-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "projects/p/iosApps/ios-1",
                "appId": "ios-1",
                "projectId": "p",
                "bundleId": "com.example.ios"
            })))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/v1beta1/projects/-/androidApps/android-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "projects/p/androidApps/android-1",
                "appId": "android-1",
                "projectId": "p",
                "packageName": "com.example.android"
            })))
            .mount(&server)
            .await;

        let pm = project_management(&server);
        let ios = pm.ios_app("ios-1").unwrap().get_metadata().await.unwrap();
        let android = pm
            .android_app("android-1")
            .unwrap()
            .get_metadata()
            .await
            .unwrap();

        assert_eq!(ios.bundle_id, "com.example.ios");
        assert_eq!(android.package_name, "com.example.android");
    }
}
