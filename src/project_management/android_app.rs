//! Android app client

use super::app_metadata::{AndroidAppMetadata, AppPlatform};
use super::error::Result;
use super::request_handler::RequestHandler;
use super::shared;
use std::sync::Arc;

const COLLECTION: &str = "androidApps";

const REQUIRED_FIELDS: [&str; 4] = ["name", "appId", "projectId", "packageName"];

/// Client for a single Firebase Android app
#[derive(Clone)]
pub struct AndroidApp {
    app_id: String,
    resource_name: String,
    request_handler: Arc<dyn RequestHandler>,
}

impl std::fmt::Debug for AndroidApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AndroidApp")
            .field("app_id", &self.app_id)
            .field("resource_name", &self.resource_name)
            .finish_non_exhaustive()
    }
}

impl AndroidApp {
    pub fn new(app_id: &str, request_handler: Arc<dyn RequestHandler>) -> Result<Self> {
        let resource_name = shared::resource_name_for(COLLECTION, app_id)?;

        Ok(Self {
            app_id: app_id.to_string(),
            resource_name,
            request_handler,
        })
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    pub fn resource_name(&self) -> &str {
        &self.resource_name
    }

    pub async fn get_metadata(&self) -> Result<AndroidAppMetadata> {
        tracing::debug!("get_metadata: {}", self.resource_name);

        let response = self
            .request_handler
            .get_resource(&self.resource_name)
            .await?;

        shared::assert_metadata_response(&response, &REQUIRED_FIELDS)?;
        Ok(AndroidAppMetadata {
            base: shared::app_metadata(AppPlatform::Android, &response),
            package_name: shared::required_str(&response, "packageName"),
        })
    }

    pub async fn set_display_name(&self, new_display_name: &str) -> Result<()> {
        tracing::debug!("set_display_name: {}", self.resource_name);

        self.request_handler
            .set_display_name(&self.resource_name, new_display_name)
            .await?;
        Ok(())
    }

    /// Fetch the `google-services.json` contents as UTF-8 text
    pub async fn get_config(&self) -> Result<String> {
        tracing::debug!("get_config: {}", self.resource_name);

        let response = self.request_handler.get_config(&self.resource_name).await?;
        shared::decode_config_response(&response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project_management::testing::FakeRequestHandler;
    use serde_json::json;

    #[test]
    fn test_resource_name() {
        let handler = Arc::new(FakeRequestHandler::default());
        let app = AndroidApp::new("1:1:android:a", handler).unwrap();
        assert_eq!(app.resource_name(), "projects/-/androidApps/1:1:android:a");
    }

    #[tokio::test]
    async fn test_get_metadata_includes_package_name() {
        let handler = Arc::new(FakeRequestHandler::with_resource(json!({
            "name": "projects/proj1/androidApps/a",
            "appId": "a",
            "projectId": "proj1",
            "displayName": "Droid",
            "packageName": "com.example.droid"
        })));
        let metadata = AndroidApp::new("a", handler)
            .unwrap()
            .get_metadata()
            .await
            .unwrap();

        assert_eq!(metadata.base.platform, AppPlatform::Android);
        assert_eq!(metadata.base.display_name.as_deref(), Some("Droid"));
        assert_eq!(metadata.package_name, "com.example.droid");
    }

    #[tokio::test]
    async fn test_get_metadata_requires_package_name() {
        let handler = Arc::new(FakeRequestHandler::with_resource(json!({
            "name": "projects/proj1/androidApps/a",
            "appId": "a",
            "projectId": "proj1",
            "packageName": ""
        })));
        let err = AndroidApp::new("a", handler)
            .unwrap()
            .get_metadata()
            .await
            .unwrap_err();
        assert!(err.to_string().contains("responseData.packageName"));
    }
}
