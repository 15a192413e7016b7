//! iOS app client

use super::app_metadata::{AppPlatform, IosAppMetadata};
use super::error::Result;
use super::request_handler::RequestHandler;
use super::shared;
use std::sync::Arc;

const COLLECTION: &str = "iosApps";

const REQUIRED_FIELDS: [&str; 4] = ["name", "appId", "projectId", "bundleId"];

/// Client for a single Firebase iOS app
#[derive(Clone)]
pub struct IosApp {
    app_id: String,
    resource_name: String,
    request_handler: Arc<dyn RequestHandler>,
}

impl std::fmt::Debug for IosApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IosApp")
            .field("app_id", &self.app_id)
            .field("resource_name", &self.resource_name)
            .finish_non_exhaustive()
    }
}

impl IosApp {
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

    pub async fn get_metadata(&self) -> Result<IosAppMetadata> {
        tracing::debug!("get_metadata: {}", self.resource_name);

        let response = self
            .request_handler
            .get_resource(&self.resource_name)
            .await?;

        shared::assert_metadata_response(&response, &REQUIRED_FIELDS)?;
        Ok(IosAppMetadata {
            base: shared::app_metadata(AppPlatform::Ios, &response),
            bundle_id: shared::required_str(&response, "bundleId"),
        })
    }

    pub async fn set_display_name(&self, new_display_name: &str) -> Result<()> {
        tracing::debug!("set_display_name: {}", self.resource_name);

        self.request_handler
            .set_display_name(&self.resource_name, new_display_name)
            .await?;
        Ok(())
    }

    /// Fetch the `GoogleService-Info.plist` contents as UTF-8 text
    pub async fn get_config(&self) -> Result<String> {
        tracing::debug!("get_config: {}", self.resource_name);

        let response = self.request_handler.get_config(&self.resource_name).await?;
        shared::decode_config_response(&response)
    }
}
