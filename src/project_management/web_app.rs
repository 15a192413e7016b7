//! Web app client

use super::app_metadata::{AppPlatform, WebAppMetadata};
use super::error::Result;
use super::request_handler::RequestHandler;
use super::shared;
use std::sync::Arc;

const COLLECTION: &str = "webApps";

/// Client for a single Firebase Web app
#[derive(Clone)]
pub struct WebApp {
    app_id: String,
    resource_name: String,
    request_handler: Arc<dyn RequestHandler>,
}

impl std::fmt::Debug for WebApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebApp")
            .field("app_id", &self.app_id)
            .field("resource_name", &self.resource_name)
            .finish_non_exhaustive()
    }
}

impl WebApp {
    /// Create a client for `app_id`; fails with `InvalidArgument` if it is empty
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

    /// Resource path, `projects/-/webApps/{app_id}`
    pub fn resource_name(&self) -> &str {
        &self.resource_name
    }

    /// Retrieve metadata about this Web app
    pub async fn get_metadata(&self) -> Result<WebAppMetadata> {
        tracing::debug!("get_metadata: {}", self.resource_name);

        let response = self
            .request_handler
            .get_resource(&self.resource_name)
            .await?;

        shared::assert_metadata_response(&response, &shared::COMMON_REQUIRED_FIELDS)?;
        Ok(shared::app_metadata(AppPlatform::Web, &response))
    }

    /// Set the user-assigned display name of the app
    pub async fn set_display_name(&self, new_display_name: &str) -> Result<()> {
        tracing::debug!("set_display_name: {}", self.resource_name);

        self.request_handler
            .set_display_name(&self.resource_name, new_display_name)
            .await?;
        Ok(())
    }

    /// Fetch the app's config artifact as UTF-8 text
    ///
    /// For Web apps this is the JSON config object normally pasted into the
    /// site's initialization code. It is returned as-is, without parsing.
    pub async fn get_config(&self) -> Result<String> {
        tracing::debug!("get_config: {}", self.resource_name);

        let response = self.request_handler.get_config(&self.resource_name).await?;
        shared::decode_config_response(&response)
    }
}
