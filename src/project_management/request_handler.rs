//! Request handler for the Firebase Management API
//!
//! The app clients never talk to the network themselves. They go through a
//! [`RequestHandler`], which returns raw JSON and leaves shape checks to the
//! caller. [`HttpRequestHandler`] is the REST implementation.

use crate::gcp::auth::GcpCredentials;
use crate::gcp::http::GcpHttpClient;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::{json, Value};

/// Production endpoint of the Firebase Management API
pub const DEFAULT_API_BASE_URL: &str = "https://firebase.googleapis.com/v1beta1";

/// Network operations the app clients delegate to
#[async_trait]
pub trait RequestHandler: Send + Sync {
    /// Fetch the raw resource at `resource_name`
    async fn get_resource(&self, resource_name: &str) -> Result<Value>;

    /// Rename the resource; the server returns no payload of interest
    async fn set_display_name(&self, resource_name: &str, new_display_name: &str) -> Result<()>;

    /// Fetch the raw config artifact response for `resource_name`
    async fn get_config(&self, resource_name: &str) -> Result<Value>;
}

/// REST implementation of [`RequestHandler`]
#[derive(Clone)]
pub struct HttpRequestHandler {
    credentials: GcpCredentials,
    http: GcpHttpClient,
    base_url: String,
}

impl HttpRequestHandler {
    /// Create a handler against the production endpoint
    pub fn new(credentials: GcpCredentials) -> Result<Self> {
        Self::with_base_url(credentials, DEFAULT_API_BASE_URL)
    }

    /// Create a handler against a custom endpoint (emulator, proxy, tests)
    pub fn with_base_url(credentials: GcpCredentials, base_url: &str) -> Result<Self> {
        let parsed = url::Url::parse(base_url)
            .with_context(|| format!("Invalid API base URL: {}", base_url))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(anyhow::anyhow!(
                "API base URL must use http or https: {}",
                base_url
            ));
        }

        Ok(Self {
            credentials,
            http: GcpHttpClient::new()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn resource_url(&self, resource_name: &str) -> String {
        format!("{}/{}", self.base_url, resource_name)
    }
}

#[async_trait]
impl RequestHandler for HttpRequestHandler {
    async fn get_resource(&self, resource_name: &str) -> Result<Value> {
        let token = self.credentials.get_token().await?;
        self.http.get(&self.resource_url(resource_name), &token).await
    }

    async fn set_display_name(&self, resource_name: &str, new_display_name: &str) -> Result<()> {
        let token = self.credentials.get_token().await?;
        let body = json!({ "displayName": new_display_name });
        self.http
            .patch(
                &self.resource_url(resource_name),
                &token,
                &[("update_mask", "display_name")],
                &body,
            )
            .await?;
        Ok(())
    }

    async fn get_config(&self, resource_name: &str) -> Result<Value> {
        let token = self.credentials.get_token().await?;
        let url = format!("{}/config", self.resource_url(resource_name));
        self.http.get(&url, &token).await
    }
}
