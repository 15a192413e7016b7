//! Firebase project management
//!
//! Typed clients for the app resources of a Firebase project. Every client
//! follows the same contract: validate the app id up front, delegate network
//! calls to a shared [`RequestHandler`], then check the raw JSON it gets back
//! before turning it into a typed value.
//!
//! # Module Structure
//!
//! - [`web_app`], [`ios_app`], [`android_app`] - Per-platform app clients
//! - [`app_metadata`] - Metadata types returned by the clients
//! - [`request_handler`] - The network seam and its REST implementation
//! - [`validator`] - Structural checks on untyped payloads
//! - [`error`] - [`ProjectManagementError`]
//!
//! # Example
//!
//! ```ignore
//! use firebase_apps::gcp::auth::GcpCredentials;
//! use firebase_apps::project_management::{HttpRequestHandler, ProjectManagement};
//!
//! async fn example() -> anyhow::Result<()> {
//!     let handler = HttpRequestHandler::new(GcpCredentials::new().await?)?;
//!     let pm = ProjectManagement::new(std::sync::Arc::new(handler));
//!     let metadata = pm.web_app("1:1234:web:abcd")?.get_metadata().await?;
//!     println!("{:?}", metadata.display_name);
//!     Ok(())
//! }
//! ```

pub mod android_app;
pub mod app_metadata;
pub mod error;
pub mod ios_app;
pub mod request_handler;
mod shared;
pub mod validator;
pub mod web_app;

pub use android_app::AndroidApp;
pub use app_metadata::{AndroidAppMetadata, AppMetadata, AppPlatform, IosAppMetadata, WebAppMetadata};
pub use error::{ProjectManagementError, Result};
pub use ios_app::IosApp;
pub use request_handler::{HttpRequestHandler, RequestHandler, DEFAULT_API_BASE_URL};
pub use web_app::WebApp;

use std::sync::Arc;

/// Entry point handing out app clients that share one request handler
#[derive(Clone)]
pub struct ProjectManagement {
    request_handler: Arc<dyn RequestHandler>,
}

impl ProjectManagement {
    pub fn new(request_handler: Arc<dyn RequestHandler>) -> Self {
        Self { request_handler }
    }

    pub fn web_app(&self, app_id: &str) -> Result<WebApp> {
        WebApp::new(app_id, self.request_handler.clone())
    }

    pub fn ios_app(&self, app_id: &str) -> Result<IosApp> {
        IosApp::new(app_id, self.request_handler.clone())
    }

    pub fn android_app(&self, app_id: &str) -> Result<AndroidApp> {
        AndroidApp::new(app_id, self.request_handler.clone())
    }
}
