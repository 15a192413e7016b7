//! App metadata types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Platform an app resource belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppPlatform {
    #[serde(rename = "PLATFORM_UNKNOWN")]
    Unknown,
    #[serde(rename = "IOS")]
    Ios,
    #[serde(rename = "ANDROID")]
    Android,
    #[serde(rename = "WEB")]
    Web,
}

impl fmt::Display for AppPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AppPlatform::Unknown => "PLATFORM_UNKNOWN",
            AppPlatform::Ios => "IOS",
            AppPlatform::Android => "ANDROID",
            AppPlatform::Web => "WEB",
        };
        f.write_str(s)
    }
}

/// Metadata common to every app kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppMetadata {
    pub platform: AppPlatform,
    /// Server-assigned resource name, e.g. `projects/my-project/webApps/1:123:web:abc`
    pub resource_name: String,
    pub app_id: String,
    /// `None` when the server sends no display name or an empty one
    pub display_name: Option<String>,
    pub project_id: String,
}

/// Metadata of a Web app; `platform` is always [`AppPlatform::Web`]
pub type WebAppMetadata = AppMetadata;

/// Metadata of an iOS app
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IosAppMetadata {
    #[serde(flatten)]
    pub base: AppMetadata,
    pub bundle_id: String,
}

/// Metadata of an Android app
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AndroidAppMetadata {
    #[serde(flatten)]
    pub base: AppMetadata,
    pub package_name: String,
}
