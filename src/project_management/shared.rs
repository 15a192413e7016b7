//! Response handling shared by every app client
//!
//! Each client kind differs only in its resource collection, its platform tag
//! and the fields it requires; the checks themselves live here.

use super::app_metadata::{AppMetadata, AppPlatform};
use super::error::{ProjectManagementError, Result};
use super::validator;
use serde_json::Value;

/// Fields every app metadata response must carry as non-empty strings
pub(crate) const COMMON_REQUIRED_FIELDS: [&str; 3] = ["name", "appId", "projectId"];

/// Field of the config response holding the base64 artifact
pub(crate) const CONFIG_FILE_CONTENTS: &str = "configFileContents";

/// Validate an app id and derive `projects/-/{collection}/{app_id}`
pub(crate) fn resource_name_for(collection: &str, app_id: &str) -> Result<String> {
    if app_id.is_empty() {
        return Err(ProjectManagementError::invalid_argument(
            "appId must be a non-empty string.",
        ));
    }

    Ok(format!("projects/-/{}/{}", collection, app_id))
}

/// Check the metadata response shape, field by field in order
pub(crate) fn assert_metadata_response(response: &Value, required_fields: &[&str]) -> Result<()> {
    validator::assert_server_response(
        validator::is_non_null_object(response),
        response,
        "get_metadata()'s responseData must be a non-null object.",
    )?;

    for field in required_fields {
        validator::assert_server_response(
            validator::is_non_empty_string(&response[*field]),
            response,
            &format!(
                "get_metadata()'s responseData.{} must be a non-empty string.",
                field
            ),
        )?;
    }

    Ok(())
}

/// Read a field already checked by [`assert_metadata_response`]
pub(crate) fn required_str(response: &Value, field: &str) -> String {
    response[field].as_str().unwrap_or_default().to_string()
}

/// Build the common metadata from a validated response
pub(crate) fn app_metadata(platform: AppPlatform, response: &Value) -> AppMetadata {
    let display_name = response["displayName"]
        .as_str()
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    AppMetadata {
        platform,
        resource_name: required_str(response, "name"),
        app_id: required_str(response, "appId"),
        display_name,
        project_id: required_str(response, "projectId"),
    }
}

/// Validate a config response and decode its artifact to UTF-8 text
pub(crate) fn decode_config_response(response: &Value) -> Result<String> {
    validator::assert_server_response(
        validator::is_non_null_object(response),
        response,
        "get_config()'s responseData must be a non-null object.",
    )?;

    let Some(bytes) = validator::decode_base64(&response[CONFIG_FILE_CONTENTS]) else {
        let message = format!(
            "get_config()'s responseData.{} must be a base64 string.",
            CONFIG_FILE_CONTENTS
        );
        tracing::warn!("invalid server response: {}", message);
        return Err(ProjectManagementError::invalid_server_response(
            message, response,
        ));
    };

    String::from_utf8(bytes).map_err(|_| {
        ProjectManagementError::invalid_server_response(
            format!(
                "get_config()'s responseData.{} must decode to UTF-8 text.",
                CONFIG_FILE_CONTENTS
            ),
            response,
        )
    })
}
