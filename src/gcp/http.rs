//! HTTP utilities for Google REST API calls

use anyhow::{Context, Result};
use reqwest::{Client, RequestBuilder};
use serde_json::Value;

/// Maximum length of response body to log (to avoid logging sensitive data)
const MAX_LOG_BODY_LENGTH: usize = 200;

/// Sanitize response body for logging
/// Truncates long responses and strips control characters
fn sanitize_for_log(body: &str) -> String {
    let truncated = if body.len() > MAX_LOG_BODY_LENGTH {
        let mut end = MAX_LOG_BODY_LENGTH;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}... [truncated, {} bytes total]", &body[..end], body.len())
    } else {
        body.to_string()
    };

    truncated.replace(|c: char| !c.is_ascii_graphic() && c != ' ', "")
}

/// HTTP client wrapper for Google API calls
#[derive(Clone)]
pub struct GcpHttpClient {
    client: Client,
}

impl GcpHttpClient {
    /// Create a new HTTP client
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("fbapps/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }

    /// Make a GET request
    pub async fn get(&self, url: &str, token: &str) -> Result<Value> {
        tracing::debug!("GET {}", url);

        let request = self.client.get(url).bearer_auth(token);
        Self::execute(request).await
    }

    /// Make a PATCH request with optional query parameters and a JSON body
    pub async fn patch(
        &self,
        url: &str,
        token: &str,
        query: &[(&str, &str)],
        body: &Value,
    ) -> Result<Value> {
        tracing::debug!("PATCH {}", url);

        let request = self
            .client
            .patch(url)
            .bearer_auth(token)
            .query(query)
            .json(body);
        Self::execute(request).await
    }

    async fn execute(request: RequestBuilder) -> Result<Value> {
        let response = request.send().await.context("Failed to send request")?;

        let status = response.status();
        let body = response
            .text()
            .await
            .context("Failed to read response body")?;

        if !status.is_success() {
            // Security: Only log sanitized/truncated error body to avoid leaking sensitive data
            tracing::error!("API error: {} - {}", status, sanitize_for_log(&body));
            return Err(anyhow::anyhow!("API request failed: {}", status));
        }

        if body.is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&body).context("Failed to parse response JSON")
    }
}

/// Format an API error for display
/// Security: Sanitizes error messages to avoid leaking sensitive API details
pub fn format_gcp_error(error: &anyhow::Error) -> String {
    let error_str = error.to_string();

    if error_str.contains("403") {
        return "Permission denied. Check your Firebase/GCP IAM permissions.".to_string();
    }
    if error_str.contains("401") {
        return "Authentication failed. Run 'gcloud auth application-default login'.".to_string();
    }
    if error_str.contains("404") {
        return "App not found.".to_string();
    }
    if error_str.contains("429") {
        return "Rate limit exceeded. Please try again later.".to_string();
    }
    if error_str.contains("400") {
        return "Invalid request. Check your parameters.".to_string();
    }
    if error_str.contains("500") || error_str.contains("503") {
        return "Firebase service temporarily unavailable. Please try again.".to_string();
    }

    if error_str.contains("API request failed") {
        return "Request failed. Check your network connection and try again.".to_string();
    }

    let sanitized = error_str
        .chars()
        .filter(|c| c.is_ascii_graphic() || *c == ' ')
        .take(80)
        .collect::<String>();

    if sanitized.len() < error_str.len() {
        format!("{}...", sanitized)
    } else {
        sanitized
    }
}
