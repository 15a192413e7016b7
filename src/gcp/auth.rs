//! GCP Authentication
//!
//! Handles authentication using Application Default Credentials (ADC),
//! service account keys, gcloud CLI credentials, or an explicit access token.

use anyhow::{Context, Result};
use gcp_auth::TokenProvider;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Scopes needed by the Firebase Management API
pub const DEFAULT_SCOPES: &[&str] = &[
    "https://www.googleapis.com/auth/cloud-platform",
    "https://www.googleapis.com/auth/firebase",
];

/// Token expiry buffer - refresh tokens this much before they actually expire
const TOKEN_EXPIRY_BUFFER: Duration = Duration::from_secs(60);

/// Default token TTL if we can't determine expiry (conservative: 30 minutes)
const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(30 * 60);

/// Lifetime given to explicitly supplied tokens; the caller owns their expiry
const STATIC_TOKEN_TTL: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// GCP credentials holder with token caching
#[derive(Clone)]
pub struct GcpCredentials {
    provider: Option<Arc<dyn TokenProvider>>,
    token_cache: Arc<RwLock<Option<CachedToken>>>,
}

#[derive(Clone)]
struct CachedToken {
    token: String,
    /// When this token expires (with buffer applied)
    expires_at: Instant,
}

impl CachedToken {
    fn is_valid(&self) -> bool {
        Instant::now() < self.expires_at
    }
}

impl GcpCredentials {
    /// Create new GCP credentials using Application Default Credentials
    pub async fn new() -> Result<Self> {
        let provider = gcp_auth::provider().await.context(
            "Failed to initialize GCP authentication. Run 'gcloud auth application-default login'",
        )?;

        Ok(Self {
            provider: Some(provider),
            token_cache: Arc::new(RwLock::new(None)),
        })
    }

    /// Use a caller-supplied access token instead of ADC
    pub fn from_static_token(token: &str) -> Self {
        let cached = CachedToken {
            token: token.to_string(),
            expires_at: Instant::now() + STATIC_TOKEN_TTL,
        };

        Self {
            provider: None,
            token_cache: Arc::new(RwLock::new(Some(cached))),
        }
    }

    /// Get an access token for API calls
    /// Security: Checks token expiry before returning cached token
    pub async fn get_token(&self) -> Result<String> {
        {
            let cache = self.token_cache.read().await;
            if let Some(cached) = cache.as_ref() {
                if cached.is_valid() {
                    return Ok(cached.token.clone());
                }
                tracing::debug!("Cached token expired, fetching new token");
            }
        }

        let Some(provider) = self.provider.as_ref() else {
            return Err(anyhow::anyhow!(
                "Access token expired and no credential provider is configured"
            ));
        };

        let token = provider
            .token(DEFAULT_SCOPES)
            .await
            .context("Failed to get access token")?;

        let token_str = token.as_str().to_string();

        // gcp_auth exposes expiry as an optional timestamp; use a conservative TTL instead
        let expires_at = Instant::now() + DEFAULT_TOKEN_TTL - TOKEN_EXPIRY_BUFFER;

        {
            let mut cache = self.token_cache.write().await;
            *cache = Some(CachedToken {
                token: token_str.clone(),
                expires_at,
            });
        }

        tracing::debug!(
            "New token cached, expires in ~{} minutes",
            (DEFAULT_TOKEN_TTL - TOKEN_EXPIRY_BUFFER).as_secs() / 60
        );

        Ok(token_str)
    }
}
