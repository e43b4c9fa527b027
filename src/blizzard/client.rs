//! HTTP implementations of the API collaborators.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;
use url::Url;

use super::request::oauth_token_url;
use super::{JsonFetcher, TokenSource};
use crate::aliases::lookup_region;
use crate::config::BlizzardConfig;
use crate::error::{BotError, Result};

/// Default timeout for API requests.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

fn build_client(timeout_secs: u64) -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .map_err(|e| BotError::transport(format!("failed to create HTTP client: {}", e)))
}

/// Replaces the `access_token` query value so URLs can be logged.
pub fn redact_token(url: &str) -> String {
    let Ok(mut parsed) = Url::parse(url) else {
        return url.to_string();
    };

    let pairs: Vec<(String, String)> = parsed
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "access_token" {
                "REDACTED".to_string()
            } else {
                v.into_owned()
            };
            (k.into_owned(), v)
        })
        .collect();

    if pairs.is_empty() {
        return parsed.to_string();
    }

    parsed.query_pairs_mut().clear().extend_pairs(pairs);
    parsed.to_string()
}

/// `JsonFetcher` backed by a reqwest client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates a fetcher whose requests time out after `timeout_secs`.
    pub fn new(timeout_secs: u64) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout_secs)?,
        })
    }
}

#[async_trait]
impl JsonFetcher for HttpFetcher {
    async fn fetch_json(&self, url: &str) -> Result<serde_json::Value> {
        debug!("GET {}", redact_token(url));

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| BotError::transport(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BotError::transport(status.to_string()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| BotError::transport(format!("failed to read response: {}", e)))?;

        serde_json::from_str(&body)
            .map_err(|e| BotError::transport(format!("failed to parse response: {}", e)))
    }
}

/// `TokenSource` using the OAuth client-credentials grant.
#[derive(Debug, Clone)]
pub struct OAuthTokenSource {
    client_id: String,
    client_secret: String,
    client: Client,
}

impl OAuthTokenSource {
    /// Creates a token source from API credentials.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        timeout_secs: u64,
    ) -> Result<Self> {
        Ok(Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            client: build_client(timeout_secs)?,
        })
    }

    /// Creates a token source from resolved configuration.
    pub fn from_config(config: &BlizzardConfig) -> Result<Self> {
        let (client_id, client_secret) = config.credentials()?;
        Self::new(client_id, client_secret, config.timeout_secs)
    }
}

#[derive(Debug, Deserialize)]
struct AccessTokenResponse {
    access_token: String,
}

#[async_trait]
impl TokenSource for OAuthTokenSource {
    async fn bearer_token(&self, region_alias: &str) -> Result<String> {
        if lookup_region(region_alias).is_none() {
            return Err(BotError::RegionNotFound);
        }

        let url = oauth_token_url(region_alias);
        debug!("Requesting access token from {}", url);

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|e| BotError::transport(format!("token request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BotError::transport(status.to_string()));
        }

        let token: AccessTokenResponse = response
            .json()
            .await
            .map_err(|e| BotError::transport(format!("failed to parse token response: {}", e)))?;

        Ok(token.access_token)
    }
}
