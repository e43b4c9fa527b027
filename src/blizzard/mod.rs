//! Blizzard profile API integration.
//!
//! The dispatcher talks to the API through two traits so that tests can
//! substitute in-memory doubles for the network.

pub mod client;
pub mod mock;
pub mod request;
pub mod types;

pub use client::{HttpFetcher, OAuthTokenSource};
pub use mock::{MockFetcher, StaticTokenSource};
pub use request::{character_profile_url, oauth_token_url, raid_profile_url};
pub use types::{CharacterProfile, RaidProfile};

use async_trait::async_trait;

use crate::error::Result;

/// Fetches a URL and decodes the body as JSON.
///
/// Any non-success status or undecodable body is reported as
/// [`BotError::Transport`](crate::error::BotError::Transport).
#[async_trait]
pub trait JsonFetcher: Send + Sync {
    /// Issues a GET request for `url`.
    async fn fetch_json(&self, url: &str) -> Result<serde_json::Value>;
}

/// Supplies bearer tokens for API requests.
#[async_trait]
pub trait TokenSource: Send + Sync {
    /// Returns a valid access token for the given region alias.
    ///
    /// Fails with [`BotError::RegionNotFound`](crate::error::BotError::RegionNotFound)
    /// for unknown aliases.
    async fn bearer_token(&self, region_alias: &str) -> Result<String>;
}
