//! Command dispatch for raidscout.
//!
//! Runs one chat line through parse → region lookup → token → request →
//! format. Every failure ends the pipeline and its message becomes the reply.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::help::help_text;
use super::queries::{parse_character_query, parse_raid_query, CharacterQuery};
use super::router::{Command, CommandRouter};
use crate::aliases::{lookup_expansion_ordinal, lookup_region, RegionInfo};
use crate::blizzard::{
    character_profile_url, raid_profile_url, CharacterProfile, JsonFetcher, RaidProfile,
    TokenSource,
};
use crate::error::{BotError, Result};
use crate::format::{format_character_profile, format_raid_profile};

/// Routes chat lines to command handlers.
///
/// Holds no per-command state, so one instance can serve concurrent lines.
pub struct Dispatcher {
    fetcher: Arc<dyn JsonFetcher>,
    tokens: Arc<dyn TokenSource>,
}

impl Dispatcher {
    /// Creates a dispatcher over the given collaborators.
    pub fn new(fetcher: Arc<dyn JsonFetcher>, tokens: Arc<dyn TokenSource>) -> Self {
        Self { fetcher, tokens }
    }

    /// Handles one chat line.
    ///
    /// Returns `None` when the line is not a bot command. Otherwise returns
    /// the reply, which is the error text if any stage failed.
    pub async fn handle(&self, line: &str) -> Option<String> {
        let command = CommandRouter::parse(line)?;
        debug!("Dispatching {}", command.name());

        match self.execute(&command).await {
            Ok(reply) => Some(reply),
            Err(e) => {
                warn!("{} failed: {}: {}", command.name(), e.category(), e);
                Some(e.to_string())
            }
        }
    }

    async fn execute(&self, command: &Command) -> Result<String> {
        match command {
            Command::Help => Ok(help_text().to_string()),
            Command::CharacterSearch(line) => self.character_search(line).await,
            Command::RaidSearch(line) => self.raid_search(line).await,
        }
    }

    async fn character_search(&self, line: &str) -> Result<String> {
        let query = parse_character_query(line)?;
        let region = resolve_region(&query)?;
        let token = self.tokens.bearer_token(&query.region_alias).await?;

        let url = character_profile_url(&query, region, &token);
        let profile: CharacterProfile = self.fetch(&url).await?;
        Ok(format_character_profile(&profile))
    }

    async fn raid_search(&self, line: &str) -> Result<String> {
        let query = parse_raid_query(line)?;
        let region = resolve_region(&query.character)?;
        let ordinal =
            lookup_expansion_ordinal(&query.expansion_alias).ok_or(BotError::ExpansionNotFound)?;
        let token = self.tokens.bearer_token(&query.character.region_alias).await?;

        let url = raid_profile_url(&query.character, region, &token);
        let profile: RaidProfile = self.fetch(&url).await?;
        format_raid_profile(&profile, ordinal)
    }

    /// Fetches `url` and decodes the document into `T`.
    async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let document = self.fetcher.fetch_json(url).await?;
        serde_json::from_value(document)
            .map_err(|e| BotError::transport(format!("failed to parse response: {}", e)))
    }
}

fn resolve_region(query: &CharacterQuery) -> Result<&'static RegionInfo> {
    lookup_region(&query.region_alias).ok_or(BotError::RegionNotFound)
}
