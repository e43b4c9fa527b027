//! In-memory collaborators for testing.
//!
//! Provide canned responses keyed on URL substrings and record every call,
//! so tests can assert how many requests a pipeline issued.

use async_trait::async_trait;
use std::sync::Mutex;

use super::{JsonFetcher, TokenSource};
use crate::aliases::lookup_region;
use crate::error::{BotError, Result};

/// Mock fetcher that returns canned documents based on URL patterns.
#[derive(Debug, Default)]
pub struct MockFetcher {
    /// Pattern → outcome mappings, checked in insertion order.
    responses: Vec<(String, Result<serde_json::Value>)>,
    /// URLs requested so far.
    calls: Mutex<Vec<String>>,
}

impl MockFetcher {
    /// Creates a fetcher with no canned responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `document` for any URL containing `pattern`.
    pub fn with_response(
        mut self,
        pattern: impl Into<String>,
        document: serde_json::Value,
    ) -> Self {
        self.responses.push((pattern.into(), Ok(document)));
        self
    }

    /// Fails with `error` for any URL containing `pattern`.
    pub fn with_error(mut self, pattern: impl Into<String>, error: BotError) -> Self {
        self.responses.push((pattern.into(), Err(error)));
        self
    }

    /// Returns the URLs requested so far.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl JsonFetcher for MockFetcher {
    async fn fetch_json(&self, url: &str) -> Result<serde_json::Value> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(url.to_string());
        }

        self.responses
            .iter()
            .find(|(pattern, _)| url.contains(pattern.as_str()))
            .map(|(_, outcome)| outcome.clone())
            .unwrap_or_else(|| Err(BotError::transport("404 Not Found")))
    }
}

/// Token source that hands out a fixed token for every known region.
#[derive(Debug)]
pub struct StaticTokenSource {
    token: String,
    /// When set, every request for a known region fails with this error.
    error: Option<BotError>,
    calls: Mutex<Vec<String>>,
}

impl StaticTokenSource {
    /// Creates a source that always returns `token`.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            error: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Creates a source whose token requests fail with `error`.
    pub fn failing(error: BotError) -> Self {
        Self {
            error: Some(error),
            ..Self::new("")
        }
    }

    /// Returns the region aliases tokens were requested for.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl TokenSource for StaticTokenSource {
    async fn bearer_token(&self, region_alias: &str) -> Result<String> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(region_alias.to_string());
        }

        if lookup_region(region_alias).is_none() {
            return Err(BotError::RegionNotFound);
        }
        match &self.error {
            Some(error) => Err(error.clone()),
            None => Ok(self.token.clone()),
        }
    }
}
