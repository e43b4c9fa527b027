//! Typed queries parsed from search commands.

use super::router::{CHAR_SEARCH_CMD, RAID_SEARCH_CMD};
use super::tokenizer::{normalize_realm_slug, parse_arguments};
use crate::error::{BotError, Result};

/// Arguments for a character profile lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterQuery {
    /// Character name as typed.
    pub character_slug: String,
    /// Region alias as typed; resolved against the region table later.
    pub region_alias: String,
    /// Normalized realm slug.
    pub realm_slug: String,
}

/// Arguments for a raid progress lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaidQuery {
    /// Expansion alias as typed; resolved against the expansion table later.
    pub expansion_alias: String,
    /// The character being looked up.
    pub character: CharacterQuery,
}

impl CharacterQuery {
    fn from_args(character: String, region: String, realm: &str) -> Self {
        Self {
            character_slug: character,
            region_alias: region,
            realm_slug: normalize_realm_slug(realm),
        }
    }
}

/// Parses `!char <character> <region> <realm>`.
pub fn parse_character_query(raw_line: &str) -> Result<CharacterQuery> {
    let args = parse_arguments(raw_line, CHAR_SEARCH_CMD, 3)?;
    let [character, region, realm]: [String; 3] =
        args.try_into().map_err(|_| BotError::Parse)?;

    Ok(CharacterQuery::from_args(character, region, &realm))
}

/// Parses `!raid <expansion> <character> <region> <realm>`.
pub fn parse_raid_query(raw_line: &str) -> Result<RaidQuery> {
    let args = parse_arguments(raw_line, RAID_SEARCH_CMD, 4)?;
    let [expansion, character, region, realm]: [String; 4] =
        args.try_into().map_err(|_| BotError::Parse)?;

    Ok(RaidQuery {
        expansion_alias: expansion,
        character: CharacterQuery::from_args(character, region, &realm),
    })
}
