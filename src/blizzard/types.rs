//! Decoded profile API payloads.
//!
//! Only the fields that are rendered are modeled; everything else in the
//! response is ignored by serde. Missing objects decode to their defaults.

use serde::Deserialize;

/// A `{ "name": ... }` reference object as the API nests them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NamedRef {
    #[serde(default)]
    pub name: String,
}

/// Character profile summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CharacterProfile {
    pub name: String,
    pub faction: NamedRef,
    pub race: NamedRef,
    #[serde(rename = "character_class")]
    pub class: NamedRef,
    #[serde(rename = "active_spec")]
    pub specialization: NamedRef,
    pub guild: Option<NamedRef>,
    pub level: u32,
    #[serde(rename = "average_item_level")]
    pub item_level: u32,
}

impl CharacterProfile {
    /// Returns the guild name, or `None` when the character is unguilded.
    pub fn guild_name(&self) -> Option<&str> {
        self.guild
            .as_ref()
            .map(|g| g.name.as_str())
            .filter(|name| !name.is_empty())
    }
}

/// Raid encounter summary for a character.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RaidProfile {
    #[serde(default)]
    pub expansions: Vec<RaidExpansion>,
}

/// One expansion's worth of raid instances.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RaidExpansion {
    #[serde(default)]
    pub expansion: NamedRef,
    #[serde(default)]
    pub instances: Vec<RaidInstance>,
}

/// A raid instance and its per-difficulty progress.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RaidInstance {
    #[serde(default)]
    pub instance: NamedRef,
    #[serde(default)]
    pub modes: Vec<RaidMode>,
}

/// Progress on one difficulty of an instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RaidMode {
    #[serde(default)]
    pub difficulty: NamedRef,
    #[serde(default)]
    pub progress: RaidProgress,
}

/// Boss kill counts for one difficulty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct RaidProgress {
    #[serde(default)]
    pub completed_count: u32,
    #[serde(default)]
    pub total_count: u32,
}
