//! Expansion aliases.
//!
//! The ordinal of an expansion is its position in the API's chronological
//! expansion list. Ordinals start at 0, are never reassigned, and new
//! expansions are appended at the end.

use std::collections::HashMap;
use std::sync::LazyLock;

/// A World of Warcraft expansion, in release order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Expansion {
    Classic,
    BurningCrusade,
    WrathOfTheLichKing,
    Cataclysm,
    MistsOfPandaria,
    WarlordsOfDraenor,
    Legion,
    BattleForAzeroth,
    Shadowlands,
    Dragonflight,
    TheWarWithin,
}

impl Expansion {
    /// All expansions in ordinal order.
    pub const ALL: [Expansion; 11] = [
        Self::Classic,
        Self::BurningCrusade,
        Self::WrathOfTheLichKing,
        Self::Cataclysm,
        Self::MistsOfPandaria,
        Self::WarlordsOfDraenor,
        Self::Legion,
        Self::BattleForAzeroth,
        Self::Shadowlands,
        Self::Dragonflight,
        Self::TheWarWithin,
    ];

    /// Returns the 0-based position of this expansion in the API's list.
    pub fn ordinal(self) -> usize {
        self as usize
    }

    /// Returns the full expansion title.
    pub fn title(self) -> &'static str {
        match self {
            Self::Classic => "Classic",
            Self::BurningCrusade => "The Burning Crusade",
            Self::WrathOfTheLichKing => "Wrath of the Lich King",
            Self::Cataclysm => "Cataclysm",
            Self::MistsOfPandaria => "Mists of Pandaria",
            Self::WarlordsOfDraenor => "Warlords of Draenor",
            Self::Legion => "Legion",
            Self::BattleForAzeroth => "Battle for Azeroth",
            Self::Shadowlands => "Shadowlands",
            Self::Dragonflight => "Dragonflight",
            Self::TheWarWithin => "The War Within",
        }
    }
}

impl std::fmt::Display for Expansion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

static EXPANSIONS: LazyLock<HashMap<&'static str, Expansion>> = LazyLock::new(|| {
    use Expansion::*;
    HashMap::from([
        ("classic", Classic),
        ("vanilla", Classic),
        ("tbc", BurningCrusade),
        ("bc", BurningCrusade),
        ("wrath", WrathOfTheLichKing),
        ("wotlk", WrathOfTheLichKing),
        ("lich king", WrathOfTheLichKing),
        ("cataclysm", Cataclysm),
        ("cata", Cataclysm),
        ("mop", MistsOfPandaria),
        ("mists", MistsOfPandaria),
        ("pandaria", MistsOfPandaria),
        ("wod", WarlordsOfDraenor),
        ("warlords", WarlordsOfDraenor),
        ("draenor", WarlordsOfDraenor),
        ("legion", Legion),
        ("bfa", BattleForAzeroth),
        ("battle", BattleForAzeroth),
        ("shadowlands", Shadowlands),
        ("sl", Shadowlands),
        ("dragonflight", Dragonflight),
        ("df", Dragonflight),
        ("tww", TheWarWithin),
        ("war within", TheWarWithin),
    ])
});

/// Looks up an expansion by its lowercase alias.
pub fn lookup_expansion(alias: &str) -> Option<Expansion> {
    EXPANSIONS.get(alias).copied()
}

/// Looks up the ordinal of an expansion by its lowercase alias.
pub fn lookup_expansion_ordinal(alias: &str) -> Option<usize> {
    lookup_expansion(alias).map(Expansion::ordinal)
}
