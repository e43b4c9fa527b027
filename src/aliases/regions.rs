//! Region aliases and the API metadata each one resolves to.

use std::collections::HashMap;
use std::sync::LazyLock;

/// API metadata for one supported region.
///
/// `abbreviation` selects the API host and is not always the alias it was
/// looked up by: `tw` is served from the `us` host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionInfo {
    /// Host abbreviation used in `{abbreviation}.api.blizzard.com`.
    pub abbreviation: &'static str,
    /// Human-readable region name.
    pub title: &'static str,
    /// Profile namespace query parameter.
    pub namespace: &'static str,
    /// Locale query parameter.
    pub locale: &'static str,
}

static REGIONS: LazyLock<HashMap<&'static str, RegionInfo>> = LazyLock::new(|| {
    HashMap::from([
        (
            "us",
            RegionInfo {
                abbreviation: "us",
                title: "UnitedStates",
                namespace: "profile-us",
                locale: "en_US",
            },
        ),
        (
            "eu",
            RegionInfo {
                abbreviation: "eu",
                title: "Europe",
                namespace: "profile-eu",
                locale: "en_GB",
            },
        ),
        (
            "kr",
            RegionInfo {
                abbreviation: "kr",
                title: "Korea",
                namespace: "profile-kr",
                locale: "ko_KR",
            },
        ),
        (
            "tw",
            RegionInfo {
                abbreviation: "us",
                title: "Taiwan",
                namespace: "profile-tw",
                locale: "zh_TW",
            },
        ),
        (
            "tcnw",
            RegionInfo {
                abbreviation: "cn",
                title: "China",
                namespace: "profile-cn",
                locale: "zh_CN",
            },
        ),
    ])
});

/// Looks up a region by its lowercase alias.
///
/// The match is exact; callers lowercase user input first.
pub fn lookup_region(alias: &str) -> Option<&'static RegionInfo> {
    REGIONS.get(alias)
}

/// Returns every supported region alias, sorted.
pub fn supported_region_aliases() -> Vec<&'static str> {
    let mut aliases: Vec<_> = REGIONS.keys().copied().collect();
    aliases.sort_unstable();
    aliases
}
