//! URL construction for profile API requests.
//!
//! Slugs are embedded as given; no further escaping is applied.

use crate::aliases::RegionInfo;
use crate::commands::CharacterQuery;

fn character_path(query: &CharacterQuery, region: &RegionInfo) -> String {
    format!(
        "https://{}.api.blizzard.com/profile/wow/character/{}/{}",
        region.abbreviation, query.realm_slug, query.character_slug,
    )
}

fn query_params(region: &RegionInfo, access_token: &str) -> String {
    format!(
        "?namespace={}&locale={}&access_token={}",
        region.namespace, region.locale, access_token,
    )
}

/// Returns the character profile summary URL.
pub fn character_profile_url(
    query: &CharacterQuery,
    region: &RegionInfo,
    access_token: &str,
) -> String {
    character_path(query, region) + &query_params(region, access_token)
}

/// Returns the raid encounters URL for a character.
pub fn raid_profile_url(query: &CharacterQuery, region: &RegionInfo, access_token: &str) -> String {
    character_path(query, region) + "/encounters/raids" + &query_params(region, access_token)
}

/// Returns the OAuth token endpoint for a region alias.
pub fn oauth_token_url(region_alias: &str) -> String {
    format!("https://{}.battle.net/oauth/token", region_alias)
}
