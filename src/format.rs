//! Rendering of decoded profiles into chat replies.
//!
//! Output uses chat markdown (`**bold**`). Rendering is a pure function of
//! the payload; nothing is re-sorted.

use std::fmt::Write;

use crate::aliases::lookup_expansion_ordinal;
use crate::blizzard::{CharacterProfile, RaidProfile};
use crate::error::{BotError, Result};

/// Guild text shown for characters without a guild.
const NO_GUILD: &str = "none";

/// Renders a character summary as three labelled lines.
pub fn format_character_profile(profile: &CharacterProfile) -> String {
    format!(
        "**Character:** {} {} {} {} {} {} \n**Guild:** {} \n**Item level:** {}\n",
        profile.name,
        profile.level,
        profile.faction.name,
        profile.race.name,
        profile.specialization.name,
        profile.class.name,
        profile.guild_name().unwrap_or(NO_GUILD),
        profile.item_level,
    )
}

/// Renders raid progress for the expansion at `ordinal`.
///
/// The expansions list only holds expansions the character has raided in,
/// so an ordinal past its end means [`BotError::NoProgress`].
pub fn format_raid_profile(profile: &RaidProfile, ordinal: usize) -> Result<String> {
    let expansion = profile.expansions.get(ordinal).ok_or(BotError::NoProgress)?;

    let mut msg = String::new();
    for instance in &expansion.instances {
        let _ = writeln!(msg, "**{}**", instance.instance.name);
        for mode in &instance.modes {
            let _ = writeln!(
                msg,
                "• {} {}/{}",
                mode.difficulty.name, mode.progress.completed_count, mode.progress.total_count
            );
        }
        msg.push('\n');
    }
    Ok(msg)
}

/// Resolves `expansion_alias` and renders that expansion's raid progress.
pub fn format_raid_progress(profile: &RaidProfile, expansion_alias: &str) -> Result<String> {
    let ordinal = lookup_expansion_ordinal(expansion_alias).ok_or(BotError::ExpansionNotFound)?;
    format_raid_profile(profile, ordinal)
}
