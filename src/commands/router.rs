//! Command routing for raidscout.
//!
//! Recognizes bot commands by prefix. Matching is case-insensitive: the
//! whole line is lowercased before it is routed, and the lowercased text is
//! what the handlers parse.

/// Character every bot command starts with.
pub const CMD_PREFIX: &str = "!";

/// Help command.
pub const HELP_CMD: &str = "!help";

/// Character profile search command.
pub const CHAR_SEARCH_CMD: &str = "!char";

/// Raid progress search command.
pub const RAID_SEARCH_CMD: &str = "!raid";

/// A recognized bot command carrying the lowercased input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show usage.
    Help,
    /// Look up a character profile.
    CharacterSearch(String),
    /// Look up raid progress for a character.
    RaidSearch(String),
}

impl Command {
    /// Returns the command name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Help => HELP_CMD,
            Self::CharacterSearch(_) => CHAR_SEARCH_CMD,
            Self::RaidSearch(_) => RAID_SEARCH_CMD,
        }
    }
}

/// Command router for parsing user input.
pub struct CommandRouter;

impl CommandRouter {
    /// Parses a chat line into a command.
    ///
    /// Returns `None` for lines that are not bot commands; those are ignored.
    pub fn parse(input: &str) -> Option<Command> {
        let line = input.to_lowercase();

        if !line.starts_with(CMD_PREFIX) {
            return None;
        }

        if line.starts_with(HELP_CMD) {
            Some(Command::Help)
        } else if line.starts_with(CHAR_SEARCH_CMD) {
            Some(Command::CharacterSearch(line))
        } else if line.starts_with(RAID_SEARCH_CMD) {
            Some(Command::RaidSearch(line))
        } else {
            None
        }
    }
}
