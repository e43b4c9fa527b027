//! Command parsing and dispatch for raidscout.
//!
//! Parsing is kept separate from execution so argument handling can be
//! tested without any network collaborators.

pub mod dispatcher;
pub mod help;
pub mod queries;
pub mod router;
pub mod tokenizer;

pub use dispatcher::Dispatcher;
pub use help::help_text;
pub use queries::{parse_character_query, parse_raid_query, CharacterQuery, RaidQuery};
pub use router::{Command, CommandRouter};
pub use tokenizer::{normalize_realm_slug, parse_arguments, tokenize};
