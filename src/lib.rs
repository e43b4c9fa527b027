//! raidscout - World of Warcraft character and raid progress chat bot.
//!
//! This library exposes the core modules for use in integration tests.

pub mod aliases;
pub mod blizzard;
pub mod cli;
pub mod commands;
pub mod config;
pub mod console;
pub mod error;
pub mod format;
pub mod logging;
