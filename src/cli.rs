//! Command-line argument parsing for raidscout.

use crate::config::{BlizzardOverrides, Config};
use clap::Parser;
use std::path::PathBuf;

/// World of Warcraft character and raid progress chat bot.
#[derive(Parser, Debug)]
#[command(name = "raidscout")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Dotenv file loaded before reading credentials from the environment
    #[arg(long, value_name = "PATH", default_value = "dev.env")]
    pub env_file: PathBuf,

    /// API client id (overrides config file and WOW_CLIENT_ID)
    #[arg(long, value_name = "ID")]
    pub client_id: Option<String>,

    /// API client secret (overrides config file and WOW_CLIENT_SECRET)
    #[arg(long, value_name = "SECRET")]
    pub client_secret: Option<String>,

    /// HTTP request timeout in seconds (overrides config file)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Returns the config file path, falling back to the platform default.
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(Config::default_path)
    }

    /// Returns the flags that were given explicitly, for merging over the file config.
    pub fn to_overrides(&self) -> BlizzardOverrides {
        BlizzardOverrides {
            client_id: self.client_id.clone(),
            client_secret: self.client_secret.clone(),
            timeout_secs: self.timeout,
        }
    }
}
