//! raidscout - World of Warcraft character and raid progress chat bot.

use std::sync::Arc;

use anyhow::Context;
use raidscout::blizzard::{HttpFetcher, OAuthTokenSource};
use raidscout::cli::Cli;
use raidscout::commands::Dispatcher;
use raidscout::config::Config;
use raidscout::error::BotError;
use raidscout::{console, logging};
use tokio::io::BufReader;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let cli = Cli::parse_args();
    logging::init_stderr_logging(cli.verbose);

    if let Err(e) = run(cli).await {
        match e.downcast_ref::<BotError>() {
            Some(bot_err) => error!("{}: {}", bot_err.category(), bot_err),
            None => error!("{:#}", e),
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // Credentials may come from a dotenv file; a missing file is fine
    match dotenvy::from_path(&cli.env_file) {
        Ok(()) => info!("Loaded environment from {}", cli.env_file.display()),
        Err(e) if e.not_found() => {}
        Err(e) => {
            return Err(e).with_context(|| format!("failed to load {}", cli.env_file.display()))
        }
    }

    let config_path = cli.config_path();
    info!("Loading config from: {}", config_path.display());
    let mut config = Config::load_from_file(&config_path)?;

    // CLI > config file > environment
    config.blizzard.merge(&cli.to_overrides());
    config.blizzard.apply_env_defaults();

    let fetcher = HttpFetcher::new(config.blizzard.timeout_secs)?;
    let tokens = OAuthTokenSource::from_config(&config.blizzard)?;
    let dispatcher = Arc::new(Dispatcher::new(Arc::new(fetcher), Arc::new(tokens)));

    info!("Bot is now running. Type !help for usage, Ctrl-D to exit.");
    let stdin = BufReader::new(tokio::io::stdin());
    console::serve(dispatcher, stdin, tokio::io::stdout())
        .await
        .context("console transport failed")?;

    info!("Input closed, shutting down");
    Ok(())
}
