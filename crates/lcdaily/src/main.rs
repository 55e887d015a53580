use crate::config::Config;
use crate::prelude::*;
use clap::Parser;
use std::path::PathBuf;

mod config;
mod error;
mod github;
mod job;
mod leetcode;
mod prelude;
mod preview;

#[cfg(test)]
mod mock_server;

/// Sent on every outbound request; GitHub rejects requests without one
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "File the LeetCode daily coding challenge as a GitHub issue"
)]
pub struct App {
    #[command(subcommand)]
    pub command: Option<SubCommands>,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Enable verbose logging
    #[clap(
        long,
        env = "DEBUG",
        global = true,
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    debug: bool,

    /// Target repository in owner/name form
    #[clap(long, env = "GITHUB_REPOSITORY", global = true)]
    repository: Option<String>,

    /// GitHub token [default: $GITHUB_TOKEN, then $LC_GH_TOKEN]
    #[clap(long, global = true, hide = true)]
    token: Option<String>,

    /// GitHub REST API root [default: https://api.github.com]
    #[clap(long, env = "GITHUB_API_URL", global = true)]
    github_url: Option<String>,

    /// LeetCode site root [default: https://leetcode.com]
    #[clap(long, env = "LEETCODE_BASE_URL", global = true)]
    leetcode_url: Option<String>,
}

#[derive(Debug, clap::Subcommand)]
pub enum SubCommands {
    /// Fetch today's question and file it as an issue (default)
    Publish,

    /// Fetch today's question and print the issue without filing it
    Preview(crate::preview::PreviewOptions),
}

/// Filter to force on the logger; `None` leaves RUST_LOG in charge
fn forced_log_level(debug: bool, rust_log: Option<&str>) -> Option<log::LevelFilter> {
    if debug {
        Some(log::LevelFilter::Debug)
    } else if rust_log.is_some_and(|value| !value.trim().is_empty()) {
        None
    } else {
        Some(log::LevelFilter::Warn)
    }
}

fn init_logger(debug: bool) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let mut builder = env_logger::Builder::from_default_env();
    if let Some(level) = forced_log_level(debug, rust_log.as_deref()) {
        builder.filter_level(level);
    }
    builder.init();
}

/// Warning for a `.env` load failure; a missing file is not worth one
fn dotenv_warning(result: &std::result::Result<PathBuf, dotenvy::Error>) -> Option<String> {
    match result {
        Err(err) if !err.not_found() => Some(f!("Ignoring unreadable .env file: {}", err)),
        _ => None,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let dotenv = dotenvy::dotenv();
    color_eyre::install()?;

    let app = App::parse();
    let config = Config::from_env().with_overrides(&app.global);

    init_logger(config.debug);
    if let Some(warning) = dotenv_warning(&dotenv) {
        log::warn!("{}", warning);
    }
    log::debug!("{:?}", config);

    match app.command.unwrap_or(SubCommands::Publish) {
        SubCommands::Publish => crate::job::run(&config)
            .await
            .map(|_| ())
            .map_err(|err| eyre!(err)),
        SubCommands::Preview(options) => crate::preview::handler(options, &config).await,
    }
}
