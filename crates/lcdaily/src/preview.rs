//! Fetch and render today's issue without filing it

use lcdaily_core::issue::build_issue_request;
use lcdaily_core::leetcode::DailyChallenge;
use serde::Serialize;

use crate::config::Config;
use crate::leetcode::{create_leetcode_client, fetch_daily_challenge};
use crate::prelude::{println, *};

/// Print the issue that would be filed today
#[derive(Debug, clap::Args, Clone)]
pub struct PreviewOptions {
    /// Output the question, title and body as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
pub struct PreviewOutput {
    pub title: String,
    pub body: String,
    pub challenge: DailyChallenge,
}

/// Build the preview without printing it
pub async fn preview_data(config: &Config) -> Result<PreviewOutput> {
    let client = create_leetcode_client()?;
    let challenge = fetch_daily_challenge(&client, config).await?;
    let issue = build_issue_request(&challenge, &config.leetcode_base_url);

    Ok(PreviewOutput {
        title: issue.title,
        body: issue.body,
        challenge,
    })
}

/// Render the preview for stdout, either as JSON or as title + body
pub fn format_output(output: &PreviewOutput, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(output)?)
    } else {
        Ok(f!("{}\n\n{}", output.title, output.body))
    }
}

/// CLI handler for the preview command
pub async fn handler(options: PreviewOptions, config: &Config) -> Result<()> {
    let output = preview_data(config).await?;
    println!("{}", format_output(&output, options.json)?);

    Ok(())
}
