//! The daily job: fetch today's question, render it, file it as an issue

use colored::Colorize;
use lcdaily_core::issue::{build_issue_request, CreatedIssue};

use crate::config::Config;
use crate::github::create_issue;
use crate::leetcode::{create_leetcode_client, fetch_daily_challenge, fetch_status_lines};
use crate::prelude::{println, *};

/// Run the fetch → format → publish chain, stopping at the first failure
pub async fn run(config: &Config) -> std::result::Result<CreatedIssue, Error> {
    let client = create_leetcode_client()?;
    let fetched = fetch_daily_challenge(&client, config).await;

    let lines = fetch_status_lines(&fetched);
    if let Some((first, details)) = lines.split_first() {
        let first = if fetched.is_ok() {
            first.as_str().green()
        } else {
            first.as_str().red()
        };
        println!("{}", first);
        for line in details {
            println!("{}", line);
        }
    }

    let challenge = fetched?;

    let issue = build_issue_request(&challenge, &config.leetcode_base_url);

    println!("ℹ️   github_issue_title: {}", issue.title);
    log::debug!("👉  github_issue_body:\n{}", issue.body);

    create_issue(config, &issue).await
}
