//! Daily question fetch from the LeetCode GraphQL API

use lcdaily_core::leetcode::{
    daily_question_payload, graphql_url, DailyChallenge, DailyChallengeResponse,
};
use reqwest::StatusCode;

use crate::config::Config;
use crate::prelude::*;

/// Create the HTTP client used for LeetCode queries
pub fn create_leetcode_client() -> std::result::Result<reqwest::Client, Error> {
    reqwest::Client::builder()
        .user_agent(crate::USER_AGENT)
        .build()
        .map_err(|e| Error::Client(e.to_string()))
}

/// Query today's daily coding challenge
///
/// Only HTTP 200 counts as success. Any other status is returned as
/// [`Error::UnexpectedStatus`] carrying the query URL. Nothing is printed here;
/// callers report the outcome with [`fetch_status_lines`].
pub async fn fetch_daily_challenge(
    client: &reqwest::Client,
    config: &Config,
) -> std::result::Result<DailyChallenge, Error> {
    let url = graphql_url(&config.leetcode_base_url);

    let response = client
        .post(&url)
        .json(&daily_question_payload())
        .send()
        .await
        .map_err(|source| Error::Transport {
            url: url.clone(),
            source,
        })?;

    let status = response.status();
    if status != StatusCode::OK {
        let body = response.text().await.unwrap_or_default();
        return Err(Error::UnexpectedStatus {
            service: "LeetCode",
            status: status.as_u16(),
            url,
            body,
        });
    }

    let body = response.text().await.map_err(|source| Error::Transport {
        url: url.clone(),
        source,
    })?;
    log::debug!("Leetcode response: {}", body);

    let parsed: DailyChallengeResponse =
        serde_json::from_str(&body).map_err(|source| Error::Decode {
            what: "LeetCode daily question response",
            source,
        })?;

    Ok(parsed.into_challenge())
}

/// Console report for a fetch outcome
///
/// The first line carries the ✅/❌ marker; any further lines are details.
pub fn fetch_status_lines(result: &std::result::Result<DailyChallenge, Error>) -> Vec<String> {
    match result {
        Ok(_) => vec![f!(
            "✅  Leetcode Query Response Status Code: {}",
            StatusCode::OK.as_u16()
        )],
        Err(Error::UnexpectedStatus { status, url, .. }) => vec![
            f!("❌  Leetcode Response Status Code: {}", status),
            f!("    Leetcode Query URL: {}", url),
        ],
        Err(err) => vec![f!("❌  Leetcode query failed: {}", err)],
    }
}
