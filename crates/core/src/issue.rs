//! GitHub issue rendering
//!
//! Pure functions that turn a [`DailyChallenge`] into the title and Markdown
//! body of a GitHub issue, plus the request/response models of the issue API.

use serde::{Deserialize, Serialize};

use crate::leetcode::{DailyChallenge, TopicTag};

/// Public GitHub REST API root
pub const GITHUB_API_URL: &str = "https://api.github.com";

/// Media type pinned in the `Accept` header
pub const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// REST API version sent as `X-GitHub-Api-Version`
pub const GITHUB_API_VERSION: &str = "2022-11-28";

/// Body of the create-issue request
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct IssueRequest {
    pub title: String,
    pub body: String,
}

/// Subset of the create-issue response that gets reported
///
/// Every field is optional: once GitHub answers 201 the issue exists, and an
/// unexpected response shape must not turn that into a failure.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct CreatedIssue {
    #[serde(default)]
    pub number: Option<u64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
}

impl CreatedIssue {
    /// Decode a create-issue response body, keeping whatever fields are present
    pub fn from_response_body(body: &str) -> Self {
        serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .map(|value| Self {
                number: value.get("number").and_then(|n| n.as_u64()),
                title: value
                    .get("title")
                    .and_then(|t| t.as_str())
                    .map(str::to_string),
                html_url: value
                    .get("html_url")
                    .and_then(|u| u.as_str())
                    .map(str::to_string),
            })
            .unwrap_or_default()
    }

    /// Summary line fragment, e.g. `#7: LC Daily Problem #1. Two Sum`
    pub fn summary(&self) -> String {
        let number = self
            .number
            .map(|n| n.to_string())
            .unwrap_or_else(|| "?".to_string());
        format!("#{}: {}", number, self.title.as_deref().unwrap_or("<untitled>"))
    }
}

/// Create-issue endpoint for an `owner/name` repository
pub fn issues_url(base_url: &str, repository: &str) -> String {
    format!(
        "{}/repos/{}/issues",
        base_url.trim_end_matches('/'),
        repository.trim_matches('/')
    )
}

/// Issue title, e.g. `LC Daily Problem #42. Trapping Rain Water`
pub fn issue_title(challenge: &DailyChallenge) -> String {
    let question = &challenge.question;
    format!(
        "LC Daily Problem #{}. {}",
        question.frontend_question_id, question.title
    )
}

/// Render a problem's topic tags as space separated Markdown links
///
/// Order follows the input: `#[array](https://leetcode.com/tag/array/) #[dp](...)`
pub fn format_tags(tags: &[TopicTag], base_url: &str) -> String {
    let tag_url = format!("{}/tag/", base_url.trim_end_matches('/'));

    tags.iter()
        .map(|tag| format!("#[{slug}]({tag_url}{slug}/)", slug = tag.slug))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render the Markdown issue body
///
/// Layout: heading, links row, difficulty/accept-rate table, tag line and the
/// problem statement verbatim. Nothing is escaped or truncated.
pub fn format_issue_body(challenge: &DailyChallenge, base_url: &str) -> String {
    let question = &challenge.question;
    let problem_url = format!("{}{}", base_url.trim_end_matches('/'), challenge.link);

    let mut body = format!("# {}. {}\n", question.frontend_question_id, question.title);

    body.push('\n');
    body.push_str(&format!("[🔗 Problem]({problem_url})"));
    body.push_str(&format!(" [🧵 Discussion]({problem_url}discuss/)"));
    body.push_str(&format!(" [🙋 Solution]({problem_url}solution/)\n"));

    body.push('\n');
    body.push_str(&format!("| Difficulty | {} |\n", question.difficulty.emoji()));
    body.push_str("| :-- | :-: |\n");
    body.push_str(&format!("| Accept Rate | {:.1}% |\n", question.ac_rate));

    body.push('\n');
    body.push_str(&format!(
        "🏷️  {}\n",
        format_tags(&question.topic_tags, base_url)
    ));

    body.push_str(question.content.as_deref().unwrap_or_default());
    body.push('\n');

    body
}

/// Build the complete create-issue request for a challenge
pub fn build_issue_request(challenge: &DailyChallenge, base_url: &str) -> IssueRequest {
    IssueRequest {
        title: issue_title(challenge),
        body: format_issue_body(challenge, base_url),
    }
}
