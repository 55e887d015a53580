//! Issue creation through the GitHub REST API

use colored::Colorize;
use lcdaily_core::issue::{issues_url, CreatedIssue, IssueRequest, GITHUB_ACCEPT, GITHUB_API_VERSION};
use reqwest::StatusCode;

use crate::config::Config;
use crate::prelude::{println, *};

/// Create an authenticated HTTP client with the GitHub API headers
pub fn create_github_client(token: &str) -> std::result::Result<reqwest::Client, Error> {
    use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};

    let mut headers = HeaderMap::new();
    let mut auth = HeaderValue::from_str(&f!("Bearer {token}"))
        .map_err(|e| Error::Client(f!("Invalid header value: {}", e)))?;
    auth.set_sensitive(true);
    headers.insert(AUTHORIZATION, auth);
    headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));
    headers.insert(
        "x-github-api-version",
        HeaderValue::from_static(GITHUB_API_VERSION),
    );

    reqwest::Client::builder()
        .default_headers(headers)
        .user_agent(crate::USER_AGENT)
        .build()
        .map_err(|e| Error::Client(e.to_string()))
}

/// File an issue in the configured repository
///
/// Fails before any network call when the token or repository is missing.
/// Only HTTP 201 counts as success; anything else, 200 included, is reported
/// with its status and raw body.
pub async fn create_issue(
    config: &Config,
    issue: &IssueRequest,
) -> std::result::Result<CreatedIssue, Error> {
    log::debug!("👉  GITHUB_REPOSITORY: {:?}", config.repository);

    let Some(token) = config.token.as_deref().filter(|t| !t.trim().is_empty()) else {
        println!(
            "{}",
            "❌  Missing GitHub token. Set GITHUB_TOKEN or LC_GH_TOKEN.".red()
        );
        return Err(Error::MissingToken);
    };

    let Some(repository) = config
        .repository
        .as_deref()
        .filter(|r| !r.trim().is_empty())
    else {
        println!(
            "{}",
            "❌  Missing GitHub repository. Set GITHUB_REPOSITORY.".red()
        );
        return Err(Error::MissingRepository);
    };

    let url = issues_url(&config.github_base_url, repository);
    let client = create_github_client(token)?;

    if log::log_enabled!(log::Level::Debug) {
        log::debug!("👉  POSTing to {} with JSON payload:", url);
        log::debug!("{}", serde_json::to_string(issue).unwrap_or_default());
    }

    let response = client
        .post(&url)
        .json(issue)
        .send()
        .await
        .map_err(|source| Error::Transport {
            url: url.clone(),
            source,
        })?;

    let status = response.status();
    if status != StatusCode::CREATED {
        let body = response.text().await.unwrap_or_default();

        println!("{}", "❌  Could not create new Github issue!".red());
        println!("    Status Code: {}", status.as_u16());
        println!("    Response: {}", body);

        return Err(Error::UnexpectedStatus {
            service: "GitHub",
            status: status.as_u16(),
            url,
            body,
        });
    }

    // The issue exists from here on; a body we cannot read is not a failure
    let body = response.text().await.unwrap_or_else(|e| {
        log::warn!("Failed to read create issue response from {}: {}", url, e);
        String::new()
    });
    let created = CreatedIssue::from_response_body(&body);

    println!(
        "{} {}",
        "✅  Successfully created Issue".green(),
        created.summary()
    );
    log::debug!("👉  {}", body);

    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_server::{self, MockServer};
    use axum::http::StatusCode as MockStatus;
    use serde_json::json;

    fn issue() -> IssueRequest {
        IssueRequest {
            title: "LC Daily Problem #42. Trapping Rain Water".to_string(),
            body: "# 42. Trapping Rain Water\n".to_string(),
        }
    }

    fn config_for(base_url: &str, token: Option<&str>) -> Config {
        let mut config = Config::from_lookup(|_| None);
        config.github_base_url = base_url.to_string();
        config.repository = Some("octo/daily".to_string());
        config.token = token.map(str::to_string);
        config
    }

    #[tokio::test]
    async fn test_create_issue_success_on_201() {
        let server = MockServer::start(
            MockStatus::CREATED,
            mock_server::created_issue_json(7, "LC Daily Problem #42. Trapping Rain Water"),
        )
        .await;

        let created = create_issue(&config_for(&server.base_url, Some("ghp_test")), &issue())
            .await
            .unwrap();

        assert_eq!(created.number, Some(7));
        assert_eq!(
            created.title.as_deref(),
            Some("LC Daily Problem #42. Trapping Rain Water")
        );
        assert_eq!(
            created.html_url.as_deref(),
            Some("https://github.com/octo/daily/issues/7")
        );
    }

    #[tokio::test]
    async fn test_create_issue_sends_headers_and_payload() {
        let server =
            MockServer::start(MockStatus::CREATED, mock_server::created_issue_json(1, "t")).await;

        create_issue(&config_for(&server.base_url, Some("ghp_test")), &issue())
            .await
            .unwrap();

        let requests = server.requests();
        assert_eq!(requests.len(), 1);

        let request = &requests[0];
        assert_eq!(request.method, "POST");
        assert_eq!(request.path, "/repos/octo/daily/issues");
        assert_eq!(request.headers["authorization"], "Bearer ghp_test");
        assert_eq!(request.headers["accept"], "application/vnd.github+json");
        assert_eq!(request.headers["x-github-api-version"], "2022-11-28");
        assert!(request.headers.contains_key("user-agent"));
        assert_eq!(
            request.body,
            json!({
                "title": "LC Daily Problem #42. Trapping Rain Water",
                "body": "# 42. Trapping Rain Water\n"
            })
        );
    }

    #[tokio::test]
    async fn test_create_issue_without_token_skips_network() {
        let server =
            MockServer::start(MockStatus::CREATED, mock_server::created_issue_json(1, "t")).await;

        let err = create_issue(&config_for(&server.base_url, None), &issue())
            .await
            .unwrap_err();

        assert!(matches!(err, Error::MissingToken));
        assert!(server.requests().is_empty());
    }

    #[tokio::test]
    async fn test_create_issue_blank_token_skips_network() {
        let server =
            MockServer::start(MockStatus::CREATED, mock_server::created_issue_json(1, "t")).await;

        let err = create_issue(&config_for(&server.base_url, Some("  ")), &issue())
            .await
            .unwrap_err();

        assert!(matches!(err, Error::MissingToken));
        assert!(server.requests().is_empty());
    }

    #[tokio::test]
    async fn test_create_issue_without_repository_skips_network() {
        let server =
            MockServer::start(MockStatus::CREATED, mock_server::created_issue_json(1, "t")).await;
        let mut config = config_for(&server.base_url, Some("ghp_test"));
        config.repository = None;

        let err = create_issue(&config, &issue()).await.unwrap_err();

        assert!(matches!(err, Error::MissingRepository));
        assert!(server.requests().is_empty());
    }

    #[tokio::test]
    async fn test_create_issue_200_is_failure() {
        let server =
            MockServer::start(MockStatus::OK, mock_server::created_issue_json(1, "t")).await;

        let err = create_issue(&config_for(&server.base_url, Some("ghp_test")), &issue())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            Error::UnexpectedStatus {
                service: "GitHub",
                status: 200,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_create_issue_error_status_keeps_body() {
        let server = MockServer::start(
            MockStatus::UNPROCESSABLE_ENTITY,
            json!({ "message": "Validation Failed" }),
        )
        .await;

        let err = create_issue(&config_for(&server.base_url, Some("ghp_test")), &issue())
            .await
            .unwrap_err();

        match err {
            Error::UnexpectedStatus { status, body, .. } => {
                assert_eq!(status, 422);
                assert!(body.contains("Validation Failed"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_issue_201_without_title_is_success() {
        let server = MockServer::start(MockStatus::CREATED, json!({ "number": 7 })).await;

        let created = create_issue(&config_for(&server.base_url, Some("ghp_test")), &issue())
            .await
            .unwrap();

        assert_eq!(server.requests().len(), 1);
        assert_eq!(created.number, Some(7));
        assert_eq!(created.title, None);
    }

    #[tokio::test]
    async fn test_create_issue_201_with_unexpected_body_is_success() {
        let server = MockServer::start(MockStatus::CREATED, json!({ "id": 1 })).await;

        let created = create_issue(&config_for(&server.base_url, Some("ghp_test")), &issue())
            .await
            .unwrap();

        assert_eq!(created, CreatedIssue::default());
    }

    #[test]
    fn test_create_github_client_rejects_invalid_token() {
        let result = create_github_client("bad\ntoken");
        assert!(matches!(result, Err(Error::Client(_))));
    }
}
