/// Failures of the fetch and publish steps
///
/// Each variant is reported to the console where it happens; the value only
/// carries enough context for the final error report.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{service} responded with status {status} for {url}")]
    UnexpectedStatus {
        service: &'static str,
        status: u16,
        url: String,
        body: String,
    },

    #[error("Missing GitHub token. Set GITHUB_TOKEN or LC_GH_TOKEN.")]
    MissingToken,

    #[error("Missing GitHub repository. Set GITHUB_REPOSITORY (owner/name).")]
    MissingRepository,

    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to decode {what}: {source}")]
    Decode {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}
