use std::fmt;

use lcdaily_core::env::{first_non_empty, is_truthy};
use lcdaily_core::issue::GITHUB_API_URL;
use lcdaily_core::leetcode::LEETCODE_BASE_URL;

/// Job configuration, read once at startup and passed down by reference
#[derive(Clone, PartialEq)]
pub struct Config {
    pub debug: bool,
    /// Target repository in `owner/name` form
    pub repository: Option<String>,
    pub token: Option<String>,
    pub github_base_url: String,
    pub leetcode_base_url: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Uses GITHUB_TOKEN if set, otherwise falls back to LC_GH_TOKEN.
    /// Uses GITHUB_API_URL and LEETCODE_BASE_URL with public defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            debug: lookup("DEBUG").is_some_and(|value| is_truthy(&value)),
            repository: first_non_empty([lookup("GITHUB_REPOSITORY")]),
            token: first_non_empty([lookup("GITHUB_TOKEN"), lookup("LC_GH_TOKEN")]),
            github_base_url: first_non_empty([lookup("GITHUB_API_URL")])
                .unwrap_or_else(|| GITHUB_API_URL.to_string()),
            leetcode_base_url: first_non_empty([lookup("LEETCODE_BASE_URL")])
                .unwrap_or_else(|| LEETCODE_BASE_URL.to_string()),
        }
    }

    /// Apply CLI overrides to the configuration
    ///
    /// Blank values are ignored so an empty variable never clears a setting.
    pub fn with_overrides(mut self, global: &crate::Global) -> Self {
        if global.debug {
            self.debug = true;
        }
        if let Some(repository) = first_non_empty([global.repository.clone()]) {
            self.repository = Some(repository);
        }
        if let Some(token) = first_non_empty([global.token.clone()]) {
            self.token = Some(token);
        }
        if let Some(url) = first_non_empty([global.github_url.clone()]) {
            self.github_base_url = url;
        }
        if let Some(url) = first_non_empty([global.leetcode_url.clone()]) {
            self.leetcode_base_url = url;
        }
        self
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("debug", &self.debug)
            .field("repository", &self.repository)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("github_base_url", &self.github_base_url)
            .field("leetcode_base_url", &self.leetcode_base_url)
            .finish()
    }
}
