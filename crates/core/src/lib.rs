//! Core library for lcdaily
//!
//! This crate implements the **Functional Core** of the lcdaily job,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`lcdaily_core`** (this crate): Pure transformation functions with zero I/O
//! - **`lcdaily`**: Configuration, HTTP calls and orchestration (the Imperative Shell)
//!
//! Everything in here can be tested with fixture data: the shell fetches the
//! daily question from LeetCode, hands the decoded record to this crate to build
//! the issue title and body, and posts the result to GitHub.
//!
//! # Module Organization
//!
//! - [`leetcode`]: GraphQL query document and the daily question models
//! - [`issue`]: Markdown issue rendering and the GitHub issue API models
//! - [`env`]: Parsing helpers for environment-provided settings
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use lcdaily_core::issue::{format_issue_body, issue_title};
//! use lcdaily_core::leetcode::{DailyChallengeResponse, LEETCODE_BASE_URL};
//!
//! let response: DailyChallengeResponse = serde_json::from_str(raw)?;
//! let challenge = response.into_challenge();
//!
//! let title = issue_title(&challenge);
//! let body = format_issue_body(&challenge, LEETCODE_BASE_URL);
//! ```

pub mod env;
pub mod issue;
pub mod leetcode;
