use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Public LeetCode site, used for the API endpoint and every rendered link
pub const LEETCODE_BASE_URL: &str = "https://leetcode.com";

/// GraphQL operation name sent alongside the query document
pub const DAILY_QUESTION_OPERATION: &str = "questionOfToday";

/// GraphQL query document for today's daily coding challenge
pub const DAILY_QUESTION_QUERY: &str = r#"
  query questionOfToday {
    activeDailyCodingChallengeQuestion {
      date
      link
      question {
        acRate
        codeDefinition
        content
        difficulty
        dislikes
        enableRunCode
        frontendQuestionId: questionFrontendId
        likes
        metaData
        sampleTestCase
        similarQuestions
        status
        stats
        title
        titleSlug
        topicTags {
          name
          id
          slug
        }
      }
    }
  }
"#;

/// Body of a GraphQL POST request
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlPayload<'a> {
    pub query: &'a str,
    pub operation_name: &'a str,
}

/// Build the request body that asks for today's question
pub fn daily_question_payload() -> GraphQlPayload<'static> {
    GraphQlPayload {
        query: DAILY_QUESTION_QUERY,
        operation_name: DAILY_QUESTION_OPERATION,
    }
}

/// GraphQL endpoint for a given site root (trailing slashes are ignored)
pub fn graphql_url(base_url: &str) -> String {
    format!("{}/graphql", base_url.trim_end_matches('/'))
}

/// Top-level GraphQL response envelope
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DailyChallengeResponse {
    pub data: DailyChallengeData,
}

impl DailyChallengeResponse {
    pub fn into_challenge(self) -> DailyChallenge {
        self.data.active_daily_coding_challenge_question
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DailyChallengeData {
    pub active_daily_coding_challenge_question: DailyChallenge,
}

/// Today's challenge: the date, the problem path and the question itself
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DailyChallenge {
    #[serde(default)]
    pub date: Option<String>,
    /// Site-relative problem path, e.g. `/problems/two-sum/`
    pub link: String,
    pub question: Question,
}

/// Question record as returned by the daily challenge query
///
/// Only the fields read by the issue formatter are required. The rest are
/// requested by the query and kept for the JSON preview, but nothing depends
/// on them.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub frontend_question_id: String,
    pub title: String,
    pub difficulty: Difficulty,
    pub ac_rate: f64,
    /// HTML statement; `null` for paid-only questions
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub topic_tags: Vec<TopicTag>,
    #[serde(default)]
    pub title_slug: Option<String>,
    #[serde(default)]
    pub code_definition: Option<String>,
    #[serde(default)]
    pub likes: Option<u64>,
    #[serde(default)]
    pub dislikes: Option<u64>,
    #[serde(default)]
    pub enable_run_code: Option<bool>,
    #[serde(default)]
    pub meta_data: Option<String>,
    #[serde(default)]
    pub sample_test_case: Option<String>,
    #[serde(default)]
    pub similar_questions: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub stats: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TopicTag {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub id: Option<String>,
    pub slug: String,
}

/// Problem difficulty level
///
/// LeetCode sends `"Easy"`, `"Medium"` or `"Hard"`; parsing ignores case.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(try_from = "String", into = "String")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Coloured marker shown in the issue's difficulty cell
    pub fn emoji(self) -> &'static str {
        match self {
            Difficulty::Easy => "🟢",
            Difficulty::Medium => "🟡",
            Difficulty::Hard => "🔴",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("Unknown difficulty: {}", other)),
        }
    }
}

impl TryFrom<String> for Difficulty {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Difficulty> for String {
    fn from(value: Difficulty) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
