use crate::url::{session_url, DEFAULT_JUDGE_BASE_URL};

/// Transport configuration for one judge session channel.
#[derive(Debug, Clone)]
pub struct JudgeApiConfig {
    /// Base URL of the judge host; `http(s)` schemes are normalized to
    /// `ws(s)` when the endpoint is built.
    pub base_url: String,
    /// Contest identifier, first session path segment.
    pub contest_id: String,
    /// Problem identifier, second session path segment.
    pub problem_id: String,
}

impl Default for JudgeApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_JUDGE_BASE_URL.to_string(),
            contest_id: String::new(),
            problem_id: String::new(),
        }
    }
}

impl JudgeApiConfig {
    pub fn new(contest_id: impl Into<String>, problem_id: impl Into<String>) -> Self {
        Self {
            contest_id: contest_id.into(),
            problem_id: problem_id.into(),
            ..Self::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Full channel endpoint for this contest/problem pair.
    pub fn session_url(&self) -> String {
        session_url(&self.base_url, &self.contest_id, &self.problem_id)
    }
}
