//! Launch configuration: positional arguments plus environment overrides.

use std::io;
use std::path::PathBuf;

use judge_api::JudgeApiConfig;

/// Overrides the judge host; empty or unset means the library default.
pub const BASE_URL_ENV_VAR: &str = "VERDICT_TUI_BASE_URL";
/// Overrides the language identifier sent with every request.
pub const LANGUAGE_ENV_VAR: &str = "VERDICT_TUI_LANGUAGE";
/// Input used for test runs, taken verbatim.
pub const TEST_INPUT_ENV_VAR: &str = "VERDICT_TUI_TEST_INPUT";

pub const DEFAULT_LANGUAGE: &str = "cpp";

pub const USAGE: &str = "usage: verdict_tui <contest-id> <problem-id> <program-file>";

/// Everything one judging session is launched with.
///
/// The program text is deliberately not held here: it is re-read from
/// `program_file` at the moment of each request, so edits between runs are
/// picked up without restarting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub contest_id: String,
    pub problem_id: String,
    pub program_file: PathBuf,
    /// Base URL of the judge host; empty selects the library default.
    pub base_url: String,
    /// Sent verbatim; the server defines the vocabulary.
    pub language: String,
    /// Test-run stdin, whitespace and all.
    pub test_input: String,
}

impl SessionConfig {
    /// Parse the positional arguments (everything after the program name)
    /// and pick up the environment overrides.
    pub fn from_args<I>(args: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = String>,
    {
        Self::build(
            args,
            std::env::var(BASE_URL_ENV_VAR).ok(),
            std::env::var(LANGUAGE_ENV_VAR).ok(),
            std::env::var(TEST_INPUT_ENV_VAR).ok(),
        )
    }

    fn build<I>(
        args: I,
        base_url: Option<String>,
        language: Option<String>,
        test_input: Option<String>,
    ) -> Result<Self, String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let contest_id = required(args.next(), "contest-id")?;
        let problem_id = required(args.next(), "problem-id")?;
        let program_file = required(args.next(), "program-file")?;
        if let Some(extra) = args.next() {
            return Err(format!("unexpected argument: {extra}"));
        }

        Ok(Self {
            contest_id,
            problem_id,
            program_file: PathBuf::from(program_file),
            base_url: trimmed_or_empty(base_url),
            language: trimmed_or(language, DEFAULT_LANGUAGE),
            test_input: test_input.unwrap_or_default(),
        })
    }

    /// Transport configuration for this contest/problem pair.
    pub fn judge_api_config(&self) -> JudgeApiConfig {
        JudgeApiConfig::new(&self.contest_id, &self.problem_id).with_base_url(&self.base_url)
    }

    /// Program text, read fresh for each request.
    pub fn read_program(&self) -> io::Result<String> {
        std::fs::read_to_string(&self.program_file)
    }

    /// Short display name for the program file.
    pub fn program_name(&self) -> &str {
        self.program_file
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("program")
    }
}

fn required(arg: Option<String>, name: &str) -> Result<String, String> {
    match arg {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(format!("missing required argument: <{name}>")),
    }
}

fn trimmed_or_empty(raw: Option<String>) -> String {
    raw.map(|value| value.trim().to_string()).unwrap_or_default()
}

fn trimmed_or(raw: Option<String>, default: &str) -> String {
    match raw {
        Some(value) if !value.trim().is_empty() => value.trim().to_string(),
        _ => default.to_string(),
    }
}
