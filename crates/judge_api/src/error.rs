use std::fmt;

use serde_json::Error as JsonError;
use tokio_tungstenite::tungstenite::Error as WsError;

#[derive(Debug)]
pub enum JudgeApiError {
    MissingContestId,
    MissingProblemId,
    Transport(WsError),
    Serde(JsonError),
}

impl fmt::Display for JudgeApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingContestId => write!(f, "contest id is required"),
            Self::MissingProblemId => write!(f, "problem id is required"),
            Self::Transport(error) => write!(f, "transport error: {error}"),
            Self::Serde(error) => write!(f, "serialization error: {error}"),
        }
    }
}

impl std::error::Error for JudgeApiError {}

impl From<WsError> for JudgeApiError {
    fn from(error: WsError) -> Self {
        Self::Transport(error)
    }
}

impl From<JsonError> for JudgeApiError {
    fn from(error: JsonError) -> Self {
        Self::Serde(error)
    }
}
