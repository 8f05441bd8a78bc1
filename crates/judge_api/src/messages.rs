use serde::{Deserialize, Serialize};

use crate::error::JudgeApiError;
use crate::job::JobState;

/// Client → server request, tagged by run kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum WebSocketRequest {
    /// Submit `program` against the problem's full case battery.
    Judge { program: String, language: String },
    /// Run `program` once against an ad-hoc `input`.
    Test {
        program: String,
        language: String,
        input: String,
    },
}

impl WebSocketRequest {
    pub fn program(&self) -> &str {
        match self {
            Self::Judge { program, .. } | Self::Test { program, .. } => program,
        }
    }

    pub fn language(&self) -> &str {
        match self {
            Self::Judge { language, .. } | Self::Test { language, .. } => language,
        }
    }
}

/// Server → client message, tagged by message kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum WebSocketMessage {
    /// Full replacement snapshot of the live job.
    StateUpdate { state: JobState },
    /// The last request was accepted and execution began.
    RunStarted,
    /// The last request was rejected; `reason` is server-authored free text
    /// surfaced verbatim.
    RunDenied { reason: String },
    /// The server could not parse the last request. Signals a protocol
    /// defect, never a run outcome.
    Invalid { error: String },
}

/// Serialize an outbound request into a text frame body.
pub fn encode_request(request: &WebSocketRequest) -> Result<String, JudgeApiError> {
    Ok(serde_json::to_string(request)?)
}

/// Decode an inbound text frame into a server message.
pub fn decode_message(text: &str) -> Result<WebSocketMessage, JudgeApiError> {
    Ok(serde_json::from_str(text)?)
}
