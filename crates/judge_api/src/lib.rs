//! Transport and protocol primitives for one live judging session.
//!
//! This crate owns the wire vocabulary exchanged with the judge, the pure
//! status-classification rules over it, and the duplex channel those frames
//! travel on. It contains no UI coupling and no session policy: deciding how
//! an update changes controller state is the caller's job.
//!
//! The wire contract is JSON text frames with verbatim discriminants
//! (`"judge"`, `"stateUpdate"`, `"notRun"`, ...); see [`messages`] and
//! [`job`]. Server payloads may carry extra fields (for example the judging
//! snapshot's redundant `complete` flag); decoding tolerates and drops them,
//! and completion is always recomputed locally via [`JobState::is_complete`].

pub mod channel;
pub mod config;
pub mod error;
pub mod job;
pub mod messages;
pub mod url;

pub use channel::JudgeChannel;
pub use config::JudgeApiConfig;
pub use error::JudgeApiError;
pub use job::{first_failure, CaseStatus, JobState, PresentationKind};
pub use messages::{decode_message, encode_request, WebSocketMessage, WebSocketRequest};
pub use url::{session_url, DEFAULT_JUDGE_BASE_URL};
