//! Terminal client for one live code-judging session.
//!
//! The client opens a single duplex channel to the judge (the [`judge_api`]
//! crate owns the wire protocol and the transport), submits the configured
//! program as a full judging run or an ad-hoc test run, and renders per-case
//! verdicts as they stream in until the run settles or the connection drops.
//!
//! # Layering
//! - [`session`] is the pure state machine; every visible effect leaves
//!   through its injected [`session::SessionOps`].
//! - [`runtime`] drives the channel and feeds the UI loop with
//!   [`runtime::SessionEvent`]s.
//! - [`tui`] owns the ratatui surface and the production `SessionOps`.
//! - [`config`] turns argv plus environment into a [`SessionConfig`].
//!
//! A lost connection is terminal: the session paints the disconnected
//! banner, ignores whatever still trickles in, and a new run takes a new
//! process.

pub mod config;
pub mod runtime;
pub mod session;
pub mod tui;

pub use config::SessionConfig;
pub use session::{Phase, Session, SessionOps};
