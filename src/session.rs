//! Session state machine for one judge channel.
//!
//! The machine owns no I/O. Channel lifecycle, server messages, and user
//! intents arrive as `on_*` calls; everything observable leaves through the
//! injected [`SessionOps`]. This keeps the whole run lifecycle testable with
//! a recording fake.

use judge_api::{first_failure, JobState, PresentationKind, WebSocketMessage, WebSocketRequest};
use tracing::{debug, warn};

/// In-progress banner shown while any case can still make progress.
pub const SUMMARY_RUNNING: &str = "Running...";
/// Judging banner when the whole battery settled without a failure.
pub const SUMMARY_ALL_PASSED: &str = "All cases passed";
/// Testing banner when the trial settled on anything but a failure.
pub const SUMMARY_TEST_FINISHED: &str = "Test finished";
/// Testing banner when the trial settled on a failure; the output panel
/// carries the diagnostic.
pub const SUMMARY_TEST_FAILED: &str = "Test failed";
/// Terminal banner once the channel is gone.
pub const SUMMARY_DISCONNECTED: &str = "Connection to the judge was lost";

/// Where one session is in its connection and run lifecycle.
///
/// `Running` and `Settled` carry the last adopted [`JobState`], so a run
/// phase without a job snapshot is unrepresentable.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    /// Construction state, before the transport driver starts connecting.
    Idle,
    /// The driver is opening the channel; nothing can be submitted yet.
    Connecting,
    /// Channel open, no run in flight, controls enabled.
    Awaiting,
    /// A request went out. `accepted` flips when `runStarted` arrives while
    /// the first snapshot is still outstanding.
    RunPending { accepted: bool },
    /// The latest snapshot is not complete; more updates are expected.
    Running { job: JobState },
    /// The latest snapshot is complete and controls are re-enabled.
    Settled { job: JobState },
    /// The channel closed, for whatever reason. Terminal: a fresh run needs
    /// a fresh session and channel.
    Disconnected,
}

impl Phase {
    /// Short status word for the header line.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Connecting => "connecting",
            Self::Awaiting => "ready",
            Self::RunPending { accepted: false } => "submitting",
            Self::RunPending { accepted: true } => "starting",
            Self::Running { .. } => "running",
            Self::Settled { .. } => "settled",
            Self::Disconnected => "disconnected",
        }
    }
}

/// The five side effects a session is allowed to drive.
///
/// Apart from `send_request`, every effect is a pure repaint: re-applying
/// the same job snapshot must leave the surface looking the same, so a
/// duplicate terminal update is harmless.
pub trait SessionOps {
    /// Hand one outbound request to the transport. `Err` means the transport
    /// already gave up on the channel; the session stays where it is and
    /// waits for the close event.
    fn send_request(&mut self, request: &WebSocketRequest) -> Result<(), String>;

    /// Paint the indicator for one case slot, keyed by battery index.
    fn set_case_indicator(&mut self, index: usize, presentation: PresentationKind);

    /// Replace the summary banner. The surface shows one message at a time.
    fn set_summary(&mut self, presentation: PresentationKind, text: &str);

    /// Replace the test-output panel contents.
    fn set_output(&mut self, text: &str);

    /// Enable or disable the judge/test controls.
    fn set_controls_enabled(&mut self, enabled: bool);
}

/// State machine driving one judge session.
///
/// Snapshots are adopted wholesale: a `stateUpdate` replaces whatever job
/// the session held before, nothing is merged case-by-case. Messages that
/// arrive in a phase that cannot use them are logged and dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub phase: Phase,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self { phase: Phase::Idle }
    }

    /// Live job snapshot, when the current run has one.
    pub fn job(&self) -> Option<&JobState> {
        match &self.phase {
            Phase::Running { job } | Phase::Settled { job } => Some(job),
            _ => None,
        }
    }

    /// The transport driver began opening the channel.
    pub fn on_connect_started(&mut self) {
        if self.phase != Phase::Idle {
            warn!(phase = self.phase.label(), "connect started more than once");
            return;
        }
        self.phase = Phase::Connecting;
    }

    /// The channel is open: the judge will now take run requests.
    pub fn on_channel_open(&mut self, ops: &mut dyn SessionOps) {
        if self.phase != Phase::Connecting {
            warn!(phase = self.phase.label(), "channel opened in an unexpected phase");
            return;
        }
        debug!("channel open");
        self.phase = Phase::Awaiting;
        ops.set_controls_enabled(true);
    }

    /// Submit the program against the problem's full case battery.
    pub fn on_judge(&mut self, ops: &mut dyn SessionOps, program: String, language: String) {
        self.submit(ops, WebSocketRequest::Judge { program, language });
    }

    /// Run the program once against an ad-hoc input.
    pub fn on_test(
        &mut self,
        ops: &mut dyn SessionOps,
        program: String,
        language: String,
        input: String,
    ) {
        self.submit(ops, WebSocketRequest::Test { program, language, input });
    }

    fn submit(&mut self, ops: &mut dyn SessionOps, request: WebSocketRequest) {
        if !matches!(self.phase, Phase::Awaiting | Phase::Settled { .. }) {
            debug!(phase = self.phase.label(), "run request rejected locally");
            return;
        }

        if let Err(error) = ops.send_request(&request) {
            // The channel is already dying; its close event does the real
            // transition.
            warn!(%error, "could not hand the request to the transport");
            return;
        }

        // Entering RunPending drops any settled job from the previous run.
        self.phase = Phase::RunPending { accepted: false };
        ops.set_controls_enabled(false);
    }

    /// Apply one decoded server message.
    pub fn on_message(&mut self, ops: &mut dyn SessionOps, message: WebSocketMessage) {
        if self.phase == Phase::Disconnected {
            debug!("dropping a message that raced the close");
            return;
        }

        match message {
            WebSocketMessage::RunStarted => self.on_run_started(),
            WebSocketMessage::RunDenied { reason } => self.on_run_denied(ops, &reason),
            WebSocketMessage::StateUpdate { state } => self.on_state_update(ops, state),
            WebSocketMessage::Invalid { error } => {
                // A client/server mismatch, not a run outcome.
                warn!(%error, "server could not parse our request");
            }
        }
    }

    fn on_run_started(&mut self) {
        match &mut self.phase {
            Phase::RunPending { accepted } => {
                debug!("run accepted");
                *accepted = true;
            }
            phase => warn!(phase = phase.label(), "runStarted with no pending run"),
        }
    }

    fn on_run_denied(&mut self, ops: &mut dyn SessionOps, reason: &str) {
        if !matches!(self.phase, Phase::RunPending { .. }) {
            warn!(phase = self.phase.label(), reason, "runDenied with no pending run");
            return;
        }

        debug!(reason, "run denied");
        self.phase = Phase::Awaiting;
        ops.set_controls_enabled(true);
        ops.set_summary(PresentationKind::Error, reason);
    }

    fn on_state_update(&mut self, ops: &mut dyn SessionOps, job: JobState) {
        match self.phase {
            // The server replays live state right after the open, and a late
            // duplicate after settling is just a repaint. Both take the
            // normal adoption path.
            Phase::Awaiting
            | Phase::RunPending { .. }
            | Phase::Running { .. }
            | Phase::Settled { .. } => self.adopt(ops, job),
            Phase::Idle | Phase::Connecting | Phase::Disconnected => {
                warn!(phase = self.phase.label(), "stateUpdate with no usable channel");
            }
        }
    }

    /// Adopt one snapshot wholesale and repaint everything it covers.
    fn adopt(&mut self, ops: &mut dyn SessionOps, job: JobState) {
        match &job {
            JobState::Judging { cases } => {
                for (index, case) in cases.iter().enumerate() {
                    ops.set_case_indicator(index, case.presentation());
                }
            }
            JobState::Testing { status } => {
                ops.set_case_indicator(0, status.presentation());
            }
        }

        if job.is_complete() {
            render_settled(ops, &job);
            ops.set_controls_enabled(true);
            self.phase = Phase::Settled { job };
        } else {
            ops.set_summary(PresentationKind::Loading, SUMMARY_RUNNING);
            ops.set_controls_enabled(false);
            self.phase = Phase::Running { job };
        }
    }

    /// The channel closed, whatever the cause. Terminal.
    pub fn on_disconnect(&mut self, ops: &mut dyn SessionOps) {
        if self.phase == Phase::Disconnected {
            return;
        }

        debug!(phase = self.phase.label(), "channel closed");
        self.phase = Phase::Disconnected;
        ops.set_controls_enabled(false);
        ops.set_summary(PresentationKind::Error, SUMMARY_DISCONNECTED);
    }
}

fn render_settled(ops: &mut dyn SessionOps, job: &JobState) {
    match job {
        JobState::Judging { cases } => match first_failure(cases) {
            Some((index, content)) => {
                debug!(case = index, "judging settled on a failure");
                ops.set_summary(PresentationKind::Error, content);
            }
            None => {
                debug!("judging settled clean");
                ops.set_summary(PresentationKind::Success, SUMMARY_ALL_PASSED);
            }
        },
        JobState::Testing { status } => {
            if let Some(content) = status.content() {
                ops.set_output(content);
            }
            if status.presentation() == PresentationKind::Error {
                ops.set_summary(PresentationKind::Error, SUMMARY_TEST_FAILED);
            } else {
                ops.set_summary(PresentationKind::Success, SUMMARY_TEST_FINISHED);
            }
        }
    }
}
