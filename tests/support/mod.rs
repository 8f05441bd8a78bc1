#![allow(dead_code)]

use judge_api::{PresentationKind, WebSocketRequest};
use verdict_tui::session::SessionOps;
use verdict_tui::Session;

/// Recording surface for session tests.
///
/// Keeps the raw effect log for call-level assertions, and can replay it
/// into the latest visible result so idempotence checks compare what a user
/// would actually see.
#[derive(Debug, Default)]
pub struct SurfaceTrace {
    pub sent: Vec<WebSocketRequest>,
    pub indicator_calls: Vec<(usize, PresentationKind)>,
    pub summary_calls: Vec<(PresentationKind, String)>,
    pub output_calls: Vec<String>,
    pub controls_calls: Vec<bool>,
    /// When set, `send_request` reports a dead transport.
    pub fail_sends: bool,
}

/// Latest value of each surface element after replaying the effect log.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VisibleSurface {
    pub indicators: Vec<PresentationKind>,
    pub summary: Option<(PresentationKind, String)>,
    pub output: Option<String>,
    pub controls_enabled: bool,
}

impl SurfaceTrace {
    pub fn failing_sends() -> Self {
        Self { fail_sends: true, ..Self::default() }
    }

    pub fn visible(&self) -> VisibleSurface {
        let mut visible = VisibleSurface::default();
        for (index, presentation) in &self.indicator_calls {
            if visible.indicators.len() <= *index {
                visible.indicators.resize(index + 1, PresentationKind::Idle);
            }
            visible.indicators[*index] = *presentation;
        }
        visible.summary = self.summary_calls.last().cloned();
        visible.output = self.output_calls.last().cloned();
        visible.controls_enabled = self.controls_calls.last().copied().unwrap_or(false);
        visible
    }

    pub fn summary_text(&self) -> Option<&str> {
        self.summary_calls.last().map(|(_, text)| text.as_str())
    }

    pub fn controls_enabled(&self) -> bool {
        self.controls_calls.last().copied().unwrap_or(false)
    }

    /// Total number of recorded effect calls, sends included.
    pub fn effect_count(&self) -> usize {
        self.sent.len()
            + self.indicator_calls.len()
            + self.summary_calls.len()
            + self.output_calls.len()
            + self.controls_calls.len()
    }
}

impl SessionOps for SurfaceTrace {
    fn send_request(&mut self, request: &WebSocketRequest) -> Result<(), String> {
        if self.fail_sends {
            return Err("transport driver is gone".to_string());
        }
        self.sent.push(request.clone());
        Ok(())
    }

    fn set_case_indicator(&mut self, index: usize, presentation: PresentationKind) {
        self.indicator_calls.push((index, presentation));
    }

    fn set_summary(&mut self, presentation: PresentationKind, text: &str) {
        self.summary_calls.push((presentation, text.to_string()));
    }

    fn set_output(&mut self, text: &str) {
        self.output_calls.push(text.to_string());
    }

    fn set_controls_enabled(&mut self, enabled: bool) {
        self.controls_calls.push(enabled);
    }
}

/// A session that has completed the open handshake and sits ready for runs.
pub fn open_session(surface: &mut SurfaceTrace) -> Session {
    let mut session = Session::new();
    session.on_connect_started();
    session.on_channel_open(surface);
    session
}
