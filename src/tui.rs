//! Terminal surface: the production [`SessionOps`] and the ratatui render.
//!
//! The session writes into [`UiState`]; the draw loop reads it back out.
//! Nothing here talks to the network, so the whole layout is coverable with
//! ratatui's `TestBackend`.

use judge_api::{PresentationKind, WebSocketRequest};
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use tokio::sync::mpsc::UnboundedSender;

use crate::config::SessionConfig;
use crate::session::{Session, SessionOps};

/// Everything the terminal paints, as last written by the session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
    /// Latest presentation per case slot, in battery order.
    pub cases: Vec<PresentationKind>,
    pub summary: Option<(PresentationKind, String)>,
    pub output: Option<String>,
    pub controls_enabled: bool,
}

/// Production surface: requests go to the transport driver, the visual
/// effects land in [`UiState`] for the next draw.
pub struct AppSurface {
    requests: UnboundedSender<WebSocketRequest>,
    pub ui: UiState,
}

impl AppSurface {
    pub fn new(requests: UnboundedSender<WebSocketRequest>) -> Self {
        Self { requests, ui: UiState::default() }
    }
}

impl SessionOps for AppSurface {
    fn send_request(&mut self, request: &WebSocketRequest) -> Result<(), String> {
        self.requests
            .send(request.clone())
            .map_err(|_| "transport driver is gone".to_string())?;
        // A new run repaints every slot from its own snapshots; drop what
        // the previous one left behind.
        self.ui.cases.clear();
        self.ui.output = None;
        Ok(())
    }

    fn set_case_indicator(&mut self, index: usize, presentation: PresentationKind) {
        if self.ui.cases.len() <= index {
            self.ui.cases.resize(index + 1, PresentationKind::Idle);
        }
        self.ui.cases[index] = presentation;
    }

    fn set_summary(&mut self, presentation: PresentationKind, text: &str) {
        self.ui.summary = Some((presentation, text.to_string()));
    }

    fn set_output(&mut self, text: &str) {
        self.ui.output = Some(text.to_string());
    }

    fn set_controls_enabled(&mut self, enabled: bool) {
        self.ui.controls_enabled = enabled;
    }
}

#[derive(Clone, Copy)]
struct Theme {
    border: Color,
    title: Color,
    text: Color,
    muted: Color,
    ok: Color,
    err: Color,
    busy: Color,
}

fn theme() -> Theme {
    Theme {
        border: Color::Rgb(71, 85, 105),
        title: Color::Rgb(147, 197, 253),
        text: Color::Rgb(226, 232, 240),
        muted: Color::Rgb(148, 163, 184),
        ok: Color::Rgb(74, 222, 128),
        err: Color::Rgb(248, 113, 113),
        busy: Color::Rgb(250, 204, 21),
    }
}

fn presentation_glyph(kind: PresentationKind) -> &'static str {
    match kind {
        PresentationKind::Error => "x",
        PresentationKind::Success => "o",
        PresentationKind::Empty => "-",
        PresentationKind::Idle => ".",
        PresentationKind::Loading => "~",
    }
}

fn presentation_color(kind: PresentationKind, theme: Theme) -> Color {
    match kind {
        PresentationKind::Error => theme.err,
        PresentationKind::Success => theme.ok,
        PresentationKind::Loading => theme.busy,
        PresentationKind::Empty | PresentationKind::Idle => theme.muted,
    }
}

/// Draw the whole session surface.
pub fn render_ui(frame: &mut Frame, config: &SessionConfig, session: &Session, ui: &UiState) {
    let theme = theme();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.size());

    frame.render_widget(render_header(config, session, theme), rows[0]);
    frame.render_widget(render_cases(ui, theme), rows[1]);
    frame.render_widget(render_summary(ui, theme), rows[2]);
    frame.render_widget(render_output(ui, theme), rows[3]);
    frame.render_widget(render_footer(ui, theme), rows[4]);
}

fn render_header(config: &SessionConfig, session: &Session, theme: Theme) -> Paragraph<'static> {
    let line = Line::from(vec![
        Span::styled(
            format!("{}/{}", config.contest_id, config.problem_id),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(config.program_name().to_string(), Style::default().fg(theme.muted)),
        Span::raw("  "),
        Span::styled(format!("lang:{}", config.language), Style::default().fg(theme.muted)),
        Span::raw("  "),
        Span::styled(
            format!("[{}]", session.phase.label()),
            Style::default().fg(theme.title),
        ),
    ]);
    Paragraph::new(line).block(titled_block("Judge", theme))
}

fn render_cases(ui: &UiState, theme: Theme) -> Paragraph<'static> {
    let mut spans = Vec::new();
    if ui.cases.is_empty() {
        spans.push(Span::styled(
            "no run yet".to_string(),
            Style::default().fg(theme.muted),
        ));
    }
    for (index, kind) in ui.cases.iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            format!("{}:{}", index + 1, presentation_glyph(*kind)),
            Style::default()
                .fg(presentation_color(*kind, theme))
                .add_modifier(Modifier::BOLD),
        ));
    }
    Paragraph::new(Line::from(spans)).block(titled_block("Cases", theme))
}

fn render_summary(ui: &UiState, theme: Theme) -> Paragraph<'static> {
    let (style, text) = match &ui.summary {
        Some((kind, text)) => (
            Style::default()
                .fg(presentation_color(*kind, theme))
                .add_modifier(Modifier::BOLD),
            text.clone(),
        ),
        None => (Style::default().fg(theme.muted), "No verdict yet".to_string()),
    };
    Paragraph::new(Line::from(Span::styled(text, style))).block(titled_block("Summary", theme))
}

fn render_output(ui: &UiState, theme: Theme) -> Paragraph<'static> {
    let text = match &ui.output {
        Some(output) => Text::from(output.clone()),
        None => Text::from(Span::styled(
            "(empty)".to_string(),
            Style::default().fg(theme.muted),
        )),
    };
    Paragraph::new(text)
        .style(Style::default().fg(theme.text))
        .wrap(Wrap { trim: false })
        .block(titled_block("Test output", theme))
}

fn render_footer(ui: &UiState, theme: Theme) -> Paragraph<'static> {
    let run_style = if ui.controls_enabled {
        Style::default().fg(theme.text)
    } else {
        Style::default().fg(theme.muted).add_modifier(Modifier::DIM)
    };
    let line = Line::from(vec![
        Span::styled("r judge  t test", run_style),
        Span::raw("   "),
        Span::styled("q quit", Style::default().fg(theme.text)),
    ]);
    Paragraph::new(line).alignment(Alignment::Left)
}

fn titled_block(title: &'static str, theme: Theme) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title(Span::styled(
            title,
            Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
        ))
}
