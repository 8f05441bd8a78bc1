use std::error::Error;
use std::io;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use futures_util::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use verdict_tui::config::{SessionConfig, USAGE};
use verdict_tui::runtime::{apply_session_event, channel_task};
use verdict_tui::session::{Session, SessionOps};
use verdict_tui::tui::{render_ui, AppSurface};

/// Set to 1/true/yes to mirror logs to stdout instead of discarding them.
const LOG_STDOUT_ENV_VAR: &str = "VERDICT_TUI_LOG_STDOUT";

const RENDER_TICK: Duration = Duration::from_millis(250);

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = match SessionConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("{error}");
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    };
    init_logging();

    let (request_tx, request_rx) = mpsc::unbounded_channel();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    tokio::spawn(channel_task(config.judge_api_config(), request_rx, event_tx));

    let mut session = Session::new();
    let mut surface = AppSurface::new(request_tx);
    session.on_connect_started();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    let mut keys = EventStream::new();
    let mut ticker = tokio::time::interval(RENDER_TICK);

    loop {
        terminal.draw(|frame| render_ui(frame, &config, &session, &surface.ui))?;

        tokio::select! {
            _ = ticker.tick() => {}
            Some(event) = event_rx.recv() => {
                apply_session_event(&mut session, &mut surface, event);
            }
            maybe_key = keys.next() => {
                if let Some(Ok(event)) = maybe_key {
                    if handle_input(event, &config, &mut session, &mut surface) {
                        break;
                    }
                }
            }
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Raw-mode terminal owns stdout, so logs are discarded unless explicitly
/// mirrored via the env switch.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let stdout_enabled = matches!(
        std::env::var(LOG_STDOUT_ENV_VAR).ok().as_deref(),
        Some("1") | Some("true") | Some("TRUE") | Some("yes") | Some("YES")
    );
    if stdout_enabled {
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    } else {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::sink)
            .try_init();
    }
}

/// Returns true when the app should exit.
fn handle_input(
    event: Event,
    config: &SessionConfig,
    session: &mut Session,
    surface: &mut AppSurface,
) -> bool {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            handle_key(key, config, session, surface)
        }
        _ => false,
    }
}

fn handle_key(
    key: KeyEvent,
    config: &SessionConfig,
    session: &mut Session,
    surface: &mut AppSurface,
) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('r') => {
            if let Some(program) = read_program(config, surface) {
                session.on_judge(surface, program, config.language.clone());
            }
            false
        }
        KeyCode::Char('t') => {
            if let Some(program) = read_program(config, surface) {
                session.on_test(surface, program, config.language.clone(), config.test_input.clone());
            }
            false
        }
        _ => false,
    }
}

/// Program text fresh from disk. A read failure lands on the summary banner
/// and no request goes out.
fn read_program(config: &SessionConfig, surface: &mut AppSurface) -> Option<String> {
    match config.read_program() {
        Ok(program) => Some(program),
        Err(error) => {
            warn!(%error, file = %config.program_file.display(), "could not read the program");
            surface.set_summary(
                judge_api::PresentationKind::Error,
                &format!("Could not read {}: {error}", config.program_name()),
            );
            None
        }
    }
}
