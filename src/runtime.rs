//! Transport driver: owns the judge channel on the runtime side and feeds
//! the UI loop through an event queue.
//!
//! The driver never touches the session directly. It turns channel life
//! into [`SessionEvent`]s; the UI loop applies them between draws with
//! [`apply_session_event`]. Outbound requests travel the other way on their
//! own queue, so the session can submit without awaiting anything.

use judge_api::{JudgeApiConfig, JudgeApiError, JudgeChannel, WebSocketMessage, WebSocketRequest};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tracing::{debug, warn};

use crate::session::{Session, SessionOps};

/// What the channel task reports back to the UI loop.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// The channel finished its open handshake.
    Connected,
    /// One decoded server message.
    Message(WebSocketMessage),
    /// The channel is gone. Always the last event the task emits.
    Disconnected,
}

/// Drive one judge channel for its whole life.
///
/// Connect failures surface as a bare `Disconnected`, the same shape a
/// mid-session drop has, so the UI handles both with one path. Frames that
/// fail to decode are dropped without killing the channel; transport errors
/// end it.
pub async fn channel_task(
    config: JudgeApiConfig,
    mut requests: UnboundedReceiver<WebSocketRequest>,
    events: UnboundedSender<SessionEvent>,
) {
    let mut channel = match JudgeChannel::connect(&config).await {
        Ok(channel) => channel,
        Err(error) => {
            warn!(%error, "could not open the judge channel");
            let _ = events.send(SessionEvent::Disconnected);
            return;
        }
    };

    if events.send(SessionEvent::Connected).is_err() {
        return;
    }

    loop {
        tokio::select! {
            outbound = requests.recv() => {
                let Some(request) = outbound else {
                    debug!("request queue closed, shutting the channel down");
                    break;
                };
                if let Err(error) = channel.send(&request).await {
                    warn!(%error, "failed to send a run request");
                    break;
                }
            }
            inbound = channel.next_message() => {
                match inbound {
                    Some(Ok(message)) => {
                        if events.send(SessionEvent::Message(message)).is_err() {
                            break;
                        }
                    }
                    Some(Err(JudgeApiError::Serde(error))) => {
                        // One bad frame does not invalidate the channel.
                        warn!(%error, "dropping an undecodable frame");
                    }
                    Some(Err(error)) => {
                        warn!(%error, "judge channel failed");
                        break;
                    }
                    None => {
                        debug!("judge channel closed by the server");
                        break;
                    }
                }
            }
        }
    }

    channel.close().await;
    let _ = events.send(SessionEvent::Disconnected);
}

/// Apply one driver event to the session through its surface.
pub fn apply_session_event(session: &mut Session, ops: &mut dyn SessionOps, event: SessionEvent) {
    match event {
        SessionEvent::Connected => session.on_channel_open(ops),
        SessionEvent::Message(message) => session.on_message(ops, message),
        SessionEvent::Disconnected => session.on_disconnect(ops),
    }
}
