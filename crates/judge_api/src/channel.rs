use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

use crate::config::JudgeApiConfig;
use crate::error::JudgeApiError;
use crate::messages::{decode_message, encode_request, WebSocketMessage, WebSocketRequest};

/// One duplex judge channel, owned for the lifetime of one session.
///
/// The channel is opened once, carries typed frames both ways, and closes at
/// most once; there is no reconnect. A new session needs a new channel.
pub struct JudgeChannel {
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

impl JudgeChannel {
    /// Open the channel for the configured contest/problem pair.
    pub async fn connect(config: &JudgeApiConfig) -> Result<Self, JudgeApiError> {
        if config.contest_id.trim().is_empty() {
            return Err(JudgeApiError::MissingContestId);
        }
        if config.problem_id.trim().is_empty() {
            return Err(JudgeApiError::MissingProblemId);
        }

        let (stream, _) = connect_async(config.session_url()).await?;
        Ok(Self { stream })
    }

    /// Serialize and send one request frame.
    pub async fn send(&mut self, request: &WebSocketRequest) -> Result<(), JudgeApiError> {
        let frame = encode_request(request)?;
        self.stream.send(Message::Text(frame)).await?;
        Ok(())
    }

    /// Next decoded server message; `None` means the channel is closed.
    ///
    /// Non-text frames are skipped (pings are answered by the transport).
    /// `Some(Err(Serde(..)))` is a dropped undecodable frame and the channel
    /// stays usable; `Some(Err(Transport(..)))` means the channel is done.
    pub async fn next_message(&mut self) -> Option<Result<WebSocketMessage, JudgeApiError>> {
        loop {
            match self.stream.next().await {
                Some(Ok(Message::Text(text))) => return Some(decode_message(&text)),
                Some(Ok(Message::Close(_))) => return None,
                Some(Ok(_)) => {}
                Some(Err(error)) => return Some(Err(JudgeApiError::Transport(error))),
                None => return None,
            }
        }
    }

    /// Close the write half politely. Dropping the channel closes it too.
    pub async fn close(mut self) {
        let _ = self.stream.close(None).await;
    }
}
