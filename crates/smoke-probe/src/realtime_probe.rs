use crate::{
    AuthMessage, EventSink, FramePayload, ProbeError, ProbeEvent, ProbeResult, ProbeState,
    Result as ProbeErrorResult,
};

use std::time::Duration;

use futures::{SinkExt, StreamExt};
use log::{debug, info, warn};
use smoke_config::RealtimeProbeConfig;
use tokio::net::TcpStream;
use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep_until, timeout};
use tokio_tungstenite::tungstenite::{self, Message};
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};

pub const REALTIME_PROBE_NAME: &str = "realtime";

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Probe of the websocket push channel.
///
/// Connects, fires the auth frame without waiting for an acknowledgment,
/// logs every inbound frame for a fixed window measured from connection
/// open, then runs the close handshake. A transport error in any state
/// moves the session to Failed; the probe itself never panics or hangs
/// past window + grace.
pub struct RealtimeProbe {
    url: String,
    config: RealtimeProbeConfig,
    events: EventSink,
    state: ProbeState,
    frames_seen: usize,
}

/// Awaitable completion handle returned by [`RealtimeProbe::spawn`].
pub struct RealtimeProbeHandle {
    task: JoinHandle<ProbeResult>,
}

impl RealtimeProbeHandle {
    /// Wait for the probe to terminate and take its result.
    pub async fn join(self) -> ProbeResult {
        match self.task.await {
            Ok(result) => result,
            Err(e) => ProbeResult::fail(REALTIME_PROBE_NAME, format!("probe task failed: {}", e)),
        }
    }
}

impl RealtimeProbe {
    pub fn new(base_url: &str, config: RealtimeProbeConfig, events: EventSink) -> Self {
        Self {
            url: websocket_url(base_url),
            config,
            events,
            state: ProbeState::Connecting,
            frames_seen: 0,
        }
    }

    /// The derived ws:// endpoint this probe will connect to.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Run the probe on its own task and hand back a completion handle.
    pub fn spawn(self) -> RealtimeProbeHandle {
        RealtimeProbeHandle {
            task: tokio::spawn(self.run()),
        }
    }

    /// Run the probe to completion. Never returns an error: transport
    /// failures end the session in Failed and a failed result.
    pub async fn run(mut self) -> ProbeResult {
        match self.drive().await {
            Ok(()) => ProbeResult::pass(
                REALTIME_PROBE_NAME,
                format!("closed after {} frame(s)", self.frames_seen),
            ),
            Err(e) => {
                let message = e.to_string();
                self.events.emit(ProbeEvent::TransportError {
                    message: message.clone(),
                });
                self.set_state(ProbeState::Failed);
                // No close call here: the transport is assumed to have
                // self-terminated on error
                ProbeResult::fail(REALTIME_PROBE_NAME, message)
            }
        }
    }

    async fn drive(&mut self) -> ProbeErrorResult<()> {
        info!("connecting to {}", self.url);

        let connect_timeout = Duration::from_secs(self.config.connect_timeout_secs);
        let mut ws = match timeout(connect_timeout, connect_async(self.url.as_str())).await {
            Ok(Ok((ws, _response))) => ws,
            Ok(Err(e)) => return Err(e.into()),
            Err(_) => {
                return Err(ProbeError::transport(format!(
                    "connection to {} timed out after {}s",
                    self.url, self.config.connect_timeout_secs
                )));
            }
        };

        // The listen window runs from connection open, not from auth
        let window_deadline =
            Instant::now() + Duration::from_secs(self.config.listen_window_secs);

        self.set_state(ProbeState::Open);
        self.events.emit(ProbeEvent::Connected);

        // Fire-and-forget auth: send intent, do not block on confirmation
        let auth_text = AuthMessage::new(&self.config.token).to_text()?;
        self.set_state(ProbeState::Authenticating);
        ws.send(Message::text(auth_text)).await?;
        self.events.emit(ProbeEvent::AuthSent);
        self.set_state(ProbeState::Listening);

        let window = sleep_until(window_deadline);
        tokio::pin!(window);

        loop {
            tokio::select! {
                _ = &mut window => break,
                msg = ws.next() => match msg {
                    Some(Ok(frame)) => {
                        if self.handle_frame(&mut ws, frame).await? {
                            // Peer started the close handshake
                            self.finish_closed();
                            return Ok(());
                        }
                    }
                    Some(Err(e)) => return Err(e.into()),
                    None => {
                        self.finish_closed();
                        return Ok(());
                    }
                },
            }
        }

        self.set_state(ProbeState::Closing);
        self.events.emit(ProbeEvent::CloseRequested);
        match ws.close(None).await {
            Ok(()) => {}
            // The peer beat us to it; nothing left to acknowledge
            Err(tungstenite::Error::ConnectionClosed | tungstenite::Error::AlreadyClosed) => {
                self.set_state(ProbeState::Closed);
                self.events.emit(ProbeEvent::Closed);
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        }

        self.await_close_ack(&mut ws).await;
        self.set_state(ProbeState::Closed);
        self.events.emit(ProbeEvent::Closed);

        Ok(())
    }

    /// Process one inbound frame while listening. Returns true when the
    /// peer closed the connection.
    async fn handle_frame(&mut self, ws: &mut WsStream, frame: Message) -> ProbeErrorResult<bool> {
        match frame {
            Message::Text(text) => self.record_frame(text.as_str()),
            Message::Binary(data) => {
                let text = String::from_utf8_lossy(&data).into_owned();
                self.record_frame(&text);
            }
            Message::Ping(payload) => ws.send(Message::Pong(payload)).await?,
            Message::Pong(_) => {}
            Message::Close(close_frame) => {
                debug!("close frame from peer: {:?}", close_frame);
                return Ok(true);
            }
            // Raw frames are never surfaced on read
            Message::Frame(_) => {}
        }

        Ok(false)
    }

    /// A malformed frame is a loggable event, not an error: parse failures
    /// fall back to raw text and the probe keeps listening.
    fn record_frame(&mut self, text: &str) {
        self.frames_seen += 1;
        let payload = match serde_json::from_str(text) {
            Ok(value) => FramePayload::Json(value),
            Err(_) => FramePayload::Text(text.to_string()),
        };
        self.events.emit(ProbeEvent::FrameReceived(payload));
    }

    /// Drain until the close acknowledgment or the grace period lapses.
    /// Either way the session terminates; a peer that drops the transport
    /// instead of acking only costs a warning.
    async fn await_close_ack(&mut self, ws: &mut WsStream) {
        let grace = Duration::from_secs(self.config.close_grace_secs);
        let drain = async {
            while let Some(msg) = ws.next().await {
                match msg {
                    Ok(Message::Close(_)) => break,
                    Ok(_) => {}
                    Err(e) => {
                        debug!("transport ended during close: {}", e);
                        break;
                    }
                }
            }
        };

        if timeout(grace, drain).await.is_err() {
            warn!(
                "no close acknowledgment within {}s grace period",
                self.config.close_grace_secs
            );
        }
    }

    /// Peer-initiated close: take the Closing hop, then settle in Closed.
    fn finish_closed(&mut self) {
        self.set_state(ProbeState::Closing);
        self.set_state(ProbeState::Closed);
        self.events.emit(ProbeEvent::Closed);
    }

    fn set_state(&mut self, next: ProbeState) {
        debug_assert!(
            self.state.can_advance_to(next),
            "illegal probe state transition {} -> {}",
            self.state,
            next
        );
        debug!("realtime probe state: {} -> {}", self.state, next);
        self.state = next;
    }
}

/// Derive the websocket endpoint from the service base URL.
pub(crate) fn websocket_url(base_url: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let ws_base = if let Some(rest) = base.strip_prefix("https://") {
        format!("wss://{}", rest)
    } else if let Some(rest) = base.strip_prefix("http://") {
        format!("ws://{}", rest)
    } else {
        base.to_string()
    };
    format!("{}/ws", ws_base)
}
