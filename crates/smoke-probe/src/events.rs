use log::{error, info};
use serde_json::Value;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// One inbound frame, parsed opportunistically.
#[derive(Debug, Clone, PartialEq)]
pub enum FramePayload {
    /// Frame text was valid JSON
    Json(Value),
    /// Raw text fallback for anything that did not parse
    Text(String),
}

/// Lifecycle events emitted by the realtime probe.
///
/// Every event also reaches the log facade, so the console stays useful for
/// manual diagnosis while tests assert on the typed stream.
#[derive(Debug, Clone, PartialEq)]
pub enum ProbeEvent {
    /// Connection established
    Connected,
    /// Auth frame handed to the transport (fire-and-forget)
    AuthSent,
    FrameReceived(FramePayload),
    /// Listen window elapsed, close frame sent
    CloseRequested,
    Closed,
    TransportError { message: String },
}

impl ProbeEvent {
    fn log(&self) {
        match self {
            ProbeEvent::Connected => info!("websocket connection established"),
            ProbeEvent::AuthSent => info!("auth message sent"),
            ProbeEvent::FrameReceived(FramePayload::Json(value)) => {
                info!("frame received: {}", value)
            }
            ProbeEvent::FrameReceived(FramePayload::Text(text)) => {
                info!("raw frame received: {}", text)
            }
            ProbeEvent::CloseRequested => info!("listen window elapsed, requesting close"),
            ProbeEvent::Closed => info!("websocket connection closed"),
            ProbeEvent::TransportError { message } => error!("websocket error: {}", message),
        }
    }
}

/// Destination for probe lifecycle events.
///
/// Always logs; when built with [`EventSink::channel`] it also forwards each
/// event over an unbounded sender so callers can assert on the sequence.
#[derive(Debug, Clone, Default)]
pub struct EventSink {
    tx: Option<UnboundedSender<ProbeEvent>>,
}

impl EventSink {
    /// Sink that only writes to the log facade.
    pub fn logging() -> Self {
        Self { tx: None }
    }

    /// Sink that logs and forwards every event to the returned receiver.
    pub fn channel() -> (Self, UnboundedReceiver<ProbeEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx: Some(tx) }, rx)
    }

    pub fn emit(&self, event: ProbeEvent) {
        event.log();
        if let Some(tx) = &self.tx {
            // A dropped receiver only means nobody is asserting on events
            let _ = tx.send(event);
        }
    }
}
