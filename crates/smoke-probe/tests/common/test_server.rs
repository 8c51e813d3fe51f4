#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::ws::{Message, WebSocket};
use axum::extract::{State, WebSocketUpgrade};
use axum::response::Response;
use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// Scripted behavior for one websocket session.
#[derive(Debug, Clone, Default)]
pub struct ServerScript {
    /// Reply `{"type":"ack"}` to the first inbound frame
    pub ack_auth: bool,
    /// Frames pushed to the client after the auth exchange
    pub frames: Vec<String>,
    /// Server-initiated close after this delay; None keeps the session
    /// open until the client runs its close handshake
    pub close_after: Option<Duration>,
}

#[derive(Clone)]
struct ServerState {
    script: ServerScript,
    received: Arc<Mutex<Vec<String>>>,
}

/// Minimal scripted `/ws` endpoint for driving the realtime probe.
pub struct TestWsServer {
    addr: SocketAddr,
    received: Arc<Mutex<Vec<String>>>,
}

impl TestWsServer {
    /// Bind to a random local port and serve the script.
    pub async fn start(script: ServerScript) -> Self {
        let received = Arc::new(Mutex::new(Vec::new()));
        let state = ServerState {
            script,
            received: received.clone(),
        };

        let app = Router::new()
            .route("/ws", get(ws_handler))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test server");
        let addr = listener.local_addr().expect("test server addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("test server");
        });

        Self { addr, received }
    }

    /// Base URL in the form the probes take it (http scheme).
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Frames the server received from the client, in arrival order.
    pub async fn received(&self) -> Vec<String> {
        self.received.lock().await.clone()
    }
}

async fn ws_handler(State(state): State<ServerState>, ws: WebSocketUpgrade) -> Response {
    ws.on_upgrade(move |socket| drive_session(socket, state))
}

async fn drive_session(mut socket: WebSocket, state: ServerState) {
    // First inbound frame is the auth message
    match socket.recv().await {
        Some(Ok(Message::Text(text))) => state.received.lock().await.push(text.as_str().to_owned()),
        _ => return,
    }

    if state.script.ack_auth
        && socket
            .send(Message::Text(r#"{"type":"ack"}"#.into()))
            .await
            .is_err()
    {
        return;
    }

    for frame in &state.script.frames {
        if socket
            .send(Message::Text(frame.clone().into()))
            .await
            .is_err()
        {
            return;
        }
    }

    match state.script.close_after {
        Some(delay) => {
            tokio::time::sleep(delay).await;
            let _ = socket.send(Message::Close(None)).await;
        }
        None => {
            // Stay open; acknowledge the client's close when it arrives
            while let Some(Ok(frame)) = socket.recv().await {
                if matches!(frame, Message::Close(_)) {
                    let _ = socket.send(Message::Close(None)).await;
                    break;
                }
            }
        }
    }
}
