use crate::Result as ProbeErrorResult;

use serde::Serialize;

/// First outbound frame after the websocket opens.
///
/// Serialized once per probe invocation and not retained after send; the
/// handshake is fire-and-forget, no acknowledgment is awaited.
#[derive(Debug, Serialize)]
pub struct AuthMessage<'a> {
    #[serde(rename = "type")]
    message_type: &'static str,
    token: &'a str,
}

impl<'a> AuthMessage<'a> {
    pub fn new(token: &'a str) -> Self {
        Self {
            message_type: "auth",
            token,
        }
    }

    /// Serialize to the JSON text sent on the wire.
    pub fn to_text(&self) -> ProbeErrorResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
