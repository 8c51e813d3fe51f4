//! Probes for the messaging service smoke-test harness.
//!
//! Two self-contained checks: [`HttpProbe`] issues one paginated GET against
//! the messages resource, [`RealtimeProbe`] opens one websocket connection,
//! sends the auth frame and observes inbound frames for a fixed window.
//! Both convert every failure into a [`ProbeResult`] at their boundary; no
//! probe error ever propagates to the caller.

mod auth_message;
mod error;
mod events;
mod http_probe;
mod probe_result;
mod probe_state;
mod realtime_probe;

#[cfg(test)]
mod tests;

pub use auth_message::AuthMessage;
pub use error::{ProbeError, Result};
pub use events::{EventSink, FramePayload, ProbeEvent};
pub use http_probe::{HTTP_PROBE_NAME, HttpProbe};
pub use probe_result::ProbeResult;
pub use probe_state::ProbeState;
pub use realtime_probe::{REALTIME_PROBE_NAME, RealtimeProbe, RealtimeProbeHandle};
