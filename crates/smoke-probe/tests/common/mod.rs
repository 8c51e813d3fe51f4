pub mod test_server;

use smoke_probe::ProbeEvent;

use tokio::sync::mpsc::UnboundedReceiver;

/// Collect everything the probe emitted. Call after the probe terminated;
/// the sender side is gone by then so the drain is complete.
pub fn drain_events(mut rx: UnboundedReceiver<ProbeEvent>) -> Vec<ProbeEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}
