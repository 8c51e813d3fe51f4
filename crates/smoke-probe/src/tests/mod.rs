mod probe_state;
mod realtime_probe;
