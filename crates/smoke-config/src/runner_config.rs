use serde::Deserialize;

/// Exit policy for the harness process.
///
/// The harness is a diagnostic aid first: by default it exits 0 no matter
/// what the probes report. Strict mode turns probe failures into a non-zero
/// exit status for CI-gate usage.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// Exit non-zero when any probe fails
    pub strict: bool,
}
