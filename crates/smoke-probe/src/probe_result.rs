use std::fmt;

use serde::Serialize;

/// Outcome of one probe invocation.
///
/// Created by the probe on completion, immutable, consumed once by the
/// runner for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeResult {
    pub name: String,
    pub succeeded: bool,
    /// Status code, error message, or payload summary
    pub detail: String,
}

impl ProbeResult {
    pub fn pass<S: Into<String>>(name: &str, detail: S) -> Self {
        Self {
            name: name.to_string(),
            succeeded: true,
            detail: detail.into(),
        }
    }

    pub fn fail<S: Into<String>>(name: &str, detail: S) -> Self {
        Self {
            name: name.to_string(),
            succeeded: false,
            detail: detail.into(),
        }
    }
}

impl fmt::Display for ProbeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.succeeded { "PASS" } else { "FAIL" };
        write!(f, "[{}] {}: {}", verdict, self.name, self.detail)
    }
}
