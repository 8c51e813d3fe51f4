use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Probe failure taxonomy.
///
/// Every variant is caught at the probe boundary and converted into a
/// [`crate::ProbeResult`] or the Failed state; callers never see these.
#[derive(Error, Debug)]
pub enum ProbeError {
    /// Connection refused, DNS failure, timeout, broken transport
    #[error("transport error: {message} {location}")]
    Transport {
        message: String,
        location: ErrorLocation,
    },

    /// Malformed payload; always downgraded to best-effort raw display
    #[error("protocol error: {message} {location}")]
    Protocol {
        message: String,
        location: ErrorLocation,
    },

    /// Non-success HTTP status with the full response body for diagnosis
    #[error("HTTP status {status}: {body} {location}")]
    Application {
        status: u16,
        body: String,
        location: ErrorLocation,
    },
}

impl ProbeError {
    /// Create a transport error
    #[track_caller]
    pub fn transport<S: Into<String>>(message: S) -> Self {
        ProbeError::Transport {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a protocol error
    #[track_caller]
    pub fn protocol<S: Into<String>>(message: S) -> Self {
        ProbeError::Protocol {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create an application error from a status code and response body
    #[track_caller]
    pub fn application<S: Into<String>>(status: u16, body: S) -> Self {
        ProbeError::Application {
            status,
            body: body.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for ProbeError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ProbeError::transport(err.to_string())
    }
}

impl From<tokio_tungstenite::tungstenite::Error> for ProbeError {
    #[track_caller]
    fn from(err: tokio_tungstenite::tungstenite::Error) -> Self {
        ProbeError::transport(err.to_string())
    }
}

impl From<serde_json::Error> for ProbeError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ProbeError::protocol(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ProbeError>;
