//! Failures that end a report cycle.
//!
//! Every error displays as the fixed message shown in the error panel. The
//! underlying cause is kept as a source for logging.

use thiserror::Error;

/// The user-facing failure kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    CapabilityUnavailable,
    AcquisitionFailed,
    TransportError,
    TransportTimeout,
    ServerError,
}

impl ErrorKind {
    pub fn message(&self) -> &'static str {
        match self {
            ErrorKind::CapabilityUnavailable => {
                "This page will not function without GeoLocation support."
            }
            ErrorKind::AcquisitionFailed => "You need to share your location for this page to work.",
            ErrorKind::TransportError => "Could not reach service: Error",
            ErrorKind::TransportTimeout => "Could not reach service: Timeout",
            ErrorKind::ServerError => "Could not retrieve a rain report, try again later.",
        }
    }
}

/// Why a position could not be obtained from an available capability.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PositionError {
    #[error("Location permission denied")]
    PermissionDenied,
    #[error("Position unavailable")]
    Unavailable,
    #[error("Location request timed out")]
    Timeout,
}

#[derive(Debug, Error)]
pub enum GeoError {
    #[error("This page will not function without GeoLocation support.")]
    CapabilityUnavailable,

    #[error("You need to share your location for this page to work.")]
    AcquisitionFailed(#[source] PositionError),
}

impl GeoError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GeoError::CapabilityUnavailable => ErrorKind::CapabilityUnavailable,
            GeoError::AcquisitionFailed(_) => ErrorKind::AcquisitionFailed,
        }
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Could not reach service: Error")]
    Transport(#[source] reqwest::Error),

    #[error("Could not reach service: Timeout")]
    Timeout(#[source] reqwest::Error),

    /// Any status other than 200.
    #[error("Could not retrieve a rain report, try again later.")]
    Status(reqwest::StatusCode),

    /// A 200 response whose body is not a rain report.
    #[error("Could not retrieve a rain report, try again later.")]
    MalformedBody(#[source] serde_json::Error),
}

impl FetchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FetchError::Transport(_) => ErrorKind::TransportError,
            FetchError::Timeout(_) => ErrorKind::TransportTimeout,
            FetchError::Status(_) | FetchError::MalformedBody(_) => ErrorKind::ServerError,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout(err)
        } else {
            FetchError::Transport(err)
        }
    }
}

#[derive(Debug, Error)]
pub enum CycleError {
    #[error(transparent)]
    Geo(#[from] GeoError),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

impl CycleError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CycleError::Geo(e) => e.kind(),
            CycleError::Fetch(e) => e.kind(),
        }
    }

    /// The message written into the error panel.
    pub fn user_message(&self) -> &'static str {
        self.kind().message()
    }
}
