use thiserror::Error;

/// Platform-neutral cause of a failed position fix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationErrorKind {
    PermissionDenied,
    PositionUnavailable,
    Timeout,
    ServiceUnavailable,
    Unknown,
}

impl LocationErrorKind {
    /// Map the numeric codes reported by mobile geolocation APIs
    /// (1 denied, 2 unavailable, 3 timeout, 4 services missing).
    pub fn from_platform_code(code: i32) -> Self {
        match code {
            1 => Self::PermissionDenied,
            2 => Self::PositionUnavailable,
            3 => Self::Timeout,
            4 => Self::ServiceUnavailable,
            _ => Self::Unknown,
        }
    }

    /// Text the user can act on.
    pub fn message(&self) -> &'static str {
        match self {
            Self::PermissionDenied => {
                "Location permission denied. Please enable location access in your device settings."
            }
            Self::PositionUnavailable => {
                "Location information is unavailable. Please make sure GPS is turned on."
            }
            Self::Timeout => {
                "Location request timed out. Please move to an open area and try again."
            }
            Self::ServiceUnavailable => "Location services are not available on this device.",
            Self::Unknown => "Unknown location error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct LocationError {
    pub kind: LocationErrorKind,
    pub message: String,
}

impl LocationError {
    pub fn new(kind: LocationErrorKind) -> Self {
        Self {
            kind,
            message: kind.message().to_string(),
        }
    }

    pub fn with_message(kind: LocationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn from_platform_code(code: i32) -> Self {
        Self::new(LocationErrorKind::from_platform_code(code))
    }

    /// The permission prompt was answered with "no".
    pub fn permission_not_granted() -> Self {
        Self::with_message(
            LocationErrorKind::PermissionDenied,
            "Location permission not granted. Please allow location access to check in.",
        )
    }
}
