use crate::location::LocationResult;
use chrono::{DateTime, Local};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PunchKind {
    CheckIn,
    CheckOut,
}

impl PunchKind {
    pub fn endpoint(&self) -> &'static str {
        match self {
            PunchKind::CheckIn => "attendance/check-in",
            PunchKind::CheckOut => "attendance/check-out",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PunchKind::CheckIn => "check-in",
            PunchKind::CheckOut => "check-out",
        }
    }
}

/// Body of a check-in / check-out call, stamped with the device location.
#[derive(Debug, Clone, Serialize)]
pub struct PunchRequest {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub timestamp: String,
}

impl PunchRequest {
    pub fn new(location: LocationResult, note: Option<String>, at: DateTime<Local>) -> Self {
        Self {
            latitude: location.latitude,
            longitude: location.longitude,
            address: location.address,
            note,
            timestamp: at.to_rfc3339(),
        }
    }
}
