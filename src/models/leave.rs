use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct LeaveApplication {
    pub leave_type: String,
    #[serde(serialize_with = "crate::utils::date::serialize_api_date")]
    pub from_date: NaiveDate,
    #[serde(serialize_with = "crate::utils::date::serialize_api_date")]
    pub to_date: NaiveDate,
    pub reason: String,
    pub half_day: bool,
}

impl LeaveApplication {
    /// Inclusive number of calendar days requested.
    pub fn days(&self) -> i64 {
        (self.to_date - self.from_date).num_days() + 1
    }
}
