//! Thin per-resource wrappers over `RequestPipeline`, one per backend resource.

pub mod attendance;
pub mod expense;
pub mod leave;
pub mod organization;
pub mod profile;
pub mod project;
pub mod session;
pub mod student;
pub mod task;

pub use attendance::AttendanceService;
pub use expense::ExpenseService;
pub use leave::LeaveService;
pub use organization::OrganizationService;
pub use profile::ProfileService;
pub use project::ProjectService;
pub use session::SessionService;
pub use student::StudentService;
pub use task::TaskService;

use crate::api::{ApiError, ApiResponse};
use serde_json::Value;

/// Decode a response body as loosely-typed JSON; an empty body is `null`.
pub(crate) fn json_body(response: ApiResponse) -> Result<Value, ApiError> {
    Ok(response.payload().unwrap_or(Value::Null))
}

/// Most list endpoints wrap rows in `data`; accept both shapes.
pub fn rows(value: &Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items.clone(),
        Value::Object(map) => match map.get("data") {
            Some(Value::Array(items)) => items.clone(),
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}
