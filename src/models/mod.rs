pub mod attendance;
pub mod expense;
pub mod leave;
pub mod task;
