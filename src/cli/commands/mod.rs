pub mod attendance;
pub mod config;
pub mod expense;
pub mod init;
pub mod leave;
pub mod log;
pub mod org;
pub mod profile;
pub mod project;
pub mod request;
pub mod session;
pub mod student;
pub mod task;
