pub mod attendance;
pub mod config;
pub mod listing;
pub mod log;
pub mod org;
pub mod request;
pub mod session;
