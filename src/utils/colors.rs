/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// Color for an HTTP status: 2xx green, 4xx yellow, 5xx red.
pub fn color_for_status(status: u16) -> &'static str {
    match status {
        200..=299 => GREEN,
        400..=499 => YELLOW,
        500..=599 => RED,
        _ => RESET,
    }
}
