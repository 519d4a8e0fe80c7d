use crate::ui::messages;

/// Blocking user-facing notification surface.
pub trait Alerts: Send + Sync {
    fn alert(&self, title: &str, message: &str);
}

/// Prints alerts on stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleAlerts;

impl Alerts for ConsoleAlerts {
    fn alert(&self, title: &str, message: &str) {
        messages::error(format!("{}: {}", title, message));
    }
}
