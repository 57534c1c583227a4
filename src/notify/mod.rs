//! Notification surface.
//!
//! User-triggered handlers never propagate failures past their entry point;
//! they route them here instead, so a broken load or save leaves the panel
//! alive and reported rather than crashed.

/// Renders outcome messages to the user.
pub trait Notifier: Send + Sync {
    fn info(&self, message: &str);
    fn error(&self, message: &str);
}

/// Notifier that hands messages to the tracing subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn info(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!("{message}");
    }
}

/// Route a handler failure to the notification surface instead of letting it
/// propagate. The `{err:#}` format keeps the whole context chain on one line.
pub fn report_failure(notifier: &dyn Notifier, outcome: anyhow::Result<()>) {
    if let Err(err) = outcome {
        notifier.error(&format!("{err:#}"));
    }
}
