/// Blocking user-facing message sink (the browser `alert`).
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Sends user messages to the log when no UI is attached.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        tracing::info!(target: "solpay::notify", "{}", message);
    }
}
