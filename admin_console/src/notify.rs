//! In-process toast channel. The embedding shell drains the stream and
//! renders; everything below it only ever pushes.

use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// One user-visible notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

/// Receiving end handed to the shell.
pub type ToastStream = mpsc::UnboundedReceiver<Toast>;

/// Cheap cloneable sender shared by every controller.
#[derive(Debug, Clone)]
pub struct Notifier {
    tx: mpsc::UnboundedSender<Toast>,
}

impl Notifier {
    pub fn channel() -> (Self, ToastStream) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    pub fn success(&self, title: &str, description: &str) {
        self.push(Toast {
            title: title.to_string(),
            description: description.to_string(),
            severity: Severity::Success,
        });
    }

    pub fn error(&self, title: &str, description: &str) {
        self.push(Toast {
            title: title.to_string(),
            description: description.to_string(),
            severity: Severity::Error,
        });
    }

    /// Delivery is best-effort: once the shell drops the stream there is
    /// nobody left to render for.
    pub fn push(&self, toast: Toast) {
        let _ = self.tx.send(toast);
    }
}
