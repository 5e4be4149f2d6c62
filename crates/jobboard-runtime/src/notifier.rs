use std::sync::Mutex;

/// Toast title used for every fetch failure
pub const FETCH_ERROR_TITLE: &str = "Error";

/// Toast message used for every fetch failure. The underlying error is
/// logged, never shown.
pub const FETCH_ERROR_MESSAGE: &str = "Unable to fetch job postings";

/// User-facing notification channel (fire-and-forget)
pub trait Notifier: Send + Sync {
    fn notify_error(&self, title: &str, message: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
}

/// Keeps every notification in memory; used by tests and by hosts that
/// drain notifications on their own schedule.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notifications: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.notifications.lock().unwrap().len()
    }

    /// Remove and return everything recorded so far
    pub fn drain(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.notifications.lock().unwrap())
    }
}

impl Notifier for RecordingNotifier {
    fn notify_error(&self, title: &str, message: &str) {
        self.notifications.lock().unwrap().push(Notification {
            title: title.to_string(),
            message: message.to_string(),
        });
    }
}
