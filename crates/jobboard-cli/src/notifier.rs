use is_terminal::IsTerminal;
use jobboard_runtime::{Notification, Notifier};
use owo_colors::OwoColorize;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Prints notifications to stderr, styled like an error toast when stderr is a
/// terminal.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for ConsoleNotifier {
    fn notify_error(&self, title: &str, message: &str) {
        if std::io::stderr().is_terminal() {
            eprintln!("{} {}", format!("✖ {}:", title).red().bold(), message);
        } else {
            eprintln!("{}: {}", title, message);
        }
    }
}

/// How long a toast stays on the browse status line
pub const TOAST_TTL: Duration = Duration::from_secs(5);

/// Keeps the latest notification for the browse UI to draw.
#[derive(Debug, Default)]
pub struct ToastNotifier {
    current: Mutex<Option<(Notification, Instant)>>,
}

impl ToastNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// The notification to show right now, if one is still fresh
    pub fn visible(&self) -> Option<Notification> {
        self.visible_at(Instant::now())
    }

    fn visible_at(&self, now: Instant) -> Option<Notification> {
        let current = self.current.lock().ok()?;
        current
            .as_ref()
            .filter(|(_, shown_at)| now.duration_since(*shown_at) < TOAST_TTL)
            .map(|(notification, _)| notification.clone())
    }

    pub fn dismiss(&self) {
        if let Ok(mut current) = self.current.lock() {
            *current = None;
        }
    }
}

impl Notifier for ToastNotifier {
    fn notify_error(&self, title: &str, message: &str) {
        if let Ok(mut current) = self.current.lock() {
            *current = Some((
                Notification {
                    title: title.to_string(),
                    message: message.to_string(),
                },
                Instant::now(),
            ));
        }
    }
}
