//! Transient user-facing notifications.
//!
//! A pure publish/display utility: the store pushes messages in, the view
//! renders whatever [`Notifier::snapshot`] returns. Display order is
//! insertion order and several notifications may be visible at once. There is
//! no queueing or retry; each entry removes itself after its display duration
//! plus a short grace period, and can be dismissed early by id.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use uuid::Uuid;

/// Default display duration for the severity shortcuts.
pub const DEFAULT_DURATION: Duration = Duration::from_secs(4);

/// Extra time an entry stays in the list after its duration, covering the
/// view's fade-out.
const DISMISS_GRACE: Duration = Duration::from_millis(500);

/// Notification severity, mapped to visual styling by the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

/// One visible notification.
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: Uuid,
    pub message: String,
    pub severity: Severity,
    pub duration: Duration,
}

/// Handle to the notification list. Cheaply cloneable; all clones feed the
/// same display.
#[derive(Clone, Default)]
pub struct Notifier {
    entries: Arc<Mutex<Vec<Notification>>>,
}

impl Notifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish a notification and schedule its automatic removal.
    ///
    /// Outside a tokio runtime the timer cannot be scheduled; the entry then
    /// stays until dismissed manually.
    pub fn show(&self, message: impl Into<String>, severity: Severity, duration: Duration) -> Uuid {
        let notification = Notification {
            id: Uuid::new_v4(),
            message: message.into(),
            severity,
            duration,
        };
        let id = notification.id;
        self.lock().push(notification);

        if let Ok(handle) = tokio::runtime::Handle::try_current() {
            let notifier = self.clone();
            handle.spawn(async move {
                tokio::time::sleep(duration + DISMISS_GRACE).await;
                notifier.dismiss(id);
            });
        }

        id
    }

    /// Remove a notification before its timer fires (close button).
    pub fn dismiss(&self, id: Uuid) {
        self.lock().retain(|n| n.id != id);
    }

    /// Current notifications in insertion order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Notification> {
        self.lock().clone()
    }

    pub fn success(&self, message: impl Into<String>) -> Uuid {
        self.show(message, Severity::Success, DEFAULT_DURATION)
    }

    pub fn error(&self, message: impl Into<String>) -> Uuid {
        self.show(message, Severity::Error, DEFAULT_DURATION)
    }

    pub fn warning(&self, message: impl Into<String>) -> Uuid {
        self.show(message, Severity::Warning, DEFAULT_DURATION)
    }

    pub fn info(&self, message: impl Into<String>) -> Uuid {
        self.show(message, Severity::Info, DEFAULT_DURATION)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Notification>> {
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl std::fmt::Debug for Notifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifier")
            .field("entries", &self.lock().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn notifications_keep_insertion_order() {
        let notifier = Notifier::new();
        notifier.success("first");
        notifier.error("second");
        notifier.info("third");

        let messages: Vec<_> = notifier
            .snapshot()
            .into_iter()
            .map(|n| n.message)
            .collect();
        assert_eq!(messages, ["first", "second", "third"]);
    }

    #[tokio::test]
    async fn manual_dismiss_removes_one_entry() {
        let notifier = Notifier::new();
        let keep = notifier.info("keep");
        let drop_id = notifier.warning("drop");

        notifier.dismiss(drop_id);

        let snapshot = notifier.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].id, keep);
    }

    #[tokio::test(start_paused = true)]
    async fn entries_auto_dismiss_after_duration_plus_grace() {
        let notifier = Notifier::new();
        notifier.show("soon gone", Severity::Success, Duration::from_millis(100));

        // Not yet expired: duration alone is not enough, the grace applies.
        tokio::time::sleep(Duration::from_millis(300)).await;
        assert_eq!(notifier.snapshot().len(), 1);

        tokio::time::sleep(Duration::from_millis(400)).await;
        assert!(notifier.snapshot().is_empty());
    }

    #[test]
    fn show_without_runtime_keeps_entry() {
        let notifier = Notifier::new();
        notifier.show("stuck", Severity::Info, Duration::from_millis(1));
        assert_eq!(notifier.snapshot().len(), 1);
    }
}
