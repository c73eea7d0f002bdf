use std::time::Duration;

/// Default lifetime of a toast before it clears itself.
pub const NOTIFICATION_TIMEOUT: Duration = Duration::from_millis(3000);

pub type NotificationId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: Option<String>,
}

impl Notification {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.into(),
            description: Some(description.into()),
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: title.into(),
            description: Some(description.into()),
        }
    }
}

/// Single-slot toast holder.
///
/// Each `show` hands out a fresh id. The expiry timer for that id is owned by
/// the shell; when it reports back, only the id currently showing clears the
/// slot, so a timer from a replaced toast can never clear a newer one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NotificationChannel {
    current: Option<(NotificationId, Notification)>,
    next_id: NotificationId,
}

impl NotificationChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref().map(|(_, notification)| notification)
    }

    pub fn current_id(&self) -> Option<NotificationId> {
        self.current.as_ref().map(|(id, _)| *id)
    }

    /// Replaces whatever is showing and returns the id owning the new timer.
    pub fn show(&mut self, notification: Notification) -> NotificationId {
        self.next_id += 1;
        let id = self.next_id;
        self.current = Some((id, notification));
        id
    }

    /// Clears the slot if `id` is still the one showing. Returns whether it did.
    pub fn expire(&mut self, id: NotificationId) -> bool {
        if self.current_id() == Some(id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    /// Empties the slot unconditionally. Returns whether anything was showing.
    pub fn clear(&mut self) -> bool {
        self.current.take().is_some()
    }
}
