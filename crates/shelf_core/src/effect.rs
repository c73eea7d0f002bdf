use std::time::Duration;

use crate::{MovieId, NotificationId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Read the whole library once.
    LoadLibrary,
    /// Ask the service to re-derive metadata for one movie.
    RefreshMovie { movie_id: MovieId },
    /// Start the expiry timer for the toast that was just shown, replacing any
    /// timer still pending.
    ScheduleNotificationExpiry {
        notification_id: NotificationId,
        after: Duration,
    },
    CancelNotificationExpiry,
    /// The owning view is gone; stop all background work.
    Shutdown,
}
