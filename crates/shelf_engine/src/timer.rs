use std::sync::mpsc;
use std::time::Duration;

use shelf_core::NotificationId;
use shelf_logging::shelf_trace;
use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;

use crate::EngineEvent;

struct PendingExpiry {
    notification_id: NotificationId,
    token: CancellationToken,
}

/// Owns the single pending toast expiry.
///
/// Scheduling a new expiry cancels the previous one, as do `cancel` and drop.
/// A cancelled timer never reports.
pub struct ExpiryTimer {
    runtime: Handle,
    event_tx: mpsc::Sender<EngineEvent>,
    pending: Option<PendingExpiry>,
}

impl ExpiryTimer {
    pub fn new(runtime: Handle, event_tx: mpsc::Sender<EngineEvent>) -> Self {
        Self {
            runtime,
            event_tx,
            pending: None,
        }
    }

    pub fn schedule(&mut self, notification_id: NotificationId, after: Duration) {
        self.cancel();

        let token = CancellationToken::new();
        let cancelled = token.clone();
        let event_tx = self.event_tx.clone();
        self.runtime.spawn(async move {
            tokio::select! {
                _ = cancelled.cancelled() => {
                    shelf_trace!("expiry for notification {notification_id} cancelled");
                }
                _ = tokio::time::sleep(after) => {
                    let _ = event_tx.send(EngineEvent::NotificationExpired { notification_id });
                }
            }
        });

        self.pending = Some(PendingExpiry {
            notification_id,
            token,
        });
    }

    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.token.cancel();
        }
    }

    /// Id whose timer is currently owned, elapsed or not.
    pub fn pending(&self) -> Option<NotificationId> {
        self.pending.as_ref().map(|pending| pending.notification_id)
    }
}

impl Drop for ExpiryTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
