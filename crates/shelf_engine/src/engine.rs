use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use shelf_core::{MovieId, NotificationId};
use shelf_logging::{shelf_debug, shelf_error, shelf_info};

use crate::client::{ClientSettings, LibraryClient, ReqwestLibraryClient};
use crate::timer::ExpiryTimer;
use crate::{ClientError, EngineEvent};

enum EngineCommand {
    LoadLibrary,
    RefreshMovie {
        movie_id: MovieId,
    },
    ScheduleExpiry {
        notification_id: NotificationId,
        after: Duration,
    },
    CancelExpiry,
    Shutdown,
}

/// Runs network calls and timers on a background tokio runtime.
///
/// Commands go in through the methods below; results come back as
/// [`EngineEvent`]s polled with [`EngineHandle::try_recv`]. After shutdown,
/// work still in flight is abandoned and never reported.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
    worker: Option<thread::JoinHandle<()>>,
}

impl EngineHandle {
    pub fn new(settings: ClientSettings) -> Result<Self, ClientError> {
        let client = ReqwestLibraryClient::new(settings)?;
        shelf_info!("library service at {}", client.base_url());
        Ok(Self::with_client(Arc::new(client)))
    }

    pub fn with_client(client: Arc<dyn LibraryClient>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        let worker = thread::spawn(move || run_worker(client, cmd_rx, event_tx));

        Self {
            cmd_tx,
            event_rx,
            worker: Some(worker),
        }
    }

    pub fn load_library(&self) {
        self.send(EngineCommand::LoadLibrary);
    }

    pub fn refresh_movie(&self, movie_id: MovieId) {
        self.send(EngineCommand::RefreshMovie { movie_id });
    }

    pub fn schedule_expiry(&self, notification_id: NotificationId, after: Duration) {
        self.send(EngineCommand::ScheduleExpiry {
            notification_id,
            after,
        });
    }

    pub fn cancel_expiry(&self) {
        self.send(EngineCommand::CancelExpiry);
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Stops the worker and waits for it to exit. Safe to call twice.
    pub fn shutdown(&mut self) {
        let Some(worker) = self.worker.take() else {
            return;
        };
        self.send(EngineCommand::Shutdown);
        if worker.join().is_err() {
            shelf_error!("engine worker panicked");
        }
    }

    fn send(&self, command: EngineCommand) {
        if self.cmd_tx.send(command).is_err() {
            shelf_debug!("engine worker gone; command dropped");
        }
    }
}

impl Drop for EngineHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn run_worker(
    client: Arc<dyn LibraryClient>,
    cmd_rx: mpsc::Receiver<EngineCommand>,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(err) => {
            shelf_error!("failed to start engine runtime: {err}");
            return;
        }
    };
    let mut timer = ExpiryTimer::new(runtime.handle().clone(), event_tx.clone());

    while let Ok(command) = cmd_rx.recv() {
        match command {
            EngineCommand::LoadLibrary => {
                let client = client.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    let result = client.fetch_library().await;
                    let _ = event_tx.send(EngineEvent::LibraryLoaded(result));
                });
            }
            EngineCommand::RefreshMovie { movie_id } => {
                let client = client.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    let result = client.refresh_movie(movie_id).await;
                    let _ = event_tx.send(EngineEvent::MovieRefreshed { movie_id, result });
                });
            }
            EngineCommand::ScheduleExpiry {
                notification_id,
                after,
            } => timer.schedule(notification_id, after),
            EngineCommand::CancelExpiry => timer.cancel(),
            EngineCommand::Shutdown => break,
        }
    }

    timer.cancel();
    drop(timer);
    runtime.shutdown_background();
    shelf_debug!("engine worker stopped");
}
