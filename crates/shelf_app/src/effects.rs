use shelf_core::{Effect, Msg};
use shelf_engine::{EngineEvent, EngineHandle};
use shelf_logging::{shelf_info, shelf_warn};

/// Bridges the pure core and the engine: effects go out as engine commands,
/// engine events come back as messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle) -> Self {
        Self { engine }
    }

    pub fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::LoadLibrary => {
                    shelf_info!("LoadLibrary");
                    self.engine.load_library();
                }
                Effect::RefreshMovie { movie_id } => {
                    shelf_info!("RefreshMovie movie_id={}", movie_id);
                    self.engine.refresh_movie(movie_id);
                }
                Effect::ScheduleNotificationExpiry {
                    notification_id,
                    after,
                } => {
                    self.engine.schedule_expiry(notification_id, after);
                }
                Effect::CancelNotificationExpiry => self.engine.cancel_expiry(),
                Effect::Shutdown => {
                    shelf_info!("Shutting down engine");
                    self.engine.shutdown();
                }
            }
        }
    }

    /// Drains every engine event that has arrived so far.
    pub fn poll(&self) -> Vec<Msg> {
        let mut inbox = Vec::new();
        while let Some(event) = self.engine.try_recv() {
            inbox.push(map_event(event));
        }
        inbox
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::LibraryLoaded(result) => Msg::LibraryLoaded(result.map_err(|err| {
            shelf_warn!("Library load failed ({}): {}", err.kind, err.message);
            err.message
        })),
        EngineEvent::MovieRefreshed { movie_id, result } => Msg::RefreshCompleted {
            movie_id,
            result: result.map_err(|err| {
                shelf_warn!("Refresh of movie {} failed ({}): {}", movie_id, err.kind, err.message);
                err.message
            }),
        },
        EngineEvent::NotificationExpired { notification_id } => {
            Msg::NotificationExpired { notification_id }
        }
    }
}
