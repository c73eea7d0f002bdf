//! Shelf core: pure state machine and view-model helpers.
mod collection;
mod effect;
mod movie;
mod msg;
mod notification;
mod refresh;
mod state;
mod update;
mod view_model;

pub use collection::{CollectionState, MovieCollection, ReplaceOutcome};
pub use effect::Effect;
pub use movie::{MovieId, MovieRecord};
pub use msg::Msg;
pub use notification::{
    Notification, NotificationChannel, NotificationId, NotificationKind, NOTIFICATION_TIMEOUT,
};
pub use refresh::RefreshTracker;
pub use state::{AppState, Lifecycle, PLACEHOLDER_CARDS};
pub use update::{
    update, LOAD_FAILED_MESSAGE, REFRESH_FAILED_FALLBACK, REFRESH_FAILED_TITLE,
    REFRESH_SUCCESS_TITLE,
};
pub use view_model::{AppViewModel, CollectionView, MovieCardView, NotificationView};
