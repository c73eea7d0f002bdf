use shelf_logging::{shelf_debug, shelf_info, shelf_warn};

use crate::collection::ReplaceOutcome;
use crate::state::Lifecycle;
use crate::{AppState, Effect, MovieId, MovieRecord, Msg, Notification};

pub const LOAD_FAILED_MESSAGE: &str = "Failed to fetch movies";
pub const REFRESH_SUCCESS_TITLE: &str = "Movie Updated";
pub const REFRESH_FAILED_TITLE: &str = "Refresh Failed";
pub const REFRESH_FAILED_FALLBACK: &str = "Failed to refresh movie";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    if state.lifecycle() == Lifecycle::TornDown {
        // Late completions after teardown must not touch anything.
        shelf_debug!("dropping {} after teardown", msg_name(&msg));
        return (state, Vec::new());
    }

    let effects = match msg {
        Msg::Mounted => {
            if state.mount() {
                shelf_info!("mounted; loading library");
                vec![Effect::LoadLibrary]
            } else {
                Vec::new()
            }
        }
        Msg::LibraryLoaded(result) => {
            let result = result.map_err(|detail| load_failure_message(&detail));
            let summary = match &result {
                Ok(records) => format!("{} movies", records.len()),
                Err(message) => message.clone(),
            };
            if state.collection.settle(result) {
                shelf_info!("library settled: {summary}");
                state.mark_dirty();
            } else {
                shelf_warn!("ignoring library result after settle: {summary}");
            }
            Vec::new()
        }
        Msg::RefreshClicked { movie_id } => start_refresh(&mut state, movie_id),
        Msg::RefreshCompleted { movie_id, result } => {
            finish_refresh(&mut state, movie_id, result)
        }
        Msg::NotificationExpired { notification_id } => {
            if state.notifications.expire(notification_id) {
                state.mark_dirty();
            } else {
                shelf_debug!("stale expiry for notification {notification_id}");
            }
            Vec::new()
        }
        Msg::NotificationDismissed => {
            if state.notifications.clear() {
                state.mark_dirty();
                vec![Effect::CancelNotificationExpiry]
            } else {
                Vec::new()
            }
        }
        Msg::Teardown => {
            state.tear_down();
            vec![Effect::CancelNotificationExpiry, Effect::Shutdown]
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn start_refresh(state: &mut AppState, movie_id: MovieId) -> Vec<Effect> {
    if !state.collection.is_ready() {
        shelf_debug!("refresh for movie {movie_id} ignored; library not ready");
        return Vec::new();
    }
    if !state.refreshing.begin(movie_id) {
        shelf_debug!("refresh for movie {movie_id} already in flight");
        return Vec::new();
    }
    state.mark_dirty();
    vec![Effect::RefreshMovie { movie_id }]
}

fn finish_refresh(
    state: &mut AppState,
    movie_id: MovieId,
    result: Result<MovieRecord, String>,
) -> Vec<Effect> {
    let notification = match result {
        Ok(record) => {
            let title = if record.title.trim().is_empty() {
                "Movie".to_string()
            } else {
                record.title.clone()
            };
            match state.collection.replace(movie_id, record) {
                ReplaceOutcome::Replaced | ReplaceOutcome::Unchanged => {}
                other => shelf_warn!("refreshed movie {movie_id} not applied: {other:?}"),
            }
            Notification::success(REFRESH_SUCCESS_TITLE, format!("{title} has been refreshed"))
        }
        Err(detail) => {
            shelf_warn!("refresh for movie {movie_id} failed: {detail}");
            let description = if detail.trim().is_empty() {
                REFRESH_FAILED_FALLBACK.to_string()
            } else {
                detail
            };
            Notification::error(REFRESH_FAILED_TITLE, description)
        }
    };

    // The marker goes regardless of how the round-trip ended.
    state.refreshing.finish(movie_id);

    let notification_id = state.notifications.show(notification);
    state.mark_dirty();
    vec![Effect::ScheduleNotificationExpiry {
        notification_id,
        after: state.notification_timeout(),
    }]
}

fn load_failure_message(detail: &str) -> String {
    let detail = detail.trim();
    if detail.is_empty() {
        LOAD_FAILED_MESSAGE.to_string()
    } else {
        format!("{LOAD_FAILED_MESSAGE}: {detail}")
    }
}

fn msg_name(msg: &Msg) -> &'static str {
    match msg {
        Msg::Mounted => "Mounted",
        Msg::LibraryLoaded(_) => "LibraryLoaded",
        Msg::RefreshClicked { .. } => "RefreshClicked",
        Msg::RefreshCompleted { .. } => "RefreshCompleted",
        Msg::NotificationExpired { .. } => "NotificationExpired",
        Msg::NotificationDismissed => "NotificationDismissed",
        Msg::Teardown => "Teardown",
        Msg::Tick => "Tick",
        Msg::NoOp => "NoOp",
    }
}
