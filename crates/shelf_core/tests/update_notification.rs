use std::sync::Once;
use std::time::Duration;

use shelf_core::{update, AppState, Effect, MovieRecord, Msg, NotificationId};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(shelf_logging::initialize_for_tests);
}

fn movie(id: u64) -> MovieRecord {
    MovieRecord {
        id,
        created_at: "t".to_string(),
        updated_at: "t".to_string(),
        deleted_at: None,
        title: format!("Movie {id}"),
        year: 1999,
        cover: None,
    }
}

fn ready(state: AppState) -> AppState {
    let (state, _) = update(state, Msg::Mounted);
    let (state, _) = update(state, Msg::LibraryLoaded(Ok(vec![movie(1), movie(2)])));
    state
}

fn refresh(state: AppState, id: u64) -> (AppState, NotificationId) {
    let (state, _) = update(state, Msg::RefreshClicked { movie_id: id });
    let (state, effects) = update(
        state,
        Msg::RefreshCompleted {
            movie_id: id,
            result: Ok(movie(id)),
        },
    );
    let notification_id = effects
        .iter()
        .find_map(|effect| match effect {
            Effect::ScheduleNotificationExpiry {
                notification_id, ..
            } => Some(*notification_id),
            _ => None,
        })
        .expect("schedule effect");
    (state, notification_id)
}

#[test]
fn notification_clears_when_its_timer_elapses() {
    init_logging();
    let (state, id) = refresh(ready(AppState::new()), 1);
    assert!(state.view().notification.is_some());

    let (mut state, effects) = update(state, Msg::NotificationExpired { notification_id: id });
    assert!(effects.is_empty());
    assert!(state.consume_dirty());
    assert!(state.view().notification.is_none());
    assert!(state.is_idle());
}

#[test]
fn superseded_timer_does_not_clear_newer_notification() {
    init_logging();
    let (state, first) = refresh(ready(AppState::new()), 1);
    let (mut state, second) = refresh(state, 2);
    assert_ne!(first, second);
    assert!(state.consume_dirty());

    let (mut state, _) = update(state, Msg::NotificationExpired { notification_id: first });
    let shown = state.view().notification.expect("second still showing");
    assert_eq!(shown.description.as_deref(), Some("Movie 2 has been refreshed"));
    assert_eq!(state.notifications().current_id(), Some(second));
    assert!(!state.consume_dirty());

    let (state, _) = update(state, Msg::NotificationExpired { notification_id: second });
    assert!(state.view().notification.is_none());
}

#[test]
fn dismiss_clears_and_cancels_timer() {
    init_logging();
    let (state, _) = refresh(ready(AppState::new()), 1);

    let (state, effects) = update(state, Msg::NotificationDismissed);
    assert_eq!(effects, vec![Effect::CancelNotificationExpiry]);
    assert!(state.view().notification.is_none());

    let (_state, effects) = update(state, Msg::NotificationDismissed);
    assert!(effects.is_empty());
}

#[test]
fn configured_timeout_is_used_for_schedule() {
    init_logging();
    let state = ready(AppState::with_notification_timeout(Duration::from_millis(750)));
    let (state, _) = update(state, Msg::RefreshClicked { movie_id: 1 });
    let (_state, effects) = update(
        state,
        Msg::RefreshCompleted {
            movie_id: 1,
            result: Err("boom".to_string()),
        },
    );

    assert!(matches!(
        effects.as_slice(),
        [Effect::ScheduleNotificationExpiry { after, .. }] if *after == Duration::from_millis(750)
    ));
}

#[test]
fn teardown_empties_channel_and_ignores_later_expiry() {
    init_logging();
    let (state, id) = refresh(ready(AppState::new()), 1);
    let (state, _) = update(state, Msg::Teardown);
    assert!(state.view().notification.is_none());

    let before = state.clone();
    let (after, effects) = update(state, Msg::NotificationExpired { notification_id: id });
    assert!(effects.is_empty());
    assert_eq!(after, before);
}
