use std::time::Duration;

use crate::collection::{CollectionState, MovieCollection};
use crate::notification::{NotificationChannel, NOTIFICATION_TIMEOUT};
use crate::refresh::RefreshTracker;
use crate::view_model::{AppViewModel, CollectionView, MovieCardView, NotificationView};

/// Placeholder cards shown while the library is loading.
pub const PLACEHOLDER_CARDS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    #[default]
    Created,
    Mounted,
    TornDown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    lifecycle: Lifecycle,
    pub(crate) collection: MovieCollection,
    pub(crate) refreshing: RefreshTracker,
    pub(crate) notifications: NotificationChannel,
    notification_timeout: Duration,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            lifecycle: Lifecycle::default(),
            collection: MovieCollection::default(),
            refreshing: RefreshTracker::default(),
            notifications: NotificationChannel::default(),
            notification_timeout: NOTIFICATION_TIMEOUT,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_notification_timeout(timeout: Duration) -> Self {
        Self {
            notification_timeout: timeout,
            ..Self::default()
        }
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn collection(&self) -> &CollectionState {
        self.collection.state()
    }

    pub fn notifications(&self) -> &NotificationChannel {
        &self.notifications
    }

    pub fn notification_timeout(&self) -> Duration {
        self.notification_timeout
    }

    pub fn is_refreshing(&self, id: crate::MovieId) -> bool {
        self.refreshing.is_refreshing(id)
    }

    /// Nothing loading, nothing in flight and no toast showing.
    pub fn is_idle(&self) -> bool {
        !matches!(self.collection.state(), CollectionState::Loading)
            && self.refreshing.is_empty()
            && self.notifications.current().is_none()
    }

    pub fn view(&self) -> AppViewModel {
        let collection = match self.collection.state() {
            CollectionState::Loading => CollectionView::Loading {
                placeholders: PLACEHOLDER_CARDS,
            },
            CollectionState::Error(message) => CollectionView::Error {
                message: message.clone(),
            },
            CollectionState::Ready(records) if records.is_empty() => CollectionView::Empty,
            CollectionState::Ready(records) => CollectionView::Grid(
                records
                    .iter()
                    .map(|record| MovieCardView {
                        movie_id: record.id,
                        title: record.title.clone(),
                        year: record.known_year(),
                        cover: record.cover_url().map(ToOwned::to_owned),
                        refreshing: self.refreshing.is_refreshing(record.id),
                    })
                    .collect(),
            ),
        };

        AppViewModel {
            collection,
            notification: self
                .notifications
                .current()
                .map(|notification| NotificationView {
                    kind: notification.kind,
                    title: notification.title.clone(),
                    description: notification.description.clone(),
                }),
            in_flight: self.refreshing.len(),
            dirty: self.dirty,
        }
    }

    /// Returns whether anything observable changed since the last call, and
    /// resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn mount(&mut self) -> bool {
        if self.lifecycle != Lifecycle::Created {
            return false;
        }
        self.lifecycle = Lifecycle::Mounted;
        true
    }

    pub(crate) fn tear_down(&mut self) {
        self.lifecycle = Lifecycle::TornDown;
        self.refreshing.clear();
        self.notifications.clear();
        self.dirty = true;
    }
}
