use crate::{MovieId, NotificationKind};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub collection: CollectionView,
    pub notification: Option<NotificationView>,
    pub in_flight: usize,
    pub dirty: bool,
}

/// Which of the four mutually exclusive panels the grid area shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionView {
    Loading { placeholders: usize },
    Error { message: String },
    Empty,
    Grid(Vec<MovieCardView>),
}

impl Default for CollectionView {
    fn default() -> Self {
        Self::Loading {
            placeholders: crate::state::PLACEHOLDER_CARDS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieCardView {
    pub movie_id: MovieId,
    pub title: String,
    /// `None` renders as "Unknown Year".
    pub year: Option<i32>,
    /// `None` renders as "No Cover".
    pub cover: Option<String>,
    pub refreshing: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationView {
    pub kind: NotificationKind,
    pub title: String,
    pub description: Option<String>,
}
