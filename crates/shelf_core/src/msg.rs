#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The owning view came up; triggers the one library load.
    Mounted,
    /// Library load settled. `Err` carries failure detail, possibly empty.
    LibraryLoaded(Result<Vec<crate::MovieRecord>, String>),
    /// User asked to refresh one movie.
    RefreshClicked { movie_id: crate::MovieId },
    /// Refresh round-trip settled for one movie.
    RefreshCompleted {
        movie_id: crate::MovieId,
        result: Result<crate::MovieRecord, String>,
    },
    /// A toast expiry timer elapsed.
    NotificationExpired {
        notification_id: crate::NotificationId,
    },
    /// User closed the toast.
    NotificationDismissed,
    /// The owning view is being torn down.
    Teardown,
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
