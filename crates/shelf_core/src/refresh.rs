use std::collections::BTreeSet;

use crate::MovieId;

/// Per-movie in-flight refresh markers.
///
/// A movie is either refreshing or not; a second trigger for a movie that is
/// already in flight is refused, so a completion always clears exactly the
/// marker its own request set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RefreshTracker {
    in_flight: BTreeSet<MovieId>,
}

impl RefreshTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `id` as refreshing. Returns `false` if it already was.
    pub fn begin(&mut self, id: MovieId) -> bool {
        self.in_flight.insert(id)
    }

    /// Clears the marker for `id`. Returns `false` if there was none.
    pub fn finish(&mut self, id: MovieId) -> bool {
        self.in_flight.remove(&id)
    }

    pub fn is_refreshing(&self, id: MovieId) -> bool {
        self.in_flight.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.in_flight.len()
    }

    pub fn is_empty(&self) -> bool {
        self.in_flight.is_empty()
    }

    pub fn clear(&mut self) {
        self.in_flight.clear();
    }
}
