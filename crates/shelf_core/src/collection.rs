use crate::{MovieId, MovieRecord};

/// Load status of the movie collection.
///
/// `Loading` settles exactly once, into either `Error` or `Ready`. Once ready,
/// single records may be swapped in place but the whole collection never goes
/// back to `Loading` or `Error`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CollectionState {
    #[default]
    Loading,
    Error(String),
    Ready(Vec<MovieRecord>),
}

/// Outcome of [`MovieCollection::replace`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplaceOutcome {
    Replaced,
    Unchanged,
    UnknownId,
    NotReady,
    IdMismatch,
}

/// Owner of the authoritative record sequence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MovieCollection {
    state: CollectionState,
}

impl MovieCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &CollectionState {
        &self.state
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, CollectionState::Ready(_))
    }

    pub fn records(&self) -> Option<&[MovieRecord]> {
        match &self.state {
            CollectionState::Ready(records) => Some(records),
            _ => None,
        }
    }

    pub fn get(&self, id: MovieId) -> Option<&MovieRecord> {
        self.records()?.iter().find(|record| record.id == id)
    }

    /// Settles a pending load. Returns `false` (and changes nothing) when the
    /// collection has already settled.
    pub fn settle(&mut self, result: Result<Vec<MovieRecord>, String>) -> bool {
        if !matches!(self.state, CollectionState::Loading) {
            return false;
        }
        self.state = match result {
            Ok(records) => CollectionState::Ready(records),
            Err(message) => CollectionState::Error(message),
        };
        true
    }

    /// Swaps the record with `id` for `record`, leaving every other record and
    /// the ordering untouched.
    pub fn replace(&mut self, id: MovieId, record: MovieRecord) -> ReplaceOutcome {
        let CollectionState::Ready(records) = &mut self.state else {
            return ReplaceOutcome::NotReady;
        };
        if record.id != id {
            return ReplaceOutcome::IdMismatch;
        }
        match records.iter_mut().find(|existing| existing.id == id) {
            Some(existing) if *existing == record => ReplaceOutcome::Unchanged,
            Some(existing) => {
                *existing = record;
                ReplaceOutcome::Replaced
            }
            None => ReplaceOutcome::UnknownId,
        }
    }
}
