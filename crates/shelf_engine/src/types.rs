use std::fmt;

use shelf_core::{MovieId, MovieRecord, NotificationId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    LibraryLoaded(Result<Vec<MovieRecord>, ClientError>),
    MovieRefreshed {
        movie_id: MovieId,
        result: Result<MovieRecord, ClientError>,
    },
    NotificationExpired {
        notification_id: NotificationId,
    },
}

/// A failed call against the library service.
///
/// `message` is what a user may see: the service's own error text when it sent
/// one, otherwise a description of what went wrong on the way.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ClientError {
    pub kind: FailureKind,
    pub message: String,
}

impl ClientError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Decode,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::Decode => write!(f, "malformed response"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
