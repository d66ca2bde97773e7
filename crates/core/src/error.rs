//! Error types for Lodging Core

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;
use uuid::Uuid;

/// Which collection an id was looked up in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Hotel,
    Customer,
    Reservation,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Hotel => write!(f, "Hotel"),
            EntityKind::Customer => write!(f, "Customer"),
            EntityKind::Reservation => write!(f, "Reservation"),
        }
    }
}

/// Storage-level failure, kept separate so the path travels with it
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: Uuid },

    #[error("No rooms available in hotel {0}")]
    NoAvailability(Uuid),

    #[error("Reservation {0} is already cancelled")]
    AlreadyCancelled(Uuid),

    #[error("{kind} {id} is referenced by {count} active reservation(s)")]
    Referenced {
        kind: EntityKind,
        id: Uuid,
        count: usize,
    },

    #[error("Persistence error on {}: {source}", path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: PersistenceError,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn not_found(kind: EntityKind, id: Uuid) -> Self {
        Error::NotFound { kind, id }
    }

    pub(crate) fn persistence(
        path: impl Into<PathBuf>,
        source: impl Into<PersistenceError>,
    ) -> Self {
        Error::Persistence {
            path: path.into(),
            source: source.into(),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_readable() {
        let id = Uuid::nil();
        assert_eq!(
            Error::not_found(EntityKind::Hotel, id).to_string(),
            format!("Hotel not found: {}", id)
        );
        assert_eq!(
            Error::Referenced {
                kind: EntityKind::Customer,
                id,
                count: 2
            }
            .to_string(),
            format!("Customer {} is referenced by 2 active reservation(s)", id)
        );
    }

    #[test]
    fn test_persistence_message_includes_path() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = Error::persistence("data/hotels.json", io);
        let msg = err.to_string();
        assert!(msg.contains("data/hotels.json"));
        assert!(msg.contains("denied"));
    }
}
