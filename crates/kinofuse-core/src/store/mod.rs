pub mod json;
pub mod memory;

pub use json::JsonStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use kinofuse_models::{CanonicalMovie, ImdbId, User};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage serialization failure: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Keys point at each other inconsistently (e.g. a record holds this
    /// secondary key under a different primary key).
    #[error("storage conflict: {0}")]
    Conflict(String),
}

/// What happened to an insert attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    /// Another record already owns one of the natural keys. Not an error:
    /// the caller re-reads the existing record instead.
    DuplicateKey,
}

/// Keyed store of canonical movie records.
///
/// This is the serialization point for duplicate-write prevention: `insert`
/// enforces uniqueness on both natural keys (IMDb id and Kinopoisk id)
/// atomically with respect to concurrent inserts. Records are immutable
/// once persisted; there is deliberately no update operation.
#[async_trait]
pub trait MovieStore: Send + Sync {
    async fn find_by_imdb_id(&self, id: &ImdbId) -> Result<Option<CanonicalMovie>, StoreError>;

    async fn insert(&self, movie: &CanonicalMovie) -> Result<InsertOutcome, StoreError>;
}

/// Keyed store of user entities (opaque identity collaborator).
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, StoreError>;

    async fn save(&self, user: &User) -> Result<(), StoreError>;
}
