use kinofuse_catalogs::CatalogError;
use kinofuse_models::{ImdbId, InvalidImdbId, ListVariant};
use thiserror::Error;
use crate::store::StoreError;
use crate::unify::NotFoundReason;

/// Failure classes of the resolution pipeline.
///
/// Not-found is not an error here: it is a regular [`crate::Resolution`]
/// outcome. Errors cover rejected input, unreachable upstreams, and broken
/// persistence. Nothing is retried inside the core; retry policy belongs to
/// the caller.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Malformed identity, rejected before any network or storage access.
    #[error(transparent)]
    Validation(#[from] InvalidImdbId),

    /// Both catalogs failed to answer; nothing to unify against.
    #[error("both catalogs unavailable (primary: {primary}; secondary: {secondary})")]
    Upstream {
        primary: CatalogError,
        secondary: CatalogError,
    },

    #[error(transparent)]
    Storage(#[from] StoreError),
}

/// Failure classes of list mutation.
#[derive(Debug, Error)]
pub enum ListError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("movie not found: {0}")]
    MovieNotFound(NotFoundReason),

    #[error("user {0} not found")]
    UserNotFound(String),

    #[error("movie {movie} is already in the {variant:?} list")]
    DuplicateEntry { movie: ImdbId, variant: ListVariant },

    #[error("rating {0} is outside [0,10]")]
    InvalidRating(f32),

    #[error("a rating only applies to the watch history")]
    RatingNotAllowed,

    #[error(transparent)]
    Storage(#[from] StoreError),
}
