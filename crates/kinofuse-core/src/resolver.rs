use std::sync::Arc;
use std::time::Duration;
use kinofuse_catalogs::{PrimaryCatalog, SecondaryCatalog};
use kinofuse_models::{CanonicalMovie, ImdbId};
use tracing::{debug, info, warn};
use crate::error::ResolveError;
use crate::fetch::DualFetcher;
use crate::store::{InsertOutcome, MovieStore, StoreError};
use crate::unify::{unify, NotFoundReason, Unification};

/// Terminal outcome of one resolution.
#[derive(Debug)]
pub enum Resolution {
    /// The canonical record already existed; no upstream call was made.
    CacheHit(CanonicalMovie),
    /// This call fetched, unified and persisted the record.
    Created(CanonicalMovie),
    NotFound(NotFoundReason),
}

impl Resolution {
    /// The resolved record, when resolution succeeded.
    pub fn movie(&self) -> Option<&CanonicalMovie> {
        match self {
            Resolution::CacheHit(movie) | Resolution::Created(movie) => Some(movie),
            Resolution::NotFound(_) => None,
        }
    }
}

/// Orchestrating facade over the two catalogs and the record store:
/// cache-check, concurrent dual fetch, unification, idempotent persistence.
///
/// All collaborators are injected at construction. The resolver holds no
/// lock of its own across a resolution; duplicate-write prevention is
/// delegated entirely to the store's natural-key uniqueness. No write
/// happens before the persist step, so callers may freely abandon the
/// returned future (e.g. under their own timeout) without risking a
/// half-written record.
pub struct Resolver {
    fetcher: DualFetcher,
    movies: Arc<dyn MovieStore>,
}

impl Resolver {
    pub fn new(
        primary: Arc<dyn PrimaryCatalog>,
        secondary: Arc<dyn SecondaryCatalog>,
        movies: Arc<dyn MovieStore>,
        fetch_timeout: Duration,
    ) -> Self {
        Self {
            fetcher: DualFetcher::new(primary, secondary, fetch_timeout),
            movies,
        }
    }

    /// Resolve a raw identifier. Validation happens first: a malformed
    /// identity is rejected before any network or storage access.
    pub async fn resolve(&self, raw_id: &str) -> Result<Resolution, ResolveError> {
        let id = ImdbId::parse(raw_id)?;
        self.resolve_id(&id).await
    }

    pub async fn resolve_id(&self, id: &ImdbId) -> Result<Resolution, ResolveError> {
        if let Some(existing) = self.movies.find_by_imdb_id(id).await? {
            debug!("cache hit for {}", id);
            return Ok(Resolution::CacheHit(existing));
        }

        let pair = self.fetcher.fetch(id).await;
        match unify(id, pair) {
            Unification::Unified(movie) => self.persist(id, movie).await,
            Unification::NotFound(reason) => {
                debug!("{}: {}", id, reason);
                Ok(Resolution::NotFound(reason))
            }
            Unification::SourcesDisagree { unavailable, cause } => {
                warn!(
                    "{}: catalogs disagree, {} catalog unavailable: {}",
                    id, unavailable, cause
                );
                Ok(Resolution::NotFound(NotFoundReason::SourcesDisagree(
                    unavailable,
                )))
            }
            Unification::Unavailable { primary, secondary } => {
                warn!(
                    "{}: both catalogs unavailable (primary: {}; secondary: {})",
                    id, primary, secondary
                );
                Err(ResolveError::Upstream { primary, secondary })
            }
        }
    }

    async fn persist(
        &self,
        id: &ImdbId,
        movie: CanonicalMovie,
    ) -> Result<Resolution, ResolveError> {
        match self.movies.insert(&movie).await? {
            InsertOutcome::Inserted => {
                info!("created canonical record for {}", id);
                Ok(Resolution::Created(movie))
            }
            InsertOutcome::DuplicateKey => {
                // Lost the uniqueness race; the record that won is the truth.
                debug!("lost insert race for {}, re-reading", id);
                match self.movies.find_by_imdb_id(id).await? {
                    Some(existing) => Ok(Resolution::CacheHit(existing)),
                    None => Err(ResolveError::Storage(StoreError::Conflict(format!(
                        "natural keys of {} are owned by another record",
                        id
                    )))),
                }
            }
        }
    }
}
