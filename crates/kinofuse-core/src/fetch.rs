use std::sync::Arc;
use std::time::Duration;
use kinofuse_catalogs::{CatalogError, KinopoiskMovie, OmdbMovie, PrimaryCatalog, SecondaryCatalog};
use kinofuse_models::ImdbId;
use tokio::time::{error::Elapsed, timeout};
use tracing::{debug, warn};

/// The reified outcome of one upstream call.
#[derive(Debug)]
pub enum SourceOutcome<T> {
    Found(T),
    NotFound,
    Unavailable(CatalogError),
}

/// Both per-source outcomes for one identity, always complete: unification
/// never starts until each source has answered or timed out.
#[derive(Debug)]
pub struct FetchedPair {
    pub primary: SourceOutcome<OmdbMovie>,
    pub secondary: SourceOutcome<KinopoiskMovie>,
}

/// Issues both upstream requests concurrently under one shared per-source
/// deadline. A structured join: a failure or timeout on one side never
/// aborts the other.
pub struct DualFetcher {
    primary: Arc<dyn PrimaryCatalog>,
    secondary: Arc<dyn SecondaryCatalog>,
    timeout: Duration,
}

impl DualFetcher {
    pub fn new(
        primary: Arc<dyn PrimaryCatalog>,
        secondary: Arc<dyn SecondaryCatalog>,
        timeout: Duration,
    ) -> Self {
        Self {
            primary,
            secondary,
            timeout,
        }
    }

    pub async fn fetch(&self, id: &ImdbId) -> FetchedPair {
        debug!("fetching {} from both catalogs", id);
        let (primary, secondary) = tokio::join!(
            timeout(self.timeout, self.primary.fetch_by_imdb_id(id)),
            timeout(self.timeout, self.secondary.fetch_by_imdb_id(id)),
        );

        FetchedPair {
            primary: reify(self.primary.catalog_name(), self.timeout, primary),
            secondary: reify(self.secondary.catalog_name(), self.timeout, secondary),
        }
    }
}

fn reify<T>(
    catalog: &'static str,
    deadline: Duration,
    result: Result<Result<Option<T>, CatalogError>, Elapsed>,
) -> SourceOutcome<T> {
    match result {
        Ok(Ok(Some(payload))) => SourceOutcome::Found(payload),
        Ok(Ok(None)) => {
            debug!("{}: not found", catalog);
            SourceOutcome::NotFound
        }
        Ok(Err(e)) => {
            warn!("{}: unavailable: {}", catalog, e);
            SourceOutcome::Unavailable(e)
        }
        Err(_) => {
            let seconds = deadline.as_secs();
            warn!("{}: timed out after {}s", catalog, seconds);
            SourceOutcome::Unavailable(CatalogError::Timeout { catalog, seconds })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{kp_doc, omdb_payload, ScriptedBehavior, ScriptedPrimary, ScriptedSecondary};

    fn fetcher(
        primary: ScriptedBehavior,
        secondary: ScriptedBehavior,
    ) -> (DualFetcher, Arc<ScriptedPrimary>, Arc<ScriptedSecondary>) {
        let p = Arc::new(ScriptedPrimary::new(primary));
        let s = Arc::new(ScriptedSecondary::new(secondary));
        (
            DualFetcher::new(p.clone(), s.clone(), Duration::from_secs(2)),
            p,
            s,
        )
    }

    #[tokio::test]
    async fn test_both_found() {
        let (fetcher, _, _) = fetcher(ScriptedBehavior::Found, ScriptedBehavior::Found);
        let id = ImdbId::parse("tt0111161").unwrap();
        let pair = fetcher.fetch(&id).await;
        assert!(matches!(pair.primary, SourceOutcome::Found(_)));
        assert!(matches!(pair.secondary, SourceOutcome::Found(_)));
    }

    #[tokio::test]
    async fn test_one_failure_does_not_abort_the_other() {
        let (fetcher, p, s) = fetcher(ScriptedBehavior::Unavailable, ScriptedBehavior::Found);
        let id = ImdbId::parse("tt0111161").unwrap();
        let pair = fetcher.fetch(&id).await;
        assert!(matches!(pair.primary, SourceOutcome::Unavailable(_)));
        assert!(matches!(pair.secondary, SourceOutcome::Found(_)));
        assert_eq!(p.calls(), 1);
        assert_eq!(s.calls(), 1);
    }

    #[tokio::test]
    async fn test_timeout_becomes_unavailable() {
        let fetcher = DualFetcher::new(
            Arc::new(ScriptedPrimary::new(ScriptedBehavior::Hang)),
            Arc::new(ScriptedSecondary::new(ScriptedBehavior::NotFound)),
            Duration::from_millis(50),
        );
        let id = ImdbId::parse("tt0111161").unwrap();
        let pair = fetcher.fetch(&id).await;
        match pair.primary {
            SourceOutcome::Unavailable(CatalogError::Timeout { catalog, .. }) => {
                assert_eq!(catalog, "omdb");
            }
            other => panic!("expected timeout, got {:?}", other),
        }
        assert!(matches!(pair.secondary, SourceOutcome::NotFound));
    }

    #[tokio::test]
    async fn test_not_found_is_not_unavailable() {
        let (fetcher, _, _) = fetcher(ScriptedBehavior::NotFound, ScriptedBehavior::NotFound);
        let id = ImdbId::parse("tt9999999").unwrap();
        let pair = fetcher.fetch(&id).await;
        assert!(matches!(pair.primary, SourceOutcome::NotFound));
        assert!(matches!(pair.secondary, SourceOutcome::NotFound));
    }

    #[tokio::test]
    async fn test_payloads_flow_through() {
        let (fetcher, _, _) = fetcher(ScriptedBehavior::Found, ScriptedBehavior::Found);
        let id = ImdbId::parse("tt0111161").unwrap();
        let pair = fetcher.fetch(&id).await;
        if let SourceOutcome::Found(movie) = pair.primary {
            assert_eq!(movie.imdb_id, omdb_payload("tt0111161").imdb_id);
        } else {
            panic!("expected payload");
        }
        if let SourceOutcome::Found(doc) = pair.secondary {
            assert_eq!(doc.id, kp_doc("tt0111161").id);
        } else {
            panic!("expected payload");
        }
    }
}
