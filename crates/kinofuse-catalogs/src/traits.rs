use async_trait::async_trait;
use kinofuse_models::ImdbId;
use crate::error::CatalogError;
use crate::kinopoisk::KinopoiskMovie;
use crate::omdb::OmdbMovie;

/// Primary rating/metadata provider, keyed by IMDb-style identifiers.
///
/// `Ok(None)` means the catalog answered and the title is absent there;
/// `Err` means the catalog could not answer at all. The distinction matters:
/// absence and unavailability take different paths through unification.
#[async_trait]
pub trait PrimaryCatalog: Send + Sync {
    fn catalog_name(&self) -> &'static str;

    async fn fetch_by_imdb_id(&self, id: &ImdbId) -> Result<Option<OmdbMovie>, CatalogError>;

    async fn fetch_by_title(&self, title: &str) -> Result<Option<OmdbMovie>, CatalogError>;
}

/// Secondary localized-metadata provider with its own numeric ID space,
/// cross-referenced to the primary catalog via an external-ID field.
#[async_trait]
pub trait SecondaryCatalog: Send + Sync {
    fn catalog_name(&self) -> &'static str;

    async fn fetch_by_imdb_id(&self, id: &ImdbId)
        -> Result<Option<KinopoiskMovie>, CatalogError>;

    /// Title search, upstream ranking preserved.
    async fn search_by_title(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<Vec<KinopoiskMovie>, CatalogError>;
}
