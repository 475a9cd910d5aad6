use kinofuse_catalogs::{kinopoisk, CatalogError, SecondaryCatalog};
use kinofuse_models::SearchHit;
use tracing::debug;

/// Title search against the secondary catalog, mapped to flat rows.
/// Upstream ranking is passed through unmodified.
pub async fn search_movies(
    catalog: &dyn SecondaryCatalog,
    query: &str,
    limit: u32,
) -> Result<Vec<SearchHit>, CatalogError> {
    let docs = catalog.search_by_title(query, limit).await?;
    debug!("search '{}' returned {} hits", query, docs.len());
    Ok(docs.iter().map(kinopoisk::search_hit).collect())
}
