use async_trait::async_trait;
use kinofuse_models::ImdbId;
use reqwest::Client;
use tracing::{debug, warn};
use crate::error::CatalogError;
use crate::kinopoisk::api::{KinopoiskMovie, KinopoiskResponse};
use crate::traits::SecondaryCatalog;

const CATALOG: &str = "kinopoisk";

/// HTTP client for the Kinopoisk API. Authenticates via the `X-API-KEY`
/// header rather than a query parameter.
#[derive(Clone)]
pub struct KinopoiskClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl KinopoiskClient {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            api_key,
        }
    }

    async fn get_docs(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<Vec<KinopoiskMovie>, CatalogError> {
        let url = format!("{}{}", self.base_url.trim_end_matches('/'), path);
        let response = self
            .client
            .get(&url)
            .header("X-API-KEY", &self.api_key)
            .header("Accept", "application/json")
            .query(params)
            .send()
            .await
            .map_err(|e| CatalogError::http(CATALOG, e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("Kinopoisk returned {}: {}", status, body);
            return Err(CatalogError::Status {
                catalog: CATALOG,
                status,
                body,
            });
        }

        let parsed: KinopoiskResponse = response
            .json()
            .await
            .map_err(|e| CatalogError::http(CATALOG, e))?;
        Ok(parsed.docs)
    }
}

#[async_trait]
impl SecondaryCatalog for KinopoiskClient {
    fn catalog_name(&self) -> &'static str {
        CATALOG
    }

    async fn fetch_by_imdb_id(
        &self,
        id: &ImdbId,
    ) -> Result<Option<KinopoiskMovie>, CatalogError> {
        debug!("Kinopoisk: fetching by external id {}", id);
        let docs = self
            .get_docs("/movie", &[("externalId.imdb", id.as_str()), ("limit", "1")])
            .await?;
        // An empty docs array is absence, not an upstream failure.
        Ok(docs.into_iter().next())
    }

    async fn search_by_title(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<Vec<KinopoiskMovie>, CatalogError> {
        debug!("Kinopoisk: searching '{}' (limit {})", query, limit);
        let limit = limit.to_string();
        self.get_docs(
            "/movie/search",
            &[("query", query), ("limit", limit.as_str()), ("page", "1")],
        )
        .await
    }
}
