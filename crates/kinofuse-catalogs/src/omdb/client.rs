use async_trait::async_trait;
use kinofuse_models::ImdbId;
use reqwest::Client;
use tracing::{debug, warn};
use crate::error::CatalogError;
use crate::omdb::api::{OmdbEnvelope, OmdbMovie};
use crate::traits::PrimaryCatalog;

const CATALOG: &str = "omdb";

/// HTTP client for the OMDb API.
#[derive(Clone)]
pub struct OmdbClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OmdbClient {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            api_key,
        }
    }

    async fn get_movie(
        &self,
        params: &[(&str, &str)],
    ) -> Result<Option<OmdbMovie>, CatalogError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("apikey", self.api_key.as_str()), ("plot", "full")])
            .query(params)
            .send()
            .await
            .map_err(|e| CatalogError::http(CATALOG, e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("OMDb returned {}: {}", status, body);
            return Err(CatalogError::Status {
                catalog: CATALOG,
                status,
                body,
            });
        }

        let envelope: OmdbEnvelope = response
            .json()
            .await
            .map_err(|e| CatalogError::http(CATALOG, e))?;

        if envelope.is_success() {
            return Ok(Some(envelope.movie));
        }
        if envelope.is_not_found() {
            debug!("OMDb: no match for {:?}", params);
            return Ok(None);
        }
        // 200 with an in-band rejection (bad key, malformed request).
        Err(CatalogError::Api {
            catalog: CATALOG,
            message: envelope
                .error
                .unwrap_or_else(|| "unknown error".to_string()),
        })
    }
}

#[async_trait]
impl PrimaryCatalog for OmdbClient {
    fn catalog_name(&self) -> &'static str {
        CATALOG
    }

    async fn fetch_by_imdb_id(&self, id: &ImdbId) -> Result<Option<OmdbMovie>, CatalogError> {
        debug!("OMDb: fetching by id {}", id);
        self.get_movie(&[("i", id.as_str())]).await
    }

    async fn fetch_by_title(&self, title: &str) -> Result<Option<OmdbMovie>, CatalogError> {
        debug!("OMDb: fetching by title '{}'", title);
        self.get_movie(&[("t", title)]).await
    }
}
