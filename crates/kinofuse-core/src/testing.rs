//! Scripted collaborator doubles shared by the core test modules.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use async_trait::async_trait;
use kinofuse_catalogs::{
    CatalogError, KinopoiskMovie, OmdbMovie, PrimaryCatalog, SecondaryCatalog,
};
use kinofuse_models::{CanonicalMovie, ImdbId};
use serde_json::json;
use tokio::time::sleep;

/// How a scripted catalog answers every request.
#[derive(Debug, Clone, Copy)]
pub enum ScriptedBehavior {
    Found,
    NotFound,
    Unavailable,
    /// Never answers; exercises the fetch deadline.
    Hang,
}

pub struct ScriptedPrimary {
    behavior: ScriptedBehavior,
    delay: Duration,
    calls: AtomicUsize,
}

impl ScriptedPrimary {
    pub fn new(behavior: ScriptedBehavior) -> Self {
        Self::with_delay(behavior, Duration::ZERO)
    }

    pub fn with_delay(behavior: ScriptedBehavior, delay: Duration) -> Self {
        Self {
            behavior,
            delay,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PrimaryCatalog for ScriptedPrimary {
    fn catalog_name(&self) -> &'static str {
        "omdb"
    }

    async fn fetch_by_imdb_id(&self, id: &ImdbId) -> Result<Option<OmdbMovie>, CatalogError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }
        match self.behavior {
            ScriptedBehavior::Found => Ok(Some(omdb_payload(id.as_str()))),
            ScriptedBehavior::NotFound => Ok(None),
            ScriptedBehavior::Unavailable => Err(unavailable("omdb")),
            ScriptedBehavior::Hang => {
                sleep(Duration::from_secs(3600)).await;
                Ok(None)
            }
        }
    }

    async fn fetch_by_title(&self, _title: &str) -> Result<Option<OmdbMovie>, CatalogError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.behavior {
            ScriptedBehavior::Found => Ok(Some(omdb_payload("tt0111161"))),
            ScriptedBehavior::NotFound => Ok(None),
            _ => Err(unavailable("omdb")),
        }
    }
}

pub struct ScriptedSecondary {
    behavior: ScriptedBehavior,
    delay: Duration,
    calls: AtomicUsize,
}

impl ScriptedSecondary {
    pub fn new(behavior: ScriptedBehavior) -> Self {
        Self::with_delay(behavior, Duration::ZERO)
    }

    pub fn with_delay(behavior: ScriptedBehavior, delay: Duration) -> Self {
        Self {
            behavior,
            delay,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SecondaryCatalog for ScriptedSecondary {
    fn catalog_name(&self) -> &'static str {
        "kinopoisk"
    }

    async fn fetch_by_imdb_id(
        &self,
        id: &ImdbId,
    ) -> Result<Option<KinopoiskMovie>, CatalogError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }
        match self.behavior {
            ScriptedBehavior::Found => Ok(Some(kp_doc(id.as_str()))),
            ScriptedBehavior::NotFound => Ok(None),
            ScriptedBehavior::Unavailable => Err(unavailable("kinopoisk")),
            ScriptedBehavior::Hang => {
                sleep(Duration::from_secs(3600)).await;
                Ok(None)
            }
        }
    }

    async fn search_by_title(
        &self,
        _query: &str,
        _limit: u32,
    ) -> Result<Vec<KinopoiskMovie>, CatalogError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.behavior {
            ScriptedBehavior::Found => Ok(vec![kp_doc("tt0111161"), second_kp_doc()]),
            ScriptedBehavior::NotFound => Ok(Vec::new()),
            _ => Err(unavailable("kinopoisk")),
        }
    }
}

pub fn unavailable(catalog: &'static str) -> CatalogError {
    CatalogError::Api {
        catalog,
        message: "service unavailable".to_string(),
    }
}

pub fn omdb_payload(imdb_id: &str) -> OmdbMovie {
    serde_json::from_value(json!({
        "imdbID": imdb_id,
        "Title": "The Shawshank Redemption",
        "Year": "1994",
        "Released": "14 Oct 1994",
        "Runtime": "142 min",
        "Genre": "Crime, Drama",
        "Director": "Frank Darabont",
        "Writer": "Stephen King, Frank Darabont",
        "Plot": "Two imprisoned men bond over a number of years. Both find solace and eventual redemption.",
        "Poster": "https://example.com/shawshank.jpg",
        "Metascore": "82",
        "imdbRating": "9.3",
        "imdbVotes": "2,993,036",
        "Type": "movie",
        "Ratings": [
            {"Source": "Internet Movie Database", "Value": "9.3/10"},
            {"Source": "Metacritic", "Value": "82/100"}
        ]
    }))
    .unwrap()
}

pub fn kp_doc(imdb_id: &str) -> KinopoiskMovie {
    serde_json::from_value(json!({
        "id": 326,
        "name": "Побег из Шоушенка",
        "alternativeName": "The Shawshank Redemption",
        "year": 1994,
        "description": "Бухгалтер Энди Дюфрейн обвинён в убийстве. Оказавшись в тюрьме, он сталкивается с жестокостью.",
        "shortDescription": "Несправедливо осуждённый банкир готовит побег",
        "movieLength": 142,
        "rating": {"kp": 9.23, "imdb": 9.3, "filmCritics": 8.1},
        "votes": {"kp": 950000, "imdb": 2993036},
        "poster": {"url": "https://example.com/full.jpg", "previewUrl": "https://example.com/preview.jpg"},
        "externalId": {"imdb": imdb_id},
        "type": "movie",
        "isSeries": false
    }))
    .unwrap()
}

pub fn second_kp_doc() -> KinopoiskMovie {
    serde_json::from_value(json!({
        "id": 435,
        "name": "Зеленая миля",
        "alternativeName": "The Green Mile",
        "year": 1999,
        "externalId": {"imdb": "tt0120689"}
    }))
    .unwrap()
}

pub fn canonical_movie(imdb_id: &str, kinopoisk_id: u64) -> CanonicalMovie {
    CanonicalMovie {
        imdb_id: ImdbId::parse(imdb_id).unwrap(),
        kinopoisk_id,
        title_en: "The Shawshank Redemption".to_string(),
        title_ru: Some("Побег из Шоушенка".to_string()),
        alternative_title: None,
        year: Some("1994".to_string()),
        released: Some("14 Oct 1994".to_string()),
        runtime: Some(142),
        director: Some("Frank Darabont".to_string()),
        writer: Some("Stephen King, Frank Darabont".to_string()),
        description_en: None,
        short_description_en: None,
        description_ru: None,
        short_description_ru: None,
        rating_kp: Some(9.2),
        rating_imdb: Some(9.3),
        rating_metacritic: Some(8.2),
        poster_url: None,
        preview_url: None,
        genres: vec!["Crime".to_string(), "Drama".to_string()],
        kind: Some("movie".to_string()),
        is_series: false,
        total_seasons: None,
    }
}
