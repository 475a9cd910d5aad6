use kinofuse_models::{short_description, SearchHit};
use crate::kinopoisk::api::KinopoiskMovie;
use crate::normalize::normalize_rating;

/// Secondary-catalog fields after normalization, ready for unification.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedSecondary {
    pub kinopoisk_id: u64,
    pub imdb_id: Option<String>,
    pub title_ru: Option<String>,
    pub alternative_title: Option<String>,
    pub description_ru: Option<String>,
    pub short_description_ru: Option<String>,
    pub rating_kp: Option<f64>,
    pub runtime: Option<u32>,
    pub poster_url: Option<String>,
    pub preview_url: Option<String>,
    pub kind: Option<String>,
    pub is_series: bool,
    pub total_seasons: Option<u32>,
}

/// Convert a raw Kinopoisk document into normalized secondary fields.
///
/// Total and side-effect free. The rating comes only from the nested
/// `rating` object; the short description prefers the catalog's own
/// `shortDescription` and falls back to a first-sentence split of the full
/// description.
pub fn normalize(raw: &KinopoiskMovie) -> NormalizedSecondary {
    NormalizedSecondary {
        kinopoisk_id: raw.id,
        imdb_id: raw.external_id.as_ref().and_then(|e| e.imdb.clone()),
        title_ru: raw.name.clone(),
        alternative_title: raw.alternative_name.clone(),
        description_ru: raw.description.clone(),
        short_description_ru: raw
            .short_description
            .clone()
            .or_else(|| raw.description.as_deref().map(short_description)),
        rating_kp: raw
            .rating
            .as_ref()
            .and_then(|r| r.kp)
            .and_then(normalize_rating),
        runtime: raw.movie_length,
        poster_url: raw.poster.as_ref().and_then(|p| p.url.clone()),
        preview_url: raw.poster.as_ref().and_then(|p| p.preview_url.clone()),
        kind: raw.kind.clone(),
        is_series: raw.is_series.unwrap_or(false),
        total_seasons: raw.total_seasons,
    }
}

/// Map a search result document to the flat pass-through row shape.
/// Ratings are forwarded as reported; ordering is the caller's concern.
pub fn search_hit(raw: &KinopoiskMovie) -> SearchHit {
    SearchHit {
        imdb_id: raw.external_id.as_ref().and_then(|e| e.imdb.clone()),
        kinopoisk_id: raw.id,
        title_en: raw.alternative_name.clone(),
        title_ru: raw.name.clone(),
        short_description: raw
            .short_description
            .clone()
            .or_else(|| raw.description.as_deref().map(short_description)),
        year: raw.year,
        poster_url: raw.poster.as_ref().and_then(|p| p.url.clone()),
        rating_kp: raw.rating.as_ref().and_then(|r| r.kp),
        rating_imdb: raw.rating.as_ref().and_then(|r| r.imdb),
        rating_critics: raw.rating.as_ref().and_then(|r| r.film_critics),
        kind: raw.kind.clone(),
        votes: raw
            .votes
            .as_ref()
            .and_then(|v| v.imdb.or(v.kp)),
    }
}
