use serde::{Deserialize, Serialize};

/// One row of a secondary-catalog title search, mapped to a flat shape.
///
/// Search hits are a pass-through view: upstream ordering is preserved and
/// ratings are forwarded as reported, not normalized. Only fully resolved
/// movies get the [`crate::CanonicalMovie`] treatment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchHit {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imdb_id: Option<String>,
    pub kinopoisk_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_en: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_ru: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating_kp: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating_imdb: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating_critics: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Vote count, preferring the IMDb tally over the Kinopoisk one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub votes: Option<u64>,
}
