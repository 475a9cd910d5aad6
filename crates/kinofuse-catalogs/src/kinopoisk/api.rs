use serde::{Deserialize, Serialize};

/// Paged response wrapper; lookups and searches both come back as `docs`.
#[derive(Debug, Deserialize)]
pub struct KinopoiskResponse {
    #[serde(default)]
    pub docs: Vec<KinopoiskMovie>,
}

/// Raw Kinopoisk movie document.
///
/// Every nested object (`rating`, `votes`, `poster`, `externalId`) is
/// optional; payloads routinely omit whole sub-objects and no field besides
/// the numeric id can be relied on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KinopoiskMovie {
    pub id: u64,
    pub name: Option<String>,
    #[serde(rename = "alternativeName")]
    pub alternative_name: Option<String>,
    pub year: Option<u32>,
    pub description: Option<String>,
    #[serde(rename = "shortDescription")]
    pub short_description: Option<String>,
    /// Runtime in minutes.
    #[serde(rename = "movieLength")]
    pub movie_length: Option<u32>,
    pub rating: Option<KinopoiskRating>,
    pub votes: Option<KinopoiskVotes>,
    pub poster: Option<KinopoiskPoster>,
    #[serde(rename = "externalId")]
    pub external_id: Option<KinopoiskExternalId>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(rename = "isSeries")]
    pub is_series: Option<bool>,
    #[serde(rename = "totalSeasons")]
    pub total_seasons: Option<u32>,
}

/// Per-scale ratings, all optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KinopoiskRating {
    pub kp: Option<f64>,
    pub imdb: Option<f64>,
    #[serde(rename = "filmCritics")]
    pub film_critics: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KinopoiskVotes {
    pub kp: Option<u64>,
    pub imdb: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KinopoiskPoster {
    pub url: Option<String>,
    #[serde(rename = "previewUrl")]
    pub preview_url: Option<String>,
}

/// Cross-reference into other ID spaces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KinopoiskExternalId {
    pub imdb: Option<String>,
}
