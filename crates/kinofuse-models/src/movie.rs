use serde::{Deserialize, Serialize};
use crate::imdb_id::ImdbId;

/// Unified movie record merging the two catalogs' fields.
///
/// Both natural keys (`imdb_id`, `kinopoisk_id`) are unique once persisted
/// and never null. A record is created at most once per IMDb identifier and
/// is immutable afterwards; re-resolving the same identity is a pure read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CanonicalMovie {
    pub imdb_id: ImdbId,
    pub kinopoisk_id: u64,
    pub title_en: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_ru: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternative_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub released: Option<String>,
    /// Runtime in minutes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub writer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_en: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description_en: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_ru: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description_ru: Option<String>,
    /// Ratings are independently nullable, scaled to [0,10] and rounded to
    /// one decimal place at normalization time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating_kp: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating_imdb: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating_metacritic: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,
    pub genres: Vec<String>,
    /// Secondary-catalog media kind ("movie", "tv-series", ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub is_series: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_seasons: Option<u32>,
}

/// Derive the short form of a description: everything preceding the first
/// `". "` sentence terminator, or the full text verbatim when no terminator
/// exists.
pub fn short_description(text: &str) -> String {
    match text.split_once(". ") {
        Some((first, _)) => first.to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_description_takes_first_sentence() {
        let text = "Two imprisoned men bond over a number of years. Redemption follows.";
        assert_eq!(
            short_description(text),
            "Two imprisoned men bond over a number of years"
        );
    }

    #[test]
    fn test_short_description_without_terminator_is_verbatim() {
        let text = "An unbroken single sentence without a terminator";
        assert_eq!(short_description(text), text);
    }

    #[test]
    fn test_short_description_ignores_trailing_period() {
        // A final "." with no following space is not a terminator.
        let text = "One sentence only.";
        assert_eq!(short_description(text), "One sentence only.");
    }

    #[test]
    fn test_short_description_empty_text() {
        assert_eq!(short_description(""), "");
    }
}
