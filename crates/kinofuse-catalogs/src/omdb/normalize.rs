use kinofuse_models::short_description;
use crate::normalize::{normalize_rating, parse_fraction_value, parse_leading_u32, parse_rating};
use crate::omdb::api::OmdbMovie;

/// Primary-catalog fields after normalization, ready for unification.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedPrimary {
    pub imdb_id: Option<String>,
    pub title: Option<String>,
    pub year: Option<String>,
    pub released: Option<String>,
    pub runtime: Option<u32>,
    pub director: Option<String>,
    pub writer: Option<String>,
    pub plot: Option<String>,
    pub short_plot: Option<String>,
    pub rating_imdb: Option<f64>,
    pub rating_metacritic: Option<f64>,
    pub poster_url: Option<String>,
    pub genres: Vec<String>,
}

/// Convert a raw OMDb payload into normalized primary fields.
///
/// Total and side-effect free: "N/A" markers and parse failures become
/// `None`, never errors. Rating fields prefer the structured `Ratings`
/// array over the flat string fields, with the flat fields as fallback.
pub fn normalize(raw: &OmdbMovie) -> NormalizedPrimary {
    let plot = clean(raw.plot.as_deref());
    let short_plot = plot.as_deref().map(short_description);

    NormalizedPrimary {
        imdb_id: clean(raw.imdb_id.as_deref()),
        title: clean(raw.title.as_deref()),
        year: clean(raw.year.as_deref()),
        released: clean(raw.released.as_deref()),
        runtime: clean(raw.runtime.as_deref())
            .as_deref()
            .and_then(parse_leading_u32),
        director: clean(raw.director.as_deref()),
        writer: clean(raw.writer.as_deref()),
        plot,
        short_plot,
        rating_imdb: nested_rating(raw, "Internet Movie Database")
            .or_else(|| clean(raw.imdb_rating.as_deref()).as_deref().and_then(parse_rating)),
        rating_metacritic: nested_rating(raw, "Metacritic").or_else(|| metascore(raw)),
        poster_url: clean(raw.poster.as_deref()),
        genres: clean(raw.genre.as_deref())
            .map(|g| g.split(", ").map(str::to_string).collect())
            .unwrap_or_default(),
    }
}

/// Treat OMDb's "N/A" marker and empty strings as absent.
fn clean(value: Option<&str>) -> Option<String> {
    match value {
        Some("") | Some("N/A") | None => None,
        Some(v) => Some(v.to_string()),
    }
}

/// Pull a rating for `source` out of the structured `Ratings` array and
/// rescale it onto [0,10] from its declared denominator.
fn nested_rating(raw: &OmdbMovie, source: &str) -> Option<f64> {
    let entry = raw.ratings.iter().find(|r| r.source == source)?;
    let value = parse_fraction_value(&entry.value)?;
    let scaled = match entry.value.split('/').nth(1) {
        Some("100") => value / 10.0,
        _ => value,
    };
    normalize_rating(scaled)
}

/// Flat Metascore is on a 0-100 scale; rescale before range-checking.
fn metascore(raw: &OmdbMovie) -> Option<f64> {
    clean(raw.metascore.as_deref())?
        .trim()
        .parse::<f64>()
        .ok()
        .and_then(|v| normalize_rating(v / 10.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shawshank_json() -> OmdbMovie {
        serde_json::from_str(
            r#"{
                "Title": "The Shawshank Redemption",
                "Year": "1994",
                "Released": "14 Oct 1994",
                "Runtime": "142 min",
                "Genre": "Crime, Drama",
                "Director": "Frank Darabont",
                "Writer": "Stephen King, Frank Darabont",
                "Plot": "Two imprisoned men bond over a number of years. Both find solace and eventual redemption.",
                "Ratings": [
                    {"Source": "Internet Movie Database", "Value": "9.3/10"},
                    {"Source": "Metacritic", "Value": "82/100"}
                ],
                "Metascore": "82",
                "imdbRating": "9.3",
                "imdbVotes": "2,993,036",
                "imdbID": "tt0111161",
                "Type": "movie",
                "Poster": "https://example.com/shawshank.jpg"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_normalize_full_payload() {
        let fields = normalize(&shawshank_json());
        assert_eq!(fields.imdb_id.as_deref(), Some("tt0111161"));
        assert_eq!(fields.title.as_deref(), Some("The Shawshank Redemption"));
        assert_eq!(fields.runtime, Some(142));
        assert_eq!(fields.rating_imdb, Some(9.3));
        assert_eq!(fields.rating_metacritic, Some(8.2));
        assert_eq!(fields.genres, vec!["Crime", "Drama"]);
        assert_eq!(
            fields.short_plot.as_deref(),
            Some("Two imprisoned men bond over a number of years")
        );
    }

    #[test]
    fn test_normalize_prefers_nested_ratings_over_flat() {
        let mut raw = shawshank_json();
        // Divergent flat fields lose against the structured array.
        raw.imdb_rating = Some("1.0".to_string());
        raw.metascore = Some("10".to_string());
        let fields = normalize(&raw);
        assert_eq!(fields.rating_imdb, Some(9.3));
        assert_eq!(fields.rating_metacritic, Some(8.2));
    }

    #[test]
    fn test_normalize_falls_back_to_flat_ratings() {
        let mut raw = shawshank_json();
        raw.ratings.clear();
        let fields = normalize(&raw);
        assert_eq!(fields.rating_imdb, Some(9.3));
        assert_eq!(fields.rating_metacritic, Some(8.2));
    }

    #[test]
    fn test_normalize_na_markers_become_none() {
        let raw: OmdbMovie = serde_json::from_str(
            r#"{
                "Title": "Obscure Short",
                "Year": "N/A",
                "Runtime": "N/A",
                "Genre": "N/A",
                "Plot": "N/A",
                "Metascore": "N/A",
                "imdbRating": "N/A",
                "imdbID": "tt7777777",
                "Poster": "N/A"
            }"#,
        )
        .unwrap();
        let fields = normalize(&raw);
        assert_eq!(fields.year, None);
        assert_eq!(fields.runtime, None);
        assert_eq!(fields.rating_imdb, None);
        assert_eq!(fields.rating_metacritic, None);
        assert_eq!(fields.poster_url, None);
        assert_eq!(fields.plot, None);
        assert_eq!(fields.short_plot, None);
        assert!(fields.genres.is_empty());
    }

    #[test]
    fn test_normalize_rounds_to_one_decimal() {
        let mut raw = shawshank_json();
        raw.ratings.clear();
        raw.imdb_rating = Some("9.27".to_string());
        let fields = normalize(&raw);
        assert_eq!(fields.rating_imdb, Some(9.3));
    }

    #[test]
    fn test_single_genre_is_single_element() {
        let mut raw = shawshank_json();
        raw.genre = Some("Drama".to_string());
        assert_eq!(normalize(&raw).genres, vec!["Drama"]);
    }
}
