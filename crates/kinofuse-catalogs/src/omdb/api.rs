use serde::{Deserialize, Serialize};

/// Raw OMDb movie payload.
///
/// OMDb serves every field as a string and marks absent values with the
/// literal `"N/A"`, so nothing here is trusted to be numeric or present.
/// The `Ratings` array is the structured form of the flat rating fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OmdbMovie {
    #[serde(rename = "imdbID")]
    pub imdb_id: Option<String>,
    #[serde(rename = "Title")]
    pub title: Option<String>,
    #[serde(rename = "Year")]
    pub year: Option<String>,
    #[serde(rename = "Released")]
    pub released: Option<String>,
    #[serde(rename = "Runtime")]
    pub runtime: Option<String>,
    #[serde(rename = "Genre")]
    pub genre: Option<String>,
    #[serde(rename = "Director")]
    pub director: Option<String>,
    #[serde(rename = "Writer")]
    pub writer: Option<String>,
    #[serde(rename = "Plot")]
    pub plot: Option<String>,
    #[serde(rename = "Poster")]
    pub poster: Option<String>,
    #[serde(rename = "Metascore")]
    pub metascore: Option<String>,
    #[serde(rename = "imdbRating")]
    pub imdb_rating: Option<String>,
    #[serde(rename = "imdbVotes")]
    pub imdb_votes: Option<String>,
    #[serde(rename = "Type")]
    pub kind: Option<String>,
    #[serde(rename = "Ratings", default)]
    pub ratings: Vec<OmdbRating>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OmdbRating {
    #[serde(rename = "Source")]
    pub source: String,
    /// Scale-qualified value, e.g. "9.3/10" or "82/100".
    #[serde(rename = "Value")]
    pub value: String,
}

/// Response envelope: OMDb answers 200 for everything and signals both
/// not-found and request rejection through `Response`/`Error`.
#[derive(Debug, Deserialize)]
pub struct OmdbEnvelope {
    #[serde(rename = "Response")]
    pub response: Option<String>,
    #[serde(rename = "Error")]
    pub error: Option<String>,
    #[serde(flatten)]
    pub movie: OmdbMovie,
}

impl OmdbEnvelope {
    pub fn is_success(&self) -> bool {
        self.response.as_deref() == Some("True")
    }

    /// Errors that mean "this title does not exist", as opposed to a
    /// rejected or failed request.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self.error.as_deref(),
            Some("Movie not found!") | Some("Incorrect IMDb ID.") | Some("Series or episode not found!")
        )
    }
}
