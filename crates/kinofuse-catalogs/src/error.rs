use thiserror::Error;

/// Failure talking to one upstream catalog.
///
/// Every variant names the catalog it came from so log lines and surfaced
/// errors identify which of the two providers misbehaved.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("{catalog}: request failed: {source}")]
    Http {
        catalog: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{catalog}: unexpected status {status}: {body}")]
    Status {
        catalog: &'static str,
        status: reqwest::StatusCode,
        body: String,
    },

    /// A 200 response whose body carries an upstream-level rejection
    /// (e.g. an invalid API key reported inside the JSON envelope).
    #[error("{catalog}: rejected request: {message}")]
    Api {
        catalog: &'static str,
        message: String,
    },

    #[error("{catalog}: timed out after {seconds}s")]
    Timeout {
        catalog: &'static str,
        seconds: u64,
    },
}

impl CatalogError {
    pub fn http(catalog: &'static str, source: reqwest::Error) -> Self {
        Self::Http { catalog, source }
    }

    pub fn catalog(&self) -> &'static str {
        match self {
            Self::Http { catalog, .. }
            | Self::Status { catalog, .. }
            | Self::Api { catalog, .. }
            | Self::Timeout { catalog, .. } => catalog,
        }
    }
}
