use std::fmt;
use kinofuse_catalogs::{kinopoisk, omdb, CatalogError, NormalizedPrimary, NormalizedSecondary};
use kinofuse_models::{CanonicalMovie, ImdbId};
use tracing::debug;
use crate::fetch::{FetchedPair, SourceOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogSide {
    Primary,
    Secondary,
}

impl fmt::Display for CatalogSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSide::Primary => write!(f, "primary"),
            CatalogSide::Secondary => write!(f, "secondary"),
        }
    }
}

/// Why a resolution came up empty-handed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundReason {
    MissingFromPrimary,
    MissingFromSecondary,
    MissingFromBoth,
    /// One catalog found the title while the other was unreachable, so the
    /// two sources could not be reconciled. Surfaced as not-found, never
    /// retried.
    SourcesDisagree(CatalogSide),
}

impl fmt::Display for NotFoundReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotFoundReason::MissingFromPrimary => write!(f, "absent from the primary catalog"),
            NotFoundReason::MissingFromSecondary => {
                write!(f, "absent from the secondary catalog")
            }
            NotFoundReason::MissingFromBoth => write!(f, "absent from both catalogs"),
            NotFoundReason::SourcesDisagree(side) => {
                write!(f, "catalogs disagree ({} catalog unavailable)", side)
            }
        }
    }
}

/// Outcome of merging the two per-source outcomes.
#[derive(Debug)]
pub enum Unification {
    Unified(CanonicalMovie),
    NotFound(NotFoundReason),
    /// One Found, one Unavailable. Partial availability is not success.
    SourcesDisagree {
        unavailable: CatalogSide,
        cause: CatalogError,
    },
    /// Neither catalog answered; the caller surfaces this as an upstream
    /// failure rather than a unification verdict.
    Unavailable {
        primary: CatalogError,
        secondary: CatalogError,
    },
}

/// Merge the two per-source outcomes for `id` into one canonical verdict.
///
/// Positive resolution requires both sources to have found the title; a
/// title present in only one catalog is not-found overall. Absence decides
/// over unavailability: a definite miss on one side makes the other side's
/// health irrelevant.
pub fn unify(id: &ImdbId, pair: FetchedPair) -> Unification {
    use SourceOutcome::{Found, NotFound, Unavailable};

    match (pair.primary, pair.secondary) {
        (Found(raw_primary), Found(raw_secondary)) => {
            let primary = omdb::normalize(&raw_primary);
            let secondary = kinopoisk::normalize(&raw_secondary);
            debug!("unifying {} (kinopoisk id {})", id, secondary.kinopoisk_id);
            Unification::Unified(merge(id, primary, secondary))
        }
        (NotFound, NotFound) => Unification::NotFound(NotFoundReason::MissingFromBoth),
        (NotFound, _) => Unification::NotFound(NotFoundReason::MissingFromPrimary),
        (_, NotFound) => Unification::NotFound(NotFoundReason::MissingFromSecondary),
        (Found(_), Unavailable(cause)) => Unification::SourcesDisagree {
            unavailable: CatalogSide::Secondary,
            cause,
        },
        (Unavailable(cause), Found(_)) => Unification::SourcesDisagree {
            unavailable: CatalogSide::Primary,
            cause,
        },
        (Unavailable(primary), Unavailable(secondary)) => Unification::Unavailable {
            primary,
            secondary,
        },
    }
}

/// Field precedence: primary wins for title, plot, genres and runtime with
/// secondary as fallback; localized title and description come from the
/// secondary catalog.
fn merge(id: &ImdbId, primary: NormalizedPrimary, secondary: NormalizedSecondary) -> CanonicalMovie {
    CanonicalMovie {
        imdb_id: id.clone(),
        kinopoisk_id: secondary.kinopoisk_id,
        title_en: primary
            .title
            .or(secondary.alternative_title.clone())
            .unwrap_or_default(),
        title_ru: secondary.title_ru,
        alternative_title: secondary.alternative_title,
        year: primary.year,
        released: primary.released,
        runtime: primary.runtime.or(secondary.runtime),
        director: primary.director,
        writer: primary.writer,
        description_en: primary.plot,
        short_description_en: primary.short_plot,
        description_ru: secondary.description_ru,
        short_description_ru: secondary.short_description_ru,
        rating_kp: secondary.rating_kp,
        rating_imdb: primary.rating_imdb,
        rating_metacritic: primary.rating_metacritic,
        poster_url: primary.poster_url.or(secondary.poster_url),
        preview_url: secondary.preview_url,
        genres: primary.genres,
        kind: secondary.kind,
        is_series: secondary.is_series,
        total_seasons: secondary.total_seasons,
    }
}
