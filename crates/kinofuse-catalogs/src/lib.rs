pub mod error;
pub mod kinopoisk;
pub mod normalize;
pub mod omdb;
pub mod traits;

pub use error::CatalogError;
pub use kinopoisk::{KinopoiskClient, KinopoiskMovie, NormalizedSecondary};
pub use omdb::{NormalizedPrimary, OmdbClient, OmdbMovie};
pub use traits::{PrimaryCatalog, SecondaryCatalog};
