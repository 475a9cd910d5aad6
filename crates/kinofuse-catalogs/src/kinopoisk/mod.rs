pub mod api;
pub mod client;
pub mod normalize;

pub use api::{KinopoiskMovie, KinopoiskPoster, KinopoiskRating, KinopoiskVotes};
pub use client::KinopoiskClient;
pub use normalize::{normalize, search_hit, NormalizedSecondary};
