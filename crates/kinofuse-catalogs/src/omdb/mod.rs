pub mod api;
pub mod client;
pub mod normalize;

pub use api::{OmdbMovie, OmdbRating};
pub use client::OmdbClient;
pub use normalize::{normalize, NormalizedPrimary};
