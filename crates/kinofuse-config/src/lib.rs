pub mod config;
pub mod paths;

pub use config::{Config, FetchOptions, KinopoiskConfig, OmdbConfig, StorageConfig};
pub use paths::PathManager;
