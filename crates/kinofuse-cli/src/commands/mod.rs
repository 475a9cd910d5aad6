pub mod config;
pub mod list;
pub mod resolve;
pub mod search;
pub mod title;
pub mod user;

use std::sync::Arc;
use std::time::Duration;
use color_eyre::eyre::{eyre, Context};
use color_eyre::Result;
use kinofuse_catalogs::{KinopoiskClient, OmdbClient};
use kinofuse_config::{Config, PathManager};
use kinofuse_core::{JsonStore, ListMutator, Resolver};
use tracing::debug;

/// Wired-up application stack: configuration, durable store, catalog
/// clients and the resolver built over them.
pub struct App {
    pub config: Config,
    pub store: Arc<JsonStore>,
    primary: Arc<OmdbClient>,
    secondary: Arc<KinopoiskClient>,
}

impl App {
    pub fn load() -> Result<Self> {
        let paths = PathManager::default();
        let config_file = paths.config_file();
        let config = Config::load_from_file(&config_file)
            .map_err(|e| eyre!(e))
            .wrap_err_with(|| format!("failed to load config from {:?}", config_file))?;
        config.validate().map_err(|e| eyre!(e))?;
        paths.ensure_directories().map_err(|e| eyre!(e))?;
        debug!("loaded configuration from {:?}", config_file);

        let data_dir = config
            .storage
            .data_dir
            .clone()
            .unwrap_or_else(|| paths.store_dir());
        let store = Arc::new(JsonStore::open(&data_dir)?);

        let primary = Arc::new(OmdbClient::new(
            config.omdb.api_url.clone(),
            config.omdb.api_key.clone(),
        ));
        let secondary = Arc::new(KinopoiskClient::new(
            config.kinopoisk.api_url.clone(),
            config.kinopoisk.api_key.clone(),
        ));

        Ok(Self {
            config,
            store,
            primary,
            secondary,
        })
    }

    pub fn primary(&self) -> Arc<OmdbClient> {
        self.primary.clone()
    }

    pub fn secondary(&self) -> Arc<KinopoiskClient> {
        self.secondary.clone()
    }

    pub fn resolver(&self) -> Arc<Resolver> {
        Arc::new(Resolver::new(
            self.primary.clone(),
            self.secondary.clone(),
            self.store.clone(),
            Duration::from_secs(self.config.fetch.timeout_secs),
        ))
    }

    pub fn list_mutator(&self) -> ListMutator {
        ListMutator::new(self.resolver(), self.store.clone())
    }
}
