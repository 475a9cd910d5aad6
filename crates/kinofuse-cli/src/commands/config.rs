use color_eyre::eyre::eyre;
use color_eyre::Result;
use kinofuse_config::{Config, PathManager};
use crate::output::Output;

/// Show the effective configuration with API keys masked.
pub fn show(output: &Output, full: bool) -> Result<()> {
    let paths = PathManager::default();
    let config_file = paths.config_file();
    if !config_file.exists() {
        output.error(format!("no config file at {:?}", config_file));
        return Ok(());
    }

    let config = Config::load_from_file(&config_file).map_err(|e| eyre!(e))?;
    output.info(format!("config file: {:?}", config_file));
    output.info(format!("omdb.api_url: {}", config.omdb.api_url));
    output.info(format!(
        "omdb.api_key: {}",
        mask(&config.omdb.api_key, full)
    ));
    output.info(format!("kinopoisk.api_url: {}", config.kinopoisk.api_url));
    output.info(format!(
        "kinopoisk.api_key: {}",
        mask(&config.kinopoisk.api_key, full)
    ));
    output.info(format!("fetch.timeout_secs: {}", config.fetch.timeout_secs));
    match &config.storage.data_dir {
        Some(dir) => output.info(format!("storage.data_dir: {:?}", dir)),
        None => output.info(format!("storage.data_dir: {:?} (default)", paths.store_dir())),
    }
    Ok(())
}

fn mask(secret: &str, full: bool) -> String {
    if full {
        return secret.to_string();
    }
    if secret.len() <= 4 {
        return "****".to_string();
    }
    format!("****{}", &secret[secret.len() - 4..])
}
