use std::collections::HashMap;
use std::path::{Path, PathBuf};
use async_trait::async_trait;
use kinofuse_models::{CanonicalMovie, ImdbId, User};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use crate::store::{InsertOutcome, MovieStore, StoreError, UserStore};

#[derive(Default)]
struct State {
    movies: HashMap<String, CanonicalMovie>,
    kinopoisk_index: HashMap<u64, String>,
    users: HashMap<String, User>,
}

/// Durable JSON-file-backed store. The whole collection is rewritten on
/// every mutation; with one lock over all state the both-keys uniqueness
/// check and the write happen atomically with respect to other callers in
/// this process.
pub struct JsonStore {
    movies_path: PathBuf,
    users_path: PathBuf,
    state: Mutex<State>,
}

impl JsonStore {
    pub fn open(data_dir: &Path) -> Result<Self, StoreError> {
        std::fs::create_dir_all(data_dir)?;
        let movies_path = data_dir.join("movies.json");
        let users_path = data_dir.join("users.json");

        let movies: Vec<CanonicalMovie> = load_collection(&movies_path);
        let users: Vec<User> = load_collection(&users_path);
        info!(
            "opened record store in {:?} ({} movies, {} users)",
            data_dir,
            movies.len(),
            users.len()
        );

        let mut state = State::default();
        for movie in movies {
            state
                .kinopoisk_index
                .insert(movie.kinopoisk_id, movie.imdb_id.as_str().to_string());
            state
                .movies
                .insert(movie.imdb_id.as_str().to_string(), movie);
        }
        for user in users {
            state.users.insert(user.id.clone(), user);
        }

        Ok(Self {
            movies_path,
            users_path,
            state: Mutex::new(state),
        })
    }

    fn persist_movies(&self, state: &State) -> Result<(), StoreError> {
        let all: Vec<&CanonicalMovie> = state.movies.values().collect();
        save_collection(&self.movies_path, &all)
    }

    fn persist_users(&self, state: &State) -> Result<(), StoreError> {
        let all: Vec<&User> = state.users.values().collect();
        save_collection(&self.users_path, &all)
    }
}

#[async_trait]
impl MovieStore for JsonStore {
    async fn find_by_imdb_id(&self, id: &ImdbId) -> Result<Option<CanonicalMovie>, StoreError> {
        let state = self.state.lock().await;
        Ok(state.movies.get(id.as_str()).cloned())
    }

    async fn insert(&self, movie: &CanonicalMovie) -> Result<InsertOutcome, StoreError> {
        let mut state = self.state.lock().await;
        if state.movies.contains_key(movie.imdb_id.as_str())
            || state.kinopoisk_index.contains_key(&movie.kinopoisk_id)
        {
            return Ok(InsertOutcome::DuplicateKey);
        }
        state
            .kinopoisk_index
            .insert(movie.kinopoisk_id, movie.imdb_id.as_str().to_string());
        state
            .movies
            .insert(movie.imdb_id.as_str().to_string(), movie.clone());

        if let Err(e) = self.persist_movies(&state) {
            // Failed writes must not leave a phantom record in memory.
            state.movies.remove(movie.imdb_id.as_str());
            state.kinopoisk_index.remove(&movie.kinopoisk_id);
            return Err(e);
        }
        debug!("persisted canonical record {}", movie.imdb_id);
        Ok(InsertOutcome::Inserted)
    }
}

#[async_trait]
impl UserStore for JsonStore {
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, StoreError> {
        let state = self.state.lock().await;
        Ok(state.users.get(id).cloned())
    }

    async fn save(&self, user: &User) -> Result<(), StoreError> {
        let mut state = self.state.lock().await;
        let previous = state.users.insert(user.id.clone(), user.clone());
        if let Err(e) = self.persist_users(&state) {
            match previous {
                Some(prev) => state.users.insert(prev.id.clone(), prev),
                None => state.users.remove(&user.id),
            };
            return Err(e);
        }
        debug!("persisted user {}", user.id);
        Ok(())
    }
}

fn load_collection<T: DeserializeOwned>(path: &Path) -> Vec<T> {
    if !path.exists() {
        debug!("store file {:?} does not exist yet", path);
        return Vec::new();
    }
    match std::fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str(&content) {
            Ok(data) => data,
            Err(e) => {
                warn!(
                    "store corruption detected in {:?}: {}. Deleting corrupted file.",
                    path, e
                );
                if let Err(rm_err) = std::fs::remove_file(path) {
                    warn!("failed to delete corrupted store file: {}", rm_err);
                }
                Vec::new()
            }
        },
        Err(e) => {
            warn!("failed to read store file {:?}: {}", path, e);
            Vec::new()
        }
    }
}

fn save_collection<T: Serialize>(path: &Path, data: &[T]) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(data)?;
    std::fs::write(path, json)?;
    Ok(())
}
