use std::collections::HashMap;
use async_trait::async_trait;
use kinofuse_models::{CanonicalMovie, ImdbId, User};
use tokio::sync::Mutex;
use crate::store::{InsertOutcome, MovieStore, StoreError, UserStore};

#[derive(Default)]
struct State {
    /// Keyed by IMDb id; the secondary index maps Kinopoisk ids back to it.
    movies: HashMap<String, CanonicalMovie>,
    kinopoisk_index: HashMap<u64, String>,
    users: HashMap<String, User>,
}

/// Ephemeral store backing tests and keyless runs. One mutex over all
/// state makes the both-keys uniqueness check atomic under concurrency.
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<State>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn movie_count(&self) -> usize {
        self.state.lock().await.movies.len()
    }
}

#[async_trait]
impl MovieStore for MemoryStore {
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
        Ok(InsertOutcome::Inserted)
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, StoreError> {
        let state = self.state.lock().await;
        Ok(state.users.get(id).cloned())
    }

    async fn save(&self, user: &User) -> Result<(), StoreError> {
        let mut state = self.state.lock().await;
        state.users.insert(user.id.clone(), user.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::canonical_movie;

    #[tokio::test]
    async fn test_insert_then_find() {
        let store = MemoryStore::new();
        let movie = canonical_movie("tt0111161", 326);
        assert_eq!(store.insert(&movie).await.unwrap(), InsertOutcome::Inserted);
        let found = store.find_by_imdb_id(&movie.imdb_id).await.unwrap();
        assert_eq!(found, Some(movie));
    }

    #[tokio::test]
    async fn test_duplicate_primary_key_rejected() {
        let store = MemoryStore::new();
        let movie = canonical_movie("tt0111161", 326);
        store.insert(&movie).await.unwrap();

        let mut other = canonical_movie("tt0111161", 999);
        other.title_en = "Impostor".to_string();
        assert_eq!(
            store.insert(&other).await.unwrap(),
            InsertOutcome::DuplicateKey
        );
        // The original record is untouched.
        let found = store.find_by_imdb_id(&movie.imdb_id).await.unwrap().unwrap();
        assert_eq!(found.kinopoisk_id, 326);
    }

    #[tokio::test]
    async fn test_duplicate_secondary_key_rejected() {
        let store = MemoryStore::new();
        store
            .insert(&canonical_movie("tt0111161", 326))
            .await
            .unwrap();
        let clash = canonical_movie("tt0468569", 326);
        assert_eq!(
            store.insert(&clash).await.unwrap(),
            InsertOutcome::DuplicateKey
        );
    }

    #[tokio::test]
    async fn test_user_save_and_reload() {
        let store = MemoryStore::new();
        let user = User::new("u1".into(), "Alice".into(), "a@example.com".into());
        assert!(store.find_by_id("u1").await.unwrap().is_none());
        store.save(&user).await.unwrap();
        assert_eq!(store.find_by_id("u1").await.unwrap(), Some(user));
    }
}
