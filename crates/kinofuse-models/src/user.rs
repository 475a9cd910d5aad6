use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::imdb_id::ImdbId;

/// Which of the two per-user ordered collections an append targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListVariant {
    Watched,
    WatchLater,
}

/// Entry in a user's watch history. Holds a weak reference to the canonical
/// movie by identifier, not the record itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WatchedEntry {
    pub movie: ImdbId,
    pub watched_at: DateTime<Utc>,
    /// Personal rating in [0,10], validated at mutation time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_rating: Option<f32>,
}

/// Entry in a user's watch-later list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WatchListEntry {
    pub movie: ImdbId,
    pub added_at: DateTime<Utc>,
}

/// User entity. Identity issuance (passwords, tokens, roles) lives outside
/// this system; only the list-bearing shape is modeled here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(default)]
    pub watched: Vec<WatchedEntry>,
    #[serde(default)]
    pub watch_list: Vec<WatchListEntry>,
}

impl User {
    pub fn new(id: String, name: String, email: String) -> Self {
        Self {
            id,
            name,
            email,
            photo: None,
            watched: Vec::new(),
            watch_list: Vec::new(),
        }
    }

    /// Check whether the given list variant already references a movie.
    pub fn contains(&self, variant: ListVariant, movie: &ImdbId) -> bool {
        match variant {
            ListVariant::Watched => self.watched.iter().any(|e| &e.movie == movie),
            ListVariant::WatchLater => self.watch_list.iter().any(|e| &e.movie == movie),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with_entries() -> User {
        let mut user = User::new("u1".to_string(), "Alice".to_string(), "a@example.com".to_string());
        user.watched.push(WatchedEntry {
            movie: ImdbId::parse("tt0111161").unwrap(),
            watched_at: Utc::now(),
            user_rating: Some(9.0),
        });
        user.watch_list.push(WatchListEntry {
            movie: ImdbId::parse("tt0468569").unwrap(),
            added_at: Utc::now(),
        });
        user
    }

    #[test]
    fn test_contains_checks_only_the_target_variant() {
        let user = user_with_entries();
        let watched = ImdbId::parse("tt0111161").unwrap();
        let listed = ImdbId::parse("tt0468569").unwrap();

        assert!(user.contains(ListVariant::Watched, &watched));
        assert!(!user.contains(ListVariant::WatchLater, &watched));
        assert!(user.contains(ListVariant::WatchLater, &listed));
        assert!(!user.contains(ListVariant::Watched, &listed));
    }

    #[test]
    fn test_lists_default_to_empty_on_deserialize() {
        let user: User = serde_json::from_str(
            r#"{"id":"u2","name":"Bob","email":"b@example.com"}"#,
        )
        .unwrap();
        assert!(user.watched.is_empty());
        assert!(user.watch_list.is_empty());
    }
}
