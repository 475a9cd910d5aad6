use std::sync::Arc;
use chrono::Utc;
use kinofuse_models::{CanonicalMovie, ListVariant, User, WatchListEntry, WatchedEntry};
use tracing::info;
use crate::error::ListError;
use crate::resolver::{Resolution, Resolver};
use crate::store::UserStore;

/// What an accepted append produced.
#[derive(Debug)]
pub struct AppendReceipt {
    pub movie: CanonicalMovie,
    pub user: User,
    /// Whether this append had to create the canonical record first.
    pub created_movie: bool,
}

/// Appends resolved movies to a user's watch history or watch-later list.
///
/// The movie is always resolved to completion before the user document is
/// even read, so a resolution failure leaves the user untouched. No lock is
/// held across the resolve-then-append sequence: two concurrent appends for
/// the same (user, movie) pair can both pass the duplicate check. The
/// stronger fix is an append-if-absent conditional write in the store.
pub struct ListMutator {
    resolver: Arc<Resolver>,
    users: Arc<dyn UserStore>,
}

impl ListMutator {
    pub fn new(resolver: Arc<Resolver>, users: Arc<dyn UserStore>) -> Self {
        Self { resolver, users }
    }

    pub async fn append(
        &self,
        user_id: &str,
        variant: ListVariant,
        movie_id: &str,
        rating: Option<f32>,
    ) -> Result<AppendReceipt, ListError> {
        if let Some(value) = rating {
            if variant != ListVariant::Watched {
                return Err(ListError::RatingNotAllowed);
            }
            if !(0.0..=10.0).contains(&value) {
                return Err(ListError::InvalidRating(value));
            }
        }

        // Resolution first; its failures must not touch the user document.
        let (movie, created_movie) = match self.resolver.resolve(movie_id).await? {
            Resolution::CacheHit(movie) => (movie, false),
            Resolution::Created(movie) => (movie, true),
            Resolution::NotFound(reason) => return Err(ListError::MovieNotFound(reason)),
        };

        let mut user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ListError::UserNotFound(user_id.to_string()))?;

        if user.contains(variant, &movie.imdb_id) {
            return Err(ListError::DuplicateEntry {
                movie: movie.imdb_id.clone(),
                variant,
            });
        }

        let now = Utc::now();
        match variant {
            ListVariant::Watched => user.watched.push(WatchedEntry {
                movie: movie.imdb_id.clone(),
                watched_at: now,
                user_rating: rating,
            }),
            ListVariant::WatchLater => user.watch_list.push(WatchListEntry {
                movie: movie.imdb_id.clone(),
                added_at: now,
            }),
        }
        self.users.save(&user).await?;
        info!(
            "added {} to {:?} list of user {}",
            movie.imdb_id, variant, user_id
        );

        Ok(AppendReceipt {
            movie,
            user,
            created_movie,
        })
    }
}
