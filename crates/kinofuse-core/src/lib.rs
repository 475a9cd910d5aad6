pub mod error;
pub mod fetch;
pub mod lists;
pub mod resolver;
pub mod search;
pub mod store;
pub mod unify;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{ListError, ResolveError};
pub use fetch::{DualFetcher, FetchedPair, SourceOutcome};
pub use lists::{AppendReceipt, ListMutator};
pub use resolver::{Resolution, Resolver};
pub use search::search_movies;
pub use store::{InsertOutcome, JsonStore, MemoryStore, MovieStore, StoreError, UserStore};
pub use unify::{unify, CatalogSide, NotFoundReason, Unification};
