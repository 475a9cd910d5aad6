use clap::ValueEnum;
use color_eyre::Result;
use kinofuse_core::ListError;
use kinofuse_models::ListVariant;
use crate::commands::App;
use crate::output::Output;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListTarget {
    Watched,
    #[value(name = "watch-later")]
    WatchLater,
}

impl From<ListTarget> for ListVariant {
    fn from(target: ListTarget) -> Self {
        match target {
            ListTarget::Watched => ListVariant::Watched,
            ListTarget::WatchLater => ListVariant::WatchLater,
        }
    }
}

pub async fn add(
    output: &Output,
    user_id: &str,
    movie_id: &str,
    target: ListTarget,
    rating: Option<f32>,
) -> Result<()> {
    let app = App::load()?;
    let mutator = app.list_mutator();

    match mutator
        .append(user_id, target.into(), movie_id, rating)
        .await
    {
        Ok(receipt) => {
            if receipt.created_movie {
                output.info(format!(
                    "{} was not in the record store; resolved it first",
                    receipt.movie.imdb_id
                ));
            }
            output.success(format!(
                "added {} to the {:?} list of {}",
                receipt.movie.title_en,
                ListVariant::from(target),
                user_id
            ));
            Ok(())
        }
        // Conflicts and misses are reported, not propagated as failures.
        Err(ListError::DuplicateEntry { movie, variant }) => {
            output.error(format!("{} is already in the {:?} list", movie, variant));
            Ok(())
        }
        Err(ListError::MovieNotFound(reason)) => {
            output.error(format!("{}: {}", movie_id, reason));
            Ok(())
        }
        Err(ListError::UserNotFound(id)) => {
            output.error(format!("user {} does not exist", id));
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
