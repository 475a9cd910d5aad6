use color_eyre::Result;
use kinofuse_core::Resolution;
use crate::commands::App;
use crate::output::Output;

pub async fn run(output: &Output, id: &str) -> Result<()> {
    let app = App::load()?;
    let resolver = app.resolver();

    match resolver.resolve(id).await? {
        Resolution::CacheHit(movie) => {
            output.success(format!("{} already resolved", movie.imdb_id));
            output.movie(&movie);
        }
        Resolution::Created(movie) => {
            output.success(format!("{} resolved and persisted", movie.imdb_id));
            output.movie(&movie);
        }
        Resolution::NotFound(reason) => {
            output.error(format!("{}: {}", id, reason));
        }
    }
    Ok(())
}
