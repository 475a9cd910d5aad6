use color_eyre::Result;
use kinofuse_core::search_movies;
use crate::commands::App;
use crate::output::Output;

pub async fn run(output: &Output, title: &str, limit: u32) -> Result<()> {
    let app = App::load()?;
    let hits = search_movies(app.secondary().as_ref(), title, limit).await?;

    if hits.is_empty() {
        output.error(format!("no movies matched '{}'", title));
        return Ok(());
    }
    output.search_hits(&hits);
    Ok(())
}
