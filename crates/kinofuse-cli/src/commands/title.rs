use color_eyre::Result;
use kinofuse_catalogs::PrimaryCatalog;
use crate::commands::App;
use crate::output::Output;

/// Direct primary-catalog lookup by title; the payload is forwarded as-is.
pub async fn run(output: &Output, title: &str) -> Result<()> {
    let app = App::load()?;

    match app.primary().fetch_by_title(title).await? {
        Some(movie) => output.print_serializable(&movie),
        None => output.error(format!("no movie titled '{}'", title)),
    }
    Ok(())
}
