use color_eyre::Result;
use kinofuse_core::UserStore;
use kinofuse_models::User;
use crate::commands::App;
use crate::output::Output;

pub async fn add(output: &Output, id: &str, name: &str, email: &str) -> Result<()> {
    let app = App::load()?;

    if app.store.find_by_id(id).await?.is_some() {
        output.error(format!("user {} already exists", id));
        return Ok(());
    }

    let user = User::new(id.to_string(), name.to_string(), email.to_string());
    app.store.save(&user).await?;
    output.success(format!("created user {} ({})", id, email));
    Ok(())
}

pub async fn show(output: &Output, id: &str) -> Result<()> {
    let app = App::load()?;

    match app.store.find_by_id(id).await? {
        Some(user) => output.print_serializable(&user),
        None => output.error(format!("user {} does not exist", id)),
    }
    Ok(())
}
