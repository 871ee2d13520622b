use crate::cli::{
    actions::{client, render_user, users::ProfileArgs},
    globals::GlobalArgs,
};
use anyhow::{Context, Result};

#[derive(Debug)]
pub enum Command {
    Show,
    Update(ProfileArgs),
}

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub command: Command,
}

/// Works on the account named by the stored token.
///
/// # Errors
/// Returns an error if the token carries no user id or the request fails.
pub async fn execute(args: Args) -> Result<()> {
    let client = client(&args.globals)?;
    let id = client
        .current_user_id()
        .context("unable to read the signed-in user")?;
    let user = client
        .get_user(id)
        .await
        .context("unable to load your profile")?;

    match args.command {
        Command::Show => println!("{}", render_user(&client, &user)),
        Command::Update(profile) => {
            let form = profile.into_form(&user).await?;
            client
                .update_user(id, form)
                .await
                .context("unable to update your profile")?;
            println!("Profile updated");
        }
    }

    Ok(())
}
