use crate::cli::{
    actions::{client, read_uploads, render_user},
    globals::GlobalArgs,
};
use anyhow::{Context, Result};
use postboard_client::Upload;
use postboard_core::{
    forms::ProfileUpdate,
    model::{User, UserId},
    pager::{USERS_PAGE_SIZE, page_count},
};
use secrecy::{ExposeSecret, SecretString};
use std::path::PathBuf;

/// Field overrides for a profile edit; `None` keeps the stored value.
#[derive(Debug, Default)]
pub struct ProfileArgs {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub password: Option<SecretString>,
    pub profile: Option<PathBuf>,
}

impl ProfileArgs {
    /// Builds the update form from the current user and the overrides.
    ///
    /// # Errors
    /// Returns an error if the new profile picture cannot be read.
    pub async fn into_form(self, user: &User) -> Result<ProfileUpdate<Upload>> {
        let mut form = ProfileUpdate::from_user(user);
        if let Some(firstname) = self.firstname {
            form.firstname = firstname;
        }
        if let Some(lastname) = self.lastname {
            form.lastname = lastname;
        }
        if let Some(email) = self.email {
            form.email = email;
        }
        if let Some(phone) = self.phone {
            form.phone = phone;
        }
        form.password = self
            .password
            .map(|password| password.expose_secret().to_string());
        if let Some(path) = self.profile {
            form.profile = read_uploads(&[path]).await?.pop();
        }
        Ok(form)
    }
}

#[derive(Debug)]
pub enum Command {
    List { page: u32 },
    Show(UserId),
    Update { id: UserId, profile: ProfileArgs },
}

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub command: Command,
}

/// # Errors
/// Returns an error if validation or the request fails.
pub async fn execute(args: Args) -> Result<()> {
    let client = client(&args.globals)?;

    match args.command {
        Command::List { page } => {
            let listing = client
                .list_users(page)
                .await
                .context("unable to load users")?;
            let pages = page_count(listing.total_users, USERS_PAGE_SIZE);

            if listing.users.is_empty() {
                println!("No users on page {page}");
            }
            for user in &listing.users {
                println!("{}\n", render_user(&client, user));
            }
            println!(
                "Page {page} of {pages} ({} users)",
                listing.total_users
            );
        }
        Command::Show(id) => {
            let user = client
                .get_user(id)
                .await
                .with_context(|| format!("unable to load user {id}"))?;
            println!("{}", render_user(&client, &user));
        }
        Command::Update { id, profile } => {
            let user = client
                .get_user(id)
                .await
                .with_context(|| format!("unable to load user {id}"))?;
            let form = profile.into_form(&user).await?;
            client
                .update_user(id, form)
                .await
                .with_context(|| format!("unable to update user {id}"))?;
            println!("User {id} updated");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: 1,
            firstname: "Ada".to_string(),
            lastname: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "5551234".to_string(),
            profile_image: None,
        }
    }

    #[tokio::test]
    async fn test_profile_args_keep_unset_fields() -> Result<()> {
        let args = ProfileArgs {
            lastname: Some("Byron".to_string()),
            ..ProfileArgs::default()
        };
        let form = args.into_form(&user()).await?;
        assert_eq!(form.firstname, "Ada");
        assert_eq!(form.lastname, "Byron");
        assert_eq!(form.phone, "5551234");
        assert!(form.password.is_none());
        assert!(form.profile.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_profile_args_missing_picture() {
        let args = ProfileArgs {
            profile: Some(PathBuf::from("/nonexistent/postboard/ada.png")),
            ..ProfileArgs::default()
        };
        assert!(args.into_form(&user()).await.is_err());
    }
}
