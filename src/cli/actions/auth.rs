use crate::cli::{
    actions::{client, read_uploads},
    globals::GlobalArgs,
};
use anyhow::{Context, Result};
use postboard_core::forms::{ChangePassword, LoginForm, RegisterForm};
use secrecy::{ExposeSecret, SecretString};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug)]
pub struct RegisterArgs {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub phone: String,
    pub password: SecretString,
    pub profile: Option<PathBuf>,
}

#[derive(Debug)]
pub enum Command {
    Login {
        email: String,
        password: SecretString,
    },
    Logout,
    Register(RegisterArgs),
    Password {
        old_password: SecretString,
        new_password: SecretString,
        confirm_password: SecretString,
    },
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
        Command::Login { email, password } => {
            let form = LoginForm {
                email,
                password: password.expose_secret().to_string(),
            };
            client.login(&form).await.context("login failed")?;
            info!(email = %form.email, "signed in");
            println!("Signed in as {}", form.email.trim());
        }
        Command::Logout => {
            client.logout()?;
            println!("Signed out");
        }
        Command::Register(register) => {
            let profile = match register.profile {
                Some(path) => read_uploads(&[path]).await?.pop(),
                None => None,
            };
            let form = RegisterForm {
                firstname: register.firstname,
                lastname: register.lastname,
                email: register.email,
                password: register.password.expose_secret().to_string(),
                phone: register.phone,
                profile,
            };
            client.register(form).await.context("registration failed")?;
            println!("Account created, sign in with `postboard login`");
        }
        Command::Password {
            old_password,
            new_password,
            confirm_password,
        } => {
            let form = ChangePassword {
                old_password: old_password.expose_secret().to_string(),
                new_password: new_password.expose_secret().to_string(),
                confirm_password: confirm_password.expose_secret().to_string(),
            };
            let message = client
                .change_password(&form)
                .await
                .context("password change failed")?;
            println!("{message}");
        }
    }

    Ok(())
}
