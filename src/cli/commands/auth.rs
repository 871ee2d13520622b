use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;

fn password_arg(id: &'static str, long: &'static str, env: &'static str) -> Arg {
    Arg::new(id)
        .long(long)
        .env(env)
        .hide_env_values(true)
        .required(true)
}

#[must_use]
pub fn login() -> Command {
    Command::new("login")
        .about("Sign in and store the session token")
        .arg(
            Arg::new("email")
                .short('e')
                .long("email")
                .help("Account email")
                .required(true),
        )
        .arg(password_arg("password", "password", "POSTBOARD_PASSWORD").help("Account password"))
}

#[must_use]
pub fn logout() -> Command {
    Command::new("logout").about("Forget the stored session token")
}

#[must_use]
pub fn register() -> Command {
    Command::new("register")
        .about("Create a new account")
        .arg(Arg::new("firstname").long("firstname").required(true))
        .arg(Arg::new("lastname").long("lastname").required(true))
        .arg(Arg::new("email").short('e').long("email").required(true))
        .arg(Arg::new("phone").long("phone").required(true))
        .arg(password_arg("password", "password", "POSTBOARD_PASSWORD").help("Account password"))
        .arg(
            Arg::new("profile")
                .long("profile")
                .help("Profile picture (jpeg or png, at most 3MB)")
                .value_parser(clap::value_parser!(PathBuf)),
        )
}

#[must_use]
pub fn password() -> Command {
    Command::new("password")
        .about("Change the password of the signed-in account")
        .arg(
            password_arg("old-password", "old-password", "POSTBOARD_PASSWORD")
                .help("Current password"),
        )
        .arg(
            password_arg("new-password", "new-password", "POSTBOARD_NEW_PASSWORD")
                .help("New password"),
        )
        .arg(
            Arg::new("confirm-password")
                .long("confirm-password")
                .help("Repeat the new password (defaults to --new-password)")
                .hide_env_values(true)
                .env("POSTBOARD_CONFIRM_PASSWORD")
                .action(ArgAction::Set),
        )
}
