use crate::cli::{
    actions::{
        Action, auth, feed, posts, profile,
        users::{self, ProfileArgs},
    },
    commands::session::{ARG_API_URL, ARG_TOKEN_FILE},
    globals::GlobalArgs,
};
use anyhow::{Context, Result, anyhow};
use clap::ArgMatches;
use secrecy::SecretString;
use std::path::PathBuf;

fn string(matches: &ArgMatches, id: &str) -> Option<String> {
    matches.get_one::<String>(id).cloned()
}

fn required(matches: &ArgMatches, id: &str) -> Result<String> {
    string(matches, id).with_context(|| format!("missing required argument: --{id}"))
}

fn secret(matches: &ArgMatches, id: &str) -> Result<SecretString> {
    required(matches, id).map(SecretString::from)
}

fn id(matches: &ArgMatches) -> Result<u64> {
    matches
        .get_one::<u64>("id")
        .copied()
        .context("missing required argument: <ID>")
}

fn paths(matches: &ArgMatches, id: &str) -> Vec<PathBuf> {
    matches
        .get_many::<PathBuf>(id)
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}

fn profile_args(matches: &ArgMatches) -> ProfileArgs {
    ProfileArgs {
        firstname: string(matches, "firstname"),
        lastname: string(matches, "lastname"),
        email: string(matches, "email"),
        phone: string(matches, "phone"),
        password: string(matches, "password").map(SecretString::from),
        profile: matches.get_one::<PathBuf>("profile").cloned(),
    }
}

fn globals(matches: &ArgMatches) -> Result<GlobalArgs> {
    let api_url = required(matches, ARG_API_URL)?;
    let token_file = matches.get_one::<PathBuf>(ARG_TOKEN_FILE).cloned();
    Ok(GlobalArgs::new(api_url, token_file))
}

fn auth_command(name: &str, sub_m: &ArgMatches) -> Result<auth::Command> {
    Ok(match name {
        "login" => auth::Command::Login {
            email: required(sub_m, "email")?,
            password: secret(sub_m, "password")?,
        },
        "logout" => auth::Command::Logout,
        "register" => auth::Command::Register(auth::RegisterArgs {
            firstname: required(sub_m, "firstname")?,
            lastname: required(sub_m, "lastname")?,
            email: required(sub_m, "email")?,
            phone: required(sub_m, "phone")?,
            password: secret(sub_m, "password")?,
            profile: sub_m.get_one::<PathBuf>("profile").cloned(),
        }),
        _ => {
            let new_password = required(sub_m, "new-password")?;
            let confirm_password =
                string(sub_m, "confirm-password").unwrap_or_else(|| new_password.clone());
            auth::Command::Password {
                old_password: secret(sub_m, "old-password")?,
                new_password: SecretString::from(new_password),
                confirm_password: SecretString::from(confirm_password),
            }
        }
    })
}

fn posts_command(matches: &ArgMatches) -> Result<posts::Command> {
    match matches.subcommand() {
        Some(("show", sub_m)) => Ok(posts::Command::Show(id(sub_m)?)),
        Some(("create", sub_m)) => Ok(posts::Command::Create {
            name: required(sub_m, "name")?,
            description: required(sub_m, "description")?,
            images: paths(sub_m, "image"),
        }),
        Some(("update", sub_m)) => Ok(posts::Command::Update {
            id: id(sub_m)?,
            name: string(sub_m, "name"),
            description: string(sub_m, "description"),
            images: paths(sub_m, "image"),
            delete_images: sub_m
                .get_many::<String>("delete-image")
                .map(|values| values.cloned().collect())
                .unwrap_or_default(),
        }),
        Some(("delete", sub_m)) => Ok(posts::Command::Delete(id(sub_m)?)),
        _ => Err(anyhow!("unknown post command")),
    }
}

fn user_command(matches: &ArgMatches) -> Result<users::Command> {
    match matches.subcommand() {
        Some(("show", sub_m)) => Ok(users::Command::Show(id(sub_m)?)),
        Some(("update", sub_m)) => Ok(users::Command::Update {
            id: id(sub_m)?,
            profile: profile_args(sub_m),
        }),
        _ => Err(anyhow!("unknown user command")),
    }
}

fn profile_command(matches: &ArgMatches) -> Result<profile::Command> {
    match matches.subcommand() {
        Some(("show", _)) => Ok(profile::Command::Show),
        Some(("update", sub_m)) => Ok(profile::Command::Update(profile_args(sub_m))),
        _ => Err(anyhow!("unknown profile command")),
    }
}

/// # Errors
/// Returns an error if required arguments are missing or inconsistent.
pub fn handler(matches: &ArgMatches) -> Result<Action> {
    let globals = globals(matches)?;

    match matches.subcommand() {
        Some((name @ ("login" | "logout" | "register" | "password"), sub_m)) => {
            Ok(Action::Auth(auth::Args {
                globals,
                command: auth_command(name, sub_m)?,
            }))
        }
        Some(("feed", sub_m)) => Ok(Action::Feed(feed::Args {
            globals,
            pages: if sub_m.get_flag("all") {
                None
            } else {
                sub_m.get_one::<u32>("pages").copied()
            },
        })),
        Some(("post", sub_m)) => Ok(Action::Posts(posts::Args {
            globals,
            command: posts_command(sub_m)?,
        })),
        Some(("users", sub_m)) => Ok(Action::Users(users::Args {
            globals,
            command: users::Command::List {
                page: sub_m.get_one::<u32>("page").copied().unwrap_or(1),
            },
        })),
        Some(("user", sub_m)) => Ok(Action::Users(users::Args {
            globals,
            command: user_command(sub_m)?,
        })),
        Some(("profile", sub_m)) => Ok(Action::Profile(profile::Args {
            globals,
            command: profile_command(sub_m)?,
        })),
        _ => Err(anyhow!("no command given, see `postboard --help`")),
    }
}
