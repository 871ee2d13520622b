use clap::{Arg, Command};
use std::path::PathBuf;

/// Optional overrides shared by `user update` and `profile update`.
#[must_use]
pub fn with_profile_args(command: Command) -> Command {
    command
        .arg(Arg::new("firstname").long("firstname"))
        .arg(Arg::new("lastname").long("lastname"))
        .arg(Arg::new("email").short('e').long("email"))
        .arg(Arg::new("phone").long("phone"))
        .arg(
            Arg::new("password")
                .long("password")
                .help("Set a new password"),
        )
        .arg(
            Arg::new("profile")
                .long("profile")
                .help("New profile picture (jpeg or png, at most 3MB)")
                .value_parser(clap::value_parser!(PathBuf)),
        )
}

fn id_arg() -> Arg {
    Arg::new("id")
        .help("User id")
        .required(true)
        .value_parser(clap::value_parser!(u64))
}

#[must_use]
pub fn users() -> Command {
    Command::new("users").about("List registered users").arg(
        Arg::new("page")
            .short('p')
            .long("page")
            .help("Page number, starting at 1")
            .default_value("1")
            .value_parser(clap::value_parser!(u32).range(1..)),
    )
}

#[must_use]
pub fn user() -> Command {
    Command::new("user")
        .about("Inspect or edit a user")
        .subcommand_required(true)
        .subcommand(Command::new("show").about("Show one user").arg(id_arg()))
        .subcommand(with_profile_args(
            Command::new("update")
                .about("Edit a user; unset fields keep their value")
                .arg(id_arg()),
        ))
}

#[must_use]
pub fn profile() -> Command {
    Command::new("profile")
        .about("Inspect or edit the signed-in account")
        .subcommand_required(true)
        .subcommand(Command::new("show").about("Show the signed-in account"))
        .subcommand(with_profile_args(
            Command::new("update").about("Edit the signed-in account; unset fields keep their value"),
        ))
}
