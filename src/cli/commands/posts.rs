use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;

fn id_arg() -> Arg {
    Arg::new("id")
        .help("Post id")
        .required(true)
        .value_parser(clap::value_parser!(u64))
}

fn image_arg() -> Arg {
    Arg::new("image")
        .short('i')
        .long("image")
        .help("Image file to attach; repeat for several")
        .action(ArgAction::Append)
        .value_parser(clap::value_parser!(PathBuf))
}

#[must_use]
pub fn feed() -> Command {
    Command::new("feed")
        .about("Print the post feed")
        .arg(
            Arg::new("pages")
                .short('n')
                .long("pages")
                .help("Number of pages to load")
                .default_value("1")
                .value_parser(clap::value_parser!(u32).range(1..)),
        )
        .arg(
            Arg::new("all")
                .long("all")
                .help("Keep loading until the feed is exhausted")
                .action(ArgAction::SetTrue)
                .conflicts_with("pages"),
        )
}

#[must_use]
pub fn post() -> Command {
    Command::new("post")
        .about("Create, inspect, edit or delete posts")
        .subcommand_required(true)
        .subcommand(Command::new("show").about("Show one post").arg(id_arg()))
        .subcommand(
            Command::new("create")
                .about("Publish a new post")
                .arg(Arg::new("name").long("name").required(true))
                .arg(
                    Arg::new("description")
                        .short('d')
                        .long("description")
                        .help("Description, HTML allowed")
                        .required(true),
                )
                .arg(image_arg().required(true)),
        )
        .subcommand(
            Command::new("update")
                .about("Edit a post; unset fields keep their value")
                .arg(id_arg())
                .arg(Arg::new("name").long("name"))
                .arg(
                    Arg::new("description")
                        .short('d')
                        .long("description")
                        .help("Description, HTML allowed"),
                )
                .arg(image_arg())
                .arg(
                    Arg::new("delete-image")
                        .long("delete-image")
                        .help("Stored image name to remove; repeat for several")
                        .action(ArgAction::Append),
                ),
        )
        .subcommand(Command::new("delete").about("Delete a post").arg(id_arg()))
}
