mod auth;
pub mod logging;
mod posts;
pub mod session;
mod users;

use clap::{
    ColorChoice, Command,
    builder::styling::{AnsiColor, Effects, Styles},
};

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("postboard")
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(auth::login())
        .subcommand(auth::logout())
        .subcommand(auth::register())
        .subcommand(auth::password())
        .subcommand(posts::feed())
        .subcommand(posts::post())
        .subcommand(users::users())
        .subcommand(users::user())
        .subcommand(users::profile());

    let command = session::with_args(command);
    logging::with_args(command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "postboard");
        assert_eq!(
            command.get_about().map(ToString::to_string),
            Some(env!("CARGO_PKG_DESCRIPTION").to_string())
        );
        assert_eq!(
            command.get_version().map(ToString::to_string),
            Some(env!("CARGO_PKG_VERSION").to_string())
        );
    }

    #[test]
    fn test_login_args() {
        temp_env::with_vars(
            [
                ("POSTBOARD_PASSWORD", None::<&str>),
                ("POSTBOARD_API_URL", None),
            ],
            || {
                let matches = new().get_matches_from(vec![
                    "postboard",
                    "login",
                    "--email",
                    "ada@example.com",
                    "--password",
                    "Abcdef1!",
                ]);

                assert_eq!(
                    matches.get_one::<String>(session::ARG_API_URL).cloned(),
                    Some(session::DEFAULT_API_URL.to_string())
                );
                let login = matches.subcommand_matches("login");
                assert_eq!(
                    login.and_then(|m| m.get_one::<String>("email")).cloned(),
                    Some("ada@example.com".to_string())
                );
            },
        );
    }

    #[test]
    fn test_check_env() {
        temp_env::with_vars(
            [
                ("POSTBOARD_API_URL", Some("https://api.postboard.dev")),
                ("POSTBOARD_TOKEN_FILE", Some("/tmp/postboard-token")),
                ("POSTBOARD_PASSWORD", Some("Abcdef1!")),
                ("POSTBOARD_LOG_LEVEL", Some("info")),
            ],
            || {
                let matches = new().get_matches_from(vec![
                    "postboard",
                    "login",
                    "--email",
                    "ada@example.com",
                ]);
                assert_eq!(
                    matches.get_one::<String>(session::ARG_API_URL).cloned(),
                    Some("https://api.postboard.dev".to_string())
                );
                assert_eq!(
                    matches.get_one::<PathBuf>(session::ARG_TOKEN_FILE).cloned(),
                    Some(PathBuf::from("/tmp/postboard-token"))
                );
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(2)
                );
                let login = matches.subcommand_matches("login");
                assert_eq!(
                    login.and_then(|m| m.get_one::<String>("password")).cloned(),
                    Some("Abcdef1!".to_string())
                );
            },
        );
    }

    #[test]
    fn test_check_log_level_env() {
        let levels = ["error", "warn", "info", "debug", "trace"];
        for (index, &level) in levels.iter().enumerate() {
            temp_env::with_vars([("POSTBOARD_LOG_LEVEL", Some(level))], || {
                let matches = new().get_matches_from(vec!["postboard", "logout"]);
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    u8::try_from(index).ok()
                );
            });
        }
    }

    #[test]
    fn test_check_log_level_verbosity() {
        for index in 0..5_usize {
            temp_env::with_vars([("POSTBOARD_LOG_LEVEL", None::<String>)], || {
                let mut args = vec!["postboard".to_string(), "logout".to_string()];
                if index > 0 {
                    args.push(format!("-{}", "v".repeat(index)));
                }

                let matches = new().get_matches_from(args);
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    u8::try_from(index).ok()
                );
            });
        }
    }

    #[test]
    fn test_rejects_non_http_url() {
        temp_env::with_vars([("POSTBOARD_API_URL", None::<&str>)], || {
            let result =
                new().try_get_matches_from(vec!["postboard", "--url", "ftp://example.com", "logout"]);
            assert!(result.is_err());
        });
    }

    #[test]
    fn test_post_create_requires_image() {
        let result = new().try_get_matches_from(vec![
            "postboard",
            "post",
            "create",
            "--name",
            "Trip",
            "--description",
            "Day one",
        ]);
        assert!(result.is_err());

        let matches = new().get_matches_from(vec![
            "postboard",
            "post",
            "create",
            "--name",
            "Trip",
            "--description",
            "Day one",
            "-i",
            "a.png",
            "-i",
            "b.png",
        ]);
        let images: Vec<PathBuf> = matches
            .subcommand_matches("post")
            .and_then(|m| m.subcommand_matches("create"))
            .and_then(|m| m.get_many::<PathBuf>("image"))
            .map(|values| values.cloned().collect())
            .unwrap_or_default();
        assert_eq!(images, vec![PathBuf::from("a.png"), PathBuf::from("b.png")]);
    }

    #[test]
    fn test_feed_all_conflicts_with_pages() {
        assert!(
            new()
                .try_get_matches_from(vec!["postboard", "feed", "--all", "--pages", "2"])
                .is_err()
        );
        assert!(
            new()
                .try_get_matches_from(vec!["postboard", "feed", "--all"])
                .is_ok()
        );
    }
}
