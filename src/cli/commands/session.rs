use clap::{Arg, Command, builder::ValueParser};
use std::path::PathBuf;

pub const ARG_API_URL: &str = "api-url";
pub const ARG_TOKEN_FILE: &str = "token-file";

pub const DEFAULT_API_URL: &str = "http://localhost:2000";

/// Accepts absolute http(s) URLs only.
#[must_use]
pub fn validator_api_url() -> ValueParser {
    ValueParser::from(move |value: &str| -> std::result::Result<String, String> {
        let url = url::Url::parse(value.trim()).map_err(|e| format!("invalid url: {e}"))?;
        match url.scheme() {
            "http" | "https" => Ok(value.trim().to_string()),
            other => Err(format!("unsupported url scheme: {other}")),
        }
    })
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_API_URL)
                .short('u')
                .long("url")
                .help("Base URL of the postboard API")
                .env("POSTBOARD_API_URL")
                .default_value(DEFAULT_API_URL)
                .global(true)
                .value_parser(validator_api_url()),
        )
        .arg(
            Arg::new(ARG_TOKEN_FILE)
                .long("token-file")
                .help("File holding the session token (default: ~/.postboard/token)")
                .env("POSTBOARD_TOKEN_FILE")
                .global(true)
                .value_parser(clap::value_parser!(PathBuf)),
        )
}
