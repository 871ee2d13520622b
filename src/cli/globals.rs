use std::path::{Path, PathBuf};

/// Token file used when neither `--token-file` nor `POSTBOARD_TOKEN_FILE` is set.
const DEFAULT_TOKEN_FILE: &str = ".postboard/token";

#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub api_url: String,
    pub token_file: PathBuf,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(api_url: String, token_file: Option<PathBuf>) -> Self {
        Self {
            api_url,
            token_file: token_file.unwrap_or_else(default_token_file),
        }
    }

    #[must_use]
    pub fn token_file(&self) -> &Path {
        &self.token_file
    }
}

/// `$HOME/.postboard/token`, or the working directory without a home.
fn default_token_file() -> PathBuf {
    std::env::var_os("HOME")
        .filter(|home| !home.is_empty())
        .map_or_else(
            || PathBuf::from(DEFAULT_TOKEN_FILE),
            |home| PathBuf::from(home).join(DEFAULT_TOKEN_FILE),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_args() {
        let args = GlobalArgs::new(
            "http://localhost:2000".to_string(),
            Some(PathBuf::from("/tmp/token")),
        );
        assert_eq!(args.api_url, "http://localhost:2000");
        assert_eq!(args.token_file(), Path::new("/tmp/token"));
    }

    #[test]
    fn test_default_token_file_uses_home() {
        temp_env::with_var("HOME", Some("/home/ada"), || {
            let args = GlobalArgs::new("http://localhost:2000".to_string(), None);
            assert_eq!(args.token_file(), Path::new("/home/ada/.postboard/token"));
        });
        temp_env::with_var("HOME", None::<&str>, || {
            let args = GlobalArgs::new("http://localhost:2000".to_string(), None);
            assert_eq!(args.token_file(), Path::new(DEFAULT_TOKEN_FILE));
        });
    }
}
