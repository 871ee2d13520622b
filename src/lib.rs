//! # Postboard terminal client
//!
//! `postboard` drives the postboard REST API from a shell: sign in, browse
//! the feed, manage posts, users and the own profile. Request plumbing lives
//! in `postboard_client`; this crate only parses arguments, configures
//! logging and prints results.
//!
//! The bearer token returned at login is kept in a token file (see
//! `--token-file`). Commands other than `login` and `register` refuse to run
//! without it, mirroring the session guard of the web front end.

pub mod cli;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_commit_hash_format() {
        if GIT_COMMIT_HASH == "unknown" {
            return;
        }
        assert!(
            GIT_COMMIT_HASH.chars().all(|c| c.is_ascii_hexdigit()),
            "GIT_COMMIT_HASH should be a hex string, got: {GIT_COMMIT_HASH}"
        );
    }
}
