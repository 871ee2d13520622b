use crate::cli::actions::{Action, auth, feed, posts, profile, users};
use anyhow::Result;

/// Single dispatch point for all CLI actions.
/// # Errors
/// Returns an error if the action fails.
pub async fn execute(action: Action) -> Result<()> {
    match action {
        Action::Auth(args) => auth::execute(args).await,
        Action::Feed(args) => feed::execute(args).await,
        Action::Posts(args) => posts::execute(args).await,
        Action::Users(args) => users::execute(args).await,
        Action::Profile(args) => profile::execute(args).await,
    }
}
