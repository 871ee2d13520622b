//! REST paths consumed by postboard clients. Keeping them here means the
//! browser app and the terminal client can never drift apart.

use crate::model::{PostId, UserId};

pub const LOGIN: &str = "/api/login";
pub const REGISTER: &str = "/api/register";
pub const CREATE_POST: &str = "/api/post";

#[must_use]
pub fn users(page: u32, limit: u32) -> String {
    format!("/api/users?page={page}&limit={limit}")
}

#[must_use]
pub fn user(id: UserId) -> String {
    format!("/api/user/{id}")
}

#[must_use]
pub fn update_user(id: UserId) -> String {
    format!("/api/update/{id}")
}

#[must_use]
pub fn change_password(id: UserId) -> String {
    format!("/api/changePassword/{id}")
}

#[must_use]
pub fn posts(page: u32, limit: u32) -> String {
    format!("/api/getPosts?page={page}&limit={limit}")
}

#[must_use]
pub fn post(id: PostId) -> String {
    format!("/api/getPosts/{id}")
}

#[must_use]
pub fn update_post(id: PostId) -> String {
    format!("/api/updatePost/{id}")
}

#[must_use]
pub fn delete_post(id: PostId) -> String {
    format!("/api/deletepost/{id}")
}

#[must_use]
pub fn profile_image(file: &str) -> String {
    format!("/profile/{}", file.trim_start_matches('/'))
}

#[must_use]
pub fn post_image(file: &str) -> String {
    format!("/post/{}", file.trim_start_matches('/'))
}

/// Joins an API base URL and a path with exactly one slash between them.
/// An empty base yields the bare path so same-origin deployments work.
#[must_use]
pub fn join_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_url_normalizes_slashes() {
        assert_eq!(
            join_url("http://localhost:2000/", "/api/login"),
            "http://localhost:2000/api/login"
        );
        assert_eq!(
            join_url(" http://localhost:2000 ", "api/login"),
            "http://localhost:2000/api/login"
        );
        assert_eq!(join_url("", "/api/login"), "/api/login");
    }

    #[test]
    fn paged_paths_carry_page_and_limit() {
        assert_eq!(posts(2, 3), "/api/getPosts?page=2&limit=3");
        assert_eq!(users(1, 3), "/api/users?page=1&limit=3");
    }

    #[test]
    fn asset_paths() {
        assert_eq!(post_image("abc.png"), "/post/abc.png");
        assert_eq!(profile_image("/me.jpg"), "/profile/me.jpg");
    }
}
