//! Route paths used by links and redirects.

use postboard_core::model::{PostId, UserId};

pub const HOME: &str = "/home";
pub const LOGIN: &str = postboard_core::session::LOGIN_PATH;
pub const REGISTER: &str = "/register";
pub const USERS: &str = "/users";
pub const NEW_POST: &str = "/post";
pub const PROFILE: &str = "/profile";
pub const CHANGE_PASSWORD: &str = "/changePassword";

pub fn user_edit(id: UserId) -> String {
    format!("/update/{id}")
}

pub fn post_update(id: PostId) -> String {
    format!("/postUpdate/{id}")
}
