//! Wire shapes mirrored from the postboard API. The client never enforces
//! invariants on these; it only renders them. Missing optional fields fall
//! back to defaults so a slightly different server revision still decodes.

use serde::{Deserialize, Serialize};

pub type UserId = u64;
pub type PostId = u64;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: UserId,
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub lastname: String,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "ph", default)]
    pub phone: String,
    /// Stored file name of the profile picture, served under `/profile/`.
    #[serde(rename = "profile", default)]
    pub profile_image: Option<String>,
}

impl User {
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
            .trim()
            .to_string()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    #[serde(rename = "userid", default)]
    pub user_id: UserId,
    #[serde(default)]
    pub name: String,
    /// HTML produced by the rich-text editor.
    #[serde(default)]
    pub description: String,
    /// Stored file names, served under `/post/`.
    #[serde(rename = "imgs", default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Author columns joined onto each post by the feed endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub lastname: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub profile: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedPost {
    #[serde(flatten)]
    pub post: Post,
    #[serde(flatten)]
    pub author: Author,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct PostsPage {
    #[serde(default)]
    pub posts: Vec<FeedPost>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct UsersPage {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(rename = "totalUsers", default)]
    pub total_users: u64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct PostEnvelope {
    pub post: Post,
}

#[derive(Clone, Debug, Deserialize)]
pub struct UserEnvelope {
    pub user: User,
}

/// Body returned by endpoints that report success in-band.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct StatusMessage {
    #[serde(default)]
    pub status: bool,
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn feed_post_decodes_joined_author_columns() {
        let value = json!({
            "id": 9,
            "userid": 2,
            "firstname": "Ada",
            "lastname": "Lovelace",
            "email": "ada@example.com",
            "name": "Engines",
            "imgs": ["a.png", "b.jpg"],
            "profile": "ada.png",
            "description": "<p>notes</p>",
            "created_at": "2024-05-01T10:00:00Z"
        });

        let item: FeedPost = serde_json::from_value(value).unwrap();
        assert_eq!(item.post.id, 9);
        assert_eq!(item.post.user_id, 2);
        assert_eq!(item.post.images, vec!["a.png", "b.jpg"]);
        assert_eq!(item.post.updated_at, None);
        assert_eq!(item.author.firstname, "Ada");
        assert_eq!(item.author.profile.as_deref(), Some("ada.png"));
    }

    #[test]
    fn user_uses_server_field_names() {
        let user: User = serde_json::from_value(json!({
            "id": 4,
            "firstname": "Grace",
            "lastname": "Hopper",
            "email": "grace@example.com",
            "ph": "5551234",
            "profile": null
        }))
        .unwrap();

        assert_eq!(user.phone, "5551234");
        assert_eq!(user.profile_image, None);
        assert_eq!(user.full_name(), "Grace Hopper");
    }

    #[test]
    fn users_page_reads_total() {
        let page: UsersPage =
            serde_json::from_value(json!({ "users": [], "totalUsers": 7 })).unwrap();
        assert_eq!(page.total_users, 7);
    }

    #[test]
    fn change_password_request_is_camel_case() {
        let body = serde_json::to_value(ChangePasswordRequest {
            old_password: "Old1!pass".to_string(),
            new_password: "New1!pass".to_string(),
        })
        .unwrap();
        assert_eq!(
            body,
            json!({ "oldPassword": "Old1!pass", "newPassword": "New1!pass" })
        );
    }
}
