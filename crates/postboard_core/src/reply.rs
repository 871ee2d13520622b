//! User-facing text pulled out of API replies.

use serde_json::Value;

/// Maximum number of characters of server text surfaced to the user.
pub const MAX_ERROR_CHARS: usize = 200;

/// Builds a user-facing message from an error body or a server message: the
/// JSON `message` field when present, otherwise the trimmed and truncated
/// text.
#[must_use]
pub fn sanitize_body(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body)
        && let Some(message) = value.get("message").and_then(Value::as_str)
        && !message.trim().is_empty()
    {
        return message.trim().chars().take(MAX_ERROR_CHARS).collect();
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_server_message() {
        assert_eq!(
            sanitize_body(r#"{"status":false,"message":" Email already exists "}"#),
            "Email already exists"
        );
    }

    #[test]
    fn falls_back_to_body() {
        assert_eq!(sanitize_body("  "), "Request failed.");
        assert_eq!(sanitize_body("Bad Gateway\n"), "Bad Gateway");
        assert_eq!(sanitize_body(&"x".repeat(500)).chars().count(), MAX_ERROR_CHARS);
    }

    #[test]
    fn plain_messages_are_capped() {
        let long = format!("  Old password is incorrect{}", "!".repeat(300));
        let message = sanitize_body(&long);
        assert!(message.starts_with("Old password is incorrect"));
        assert_eq!(message.chars().count(), MAX_ERROR_CHARS);
    }
}
