//! Shared client-side validation, keyed by form field.
//!
//! Every form in every front end goes through these rules so an email or a
//! password is judged the same way on the login page, the registration page
//! and the profile editor. Validation is UX feedback only; the API validates
//! again.

use crate::multipart::FileMeta;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Largest accepted profile image, in bytes.
pub const MAX_PROFILE_BYTES: u64 = 3 * 1024 * 1024;

/// MIME types accepted for profile images.
pub const PROFILE_MIME_TYPES: [&str; 3] = ["image/jpeg", "image/jpg", "image/png"];

pub const MIN_PASSWORD_LENGTH: usize = 6;
pub const MAX_PASSWORD_LENGTH: usize = 20;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
const NAME_PATTERN: &str = r"^[A-Za-z\s]+$";
const SPECIAL_PATTERN: &str = r#"[!@#$%^&*()_+\-=\[\]{};':"\\|,.<>/?]"#;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Email,
    Password,
    Firstname,
    Lastname,
    Phone,
    Profile,
    PostName,
    Description,
    PostImages,
    OldPassword,
    NewPassword,
    ConfirmPassword,
}

impl Field {
    /// Form field name as sent to the API.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
            Self::Firstname => "firstname",
            Self::Lastname => "lastname",
            Self::Phone => "ph",
            Self::Profile => "profile",
            Self::PostName => "name",
            Self::Description => "description",
            Self::PostImages => "postImgs",
            Self::OldPassword => "oldPassword",
            Self::NewPassword => "newPassword",
            Self::ConfirmPassword => "confirmPassword",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        const ALL: [Field; 12] = [
            Field::Email,
            Field::Password,
            Field::Firstname,
            Field::Lastname,
            Field::Phone,
            Field::Profile,
            Field::PostName,
            Field::Description,
            Field::PostImages,
            Field::OldPassword,
            Field::NewPassword,
            Field::ConfirmPassword,
        ];
        ALL.into_iter().find(|field| field.key() == key)
    }

    /// Human-readable label used in messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Password => "Password",
            Self::Firstname => "Firstname",
            Self::Lastname => "Lastname",
            Self::Phone => "Phone",
            Self::Profile => "Profile image",
            Self::PostName => "Post name",
            Self::Description => "Description",
            Self::PostImages => "Images",
            Self::OldPassword => "Old password",
            Self::NewPassword => "New password",
            Self::ConfirmPassword => "Confirm password",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("Invalid email format")]
    EmailFormat,
    #[error(
        "Password must have 1 uppercase, 1 lowercase, 1 number, 1 special character, 6-20 chars, no space"
    )]
    PasswordComplexity,
    #[error("Password must be 6-20 characters")]
    PasswordLength,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("{label} must contain only letters and be {min}-{max} characters")]
    NameFormat {
        label: &'static str,
        min: usize,
        max: usize,
    },
    #[error("Phone must contain only digits")]
    PhoneFormat,
    #[error("Profile image must be jpeg, jpg, or png")]
    ProfileType,
    #[error("Profile image must be less than 3MB")]
    ProfileSize,
    #[error("At least one image is required")]
    NoImages,
    #[error("Only image files can be attached")]
    NotAnImage,
}

#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    Regex::new(EMAIL_PATTERN).is_ok_and(|re| re.is_match(value))
}

/// 6-20 characters, no whitespace, at least one lowercase letter, one
/// uppercase letter, one digit and one special character.
#[must_use]
pub fn is_strong_password(value: &str) -> bool {
    let length = value.chars().count();
    if !(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&length)
        || value.chars().any(char::is_whitespace)
    {
        return false;
    }

    let has = |pattern: &str| Regex::new(pattern).is_ok_and(|re| re.is_match(value));
    has("[a-z]") && has("[A-Z]") && has("[0-9]") && has(SPECIAL_PATTERN)
}

fn is_valid_name(value: &str, min: usize, max: usize) -> bool {
    let length = value.chars().count();
    (min..=max).contains(&length) && Regex::new(NAME_PATTERN).is_ok_and(|re| re.is_match(value))
}

fn required(field: Field, value: &str) -> Result<(), Violation> {
    if value.trim().is_empty() {
        Err(Violation::Required(field.label()))
    } else {
        Ok(())
    }
}

/// Validates a single text field.
///
/// # Errors
/// Returns the first rule the value breaks.
pub fn check_text(field: Field, value: &str) -> Result<(), Violation> {
    required(field, value)?;

    match field {
        Field::Email if !is_valid_email(value) => Err(Violation::EmailFormat),
        Field::Password if !is_strong_password(value) => Err(Violation::PasswordComplexity),
        Field::NewPassword => {
            let length = value.chars().count();
            if !(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&length) {
                Err(Violation::PasswordLength)
            } else if !is_strong_password(value) {
                Err(Violation::PasswordComplexity)
            } else {
                Ok(())
            }
        }
        Field::Firstname if !is_valid_name(value, 3, 30) => Err(Violation::NameFormat {
            label: field.label(),
            min: 3,
            max: 30,
        }),
        Field::Lastname if !is_valid_name(value, 1, 20) => Err(Violation::NameFormat {
            label: field.label(),
            min: 1,
            max: 20,
        }),
        Field::Phone if !value.trim().chars().all(|ch| ch.is_ascii_digit()) => {
            Err(Violation::PhoneFormat)
        }
        Field::Description if crate::html::is_blank(value) => {
            Err(Violation::Required(field.label()))
        }
        _ => Ok(()),
    }
}

/// Validates an optional profile picture: jpeg/png, at most 3 MiB.
///
/// # Errors
/// Returns [`Violation::ProfileType`] or [`Violation::ProfileSize`].
pub fn check_profile(meta: Option<&FileMeta>) -> Result<(), Violation> {
    let Some(meta) = meta else {
        return Ok(());
    };

    if !PROFILE_MIME_TYPES.contains(&meta.mime.as_str()) {
        return Err(Violation::ProfileType);
    }
    if meta.size > MAX_PROFILE_BYTES {
        return Err(Violation::ProfileSize);
    }
    Ok(())
}

/// Validates post images: every file must be an image, and at least one is
/// needed when `required` is set.
///
/// # Errors
/// Returns [`Violation::NoImages`] or [`Violation::NotAnImage`].
pub fn check_post_images(metas: &[FileMeta], required: bool) -> Result<(), Violation> {
    if required && metas.is_empty() {
        return Err(Violation::NoImages);
    }
    if metas.iter().any(|meta| !meta.mime.starts_with("image/")) {
        return Err(Violation::NotAnImage);
    }
    Ok(())
}

/// Per-field violations for one form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors {
    errors: BTreeMap<Field, Violation>,
}

impl FormErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the outcome for `field`, replacing any earlier one.
    pub fn record(&mut self, field: Field, outcome: Result<(), Violation>) {
        match outcome {
            Ok(()) => {
                self.errors.remove(&field);
            }
            Err(violation) => {
                self.errors.insert(field, violation);
            }
        }
    }

    #[must_use]
    pub fn get(&self, field: Field) -> Option<&Violation> {
        self.errors.get(&field)
    }

    #[must_use]
    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(ToString::to_string)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &Violation)> {
        self.errors.iter().map(|(field, violation)| (*field, violation))
    }

    /// # Errors
    /// Returns `self` when any field failed.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.errors.values().map(ToString::to_string).collect();
        write!(formatter, "{}", messages.join("; "))
    }
}

impl std::error::Error for FormErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(mime: &str, size: u64) -> FileMeta {
        FileMeta {
            name: "file".to_string(),
            mime: mime.to_string(),
            size,
        }
    }

    #[test]
    fn password_rules() {
        assert!(is_strong_password("Abcdef1!"));
        assert!(is_strong_password("Zz9[]{}"));
        assert!(!is_strong_password("abc"));
        assert!(!is_strong_password("abcdef1!"));
        assert!(!is_strong_password("ABCDEF1!"));
        assert!(!is_strong_password("Abcdefg!"));
        assert!(!is_strong_password("Abcdefg1"));
        assert!(!is_strong_password("Abc def1!"));
        assert!(!is_strong_password("Abcdefghijklmnopqr1!x"));
    }

    #[test]
    fn email_rules() {
        assert!(is_valid_email("user@example.com"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("user @example.com"));
        assert!(!is_valid_email("@example.com"));
    }

    #[test]
    fn check_text_reports_required_first() {
        assert_eq!(
            check_text(Field::Email, ""),
            Err(Violation::Required("Email"))
        );
        assert_eq!(
            check_text(Field::Email, "nope"),
            Err(Violation::EmailFormat)
        );
        assert_eq!(
            check_text(Field::Password, "abc").map_err(|v| v.to_string()),
            Err("Password must have 1 uppercase, 1 lowercase, 1 number, 1 special character, 6-20 chars, no space".to_string())
        );
    }

    #[test]
    fn name_rules() {
        assert_eq!(check_text(Field::Firstname, "Ada"), Ok(()));
        assert_eq!(check_text(Field::Firstname, "Mary Ann"), Ok(()));
        assert_eq!(
            check_text(Field::Firstname, "Al").map_err(|v| v.to_string()),
            Err("Firstname must contain only letters and be 3-30 characters".to_string())
        );
        assert!(check_text(Field::Firstname, "R2D2").is_err());
        assert_eq!(check_text(Field::Lastname, "X"), Ok(()));
        assert!(check_text(Field::Lastname, &"x".repeat(21)).is_err());
    }

    #[test]
    fn phone_rules() {
        assert_eq!(check_text(Field::Phone, "5551234"), Ok(()));
        assert_eq!(
            check_text(Field::Phone, ""),
            Err(Violation::Required("Phone"))
        );
        assert_eq!(
            check_text(Field::Phone, "555-1234"),
            Err(Violation::PhoneFormat)
        );
    }

    #[test]
    fn new_password_checks_length_then_complexity() {
        assert_eq!(
            check_text(Field::NewPassword, "Ab1!"),
            Err(Violation::PasswordLength)
        );
        assert_eq!(
            check_text(Field::NewPassword, "abcdefgh"),
            Err(Violation::PasswordComplexity)
        );
        assert_eq!(check_text(Field::NewPassword, "Abcdef1!"), Ok(()));
    }

    #[test]
    fn description_must_have_visible_text() {
        assert_eq!(
            check_text(Field::Description, "<p><br></p>"),
            Err(Violation::Required("Description"))
        );
        assert_eq!(check_text(Field::Description, "<p>hi</p>"), Ok(()));
    }

    #[test]
    fn profile_rules() {
        assert_eq!(check_profile(None), Ok(()));
        assert_eq!(check_profile(Some(&image("image/png", 1024))), Ok(()));
        assert_eq!(
            check_profile(Some(&image("image/gif", 1024))),
            Err(Violation::ProfileType)
        );
        assert_eq!(
            check_profile(Some(&image("image/jpeg", MAX_PROFILE_BYTES))),
            Ok(())
        );
        assert_eq!(
            check_profile(Some(&image("image/jpeg", MAX_PROFILE_BYTES + 1))),
            Err(Violation::ProfileSize)
        );
    }

    #[test]
    fn post_image_rules() {
        assert_eq!(check_post_images(&[], true), Err(Violation::NoImages));
        assert_eq!(check_post_images(&[], false), Ok(()));
        assert_eq!(
            check_post_images(&[image("image/webp", 10)], true),
            Ok(())
        );
        assert_eq!(
            check_post_images(&[image("image/png", 10), image("text/plain", 10)], true),
            Err(Violation::NotAnImage)
        );
    }

    #[test]
    fn field_keys_round_trip() {
        assert_eq!(Field::from_key("ph"), Some(Field::Phone));
        assert_eq!(Field::from_key("postImgs"), Some(Field::PostImages));
        assert_eq!(Field::from_key("unknown"), None);
    }

    #[test]
    fn form_errors_replace_stale_entries() {
        let mut errors = FormErrors::new();
        errors.record(Field::Email, check_text(Field::Email, "bad"));
        assert_eq!(
            errors.message(Field::Email).as_deref(),
            Some("Invalid email format")
        );

        errors.record(Field::Email, check_text(Field::Email, "ok@example.com"));
        assert!(errors.is_empty());
        assert!(errors.into_result().is_ok());
    }
}
