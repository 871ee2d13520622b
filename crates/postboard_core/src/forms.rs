//! Form models for every write the client performs. Each form validates
//! itself with the shared rules and knows its wire encoding.

use crate::{
    model::{ChangePasswordRequest, LoginRequest, Post, User},
    multipart::{Attachment, FileMeta, MultipartForm},
    validate::{Field, FormErrors, Violation, check_post_images, check_profile, check_text},
};

/// Multipart name for images removed during a post update.
pub const DELETE_IMAGE_FIELD: &str = "deleteImg";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    #[must_use]
    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        errors.record(Field::Email, check_text(Field::Email, &self.email));
        errors.record(Field::Password, check_text(Field::Password, &self.password));
        errors
    }

    #[must_use]
    pub fn to_request(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterForm<F> {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub profile: Option<F>,
}

impl<F> Default for RegisterForm<F> {
    fn default() -> Self {
        Self {
            firstname: String::new(),
            lastname: String::new(),
            email: String::new(),
            password: String::new(),
            phone: String::new(),
            profile: None,
        }
    }
}

impl<F: Attachment> RegisterForm<F> {
    #[must_use]
    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        errors.record(Field::Firstname, check_text(Field::Firstname, &self.firstname));
        errors.record(Field::Lastname, check_text(Field::Lastname, &self.lastname));
        errors.record(Field::Email, check_text(Field::Email, &self.email));
        errors.record(Field::Password, check_text(Field::Password, &self.password));
        errors.record(Field::Phone, check_text(Field::Phone, &self.phone));
        let profile = self.profile.as_ref().map(Attachment::meta);
        errors.record(Field::Profile, check_profile(profile.as_ref()));
        errors
    }
}

impl<F> RegisterForm<F> {
    #[must_use]
    pub fn into_multipart(self) -> MultipartForm<F> {
        let form = MultipartForm::new()
            .text(Field::Firstname.key(), self.firstname.trim())
            .text(Field::Lastname.key(), self.lastname.trim())
            .text(Field::Email.key(), self.email.trim())
            .text(Field::Password.key(), self.password)
            .text(Field::Phone.key(), self.phone.trim());

        match self.profile {
            Some(file) => form.file(Field::Profile.key(), file),
            None => form,
        }
    }
}

/// Edit of an existing user, either the signed-in user's own profile or an
/// admin edit from the users table. The password is only sent when set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileUpdate<F> {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub phone: String,
    pub password: Option<String>,
    pub profile: Option<F>,
}

impl<F> ProfileUpdate<F> {
    /// Prefills the form from the current server state.
    #[must_use]
    pub fn from_user(user: &User) -> Self {
        Self {
            firstname: user.firstname.clone(),
            lastname: user.lastname.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            password: None,
            profile: None,
        }
    }

    fn password(&self) -> Option<&str> {
        self.password
            .as_deref()
            .filter(|password| !password.is_empty())
    }

    #[must_use]
    pub fn into_multipart(self) -> MultipartForm<F> {
        let password = self.password().map(ToString::to_string);
        let mut form = MultipartForm::new()
            .text(Field::Firstname.key(), self.firstname.trim())
            .text(Field::Lastname.key(), self.lastname.trim())
            .text(Field::Phone.key(), self.phone.trim())
            .text(Field::Email.key(), self.email.trim());

        if let Some(password) = password {
            form = form.text(Field::Password.key(), password);
        }
        match self.profile {
            Some(file) => form.file(Field::Profile.key(), file),
            None => form,
        }
    }
}

impl<F: Attachment> ProfileUpdate<F> {
    #[must_use]
    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        errors.record(Field::Firstname, check_text(Field::Firstname, &self.firstname));
        errors.record(Field::Lastname, check_text(Field::Lastname, &self.lastname));
        errors.record(Field::Email, check_text(Field::Email, &self.email));
        errors.record(Field::Phone, check_text(Field::Phone, &self.phone));
        if let Some(password) = self.password() {
            errors.record(Field::Password, check_text(Field::Password, password));
        }
        let profile = self.profile.as_ref().map(Attachment::meta);
        errors.record(Field::Profile, check_profile(profile.as_ref()));
        errors
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChangePassword {
    pub old_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl ChangePassword {
    #[must_use]
    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        errors.record(
            Field::OldPassword,
            check_text(Field::OldPassword, &self.old_password),
        );
        errors.record(
            Field::NewPassword,
            check_text(Field::NewPassword, &self.new_password),
        );
        errors.record(Field::ConfirmPassword, self.check_confirmation());
        errors
    }

    /// # Errors
    /// Returns a violation when the confirmation is empty or differs.
    pub fn check_confirmation(&self) -> Result<(), Violation> {
        check_text(Field::ConfirmPassword, &self.confirm_password)?;
        if self.confirm_password == self.new_password {
            Ok(())
        } else {
            Err(Violation::PasswordMismatch)
        }
    }

    #[must_use]
    pub fn to_request(&self) -> ChangePasswordRequest {
        ChangePasswordRequest {
            old_password: self.old_password.clone(),
            new_password: self.new_password.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewPost<F> {
    pub name: String,
    /// Editor HTML, sent as-is.
    pub description: String,
    pub images: Vec<F>,
}

impl<F> Default for NewPost<F> {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            images: Vec::new(),
        }
    }
}

impl<F: Attachment> NewPost<F> {
    #[must_use]
    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        errors.record(Field::PostName, check_text(Field::PostName, &self.name));
        errors.record(
            Field::Description,
            check_text(Field::Description, &self.description),
        );
        let metas: Vec<FileMeta> = self.images.iter().map(Attachment::meta).collect();
        errors.record(Field::PostImages, check_post_images(&metas, true));
        errors
    }
}

impl<F> NewPost<F> {
    #[must_use]
    pub fn into_multipart(self) -> MultipartForm<F> {
        MultipartForm::new()
            .text(Field::PostName.key(), self.name.trim())
            .text(Field::Description.key(), self.description)
            .files(Field::PostImages.key(), self.images)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostUpdate<F> {
    pub name: String,
    pub description: String,
    pub new_images: Vec<F>,
    /// Stored file names of existing images to remove.
    pub delete_images: Vec<String>,
}

impl<F> PostUpdate<F> {
    #[must_use]
    pub fn from_post(post: &Post) -> Self {
        Self {
            name: post.name.clone(),
            description: post.description.clone(),
            new_images: Vec::new(),
            delete_images: Vec::new(),
        }
    }

    /// Marks an existing image for deletion, or unmarks it.
    pub fn toggle_delete(&mut self, image: &str) {
        if let Some(index) = self.delete_images.iter().position(|name| name == image) {
            self.delete_images.remove(index);
        } else {
            self.delete_images.push(image.to_string());
        }
    }

    #[must_use]
    pub fn is_marked(&self, image: &str) -> bool {
        self.delete_images.iter().any(|name| name == image)
    }

    #[must_use]
    pub fn into_multipart(self) -> MultipartForm<F> {
        let form = MultipartForm::new()
            .text(Field::PostName.key(), self.name.trim())
            .text(Field::Description.key(), self.description);
        let form = self
            .delete_images
            .into_iter()
            .fold(form, |form, image| form.text(DELETE_IMAGE_FIELD, image));
        form.files(Field::PostImages.key(), self.new_images)
    }
}

impl<F: Attachment> PostUpdate<F> {
    #[must_use]
    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        errors.record(Field::PostName, check_text(Field::PostName, &self.name));
        errors.record(
            Field::Description,
            check_text(Field::Description, &self.description),
        );
        let metas: Vec<FileMeta> = self.new_images.iter().map(Attachment::meta).collect();
        errors.record(Field::PostImages, check_post_images(&metas, false));
        errors
    }
}
