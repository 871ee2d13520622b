//! Account endpoints. Forms are validated before any request is sent.

use crate::app_lib::{AppError, FormMethod, PickedFile, files::to_form_data, post_json, put_json, send_form};
use postboard_core::{
    endpoints,
    forms::{ChangePassword, LoginForm, RegisterForm},
    model::{LoginResponse, StatusMessage, UserId},
    reply::sanitize_body,
};

/// Exchanges credentials for a token. The caller stores it.
pub async fn login(form: &LoginForm) -> Result<String, AppError> {
    form.validate().into_result()?;
    let response: LoginResponse = post_json(endpoints::LOGIN, &form.to_request()).await?;
    Ok(response.token)
}

pub async fn register(form: RegisterForm<PickedFile>) -> Result<(), AppError> {
    form.validate().into_result()?;
    let data = to_form_data(form.into_multipart())?;
    send_form(FormMethod::Post, endpoints::REGISTER, data, false).await
}

/// Returns the server message on success; `status: false` becomes
/// [`AppError::Rejected`].
pub async fn change_password(id: UserId, form: &ChangePassword) -> Result<String, AppError> {
    form.validate().into_result()?;
    let reply: StatusMessage =
        put_json(&endpoints::change_password(id), &form.to_request()).await?;
    if reply.status {
        Ok(reply.message)
    } else {
        Err(AppError::Rejected(sanitize_body(&reply.message)))
    }
}
