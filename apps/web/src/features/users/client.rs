//! User endpoints. Authorization is enforced by the API.

use crate::app_lib::{AppError, FormMethod, PickedFile, files::to_form_data, get_json, send_form};
use postboard_core::{
    endpoints,
    forms::ProfileUpdate,
    model::{User, UserEnvelope, UserId, UsersPage},
    pager::USERS_PAGE_SIZE,
};

pub async fn list_users(page: u32) -> Result<UsersPage, AppError> {
    get_json(&endpoints::users(page.max(1), USERS_PAGE_SIZE)).await
}

pub async fn get_user(id: UserId) -> Result<User, AppError> {
    let envelope: UserEnvelope = get_json(&endpoints::user(id)).await?;
    Ok(envelope.user)
}

pub async fn update_user(id: UserId, form: ProfileUpdate<PickedFile>) -> Result<(), AppError> {
    form.validate().into_result()?;
    let data = to_form_data(form.into_multipart())?;
    send_form(FormMethod::Put, &endpoints::update_user(id), data, true).await
}
