//! Post endpoints.

use crate::app_lib::{AppError, FormMethod, PickedFile, delete, files::to_form_data, get_json, send_form};
use postboard_core::{
    endpoints,
    forms::{NewPost, PostUpdate},
    model::{FeedPost, Post, PostEnvelope, PostId, PostsPage},
};

pub async fn list_posts(page: u32, limit: u32) -> Result<Vec<FeedPost>, AppError> {
    let page: PostsPage = get_json(&endpoints::posts(page, limit)).await?;
    Ok(page.posts)
}

pub async fn get_post(id: PostId) -> Result<Post, AppError> {
    let envelope: PostEnvelope = get_json(&endpoints::post(id)).await?;
    Ok(envelope.post)
}

pub async fn create_post(form: NewPost<PickedFile>) -> Result<(), AppError> {
    form.validate().into_result()?;
    let data = to_form_data(form.into_multipart())?;
    send_form(FormMethod::Post, endpoints::CREATE_POST, data, true).await
}

pub async fn update_post(id: PostId, form: PostUpdate<PickedFile>) -> Result<(), AppError> {
    form.validate().into_result()?;
    let data = to_form_data(form.into_multipart())?;
    send_form(FormMethod::Put, &endpoints::update_post(id), data, true).await
}

pub async fn delete_post(id: PostId) -> Result<(), AppError> {
    delete(&endpoints::delete_post(id)).await
}
