//! HTTP helpers for the postboard API with a shared timeout and error mapping.
//! Protected helpers read the bearer token from storage on every call and fail
//! with [`AppError::Unauthorized`] before sending anything when none is stored.

use super::{config::AppConfig, errors::AppError, storage::LocalTokenStore};
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::callback::Timeout;
use postboard_core::{
    endpoints::join_url,
    reply::sanitize_body,
    session::{GuardDecision, TokenStore, bearer, guard},
};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::to_string;
use web_sys::{AbortController, FormData};

/// Default request timeout (milliseconds) applied to all HTTP helpers.
pub(crate) const DEFAULT_TIMEOUT_MS: u32 = 10_000;

/// HTTP verbs used for multipart submissions.
#[derive(Clone, Copy, Debug)]
pub enum FormMethod {
    Post,
    Put,
}

/// Absolute URL for an API path or stored asset.
pub fn api_url(path: &str) -> String {
    join_url(&AppConfig::load().api_base_url, path)
}

fn authorization() -> Result<String, AppError> {
    let token = LocalTokenStore.token();
    match (guard(token.as_deref()), token) {
        (GuardDecision::Render, Some(token)) => Ok(bearer(&token)),
        _ => Err(AppError::Unauthorized),
    }
}

fn build_error(err: gloo_net::Error) -> AppError {
    AppError::Serialization(err.to_string())
}

/// Posts JSON without credentials and parses a JSON response (login).
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, AppError> {
    let url = api_url(path);
    let payload = to_string(body)
        .map_err(|err| AppError::Serialization(err.to_string()))?;
    let response = send_with_timeout(move |signal| {
        Request::post(&url)
            .header("Content-Type", "application/json")
            .abort_signal(Some(signal))
            .body(payload)
            .map_err(build_error)
    })
    .await?;

    handle_json_response(response).await
}

/// Fetches JSON with the bearer token.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, AppError> {
    let url = api_url(path);
    let authorization = authorization()?;
    let response = send_with_timeout(move |signal| {
        Request::get(&url)
            .header("Authorization", &authorization)
            .abort_signal(Some(signal))
            .build()
            .map_err(build_error)
    })
    .await?;

    handle_json_response(response).await
}

/// Puts JSON with the bearer token and parses a JSON response.
pub async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, AppError> {
    let url = api_url(path);
    let authorization = authorization()?;
    let payload = to_string(body)
        .map_err(|err| AppError::Serialization(err.to_string()))?;
    let response = send_with_timeout(move |signal| {
        Request::put(&url)
            .header("Content-Type", "application/json")
            .header("Authorization", &authorization)
            .abort_signal(Some(signal))
            .body(payload)
            .map_err(build_error)
    })
    .await?;

    handle_json_response(response).await
}

/// Sends a multipart form. Registration is the only form sent without a token.
pub async fn send_form(
    method: FormMethod,
    path: &str,
    form: FormData,
    authorized: bool,
) -> Result<(), AppError> {
    let url = api_url(path);
    let authorization = if authorized {
        Some(authorization()?)
    } else {
        None
    };
    let response = send_with_timeout(move |signal| {
        let mut builder: RequestBuilder = match method {
            FormMethod::Post => Request::post(&url),
            FormMethod::Put => Request::put(&url),
        };
        if let Some(authorization) = &authorization {
            builder = builder.header("Authorization", authorization);
        }
        builder
            .abort_signal(Some(signal))
            .body(form)
            .map_err(build_error)
    })
    .await?;

    handle_empty_response(response).await
}

/// Deletes a resource with the bearer token.
pub async fn delete(path: &str) -> Result<(), AppError> {
    let url = api_url(path);
    let authorization = authorization()?;
    let response = send_with_timeout(move |signal| {
        Request::delete(&url)
            .header("Authorization", &authorization)
            .abort_signal(Some(signal))
            .build()
            .map_err(build_error)
    })
    .await?;

    handle_empty_response(response).await
}

/// Sends a request with an abort timeout to avoid hanging UI state.
async fn send_with_timeout(
    build_request: impl FnOnce(&web_sys::AbortSignal) -> Result<Request, AppError>,
) -> Result<Response, AppError> {
    let controller = AbortController::new()
        .map_err(|_| AppError::Config("could not create an abort controller".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    request.send().await.map_err(|err| AppError::request_failure(&err.to_string()))
}

async fn http_error(response: Response) -> AppError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    AppError::Http {
        status,
        message: sanitize_body(&body),
    }
}

/// Parses JSON responses and surfaces HTTP errors with sanitized bodies.
async fn handle_json_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|err| AppError::Parse(err.to_string()))
    } else {
        Err(http_error(response).await)
    }
}

async fn handle_empty_response(response: Response) -> Result<(), AppError> {
    if response.ok() {
        Ok(())
    } else {
        Err(http_error(response).await)
    }
}
