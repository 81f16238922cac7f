use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use wasm_bindgen::JsValue;

use crate::models::{CreatePostRequest, Post, UpdatePostRequest};

const API_BASE_URL: &str = match option_env!("WASM_API_BASE_URL") {
    Some(value) => value,
    None => "https://jsonplaceholder.typicode.com",
};

// Автор, которого страница подставляет в новые посты.
const DRAFT_USER_ID: i64 = 1;

#[derive(Debug, Clone)]
pub(crate) enum ApiError {
    Network(String),
    Http { status: u16, message: String },
    Decode(String),
}

impl core::fmt::Display for ApiError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Network(msg) => write!(f, "network error: {msg}"),
            Self::Http { status, message } => write!(f, "http error {status}: {message}"),
            Self::Decode(msg) => write!(f, "decode error: {msg}"),
        }
    }
}

/// Пишет проваленный запрос в консоль браузера; в отрисованный UI ошибка
/// не попадает.
pub(crate) fn log_error(action: &str, err: &ApiError) {
    web_sys::console::error_1(&JsValue::from_str(&format!("{action}: {err}")));
}

fn endpoint(path: &str) -> String {
    format!(
        "{}/{}",
        API_BASE_URL.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

async fn parse_json<T: DeserializeOwned>(response: gloo_net::http::Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

async fn parse_error_body(response: gloo_net::http::Response) -> ApiError {
    let status = response.status();
    let text = response
        .text()
        .await
        .unwrap_or_else(|_| "request failed".to_string());

    let message = if text.trim().is_empty() {
        format!("http status {status}")
    } else {
        text
    };

    ApiError::Http { status, message }
}

pub(crate) async fn list_posts() -> Result<Vec<Post>, ApiError> {
    let response = Request::get(&endpoint("/posts"))
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;

    if !response.ok() {
        return Err(parse_error_body(response).await);
    }

    parse_json(response).await
}

pub(crate) async fn create_post(title: &str, body: &str) -> Result<Post, ApiError> {
    let payload = CreatePostRequest {
        user_id: DRAFT_USER_ID,
        title: title.to_string(),
        body: body.to_string(),
    };

    let response = Request::post(&endpoint("/posts"))
        .json(&payload)
        .map_err(|err| ApiError::Network(err.to_string()))?
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;

    if !response.ok() {
        return Err(parse_error_body(response).await);
    }

    parse_json(response).await
}

pub(crate) async fn update_post(id: i64, title: &str, body: &str) -> Result<Post, ApiError> {
    let payload = UpdatePostRequest {
        title: title.to_string(),
        body: body.to_string(),
    };

    let response = Request::put(&endpoint(&format!("/posts/{id}")))
        .json(&payload)
        .map_err(|err| ApiError::Network(err.to_string()))?
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;

    if !response.ok() {
        return Err(parse_error_body(response).await);
    }

    parse_json(response).await
}

pub(crate) async fn delete_post(id: i64) -> Result<(), ApiError> {
    let response = Request::delete(&endpoint(&format!("/posts/{id}")))
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;

    if !response.ok() {
        return Err(parse_error_body(response).await);
    }

    Ok(())
}
