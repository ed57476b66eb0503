use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::models::contact::ApiFieldError;

pub const INTERNAL_SERVER_ERROR_MESSAGE: &str =
    "An internal error occurred. Please try again later.";

pub fn internal_server_error(err: impl Into<anyhow::Error>, message: &'static str) -> Response {
    let err = err.into();
    tracing::error!("internal server error: {err:#}");
    error(StatusCode::INTERNAL_SERVER_ERROR, message)
}

pub fn error(code: StatusCode, message: &'static str) -> Response {
    (
        code,
        Json(ApiError {
            success: false,
            message,
        }),
    )
        .into_response()
}

pub fn field_errors(errors: Vec<ApiFieldError>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiFieldErrors {
            success: false,
            errors,
        }),
    )
        .into_response()
}

#[derive(Serialize)]
pub struct ApiError {
    pub success: bool,
    pub message: &'static str,
}

#[derive(Serialize)]
pub struct ApiFieldErrors {
    pub success: bool,
    pub errors: Vec<ApiFieldError>,
}
