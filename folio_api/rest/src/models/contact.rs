use std::collections::HashMap;

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::header,
    response::Response,
    Form,
};
use folio_models::contact::{ContactFieldError, ContactSubmissionInput};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::errors::field_errors;

pub const CONTACT_ACCEPTED_MESSAGE: &str = "Message received! Thank you for reaching out.";
pub const CONTACT_FAILED_MESSAGE: &str =
    "An error occurred while sending your message. Please try again later.";
pub const INVALID_BODY_MESSAGE: &str = "Request body must be a JSON object";

/// Contact form fields as sent by the client, either as a JSON object or url
/// encoded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiContactSubmission {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ApiContactAccepted {
    pub success: bool,
    pub message: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ApiFieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl Default for ApiContactAccepted {
    fn default() -> Self {
        Self {
            success: true,
            message: CONTACT_ACCEPTED_MESSAGE,
        }
    }
}

impl From<ContactFieldError> for ApiFieldError {
    fn from(value: ContactFieldError) -> Self {
        Self {
            field: value.field.as_str(),
            message: value.message,
        }
    }
}

impl From<ApiContactSubmission> for ContactSubmissionInput {
    fn from(value: ApiContactSubmission) -> Self {
        Self {
            name: value.name,
            email: value.email,
            message: value.message,
        }
    }
}

impl ApiContactSubmission {
    fn from_json(mut fields: Map<String, Value>) -> Self {
        let mut take = |key| text(fields.remove(key));
        Self {
            name: take("name"),
            email: take("email"),
            message: take("message"),
        }
    }

    fn from_form(mut fields: HashMap<String, String>) -> Self {
        Self {
            name: fields.remove("name"),
            email: fields.remove("email"),
            message: fields.remove("message"),
        }
    }
}

/// Scalars are converted to their text form, anything else counts as missing.
fn text(value: Option<Value>) -> Option<String> {
    match value? {
        Value::String(value) => Some(value),
        Value::Number(value) => Some(value.to_string()),
        Value::Bool(value) => Some(value.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[async_trait]
impl<S> FromRequest<S> for ApiContactSubmission
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_form(&request) {
            let Form(fields) = Form::<HashMap<String, String>>::from_request(request, state)
                .await
                .map_err(invalid_body)?;
            return Ok(Self::from_form(fields));
        }

        let body = Bytes::from_request(request, state)
            .await
            .map_err(invalid_body)?;
        if body.trim_ascii().is_empty() {
            return Ok(Self::default());
        }
        let fields = serde_json::from_slice::<Map<String, Value>>(&body).map_err(invalid_body)?;
        Ok(Self::from_json(fields))
    }
}

fn is_form(request: &Request) -> bool {
    request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"))
}

fn invalid_body(err: impl std::fmt::Display) -> Response {
    debug!("rejected contact request body: {err}");
    field_errors(vec![ApiFieldError {
        field: "body",
        message: INVALID_BODY_MESSAGE,
    }])
}
