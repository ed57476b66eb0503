use std::sync::Arc;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use folio_core_contact_contracts::{ContactFeatureService, ContactSubmitError};
use folio_models::contact::CONTACT_RULES;

use crate::{
    errors::{field_errors, internal_server_error},
    models::contact::{ApiContactAccepted, ApiContactSubmission, CONTACT_FAILED_MESSAGE},
};

pub fn router(service: Arc<impl ContactFeatureService>) -> Router<()> {
    Router::new()
        .route("/api/contact", routing::post(submit))
        .route("/api/contact/rules", routing::get(rules))
        .with_state(service)
}

async fn submit(
    service: State<Arc<impl ContactFeatureService>>,
    submission: ApiContactSubmission,
) -> Response {
    match service.submit(submission.into()).await {
        Ok(()) => Json(ApiContactAccepted::default()).into_response(),
        Err(ContactSubmitError::Validation(errors)) => {
            field_errors(errors.into_iter().map(Into::into).collect())
        }
        Err(ContactSubmitError::Other(err)) => internal_server_error(err, CONTACT_FAILED_MESSAGE),
    }
}

async fn rules() -> Response {
    Json(CONTACT_RULES).into_response()
}
