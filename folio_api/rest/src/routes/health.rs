use std::sync::Arc;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use folio_core_health_contracts::HealthFeatureService;

use crate::models::health::ApiHealthStatus;

pub fn router(service: Arc<impl HealthFeatureService>) -> Router<()> {
    Router::new()
        .route("/api/health", routing::get(health))
        .with_state(service)
}

async fn health(service: State<Arc<impl HealthFeatureService>>) -> Response {
    let status = service.get_status().await;
    Json(ApiHealthStatus::from(status)).into_response()
}
