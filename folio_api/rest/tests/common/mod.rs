use std::path::PathBuf;

use axum::{
    body::{Body, Bytes},
    http::Request,
    response::Response,
    Router,
};
use folio_api_rest::{RestServer, RestServerConfig};
use folio_core_contact_contracts::MockContactFeatureService;
use folio_core_health_contracts::MockHealthFeatureService;
use tower::ServiceExt;

pub fn router(
    health: MockHealthFeatureService,
    contact: MockContactFeatureService,
    static_dir: Option<PathBuf>,
) -> Router {
    let config = RestServerConfig {
        addr: ([127, 0, 0, 1], 0).into(),
        static_dir,
    };
    RestServer::new(health, contact, config).router()
}

pub async fn send(router: Router, request: Request<Body>) -> (Response, Bytes) {
    let response = router.oneshot(request).await.unwrap();
    let (parts, body) = response.into_parts();
    let body = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    (Response::from_parts(parts, Body::empty()), body)
}
