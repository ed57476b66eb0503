use std::{net::SocketAddr, path::PathBuf};

use axum::Router;
use folio_core_contact_contracts::ContactFeatureService;
use folio_core_health_contracts::HealthFeatureService;
use folio_utils::Apply;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

mod errors;
mod middlewares;
mod models;
mod routes;

#[derive(Debug, Clone)]
pub struct RestServer<Health, Contact> {
    health: Health,
    contact: Contact,
    config: RestServerConfig,
}

#[derive(Debug, Clone)]
pub struct RestServerConfig {
    pub addr: SocketAddr,
    /// Directory of the single page application. Without it only the api is
    /// served.
    pub static_dir: Option<PathBuf>,
}

impl<Health, Contact> RestServer<Health, Contact>
where
    Health: HealthFeatureService,
    Contact: ContactFeatureService,
{
    pub fn new(health: Health, contact: Contact, config: RestServerConfig) -> Self {
        Self {
            health,
            contact,
            config,
        }
    }

    pub async fn serve(self) -> anyhow::Result<()> {
        let listener = TcpListener::bind(self.config.addr).await?;
        axum::serve(listener, self.router())
            .await
            .map_err(Into::into)
    }

    pub fn router(self) -> Router<()> {
        let router = Router::new()
            .merge(routes::health::router(self.health.into()))
            .merge(routes::contact::router(self.contact.into()))
            .apply_map(self.config.static_dir, routes::spa::add);

        // panic handler innermost, request id outermost (read by the trace span)
        let router = middlewares::panic_handler::add(router);
        let router = middlewares::trace::add(router);
        middlewares::request_id::add(router).layer(CorsLayer::permissive())
    }
}
