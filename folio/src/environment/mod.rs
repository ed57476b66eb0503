use std::net::SocketAddr;

use folio_api_rest::RestServerConfig;
use folio_config::Config;
use folio_core_contact_impl::{ContactFeatureConfig, ContactFeatureServiceImpl};
use folio_core_health_impl::HealthFeatureServiceImpl;
use types::{ContactFeature, HealthFeature, Notifier, RestServer, Time};

pub mod types;

/// Builds the service graph from the config and the already connected
/// notifier.
pub struct Provider<'a> {
    config: &'a Config,
    notifier: Notifier,
}

impl<'a> Provider<'a> {
    pub fn new(config: &'a Config, notifier: Notifier) -> Self {
        Self { config, notifier }
    }

    pub fn rest_server(self) -> RestServer {
        let config = self.rest_server_config();
        let health = self.health_feature();
        let contact = self.contact_feature();
        RestServer::new(health, contact, config)
    }

    fn health_feature(&self) -> HealthFeature {
        HealthFeatureServiceImpl::new(Time::default())
    }

    fn contact_feature(self) -> ContactFeature {
        let config = ContactFeatureConfig {
            delivery_timeout: self.config.contact.delivery_timeout.into(),
        };
        ContactFeatureServiceImpl::new(self.notifier, config)
    }

    fn rest_server_config(&self) -> RestServerConfig {
        RestServerConfig {
            addr: SocketAddr::new(self.config.http.host, self.config.http.port),
            static_dir: self.config.http.static_dir.clone(),
        }
    }
}
