use anyhow::Context;
use folio_config::Config;
use folio_notify_contracts::NotifierService;
use tracing::info;

use crate::{environment::Provider, notifier};

pub async fn serve(config: Config) -> anyhow::Result<()> {
    info!("Connecting to notifier");
    let notifier = notifier::connect(&config.notifier)?;
    notifier.ping().await.context("Failed to reach notifier")?;

    let server = Provider::new(&config, notifier).rest_server();
    info!(
        "Starting http server on port {} in {} mode",
        config.http.port, config.environment
    );
    info!(
        "Api available at http://{}:{}/api",
        config.http.host, config.http.port
    );
    server.serve().await
}
