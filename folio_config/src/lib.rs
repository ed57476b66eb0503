use std::{net::IpAddr, path::Path, path::PathBuf};

use anyhow::Context;
use config::{File, FileFormat};
use folio_models::email_address::EmailAddressWithName;
use serde::Deserialize;

pub use duration::Duration;

mod duration;

/// Defaults compiled into the binary, always loaded first.
pub const DEFAULT_CONFIG: &str = include_str!("../../config.toml");

/// Colon separated list of additional config files.
pub const CONFIG_PATHS_VAR: &str = "FOLIO_CONFIG";
pub const PORT_VAR: &str = "PORT";
pub const ENVIRONMENT_VAR: &str = "APP_ENV";

/// Load the configuration from the defaults, the files listed in
/// `FOLIO_CONFIG` and the process environment.
pub fn load() -> anyhow::Result<Config> {
    let paths = std::env::var_os(CONFIG_PATHS_VAR)
        .map(|paths| std::env::split_paths(&paths).collect::<Vec<_>>())
        .unwrap_or_default();

    load_with(&paths, |key| std::env::var(key).ok())
}

/// Load the configuration from the defaults, the given `paths` and the
/// environment variables returned by `env`.
pub fn load_with(
    paths: &[impl AsRef<Path>],
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Config> {
    let builder = config::Config::builder()
        .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

    paths
        .iter()
        .try_fold(builder, |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?
        .set_override_option("http.port", env(PORT_VAR))?
        .set_override_option("environment", env(ENVIRONMENT_VAR))?
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub environment: Environment,
    pub http: HttpConfig,
    pub contact: ContactConfig,
    pub notifier: NotifierConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
    Test,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Test => "test",
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
    pub static_dir: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    pub delivery_timeout: Duration,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum NotifierConfig {
    Log,
    Smtp(SmtpConfig),
}

#[derive(Debug, Deserialize)]
pub struct SmtpConfig {
    pub url: String,
    pub from: EmailAddressWithName,
    pub recipient: EmailAddressWithName,
}
