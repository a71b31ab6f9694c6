use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable prefix, e.g. `CLOUD_PRICING__SERVER__PORT=9000`
pub const ENV_PREFIX: &str = "CLOUD_PRICING";
/// Legacy variable read by the catalog service
pub const LEGACY_API_KEY_VAR: &str = "GCP_API_KEY";
/// Upper bound for `cache.ttl_seconds` (one year)
pub const MAX_CACHE_TTL_SECONDS: u64 = 365 * 24 * 60 * 60;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    #[serde(default = "default_ttl_seconds")]
    pub ttl_seconds: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: default_ttl_seconds(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorsConfig {
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
        }
    }
}

/// Cloud Billing Catalog API access
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_catalog_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_catalog_base_url(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl CatalogConfig {
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MetricsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_metrics_endpoint")]
    pub endpoint: String,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: default_metrics_endpoint(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_ttl_seconds() -> u64 {
    3600
}

fn default_allowed_origins() -> Vec<String> {
    vec!["*".to_string()]
}

fn default_catalog_base_url() -> String {
    "https://cloudbilling.googleapis.com/v1".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_true() -> bool {
    true
}

fn default_metrics_endpoint() -> String {
    "/metrics".to_string()
}

/// Load configuration from an optional TOML file and `CLOUD_PRICING__*`
/// environment variables, in that order of precedence (env wins).
pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    let config = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(environment())
        .build()?;

    let mut cfg: Config = config.try_deserialize()?;

    if !cfg.catalog.has_api_key() {
        if let Ok(key) = std::env::var(LEGACY_API_KEY_VAR) {
            cfg.catalog.api_key = key;
        }
    }

    validate_config(&cfg)?;

    Ok(cfg)
}

/// `CLOUD_PRICING__*` variables; `CLOUD_PRICING__CORS__ALLOWED_ORIGINS`
/// takes a comma-separated list
fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("cors.allowed_origins")
        .try_parsing(true)
}

pub fn validate_config(cfg: &Config) -> anyhow::Result<()> {
    if cfg.cache.ttl_seconds == 0 {
        anyhow::bail!("cache.ttl_seconds must be greater than 0");
    }

    if cfg.cache.ttl_seconds > MAX_CACHE_TTL_SECONDS {
        anyhow::bail!(
            "cache.ttl_seconds must be at most {} (got {})",
            MAX_CACHE_TTL_SECONDS,
            cfg.cache.ttl_seconds
        );
    }

    if cfg.catalog.timeout_seconds == 0 {
        anyhow::bail!("catalog.timeout_seconds must be greater than 0");
    }

    if cfg.cors.allowed_origins.is_empty() {
        anyhow::bail!("cors.allowed_origins cannot be empty");
    }

    if !cfg.metrics.endpoint.starts_with('/') {
        anyhow::bail!(
            "metrics.endpoint must start with '/' (got '{}')",
            cfg.metrics.endpoint
        );
    }

    match cfg.server.log_format.as_str() {
        "text" | "json" => {}
        other => anyhow::bail!("server.log_format must be 'text' or 'json' (got '{}')", other),
    }

    Ok(())
}
