use actix_web::http::{header::HeaderValue, Uri};
use config::builder::{ConfigBuilder, DefaultState};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub upstream: UpstreamSettings,
    #[serde(default)]
    pub cors: CorsSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 5000 }

/// PokeAPI connection settings
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_list_limit")]
    pub list_limit: u32,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
}

impl UpstreamSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }
}

impl Default for UpstreamSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            list_limit: default_list_limit(),
            timeout_ms: default_timeout_ms(),
            connect_timeout_ms: default_connect_timeout_ms(),
        }
    }
}

fn default_base_url() -> String { "https://pokeapi.co/api/v2".to_string() }
fn default_list_limit() -> u32 { 100 }
fn default_timeout_ms() -> u64 { 5_000 }
fn default_connect_timeout_ms() -> u64 { 2_000 }

#[derive(Debug, Clone, Deserialize)]
pub struct CorsSettings {
    /// The single origin allowed to call the relay from a browser
    #[serde(default = "default_client_url")]
    pub client_url: String,
}

impl Default for CorsSettings {
    fn default() -> Self {
        Self { client_url: default_client_url() }
    }
}

fn default_client_url() -> String { "http://localhost:3000".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration files (config/default.toml, config/local.toml)
    /// 3. Environment variables (prefixed with RELAY__)
    /// 4. CLIENT_URL for the allowed browser origin
    pub fn load() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., RELAY__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("RELAY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        let builder = with_client_url(builder, std::env::var("CLIENT_URL").ok())?;

        Self::from_config(builder.build()?)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("RELAY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Self::from_config(config)
    }

    /// Deserialize and validate an already assembled configuration
    pub fn from_config(config: Config) -> Result<Self, ConfigError> {
        let mut settings: Settings = config.try_deserialize()?;
        settings.cors.client_url = settings.cors.client_url.trim().to_string();
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !is_single_origin(&self.cors.client_url) {
            return Err(ConfigError::Message(format!(
                "cors.client_url must be a single origin, got {:?}",
                self.cors.client_url
            )));
        }

        let base = &self.upstream.base_url;
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ConfigError::Message(format!(
                "upstream.base_url must be an http(s) URL, got {:?}",
                base
            )));
        }

        if self.upstream.list_limit == 0 {
            return Err(ConfigError::Message("upstream.list_limit must be positive".into()));
        }

        if self.upstream.timeout_ms == 0 || self.upstream.connect_timeout_ms == 0 {
            return Err(ConfigError::Message("upstream timeouts must be positive".into()));
        }

        Ok(())
    }
}

/// Apply the `CLIENT_URL` override, when set, on top of the other sources
pub fn with_client_url(
    builder: ConfigBuilder<DefaultState>,
    client_url: Option<String>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    match client_url {
        Some(url) => builder.set_override("cors.client_url", url),
        None => Ok(builder),
    }
}

// The CORS layer needs both a header value and a parseable absolute URI.
fn is_single_origin(origin: &str) -> bool {
    if origin.is_empty() || origin == "*" || HeaderValue::from_str(origin).is_err() {
        return false;
    }

    match origin.parse::<Uri>() {
        Ok(uri) => uri.scheme().is_some() && uri.authority().is_some(),
        Err(_) => false,
    }
}
