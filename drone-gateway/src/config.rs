//! Gateway configuration
//!
//! Settings are read once at startup and stay fixed for the life of the
//! process: listening address, the two upstream endpoints and the log store
//! credential.

/// Default endpoint of the spreadsheet-backed config service
pub const DEFAULT_CONFIG_SERVICE_URL: &str = "https://script.google.com/macros/s/AKfycbzwclqJRodyVjzYyY-NTQDb9cWG6Hoc5vGAABVtr5-jPA_ET_2IasrAJK4aeo5XoONiaA/exec";

/// Default records endpoint of the log collection
pub const DEFAULT_LOG_STORE_URL: &str =
    "https://app-tracking.pockethost.io/api/collections/drone_logs/records";

/// Gateway configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Interface to listen on
    pub bind_host: String,

    /// Port to listen on
    pub port: u16,

    /// Config service endpoint
    pub config_service_url: String,

    /// Log store records endpoint
    pub log_store_url: String,

    /// Bearer credential for log store writes
    pub pocket_api_key: Option<String>,
}

impl Config {
    /// Creates a new configuration with defaults
    pub fn new(port: u16) -> Self {
        Self {
            bind_host: "0.0.0.0".to_string(),
            port,
            config_service_url: DEFAULT_CONFIG_SERVICE_URL.to_string(),
            log_store_url: DEFAULT_LOG_STORE_URL.to_string(),
            pocket_api_key: None,
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - PORT (optional, default: 5000)
    /// - BIND_HOST (optional, default: 0.0.0.0)
    /// - POCKET_API_KEY (optional, but log creation is rejected upstream without it)
    /// - DRONE_CONFIG_URL (optional, default: the hosted config service)
    /// - DRONE_LOG_URL (optional, default: the hosted log collection)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Creates configuration from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let port = lookup("PORT")
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(defaults.port);

        let bind_host = lookup("BIND_HOST").unwrap_or(defaults.bind_host);

        let config_service_url =
            lookup("DRONE_CONFIG_URL").unwrap_or(defaults.config_service_url);

        let log_store_url = lookup("DRONE_LOG_URL").unwrap_or(defaults.log_store_url);

        let pocket_api_key = lookup("POCKET_API_KEY").filter(|key| !key.is_empty());

        Self {
            bind_host,
            port,
            config_service_url,
            log_store_url,
            pocket_api_key,
        }
    }

    /// Address string to bind the listener to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_host, self.port)
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.port == 0 {
            anyhow::bail!("port must be greater than 0");
        }

        if self.bind_host.is_empty() {
            anyhow::bail!("bind_host cannot be empty");
        }

        for (name, url) in [
            ("config_service_url", &self.config_service_url),
            ("log_store_url", &self.log_store_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                anyhow::bail!("{} must start with http:// or https://", name);
            }
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(5000)
    }
}
