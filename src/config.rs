//! Application configuration loaded from environment variables.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// `APP_VERSION` is deliberately not part of this struct: the `/version`
/// handler reads it from the environment on every request so that a changed
/// value is visible without reloading configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Host address the HTTP server binds (HOST).
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP server port (PORT).
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// The `host:port` string to bind.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}
