//! Startup configuration taken from the command line.

use crate::error::ConfigError;

/// Listener configuration.
///
/// The port is the single positional argument. The bind host is always
/// `0.0.0.0`; `RUST_LOG` only controls log verbosity (default: `"info"`).
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

impl Config {
    /// Builds the configuration from process arguments, program name first.
    ///
    /// Arguments after the port are ignored.
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let raw = args.into_iter().nth(1).ok_or(ConfigError::MissingPort)?;
        let port = parse_port(&raw)?;

        Ok(Self {
            port,
            ..Self::default()
        })
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        }
    }
}

fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    match raw.trim().parse::<u16>() {
        Ok(0) => Err(ConfigError::InvalidPort {
            value: raw.to_string(),
            reason: "port must be between 1 and 65535".to_string(),
        }),
        Ok(port) => Ok(port),
        Err(err) => Err(ConfigError::InvalidPort {
            value: raw.to_string(),
            reason: err.to_string(),
        }),
    }
}
