//! Server configuration read from the environment.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `TODO_HOST` | `127.0.0.1` | bind address |
//! | `TODO_PORT` | `3000` | port; `PORT` is accepted as a fallback |
//! | `LOG_FORMAT` | `pretty` | `json` or `pretty` |
//! | `RUST_LOG` | `info,todo_server=debug` | tracing filter |

use std::env;

use thiserror::Error;

use crate::observability::LogFormat;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid port {value:?} in {var}")]
    InvalidPort { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_format: LogFormat,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("TODO_HOST").unwrap_or_else(|| "127.0.0.1".to_string());

        let port: u16 = match ["TODO_PORT", "PORT"]
            .into_iter()
            .find_map(|var| lookup(var).map(|value| (var, value)))
        {
            Some((var, value)) => value
                .parse()
                .map_err(|_| ConfigError::InvalidPort { var, value })?,
            None => 3000,
        };

        let log_format = lookup("LOG_FORMAT")
            .map(|value| LogFormat::parse(&value))
            .unwrap_or_default();

        Ok(Self {
            host,
            port,
            log_format,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
