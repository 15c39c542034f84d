//! Server configuration read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::AppError;

/// Default bind host.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default bind port.
pub const DEFAULT_PORT: u16 = 5000;
/// Default lesson document path.
pub const DEFAULT_CONTENT_PATH: &str = "content/unit1.json";
/// Default static asset directory.
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Runtime configuration for the lesson server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Host to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Lesson document, re-read on every request.
    pub content_path: PathBuf,
    /// Directory served under `/static`.
    pub static_dir: PathBuf,
    /// OTLP collector endpoint; trace export is disabled when unset.
    pub otlp_endpoint: Option<String>,
}

impl Config {
    /// Read configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable holds an invalid value.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to its
    /// value.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `PORT` is not a valid `u16`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?,
            None => DEFAULT_PORT,
        };
        let content_path = lookup("LECONS_CONTENT_PATH")
            .map_or_else(|| PathBuf::from(DEFAULT_CONTENT_PATH), PathBuf::from);
        let static_dir = lookup("LECONS_STATIC_DIR")
            .map_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR), PathBuf::from);
        let otlp_endpoint = lookup("OTEL_EXPORTER_OTLP_ENDPOINT").filter(|v| !v.is_empty());

        Ok(Self {
            host,
            port,
            content_path,
            static_dir,
            otlp_endpoint,
        })
    }

    /// The address to bind.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `host:port` is not a socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(
            config,
            Config {
                host: "0.0.0.0".to_owned(),
                port: 5000,
                content_path: PathBuf::from("content/unit1.json"),
                static_dir: PathBuf::from("static"),
                otlp_endpoint: None,
            }
        );
    }

    #[test]
    fn test_reads_every_variable() {
        let config = Config::from_lookup(lookup_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("LECONS_CONTENT_PATH", "/srv/lecons/unit2.json"),
            ("LECONS_STATIC_DIR", "/srv/lecons/static"),
            ("OTEL_EXPORTER_OTLP_ENDPOINT", "http://collector:4317"),
        ]))
        .unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.content_path, PathBuf::from("/srv/lecons/unit2.json"));
        assert_eq!(config.static_dir, PathBuf::from("/srv/lecons/static"));
        assert_eq!(config.otlp_endpoint.as_deref(), Some("http://collector:4317"));
        assert_eq!(
            config.socket_addr().unwrap(),
            "127.0.0.1:8080".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn test_invalid_port_is_a_config_error() {
        let result = Config::from_lookup(lookup_from(&[("PORT", "cinq-mille")]));

        assert!(matches!(result.unwrap_err(), AppError::Config(_)));
    }

    #[test]
    fn test_empty_otlp_endpoint_disables_export() {
        let config =
            Config::from_lookup(lookup_from(&[("OTEL_EXPORTER_OTLP_ENDPOINT", "")])).unwrap();

        assert_eq!(config.otlp_endpoint, None);
    }

    #[test]
    fn test_invalid_host_is_a_config_error() {
        let config = Config::from_lookup(lookup_from(&[("HOST", "not a host")])).unwrap();

        assert!(matches!(config.socket_addr().unwrap_err(), AppError::Config(_)));
    }
}
