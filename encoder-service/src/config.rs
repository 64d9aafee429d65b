// Configuration constants and environment helpers
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::errors::ConfigError;

// Server configuration
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_PORT: u16 = 8080;

// Sidecar configuration
pub const DEFAULT_SIDECAR_PATH: &str = "/shared-bin/sidecar";
pub const DEFAULT_SIDECAR_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_SIDECAR_MAX_CONCURRENCY: usize = 64;

/// Settings for the encoder service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Address to bind.
    pub host: IpAddr,

    /// Port to listen on.
    pub port: u16,

    /// Location of the sidecar executable.
    pub sidecar_path: PathBuf,

    /// Deadline for a single sidecar invocation. The child is killed on expiry.
    pub sidecar_timeout: Duration,

    /// Upper bound on sidecar processes running at the same time.
    pub max_concurrent_sidecars: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
            sidecar_path: PathBuf::from(DEFAULT_SIDECAR_PATH),
            sidecar_timeout: Duration::from_millis(DEFAULT_SIDECAR_TIMEOUT_MS),
            max_concurrent_sidecars: DEFAULT_SIDECAR_MAX_CONCURRENCY,
        }
    }
}

impl ServiceConfig {
    /// Read the configuration from process environment variables.
    ///
    /// Unset variables fall back to the defaults; set but invalid ones are an error.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = parse_var(&lookup, "ENCODER_HOST")?.unwrap_or(defaults.host);
        let port = parse_var(&lookup, "ENCODER_PORT")?.unwrap_or(defaults.port);

        let sidecar_path = lookup("SIDECAR_PATH")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.sidecar_path);

        let timeout_ms: u64 = parse_var(&lookup, "SIDECAR_TIMEOUT_MS")?
            .unwrap_or(DEFAULT_SIDECAR_TIMEOUT_MS);
        if timeout_ms == 0 {
            return Err(ConfigError::invalid("SIDECAR_TIMEOUT_MS", "0", "must be positive"));
        }

        let max_concurrent_sidecars: usize = parse_var(&lookup, "SIDECAR_MAX_CONCURRENCY")?
            .unwrap_or(defaults.max_concurrent_sidecars);
        if max_concurrent_sidecars == 0 {
            return Err(ConfigError::invalid(
                "SIDECAR_MAX_CONCURRENCY",
                "0",
                "must be positive",
            ));
        }

        Ok(Self {
            host,
            port,
            sidecar_path,
            sidecar_timeout: Duration::from_millis(timeout_ms),
            max_concurrent_sidecars,
        })
    }

    /// Socket address the server binds to.
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_var<F, T>(lookup: &F, name: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| ConfigError::invalid(name, raw, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<ServiceConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServiceConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = load(&[]).unwrap();
        assert_eq!(config, ServiceConfig::default());
        assert_eq!(config.addr(), "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.sidecar_path, PathBuf::from("/shared-bin/sidecar"));
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("ENCODER_HOST", "127.0.0.1"),
            ("ENCODER_PORT", "9000"),
            ("SIDECAR_PATH", "/usr/local/bin/sidecar"),
            ("SIDECAR_TIMEOUT_MS", "250"),
            ("SIDECAR_MAX_CONCURRENCY", "4"),
        ])
        .unwrap();

        assert_eq!(config.addr(), "127.0.0.1:9000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.sidecar_path, PathBuf::from("/usr/local/bin/sidecar"));
        assert_eq!(config.sidecar_timeout, Duration::from_millis(250));
        assert_eq!(config.max_concurrent_sidecars, 4);
    }

    #[test]
    fn test_empty_sidecar_path_uses_default() {
        let config = load(&[("SIDECAR_PATH", "")]).unwrap();
        assert_eq!(config.sidecar_path, PathBuf::from(DEFAULT_SIDECAR_PATH));
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = load(&[("ENCODER_PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("ENCODER_PORT"));
    }

    #[test]
    fn test_zero_limits_are_rejected() {
        assert!(load(&[("SIDECAR_TIMEOUT_MS", "0")]).is_err());
        assert!(load(&[("SIDECAR_MAX_CONCURRENCY", "0")]).is_err());
    }
}
