//! HTTP Server Configuration
//!
//! Configuration for the product service: bind address, port, the
//! environment name reported by `/health`, and the default log level.

/// Service configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Host to bind to (default: "0.0.0.0")
    pub host: String,

    /// Port to bind to (default: 8081)
    pub port: u16,

    /// Deployment environment echoed by the health endpoint (default: "development")
    pub environment: String,

    /// Log filter used when `RUST_LOG` is unset (default: "info")
    pub log_level: String,
}

pub(crate) fn default_host() -> String {
    "0.0.0.0".to_string()
}

pub(crate) fn default_port() -> u16 {
    8081
}

pub(crate) fn default_environment() -> String {
    "development".to_string()
}

pub(crate) fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            environment: default_environment(),
            log_level: default_log_level(),
        }
    }
}

impl ServiceConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// URL of this instance's own health endpoint
    pub fn health_url(&self) -> String {
        format!("http://localhost:{}/health", self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServiceConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8081);
        assert_eq!(config.environment, "development");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_socket_addr() {
        let config = ServiceConfig::with_port(8080);
        assert_eq!(config.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_health_url_uses_port() {
        let config = ServiceConfig::with_port(9000);
        assert_eq!(config.health_url(), "http://localhost:9000/health");
    }
}
