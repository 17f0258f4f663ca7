//! Configuration loading and constants.
//!
//! All configuration comes from process environment variables, resolved once
//! at startup into an immutable `ServiceConfig`. Missing or empty variables
//! fall back to fixed defaults; loading never fails.

use const_format::formatcp;

// =============================================================================
// HTTP Response Cache Control
// =============================================================================
// Cache-Control headers for upstream caches (Varnish, nginx, CDNs).

/// Greeting page - static content, safe to cache briefly
pub const HTTP_CACHE_GREETING_MAX_AGE: u32 = 60;

pub const CACHE_CONTROL_GREETING: &str =
    formatcp!("public, max-age={}", HTTP_CACHE_GREETING_MAX_AGE);

/// Balance responses are credentialed and per-caller; intermediaries must not
/// store them.
pub const CACHE_CONTROL_BALANCE: &str = "no-store";

// =============================================================================
// Environment Variables
// =============================================================================

/// Account name returned on successful balance checks
pub const ENV_USER: &str = "USER";

/// Balance string returned on successful balance checks
pub const ENV_BALANCE: &str = "BALANCE";

/// Shared secret compared against presented bearer tokens
pub const ENV_SECRET: &str = "SPECIAL_CODE";

/// Listen address override
pub const ENV_BIND_HOST: &str = "BIND_HOST";

/// Listen port override
pub const ENV_BIND_PORT: &str = "BIND_PORT";

/// Log output format override (text or json)
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";

// =============================================================================
// Defaults
// =============================================================================

pub const DEFAULT_USER: &str = "default_user";
pub const DEFAULT_BALANCE: &str = "0";
pub const DEFAULT_SECRET: &str = "secret";

/// Default listen address (all interfaces)
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "tally=debug,tower_http=info";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

/// Service configuration, resolved from the environment once at startup.
///
/// Write-once: created in `main`, shared read-only across request handlers
/// through `AppState`. The bearer secret is redacted from `Debug` output so
/// it cannot leak through logs.
#[derive(Clone)]
pub struct ServiceConfig {
    /// Account name returned by the balance endpoint
    pub user: String,
    /// Balance string returned by the balance endpoint
    pub balance: String,
    /// Shared secret for bearer authentication
    pub secret_token: String,
    /// HTTP server configuration
    pub http: HttpConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    pub format: String,
}

impl std::fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("user", &self.user)
            .field("balance", &self.balance)
            .field("secret_token", &"[REDACTED]")
            .field("http", &self.http)
            .field("logging", &self.logging)
            .finish()
    }
}

impl ServiceConfig {
    /// Resolve configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve configuration through an arbitrary variable lookup.
    ///
    /// Unset and empty variables resolve to their defaults, as does an
    /// unparsable port. Loading never fails.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.is_empty());

        let port = var(ENV_BIND_PORT)
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            user: var(ENV_USER).unwrap_or_else(|| DEFAULT_USER.to_string()),
            balance: var(ENV_BALANCE).unwrap_or_else(|| DEFAULT_BALANCE.to_string()),
            secret_token: var(ENV_SECRET).unwrap_or_else(|| DEFAULT_SECRET.to_string()),
            http: HttpConfig {
                host: var(ENV_BIND_HOST).unwrap_or_else(|| DEFAULT_HOST.to_string()),
                port,
            },
            logging: LoggingConfig {
                format: var(ENV_LOG_FORMAT).unwrap_or_else(|| DEFAULT_LOG_FORMAT.to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> ServiceConfig {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServiceConfig::from_lookup(|name| map.get(name).cloned())
    }

    #[test]
    fn unset_environment_resolves_to_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.user, "default_user");
        assert_eq!(config.balance, "0");
        assert_eq!(config.secret_token, "secret");
        assert_eq!(config.http.host, "0.0.0.0");
        assert_eq!(config.http.port, 8080);
        assert_eq!(config.logging.format, "text");
    }

    #[test]
    fn set_variables_are_used() {
        let config = config_from(&[
            ("USER", "alice"),
            ("BALANCE", "1500"),
            ("SPECIAL_CODE", "hunter2"),
            ("BIND_HOST", "127.0.0.1"),
            ("BIND_PORT", "3000"),
            ("LOG_FORMAT", "json"),
        ]);
        assert_eq!(config.user, "alice");
        assert_eq!(config.balance, "1500");
        assert_eq!(config.secret_token, "hunter2");
        assert_eq!(config.http.host, "127.0.0.1");
        assert_eq!(config.http.port, 3000);
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn empty_values_resolve_to_defaults() {
        let config = config_from(&[("USER", ""), ("BALANCE", ""), ("SPECIAL_CODE", "")]);
        assert_eq!(config.user, "default_user");
        assert_eq!(config.balance, "0");
        assert_eq!(config.secret_token, "secret");
    }

    #[test]
    fn unparsable_port_falls_back_to_default() {
        let config = config_from(&[("BIND_PORT", "not-a-port")]);
        assert_eq!(config.http.port, 8080);
    }

    #[test]
    fn debug_output_redacts_secret() {
        let config = config_from(&[("SPECIAL_CODE", "hunter2")]);
        let rendered = format!("{:?}", config);
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("hunter2"));
    }
}
