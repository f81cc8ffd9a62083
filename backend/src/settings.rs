//! Process settings loaded via OrthoConfig.
//!
//! Values layer from defaults, an optional configuration file, `SMARTPARKING_*`
//! environment variables and command-line flags.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_POOL_SIZE: u32 = 8;

/// Errors raised while interpreting loaded settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// The bind address is not a `host:port` socket address.
    #[error("invalid bind address {value:?}: {message}")]
    BindAddr { value: String, message: String },
}

/// Configuration values for the HTTP server and its storage.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SMARTPARKING")]
pub struct ServerSettings {
    /// Socket address the HTTP server listens on.
    pub bind_addr: Option<String>,
    /// PostgreSQL URL. Without it records live in process memory.
    pub database_url: Option<String>,
    /// Maximum number of pooled database connections.
    pub pool_size: Option<u32>,
    /// Apply pending schema migrations before serving.
    #[ortho_config(default = false)]
    pub run_migrations: bool,
}

impl ServerSettings {
    /// Return the parsed bind address, falling back to `0.0.0.0:8080`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::BindAddr`] when the configured value does not
    /// parse.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let value = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        value.parse().map_err(|err: std::net::AddrParseError| SettingsError::BindAddr {
            value: value.to_owned(),
            message: err.to_string(),
        })
    }

    /// Return the configured pool size, falling back to the default.
    pub fn pool_size(&self) -> u32 {
        self.pool_size.unwrap_or(DEFAULT_POOL_SIZE)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for server settings parsing.

    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    use super::*;

    const VARS: [&str; 4] = [
        "SMARTPARKING_BIND_ADDR",
        "SMARTPARKING_DATABASE_URL",
        "SMARTPARKING_POOL_SIZE",
        "SMARTPARKING_RUN_MIGRATIONS",
    ];

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("smartparking")])
            .expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();

        assert_eq!(
            settings.bind_addr().expect("default address"),
            DEFAULT_BIND_ADDR.parse::<SocketAddr>().expect("valid default")
        );
        assert!(settings.database_url.is_none());
        assert_eq!(settings.pool_size(), DEFAULT_POOL_SIZE);
        assert!(!settings.run_migrations);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("SMARTPARKING_BIND_ADDR", Some("127.0.0.1:9090".to_owned())),
            (
                "SMARTPARKING_DATABASE_URL",
                Some("postgres://parking@localhost/parking".to_owned()),
            ),
            ("SMARTPARKING_POOL_SIZE", Some("3".to_owned())),
            ("SMARTPARKING_RUN_MIGRATIONS", Some("true".to_owned())),
        ]);

        let settings = load_from_empty_args();

        assert_eq!(
            settings.bind_addr().expect("configured address").port(),
            9090
        );
        assert_eq!(
            settings.database_url.as_deref(),
            Some("postgres://parking@localhost/parking")
        );
        assert_eq!(settings.pool_size(), 3);
        assert!(settings.run_migrations);
    }

    #[rstest]
    fn malformed_bind_address_is_reported() {
        let _guard = lock_env([("SMARTPARKING_BIND_ADDR", Some("localhost".to_owned()))]);

        let err = load_from_empty_args()
            .bind_addr()
            .expect_err("missing port");

        assert!(matches!(err, SettingsError::BindAddr { .. }));
    }
}
