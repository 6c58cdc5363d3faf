use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

use crate::auth::IdentityProvider;

const DEFAULT_FAKE_ADMIN_HOSTS: [&str; 3] = ["localhost:9000", "localhost:19001", "civiform:9000"];

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }

    pub fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub auth: AuthConfig,
    pub whitelabel: WhitelabelConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_source(|key| env::var(key).ok())
    }

    /// Like [`AppConfig::load`], consulting `fallback` for keys the environment leaves unset.
    pub fn load_with_fallback<F>(fallback: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        dotenvy::dotenv().ok();
        Self::from_source(|key| env::var(key).ok().or_else(|| fallback(key)))
    }

    /// Parse configuration from an arbitrary key lookup.
    pub fn from_source<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = AppEnvironment::from_str(
            &lookup("APP_ENV").unwrap_or_else(|| "development".to_string()),
        );

        let host = lookup("APP_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = lookup("APP_PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = lookup("APP_LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        let applicant_idp = match non_blank(lookup("CIVIFORM_APPLICANT_IDP")) {
            Some(raw) => IdentityProvider::parse(&raw)
                .ok_or(ConfigError::UnknownIdentityProvider(raw))?,
            None => IdentityProvider::Idcs,
        };

        let fake_admin_hosts = match non_blank(lookup("CIVIFORM_FAKE_ADMIN_HOSTS")) {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|host| !host.is_empty())
                .map(str::to_string)
                .collect(),
            None => DEFAULT_FAKE_ADMIN_HOSTS
                .iter()
                .map(|host| host.to_string())
                .collect(),
        };

        let auth = AuthConfig {
            applicant_idp,
            idcs_register_uri: non_blank(lookup("IDCS_REGISTER_URI")),
            fake_admin_hosts,
            staging_hostname: non_blank(lookup("STAGING_HOSTNAME")),
        };

        let whitelabel = WhitelabelConfig {
            small_logo_url: non_blank(lookup("WHITELABEL_SMALL_LOGO_URL")),
            civic_entity_full_name: required(&lookup, "WHITELABEL_CIVIC_ENTITY_FULL_NAME")?,
            civic_entity_short_name: required(&lookup, "WHITELABEL_CIVIC_ENTITY_SHORT_NAME")?,
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            auth,
            whitelabel,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|raw| !raw.is_empty())
}

fn required<F>(lookup: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    non_blank(lookup(key)).ok_or(ConfigError::MissingKey(key))
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Applicant identity provider selection and debug login settings.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub applicant_idp: IdentityProvider,
    pub idcs_register_uri: Option<String>,
    pub fake_admin_hosts: Vec<String>,
    pub staging_hostname: Option<String>,
}

/// Branding for the deployment's civic entity.
#[derive(Debug, Clone)]
pub struct WhitelabelConfig {
    pub small_logo_url: Option<String>,
    pub civic_entity_full_name: String,
    pub civic_entity_short_name: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    MissingKey(&'static str),
    UnknownIdentityProvider(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::MissingKey(key) => write!(f, "required configuration key {key} is not set"),
            ConfigError::UnknownIdentityProvider(value) => {
                write!(f, "CIVIFORM_APPLICANT_IDP '{value}' is not a known identity provider")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::MissingKey(_)
            | ConfigError::UnknownIdentityProvider(_) => None,
        }
    }
}
