//! Process configuration (layered: CLI flags > env / `.env`).

use std::fmt;

use crate::error::{PanelError, Result};

pub const URL_VAR: &str = "EASYPANEL_URL";
pub const TOKEN_VAR: &str = "EASYPANEL_TOKEN";
pub const ACCESS_MODE_VAR: &str = "EASYPANEL_ACCESS_MODE";
pub const TRANSPORT_VAR: &str = "EASYPANEL_MCP_MODE";
pub const API_KEY_VAR: &str = "MCP_API_KEY";
pub const HOST_VAR: &str = "HOST";
pub const PORT_VAR: &str = "PORT";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

/// Whether mutation tools may be called.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum AccessMode {
    #[default]
    Full,
    ReadOnly,
}

impl AccessMode {
    pub fn allows_mutations(self) -> bool {
        self == Self::Full
    }
}

/// How the MCP server is exposed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum TransportMode {
    #[default]
    Stdio,
    Http,
}

/// Settings for the HTTP front door.
#[derive(Clone, PartialEq, Eq)]
pub struct HttpSettings {
    pub host: String,
    pub port: u16,
    /// Inbound key; `None` leaves the endpoint open.
    pub api_key: Option<String>,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            api_key: None,
        }
    }
}

impl fmt::Debug for HttpSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("api_key", &self.api_key.as_ref().map(|_| ".."))
            .finish()
    }
}

/// Resolved server configuration.
#[derive(Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub panel_url: String,
    pub panel_token: Option<String>,
    pub access_mode: AccessMode,
    pub transport: TransportMode,
    pub http: HttpSettings,
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("panel_url", &self.panel_url)
            .field("panel_token", &self.panel_token.as_ref().map(|_| ".."))
            .field("access_mode", &self.access_mode)
            .field("transport", &self.transport)
            .field("http", &self.http)
            .finish()
    }
}

/// Optional values that take precedence over the environment.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub panel_url: Option<String>,
    pub panel_token: Option<String>,
    pub access_mode: Option<AccessMode>,
    pub transport: Option<TransportMode>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub api_key: Option<String>,
}

impl ServerConfig {
    /// Load from the process environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self> {
        Self::from_env_with(ConfigOverrides::default())
    }

    /// Load from the process environment and apply `overrides` on top.
    pub fn from_env_with(overrides: ConfigOverrides) -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::resolve(|name| std::env::var(name).ok(), overrides)
    }

    /// Resolve configuration from an arbitrary variable lookup.
    pub fn resolve<F>(lookup: F, overrides: ConfigOverrides) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let panel_url = overrides
            .panel_url
            .or_else(|| var(URL_VAR))
            .ok_or_else(|| PanelError::Configuration(format!("{URL_VAR} is required")))?;

        let access_mode = match overrides.access_mode {
            Some(mode) => mode,
            None => parse_var(ACCESS_MODE_VAR, var(ACCESS_MODE_VAR))?.unwrap_or_default(),
        };
        let transport = match overrides.transport {
            Some(mode) => mode,
            None => parse_var(TRANSPORT_VAR, var(TRANSPORT_VAR))?.unwrap_or_default(),
        };
        let port = match overrides.port {
            Some(port) => port,
            None => parse_var(PORT_VAR, var(PORT_VAR))?.unwrap_or(DEFAULT_PORT),
        };

        Ok(Self {
            panel_url,
            panel_token: overrides.panel_token.or_else(|| var(TOKEN_VAR)),
            access_mode,
            transport,
            http: HttpSettings {
                host: overrides
                    .host
                    .or_else(|| var(HOST_VAR))
                    .unwrap_or_else(|| DEFAULT_HOST.to_string()),
                port,
                api_key: overrides.api_key.or_else(|| var(API_KEY_VAR)),
            },
        })
    }
}

fn parse_var<T>(name: &str, raw: Option<String>) -> Result<Option<T>>
where
    T: std::str::FromStr,
{
    match raw {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| PanelError::Configuration(format!("invalid value for {name}: '{raw}'"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn access_mode_accepts_kebab_case() {
        assert_eq!("read-only".parse::<AccessMode>().unwrap(), AccessMode::ReadOnly);
        assert_eq!("FULL".parse::<AccessMode>().unwrap(), AccessMode::Full);
        assert!(!AccessMode::ReadOnly.allows_mutations());
    }

    #[test]
    fn blank_values_count_as_unset() {
        let err = ServerConfig::resolve(lookup(&[(URL_VAR, "  ")]), ConfigOverrides::default())
            .expect_err("blank url is missing");
        assert!(matches!(err, PanelError::Configuration(msg) if msg.contains(URL_VAR)));
    }

    #[test]
    fn debug_output_redacts_secrets() {
        let config = ServerConfig::resolve(
            lookup(&[(URL_VAR, "http://p"), (TOKEN_VAR, "tok-1"), (API_KEY_VAR, "key-1")]),
            ConfigOverrides::default(),
        )
        .unwrap();
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("tok-1"));
        assert!(!rendered.contains("key-1"));
    }
}
