//! Service configuration
//!
//! A [`ServiceConfig`] is immutable once a client is built from it. Default
//! headers are merged into each request at call time, never mutated in place.

use crate::auth::{Authentication, BasicAuth, BearerAuth, NoAuth};
use crate::error::{ClientError, ClientResult};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Connection settings shared by every operation of one service client
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Name used for environment lookups and SDK analytics headers
    pub service_name: String,
    pub service_url: Url,
    /// Headers sent with every request unless overridden per call
    pub default_headers: HeaderMap,
    pub timeout: Option<Duration>,
    pub disable_ssl_verification: bool,
}

impl ServiceConfig {
    pub fn new(service_name: impl Into<String>, service_url: impl AsRef<str>) -> ClientResult<Self> {
        Ok(Self {
            service_name: service_name.into(),
            service_url: Url::parse(service_url.as_ref())?,
            default_headers: HeaderMap::new(),
            timeout: None,
            disable_ssl_verification: false,
        })
    }

    pub fn with_service_url(mut self, service_url: impl AsRef<str>) -> ClientResult<Self> {
        self.service_url = Url::parse(service_url.as_ref())?;
        Ok(self)
    }

    /// Add a default header; invalid names or values are rejected
    pub fn with_header(mut self, name: &str, value: &str) -> ClientResult<Self> {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| ClientError::config_error(format!("Invalid header name '{}': {}", name, e)))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| ClientError::config_error(format!("Invalid header value for '{}': {}", name, e)))?;
        self.default_headers.insert(name, value);
        Ok(self)
    }

    pub fn with_default_headers(mut self, headers: HeaderMap) -> Self {
        self.default_headers = headers;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_disable_ssl_verification(mut self, disable: bool) -> Self {
        self.disable_ssl_verification = disable;
        self
    }

    /// Load overrides from `<SERVICE>_URL`, `<SERVICE>_TIMEOUT` and
    /// `<SERVICE>_DISABLE_SSL`, falling back to `default_url`
    pub fn from_env(service_name: &str, default_url: &str) -> ClientResult<Self> {
        Self::from_lookup(service_name, default_url, |key| std::env::var(key).ok())
    }

    /// Same as [`ServiceConfig::from_env`] with an arbitrary variable source
    pub fn from_lookup<F>(service_name: &str, default_url: &str, lookup: F) -> ClientResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let prefix = env_prefix(service_name);
        let url = lookup(&format!("{}_URL", prefix)).unwrap_or_else(|| default_url.to_string());
        let mut config = Self::new(service_name, url)?;

        if let Some(timeout) = lookup(&format!("{}_TIMEOUT", prefix)) {
            let secs: u64 = timeout.trim().parse().map_err(|_| {
                ClientError::config_error(format!("{}_TIMEOUT must be a number of seconds, got '{}'", prefix, timeout))
            })?;
            config.timeout = Some(Duration::from_secs(secs));
        }

        if let Some(disable) = lookup(&format!("{}_DISABLE_SSL", prefix)) {
            config.disable_ssl_verification = parse_bool(&disable);
        }

        log::debug!("Loaded configuration for service '{}': url={}", service_name, config.service_url);
        Ok(config)
    }
}

/// Resolve an authenticator from `<SERVICE>_AUTH_TYPE` and its companion
/// variables
pub fn authenticator_from_env(service_name: &str) -> ClientResult<Arc<dyn Authentication>> {
    authenticator_from_lookup(service_name, |key| std::env::var(key).ok())
}

pub fn authenticator_from_lookup<F>(service_name: &str, lookup: F) -> ClientResult<Arc<dyn Authentication>>
where
    F: Fn(&str) -> Option<String>,
{
    let prefix = env_prefix(service_name);
    let var = |suffix: &str| lookup(&format!("{}_{}", prefix, suffix));
    let require = |suffix: &str| {
        var(suffix).ok_or_else(|| ClientError::config_error(format!("{}_{} is not set", prefix, suffix)))
    };

    // Bearer token alone implies its auth type.
    let auth_type = match var("AUTH_TYPE") {
        Some(t) => t.to_ascii_lowercase(),
        None if var("BEARER_TOKEN").is_some() => "bearertoken".to_string(),
        None => {
            return Err(ClientError::config_error(format!(
                "{}_AUTH_TYPE is not set",
                prefix
            )))
        }
    };

    match auth_type.as_str() {
        "noauth" => Ok(Arc::new(NoAuth)),
        "basic" => Ok(Arc::new(BasicAuth::new(require("USERNAME")?, require("PASSWORD")?))),
        "bearertoken" => Ok(Arc::new(BearerAuth::new(require("BEARER_TOKEN")?))),
        other => Err(ClientError::config_error(format!(
            "Unsupported authentication type '{}' for service '{}'",
            other, service_name
        ))),
    }
}

fn env_prefix(service_name: &str) -> String {
    service_name.to_ascii_uppercase().replace('-', "_")
}

fn parse_bool(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "true" | "1" | "yes")
}
