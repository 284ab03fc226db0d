use crate::error::{ClientError, ClientResult};
use base64::{engine::general_purpose, Engine};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};

/// Authentication applied to every outgoing request
///
/// Implementations only decorate headers. Token acquisition and refresh
/// belong to whoever constructs the authenticator.
#[async_trait::async_trait]
pub trait Authentication: Send + Sync {
    /// Apply authentication to the request headers
    async fn apply_auth(&self, headers: &mut HeaderMap) -> ClientResult<()>;

    /// Short name of the scheme, as accepted by `<SERVICE>_AUTH_TYPE`
    fn auth_type(&self) -> &'static str;
}

fn authorization_value(value: String) -> ClientResult<HeaderValue> {
    let mut header = HeaderValue::from_str(&value)
        .map_err(|e| ClientError::auth_error(format!("Invalid auth header: {}", e)))?;
    header.set_sensitive(true);
    Ok(header)
}

/// Basic authentication using username/password
#[derive(Debug, Clone)]
pub struct BasicAuth {
    username: String,
    password: String,
}

impl BasicAuth {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

#[async_trait::async_trait]
impl Authentication for BasicAuth {
    async fn apply_auth(&self, headers: &mut HeaderMap) -> ClientResult<()> {
        if self.username.is_empty() || self.password.is_empty() {
            return Err(ClientError::auth_error(
                "Basic authentication requires both a username and a password",
            ));
        }
        let credentials = format!("{}:{}", self.username, self.password);
        let encoded = general_purpose::STANDARD.encode(credentials.as_bytes());
        headers.insert(AUTHORIZATION, authorization_value(format!("Basic {}", encoded))?);

        Ok(())
    }

    fn auth_type(&self) -> &'static str {
        "basic"
    }
}

/// Bearer token authentication
///
/// The token is sent as-is; refreshing it is up to the caller.
#[derive(Debug, Clone)]
pub struct BearerAuth {
    token: String,
}

impl BearerAuth {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait::async_trait]
impl Authentication for BearerAuth {
    async fn apply_auth(&self, headers: &mut HeaderMap) -> ClientResult<()> {
        if self.token.is_empty() {
            return Err(ClientError::auth_error("Bearer token must not be empty"));
        }
        headers.insert(AUTHORIZATION, authorization_value(format!("Bearer {}", self.token))?);

        Ok(())
    }

    fn auth_type(&self) -> &'static str {
        "bearertoken"
    }
}

/// No authentication
#[derive(Debug, Clone)]
pub struct NoAuth;

#[async_trait::async_trait]
impl Authentication for NoAuth {
    async fn apply_auth(&self, _headers: &mut HeaderMap) -> ClientResult<()> {
        Ok(())
    }

    fn auth_type(&self) -> &'static str {
        "noauth"
    }
}
