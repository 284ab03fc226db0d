use crate::{
    auth::Authentication,
    config::ServiceConfig,
    error::{ClientError, ClientResult},
    models::ErrorResponse,
};
use log::{debug, warn};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use std::sync::Arc;
use url::Url;

/// Header carrying the per-operation analytics tag
pub const SDK_ANALYTICS_HEADER: &str = "X-IBMCloud-SDK-Analytics";

/// A successful response: status, headers and the decoded body
#[derive(Debug, Clone)]
pub struct DetailedResponse<T> {
    pub status: u16,
    pub headers: HeaderMap,
    pub result: T,
}

impl<T> DetailedResponse<T> {
    pub fn into_result(self) -> T {
        self.result
    }
}

/// HTTP core shared by the service clients
#[derive(Clone)]
pub struct ServiceClient {
    client: Client,
    config: Arc<ServiceConfig>,
    auth: Arc<dyn Authentication>,
}

impl ServiceClient {
    /// Create a new client with authentication
    pub fn new(config: ServiceConfig, auth: Arc<dyn Authentication>) -> ClientResult<Self> {
        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if config.disable_ssl_verification {
            warn!(
                "SSL certificate verification is disabled for service '{}'",
                config.service_name
            );
            builder = builder.danger_accept_invalid_certs(true);
        }

        Ok(Self::with_client(builder.build()?, config, auth))
    }

    /// Create a new client with custom reqwest client
    pub fn with_client(client: Client, config: ServiceConfig, auth: Arc<dyn Authentication>) -> Self {
        Self {
            client,
            config: Arc::new(config),
            auth,
        }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Get the service URL
    pub fn service_url(&self) -> &Url {
        &self.config.service_url
    }

    /// Copy of this client pointing at another service URL
    pub fn with_service_url(&self, service_url: impl AsRef<str>) -> ClientResult<Self> {
        let config = (*self.config).clone().with_service_url(service_url)?;
        Ok(Self {
            client: self.client.clone(),
            config: Arc::new(config),
            auth: self.auth.clone(),
        })
    }

    /// Copy of this client with its default headers replaced
    pub fn with_default_headers(&self, headers: HeaderMap) -> Self {
        let config = (*self.config).clone().with_default_headers(headers);
        Self {
            client: self.client.clone(),
            config: Arc::new(config),
            auth: self.auth.clone(),
        }
    }

    /// Headers identifying the service and operation being called
    pub fn sdk_headers(&self, operation_id: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        let analytics = format!(
            "service_name={};service_version=V1;operation_id={}",
            self.config.service_name, operation_id
        );
        if let Ok(value) = HeaderValue::from_str(&analytics) {
            headers.insert(SDK_ANALYTICS_HEADER, value);
        }
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    /// Merge SDK, default and per-call headers; later layers win
    pub fn merge_headers(&self, operation_id: &str, call_headers: Option<&HeaderMap>) -> HeaderMap {
        let mut headers = self.sdk_headers(operation_id);
        for (name, value) in self.config.default_headers.iter() {
            headers.insert(name.clone(), value.clone());
        }
        if let Some(call_headers) = call_headers {
            for (name, value) in call_headers.iter() {
                headers.insert(name.clone(), value.clone());
            }
        }
        headers
    }

    /// Absolute URL for a path below the service URL
    pub fn endpoint(&self, path: &str) -> ClientResult<Url> {
        let base = self.config.service_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{}{}", base, path))?)
    }

    /// Build a request to the given path with authentication
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        operation_id: &str,
        call_headers: Option<&HeaderMap>,
    ) -> ClientResult<RequestBuilder> {
        let url = self.endpoint(path)?;
        debug!("HTTP {} {} ({})", method, url, operation_id);

        let mut headers = self.merge_headers(operation_id, call_headers);
        self.auth.apply_auth(&mut headers).await?;

        Ok(self.client.request(method, url).headers(headers))
    }

    /// Execute a request and handle common error cases
    pub async fn execute<T>(&self, request: RequestBuilder) -> ClientResult<DetailedResponse<T>>
    where
        T: for<'de> Deserialize<'de>,
    {
        let response = request.send().await?;
        self.handle_response(response).await
    }

    /// Execute a request whose successful response carries no body
    pub async fn execute_empty(&self, request: RequestBuilder) -> ClientResult<DetailedResponse<()>> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(DetailedResponse {
                status: status.as_u16(),
                headers: response.headers().clone(),
                result: (),
            })
        } else {
            self.handle_error_response(status, response).await
        }
    }

    /// Handle response and deserialize JSON
    async fn handle_response<T>(&self, response: Response) -> ClientResult<DetailedResponse<T>>
    where
        T: for<'de> Deserialize<'de>,
    {
        let status = response.status();

        if status.is_success() {
            let headers = response.headers().clone();
            let body = response.bytes().await?;
            let result = serde_json::from_slice::<T>(&body)?;
            Ok(DetailedResponse {
                status: status.as_u16(),
                headers,
                result,
            })
        } else {
            self.handle_error_response(status, response).await
        }
    }

    /// Handle error responses
    async fn handle_error_response<T>(&self, status: StatusCode, response: Response) -> ClientResult<T> {
        let error_message = match response.json::<ErrorResponse>().await {
            Ok(error_resp) => error_resp
                .describe()
                .unwrap_or_else(|| format!("HTTP {}", status)),
            Err(_) => format!("HTTP {}", status),
        };
        debug!("Request failed with {}: {}", status, error_message);

        match status {
            StatusCode::UNAUTHORIZED => Err(ClientError::auth_error(error_message)),
            StatusCode::FORBIDDEN => Err(ClientError::PermissionDenied(error_message)),
            StatusCode::NOT_FOUND => Err(ClientError::NotFound(error_message)),
            StatusCode::BAD_REQUEST => Err(ClientError::invalid_param(error_message)),
            _ => Err(ClientError::api_error(status.as_u16(), error_message)),
        }
    }

    /// Add an optional query parameter to request
    pub fn with_query<V: ToString>(request: RequestBuilder, name: &str, value: Option<V>) -> RequestBuilder {
        match value {
            Some(value) => request.query(&[(name, value.to_string())]),
            None => request,
        }
    }

    /// Add pagination parameters to request
    pub fn with_pagination(
        request: RequestBuilder,
        cursor_field: &str,
        cursor: Option<&str>,
        limit: Option<u32>,
    ) -> RequestBuilder {
        let req = Self::with_query(request, cursor_field, cursor);
        Self::with_query(req, "limit", limit)
    }
}

/// Fail with the names of required parameters that are empty
pub(crate) fn require_params(params: &[(&str, &str)]) -> ClientResult<()> {
    let missing: Vec<&str> = params
        .iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ClientError::invalid_param(format!(
            "Missing required parameters: {}",
            missing.join(", ")
        )))
    }
}

/// Percent-encode a value for use as a single path segment
pub(crate) fn encode_segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}
