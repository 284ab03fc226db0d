pub mod resources;

pub use resources::{
    CreateResourceParams, GetResourceEncodedParams, GetResourceParams, ListResourcesParams,
    ResourceApi, ResourcesPager,
};

use crate::{
    auth::Authentication,
    client::ServiceClient,
    config::{authenticator_from_env, ServiceConfig},
    error::ClientResult,
};
use std::sync::Arc;

/// Client for the Example Service
#[derive(Clone)]
pub struct ExampleServiceV1 {
    client: ServiceClient,
}

impl ExampleServiceV1 {
    pub const DEFAULT_SERVICE_URL: &'static str = "https://example-service.cloud.ibm.com/api/v1";
    pub const DEFAULT_SERVICE_NAME: &'static str = "example_service";

    /// Create a client for the default service URL
    pub fn new(auth: impl Authentication + 'static) -> ClientResult<Self> {
        let config = ServiceConfig::new(Self::DEFAULT_SERVICE_NAME, Self::DEFAULT_SERVICE_URL)?;
        Self::with_config(config, auth)
    }

    pub fn with_config(config: ServiceConfig, auth: impl Authentication + 'static) -> ClientResult<Self> {
        Ok(Self::from_client(ServiceClient::new(config, Arc::new(auth))?))
    }

    /// Create a client configured from `<SERVICE_NAME>_*` environment variables
    pub fn from_env(service_name: Option<&str>) -> ClientResult<Self> {
        let name = service_name.unwrap_or(Self::DEFAULT_SERVICE_NAME);
        let config = ServiceConfig::from_env(name, Self::DEFAULT_SERVICE_URL)?;
        let auth = authenticator_from_env(name)?;
        Ok(Self::from_client(ServiceClient::new(config, auth)?))
    }

    pub fn from_client(client: ServiceClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ServiceClient {
        &self.client
    }

    /// Get Resource API
    pub fn resources(&self) -> ResourceApi<'_> {
        ResourceApi::new(&self.client)
    }
}
