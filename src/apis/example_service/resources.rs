use crate::{
    client::{encode_segment, require_params, DetailedResponse, ServiceClient},
    error::ClientResult,
    models::{Resource, ResourceCreateRequest, Resources},
    pagination::{PageFuture, PageRequest, Pager},
};
use log::{debug, info};
use reqwest::{header::HeaderMap, Method};

/// Pager over [`ResourceApi::list_resources`]
pub type ResourcesPager<'a> = Pager<'a, ListResourcesParams, Resources>;

/// Parameters of [`ResourceApi::list_resources`]
#[derive(Debug, Clone, Default)]
pub struct ListResourcesParams {
    /// Maximum number of resources per page
    pub limit: Option<u32>,
    /// Continuation token from a previous page
    pub token: Option<String>,
    pub headers: Option<HeaderMap>,
}

impl PageRequest for ListResourcesParams {
    const CURSOR_FIELD: &'static str = "token";

    fn cursor(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn set_cursor(&mut self, cursor: Option<String>) {
        self.token = cursor;
    }
}

/// Parameters of [`ResourceApi::create_resource`]
#[derive(Debug, Clone, Default)]
pub struct CreateResourceParams {
    pub resource_id: String,
    pub name: String,
    pub tag: Option<String>,
    pub headers: Option<HeaderMap>,
}

impl CreateResourceParams {
    pub fn new(resource_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            resource_id: resource_id.into(),
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Parameters of [`ResourceApi::get_resource`]
#[derive(Debug, Clone, Default)]
pub struct GetResourceParams {
    pub resource_id: String,
    pub headers: Option<HeaderMap>,
}

impl GetResourceParams {
    pub fn new(resource_id: impl Into<String>) -> Self {
        Self {
            resource_id: resource_id.into(),
            headers: None,
        }
    }
}

/// Parameters of [`ResourceApi::get_resource_encoded`]
#[derive(Debug, Clone, Default)]
pub struct GetResourceEncodedParams {
    /// Resource id, percent-encoded again when placed in the path
    pub url_encoded_resource_id: String,
    pub headers: Option<HeaderMap>,
}

impl GetResourceEncodedParams {
    pub fn new(url_encoded_resource_id: impl Into<String>) -> Self {
        Self {
            url_encoded_resource_id: url_encoded_resource_id.into(),
            headers: None,
        }
    }
}

/// Resource API operations
#[derive(Clone, Copy)]
pub struct ResourceApi<'a> {
    client: &'a ServiceClient,
}

impl<'a> ResourceApi<'a> {
    pub fn new(client: &'a ServiceClient) -> Self {
        Self { client }
    }

    /// List one page of resources
    ///
    /// # Arguments
    /// * `params` - Page size and continuation token
    pub async fn list_resources(&self, params: &ListResourcesParams) -> ClientResult<DetailedResponse<Resources>> {
        info!("Listing resources");
        let mut req = self
            .client
            .request(Method::GET, "/resources", "listResources", params.headers.as_ref())
            .await?;
        req = ServiceClient::with_pagination(req, ListResourcesParams::CURSOR_FIELD, params.token.as_deref(), params.limit);

        self.client.execute(req).await
    }

    /// Create a resource
    ///
    /// # Arguments
    /// * `params` - Id, name and optional tag of the new resource
    pub async fn create_resource(&self, params: &CreateResourceParams) -> ClientResult<DetailedResponse<Resource>> {
        require_params(&[("resource_id", params.resource_id.as_str()), ("name", params.name.as_str())])?;
        info!("Creating resource: {}", params.resource_id);

        let body = ResourceCreateRequest {
            resource_id: params.resource_id.clone(),
            name: params.name.clone(),
            tag: params.tag.clone(),
        };
        debug!("Request body: {:?}", body);
        let req = self
            .client
            .request(Method::POST, "/resources", "createResource", params.headers.as_ref())
            .await?
            .json(&body);

        self.client.execute(req).await
    }

    /// Get information about a resource
    pub async fn get_resource(&self, params: &GetResourceParams) -> ClientResult<DetailedResponse<Resource>> {
        require_params(&[("resource_id", params.resource_id.as_str())])?;
        info!("Getting resource: {}", params.resource_id);

        let path = format!("/resources/{}", encode_segment(&params.resource_id));
        let req = self
            .client
            .request(Method::GET, &path, "getResource", params.headers.as_ref())
            .await?;

        self.client.execute(req).await
    }

    /// Get a resource by an id that is already URL-encoded
    pub async fn get_resource_encoded(
        &self,
        params: &GetResourceEncodedParams,
    ) -> ClientResult<DetailedResponse<Resource>> {
        require_params(&[("url_encoded_resource_id", params.url_encoded_resource_id.as_str())])?;
        info!("Getting resource by encoded id: {}", params.url_encoded_resource_id);

        let path = format!(
            "/resources/encoded/{}",
            encode_segment(&params.url_encoded_resource_id)
        );
        let req = self
            .client
            .request(Method::GET, &path, "getResourceEncoded", params.headers.as_ref())
            .await?;

        self.client.execute(req).await
    }

    /// Pager walking every resource page by page
    pub fn resources_pager(&self, params: &ListResourcesParams) -> ClientResult<ResourcesPager<'a>> {
        let api = *self;
        Pager::new(params, move |params: ListResourcesParams| -> PageFuture<'a, Resources> {
            Box::pin(async move { api.list_resources(&params).await })
        })
    }
}
