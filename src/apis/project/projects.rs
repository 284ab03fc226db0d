use crate::{
    client::{encode_segment, require_params, DetailedResponse, ServiceClient},
    error::ClientResult,
    models::{
        DefinitionRequest, EnvironmentPrototype, Project, ProjectCollection, ProjectConfigPrototype,
        ProjectCreateRequest, ProjectPatchDefinitionBlock, ProjectPrototypeDefinition,
        ProjectResourceCollection,
    },
    pagination::{PageFuture, PageRequest, Pager},
};
use log::{debug, info};
use reqwest::{header::HeaderMap, Method};

pub type ProjectsPager<'a> = Pager<'a, ListProjectsParams, ProjectCollection>;
pub type ProjectResourcesPager<'a> = Pager<'a, ListProjectResourcesParams, ProjectResourceCollection>;

#[derive(Debug, Clone)]
pub struct CreateProjectParams {
    pub definition: ProjectPrototypeDefinition,
    /// Region the project lives in, e.g. `us-south`
    pub location: String,
    /// Resource group name
    pub resource_group: String,
    pub configs: Option<Vec<ProjectConfigPrototype>>,
    pub environments: Option<Vec<EnvironmentPrototype>>,
    pub headers: Option<HeaderMap>,
}

impl CreateProjectParams {
    pub fn new(
        definition: ProjectPrototypeDefinition,
        location: impl Into<String>,
        resource_group: impl Into<String>,
    ) -> Self {
        Self {
            definition,
            location: location.into(),
            resource_group: resource_group.into(),
            configs: None,
            environments: None,
            headers: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListProjectsParams {
    pub start: Option<String>,
    pub limit: Option<u32>,
    pub headers: Option<HeaderMap>,
}

impl PageRequest for ListProjectsParams {
    const CURSOR_FIELD: &'static str = "start";

    fn cursor(&self) -> Option<&str> {
        self.start.as_deref()
    }

    fn set_cursor(&mut self, cursor: Option<String>) {
        self.start = cursor;
    }
}

/// Identifies one project; used by get and delete
#[derive(Debug, Clone, Default)]
pub struct ProjectIdParams {
    pub id: String,
    pub headers: Option<HeaderMap>,
}

impl ProjectIdParams {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            headers: None,
        }
    }
}

pub type GetProjectParams = ProjectIdParams;
pub type DeleteProjectParams = ProjectIdParams;

#[derive(Debug, Clone, Default)]
pub struct UpdateProjectParams {
    pub id: String,
    pub definition: ProjectPatchDefinitionBlock,
    pub headers: Option<HeaderMap>,
}

impl UpdateProjectParams {
    pub fn new(id: impl Into<String>, definition: ProjectPatchDefinitionBlock) -> Self {
        Self {
            id: id.into(),
            definition,
            headers: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListProjectResourcesParams {
    pub id: String,
    pub start: Option<String>,
    pub limit: Option<u32>,
    pub headers: Option<HeaderMap>,
}

impl ListProjectResourcesParams {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

impl PageRequest for ListProjectResourcesParams {
    const CURSOR_FIELD: &'static str = "start";

    fn cursor(&self) -> Option<&str> {
        self.start.as_deref()
    }

    fn set_cursor(&mut self, cursor: Option<String>) {
        self.start = cursor;
    }
}

/// Project API operations
#[derive(Clone, Copy)]
pub struct ProjectApi<'a> {
    client: &'a ServiceClient,
}

impl<'a> ProjectApi<'a> {
    pub fn new(client: &'a ServiceClient) -> Self {
        Self { client }
    }

    /// Create a new project, optionally with configurations and environments
    pub async fn create_project(&self, params: &CreateProjectParams) -> ClientResult<DetailedResponse<Project>> {
        require_params(&[
            ("definition.name", params.definition.name.as_str()),
            ("location", params.location.as_str()),
            ("resource_group", params.resource_group.as_str()),
        ])?;
        info!("Creating project: {}", params.definition.name);

        let body = ProjectCreateRequest {
            definition: params.definition.clone(),
            location: params.location.clone(),
            resource_group: params.resource_group.clone(),
            configs: params.configs.clone(),
            environments: params.environments.clone(),
        };
        debug!("Request body: {:?}", body);
        let req = self
            .client
            .request(Method::POST, "/v1/projects", "createProject", params.headers.as_ref())
            .await?
            .json(&body);

        self.client.execute(req).await
    }

    /// List one page of projects
    pub async fn list_projects(&self, params: &ListProjectsParams) -> ClientResult<DetailedResponse<ProjectCollection>> {
        info!("Listing projects");
        let mut req = self
            .client
            .request(Method::GET, "/v1/projects", "listProjects", params.headers.as_ref())
            .await?;
        req = ServiceClient::with_pagination(
            req,
            ListProjectsParams::CURSOR_FIELD,
            params.start.as_deref(),
            params.limit,
        );

        self.client.execute(req).await
    }

    /// Get information about a project
    pub async fn get_project(&self, params: &GetProjectParams) -> ClientResult<DetailedResponse<Project>> {
        require_params(&[("id", params.id.as_str())])?;
        info!("Getting project: {}", params.id);

        let path = format!("/v1/projects/{}", encode_segment(&params.id));
        let req = self
            .client
            .request(Method::GET, &path, "getProject", params.headers.as_ref())
            .await?;

        self.client.execute(req).await
    }

    /// Update the definition of a project
    pub async fn update_project(&self, params: &UpdateProjectParams) -> ClientResult<DetailedResponse<Project>> {
        require_params(&[("id", params.id.as_str())])?;
        info!("Updating project: {}", params.id);

        let body = DefinitionRequest {
            definition: params.definition.clone(),
        };
        debug!("Request body: {:?}", body);
        let path = format!("/v1/projects/{}", encode_segment(&params.id));
        let req = self
            .client
            .request(Method::PATCH, &path, "updateProject", params.headers.as_ref())
            .await?
            .json(&body);

        self.client.execute(req).await
    }

    /// Delete a project
    pub async fn delete_project(&self, params: &DeleteProjectParams) -> ClientResult<DetailedResponse<()>> {
        require_params(&[("id", params.id.as_str())])?;
        info!("Deleting project: {}", params.id);

        let path = format!("/v1/projects/{}", encode_segment(&params.id));
        let req = self
            .client
            .request(Method::DELETE, &path, "deleteProject", params.headers.as_ref())
            .await?;

        self.client.execute_empty(req).await
    }

    /// List one page of the resources deployed by a project
    pub async fn list_project_resources(
        &self,
        params: &ListProjectResourcesParams,
    ) -> ClientResult<DetailedResponse<ProjectResourceCollection>> {
        require_params(&[("id", params.id.as_str())])?;
        info!("Listing resources of project: {}", params.id);

        let path = format!("/v1/projects/{}/resources", encode_segment(&params.id));
        let mut req = self
            .client
            .request(Method::GET, &path, "listProjectResources", params.headers.as_ref())
            .await?;
        req = ServiceClient::with_pagination(
            req,
            ListProjectResourcesParams::CURSOR_FIELD,
            params.start.as_deref(),
            params.limit,
        );

        self.client.execute(req).await
    }

    pub fn projects_pager(&self, params: &ListProjectsParams) -> ClientResult<ProjectsPager<'a>> {
        let api = *self;
        Pager::new(params, move |params: ListProjectsParams| -> PageFuture<'a, ProjectCollection> {
            Box::pin(async move { api.list_projects(&params).await })
        })
    }

    pub fn project_resources_pager(
        &self,
        params: &ListProjectResourcesParams,
    ) -> ClientResult<ProjectResourcesPager<'a>> {
        let api = *self;
        Pager::new(
            params,
            move |params: ListProjectResourcesParams| -> PageFuture<'a, ProjectResourceCollection> {
                Box::pin(async move { api.list_project_resources(&params).await })
            },
        )
    }
}
