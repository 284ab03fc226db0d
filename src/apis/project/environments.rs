use crate::{
    client::{encode_segment, require_params, DetailedResponse, ServiceClient},
    error::ClientResult,
    models::{
        DefinitionRequest, Environment, EnvironmentCollection, EnvironmentDefinition,
        EnvironmentDefinitionPatch, EnvironmentDeleteResponse,
    },
    pagination::{PageFuture, PageRequest, Pager},
};
use log::{debug, info};
use reqwest::{header::HeaderMap, Method};

pub type ProjectEnvironmentsPager<'a> = Pager<'a, ListProjectEnvironmentsParams, EnvironmentCollection>;

#[derive(Debug, Clone, Default)]
pub struct CreateProjectEnvironmentParams {
    pub project_id: String,
    pub definition: EnvironmentDefinition,
    pub headers: Option<HeaderMap>,
}

impl CreateProjectEnvironmentParams {
    pub fn new(project_id: impl Into<String>, definition: EnvironmentDefinition) -> Self {
        Self {
            project_id: project_id.into(),
            definition,
            headers: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListProjectEnvironmentsParams {
    pub project_id: String,
    pub start: Option<String>,
    pub limit: Option<u32>,
    pub headers: Option<HeaderMap>,
}

impl ListProjectEnvironmentsParams {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            ..Default::default()
        }
    }
}

impl PageRequest for ListProjectEnvironmentsParams {
    const CURSOR_FIELD: &'static str = "start";

    fn cursor(&self) -> Option<&str> {
        self.start.as_deref()
    }

    fn set_cursor(&mut self, cursor: Option<String>) {
        self.start = cursor;
    }
}

/// Identifies one environment of a project; used by get and delete
#[derive(Debug, Clone, Default)]
pub struct EnvironmentIdParams {
    pub project_id: String,
    pub id: String,
    pub headers: Option<HeaderMap>,
}

impl EnvironmentIdParams {
    pub fn new(project_id: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            id: id.into(),
            headers: None,
        }
    }

    fn path(&self) -> String {
        environment_path(&self.project_id, &self.id)
    }
}

pub type GetProjectEnvironmentParams = EnvironmentIdParams;
pub type DeleteProjectEnvironmentParams = EnvironmentIdParams;

#[derive(Debug, Clone, Default)]
pub struct UpdateProjectEnvironmentParams {
    pub project_id: String,
    pub id: String,
    pub definition: EnvironmentDefinitionPatch,
    pub headers: Option<HeaderMap>,
}

impl UpdateProjectEnvironmentParams {
    pub fn new(
        project_id: impl Into<String>,
        id: impl Into<String>,
        definition: EnvironmentDefinitionPatch,
    ) -> Self {
        Self {
            project_id: project_id.into(),
            id: id.into(),
            definition,
            headers: None,
        }
    }
}

fn environments_path(project_id: &str) -> String {
    format!("/v1/projects/{}/environments", encode_segment(project_id))
}

fn environment_path(project_id: &str, id: &str) -> String {
    format!("{}/{}", environments_path(project_id), encode_segment(id))
}

/// Environment API operations
#[derive(Clone, Copy)]
pub struct EnvironmentApi<'a> {
    client: &'a ServiceClient,
}

impl<'a> EnvironmentApi<'a> {
    pub fn new(client: &'a ServiceClient) -> Self {
        Self { client }
    }

    /// Create an environment in a project
    pub async fn create_project_environment(
        &self,
        params: &CreateProjectEnvironmentParams,
    ) -> ClientResult<DetailedResponse<Environment>> {
        require_params(&[
            ("project_id", params.project_id.as_str()),
            ("definition.name", params.definition.name.as_str()),
        ])?;
        info!("Creating environment in project: {}", params.project_id);

        let body = DefinitionRequest {
            definition: params.definition.clone(),
        };
        debug!("Request body: {:?}", body);
        let req = self
            .client
            .request(
                Method::POST,
                &environments_path(&params.project_id),
                "createProjectEnvironment",
                params.headers.as_ref(),
            )
            .await?
            .json(&body);

        self.client.execute(req).await
    }

    /// List one page of a project's environments
    pub async fn list_project_environments(
        &self,
        params: &ListProjectEnvironmentsParams,
    ) -> ClientResult<DetailedResponse<EnvironmentCollection>> {
        require_params(&[("project_id", params.project_id.as_str())])?;
        info!("Listing environments of project: {}", params.project_id);

        let mut req = self
            .client
            .request(
                Method::GET,
                &environments_path(&params.project_id),
                "listProjectEnvironments",
                params.headers.as_ref(),
            )
            .await?;
        req = ServiceClient::with_pagination(
            req,
            ListProjectEnvironmentsParams::CURSOR_FIELD,
            params.start.as_deref(),
            params.limit,
        );

        self.client.execute(req).await
    }

    pub async fn get_project_environment(
        &self,
        params: &GetProjectEnvironmentParams,
    ) -> ClientResult<DetailedResponse<Environment>> {
        require_params(&[("project_id", params.project_id.as_str()), ("id", params.id.as_str())])?;
        info!("Getting environment {} of project {}", params.id, params.project_id);

        let req = self
            .client
            .request(Method::GET, &params.path(), "getProjectEnvironment", params.headers.as_ref())
            .await?;

        self.client.execute(req).await
    }

    pub async fn update_project_environment(
        &self,
        params: &UpdateProjectEnvironmentParams,
    ) -> ClientResult<DetailedResponse<Environment>> {
        require_params(&[("project_id", params.project_id.as_str()), ("id", params.id.as_str())])?;
        info!("Updating environment {} of project {}", params.id, params.project_id);

        let body = DefinitionRequest {
            definition: params.definition.clone(),
        };
        debug!("Request body: {:?}", body);
        let req = self
            .client
            .request(
                Method::PATCH,
                &environment_path(&params.project_id, &params.id),
                "updateProjectEnvironment",
                params.headers.as_ref(),
            )
            .await?
            .json(&body);

        self.client.execute(req).await
    }

    pub async fn delete_project_environment(
        &self,
        params: &DeleteProjectEnvironmentParams,
    ) -> ClientResult<DetailedResponse<EnvironmentDeleteResponse>> {
        require_params(&[("project_id", params.project_id.as_str()), ("id", params.id.as_str())])?;
        info!("Deleting environment {} of project {}", params.id, params.project_id);

        let req = self
            .client
            .request(Method::DELETE, &params.path(), "deleteProjectEnvironment", params.headers.as_ref())
            .await?;

        self.client.execute(req).await
    }

    pub fn environments_pager(
        &self,
        params: &ListProjectEnvironmentsParams,
    ) -> ClientResult<ProjectEnvironmentsPager<'a>> {
        let api = *self;
        Pager::new(
            params,
            move |params: ListProjectEnvironmentsParams| -> PageFuture<'a, EnvironmentCollection> {
                Box::pin(async move { api.list_project_environments(&params).await })
            },
        )
    }
}
