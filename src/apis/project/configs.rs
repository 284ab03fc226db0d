use crate::{
    client::{encode_segment, require_params, DetailedResponse, ServiceClient},
    error::ClientResult,
    models::{
        ApprovalRequest, ConfigCreateRequest, ConfigDefinition, DefinitionRequest, ProjectConfig,
        ProjectConfigCollection, ProjectConfigDelete, ProjectConfigResourceCollection,
        ProjectConfigVersion, ProjectConfigVersionSummaryCollection, SchematicsWorkspace,
        SyncConfigRequest,
    },
    pagination::{PageFuture, PageRequest, Pager},
};
use log::{debug, info};
use reqwest::{header::HeaderMap, Method};
use serde::{Deserialize, Serialize};

pub type ConfigsPager<'a> = Pager<'a, ListConfigsParams, ProjectConfigCollection>;

#[derive(Debug, Clone, Default)]
pub struct CreateConfigParams {
    pub project_id: String,
    pub definition: ConfigDefinition,
    pub schematics: Option<SchematicsWorkspace>,
    pub headers: Option<HeaderMap>,
}

impl CreateConfigParams {
    pub fn new(project_id: impl Into<String>, definition: ConfigDefinition) -> Self {
        Self {
            project_id: project_id.into(),
            definition,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListConfigsParams {
    pub project_id: String,
    pub start: Option<String>,
    pub limit: Option<u32>,
    pub headers: Option<HeaderMap>,
}

impl ListConfigsParams {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            ..Default::default()
        }
    }
}

impl PageRequest for ListConfigsParams {
    const CURSOR_FIELD: &'static str = "start";

    fn cursor(&self) -> Option<&str> {
        self.start.as_deref()
    }

    fn set_cursor(&mut self, cursor: Option<String>) {
        self.start = cursor;
    }
}

/// Identifies one configuration of a project
///
/// Shared by every operation that needs nothing beyond the config id.
#[derive(Debug, Clone, Default)]
pub struct ConfigIdParams {
    pub project_id: String,
    pub id: String,
    pub headers: Option<HeaderMap>,
}

impl ConfigIdParams {
    pub fn new(project_id: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            id: id.into(),
            headers: None,
        }
    }
}

pub type GetConfigParams = ConfigIdParams;
pub type DeleteConfigParams = ConfigIdParams;
pub type ValidateConfigParams = ConfigIdParams;
pub type DeployConfigParams = ConfigIdParams;
pub type UndeployConfigParams = ConfigIdParams;
pub type ListConfigResourcesParams = ConfigIdParams;
pub type ListConfigVersionsParams = ConfigIdParams;

#[derive(Debug, Clone, Default)]
pub struct UpdateConfigParams {
    pub project_id: String,
    pub id: String,
    pub definition: ConfigDefinition,
    pub headers: Option<HeaderMap>,
}

impl UpdateConfigParams {
    pub fn new(project_id: impl Into<String>, id: impl Into<String>, definition: ConfigDefinition) -> Self {
        Self {
            project_id: project_id.into(),
            id: id.into(),
            definition,
            headers: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ApproveParams {
    pub project_id: String,
    pub id: String,
    pub comment: Option<String>,
    pub headers: Option<HeaderMap>,
}

impl ApproveParams {
    pub fn new(project_id: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            id: id.into(),
            ..Default::default()
        }
    }
}

/// Force approval skips the validation gate, so a justification is required
#[derive(Debug, Clone, Default)]
pub struct ForceApproveParams {
    pub project_id: String,
    pub id: String,
    pub comment: String,
    pub headers: Option<HeaderMap>,
}

impl ForceApproveParams {
    pub fn new(project_id: impl Into<String>, id: impl Into<String>, comment: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            id: id.into(),
            comment: comment.into(),
            headers: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SyncConfigParams {
    pub project_id: String,
    pub id: String,
    pub schematics: Option<SchematicsWorkspace>,
    pub headers: Option<HeaderMap>,
}

impl SyncConfigParams {
    pub fn new(project_id: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            id: id.into(),
            ..Default::default()
        }
    }
}

/// Identifies one version of a configuration
#[derive(Debug, Clone, Default)]
pub struct ConfigVersionParams {
    pub project_id: String,
    pub id: String,
    pub version: u32,
    pub headers: Option<HeaderMap>,
}

impl ConfigVersionParams {
    pub fn new(project_id: impl Into<String>, id: impl Into<String>, version: u32) -> Self {
        Self {
            project_id: project_id.into(),
            id: id.into(),
            version,
            headers: None,
        }
    }
}

pub type GetConfigVersionParams = ConfigVersionParams;
pub type DeleteConfigVersionParams = ConfigVersionParams;

fn configs_path(project_id: &str) -> String {
    format!("/v1/projects/{}/configs", encode_segment(project_id))
}

fn config_path(project_id: &str, id: &str) -> String {
    format!("{}/{}", configs_path(project_id), encode_segment(id))
}

/// Config API operations
#[derive(Clone, Copy)]
pub struct ConfigApi<'a> {
    client: &'a ServiceClient,
}

impl<'a> ConfigApi<'a> {
    pub fn new(client: &'a ServiceClient) -> Self {
        Self { client }
    }

    /// Issue a request against one configuration
    ///
    /// `suffix` is appended to the config path (`""`, `"/deploy"`, ...).
    #[allow(clippy::too_many_arguments)]
    async fn config_call<B, T>(
        &self,
        method: Method,
        project_id: &str,
        id: &str,
        suffix: &str,
        operation_id: &str,
        body: Option<&B>,
        headers: Option<&HeaderMap>,
    ) -> ClientResult<DetailedResponse<T>>
    where
        B: Serialize + std::fmt::Debug + Sync,
        T: for<'de> Deserialize<'de>,
    {
        require_params(&[("project_id", project_id), ("id", id)])?;
        let path = format!("{}{}", config_path(project_id, id), suffix);
        let mut req = self.client.request(method, &path, operation_id, headers).await?;

        if let Some(body) = body {
            debug!("Request body: {:?}", body);
            req = req.json(body);
        }

        self.client.execute(req).await
    }

    /// Add a configuration to a project
    pub async fn create_config(&self, params: &CreateConfigParams) -> ClientResult<DetailedResponse<ProjectConfig>> {
        require_params(&[("project_id", params.project_id.as_str())])?;
        info!("Creating config in project: {}", params.project_id);

        let body = ConfigCreateRequest {
            definition: params.definition.clone(),
            schematics: params.schematics.clone(),
        };
        debug!("Request body: {:?}", body);
        let req = self
            .client
            .request(
                Method::POST,
                &configs_path(&params.project_id),
                "createConfig",
                params.headers.as_ref(),
            )
            .await?
            .json(&body);

        self.client.execute(req).await
    }

    /// List one page of a project's configurations
    pub async fn list_configs(
        &self,
        params: &ListConfigsParams,
    ) -> ClientResult<DetailedResponse<ProjectConfigCollection>> {
        require_params(&[("project_id", params.project_id.as_str())])?;
        info!("Listing configs of project: {}", params.project_id);

        let mut req = self
            .client
            .request(
                Method::GET,
                &configs_path(&params.project_id),
                "listConfigs",
                params.headers.as_ref(),
            )
            .await?;
        req = ServiceClient::with_pagination(
            req,
            ListConfigsParams::CURSOR_FIELD,
            params.start.as_deref(),
            params.limit,
        );

        self.client.execute(req).await
    }

    pub async fn get_config(&self, params: &GetConfigParams) -> ClientResult<DetailedResponse<ProjectConfig>> {
        info!("Getting config {} of project {}", params.id, params.project_id);
        self.config_call::<(), _>(
            Method::GET,
            &params.project_id,
            &params.id,
            "",
            "getConfig",
            None,
            params.headers.as_ref(),
        )
        .await
    }

    /// Update the draft definition of a configuration
    pub async fn update_config(&self, params: &UpdateConfigParams) -> ClientResult<DetailedResponse<ProjectConfig>> {
        info!("Updating config {} of project {}", params.id, params.project_id);
        let body = DefinitionRequest {
            definition: params.definition.clone(),
        };
        self.config_call(
            Method::PATCH,
            &params.project_id,
            &params.id,
            "",
            "updateConfig",
            Some(&body),
            params.headers.as_ref(),
        )
        .await
    }

    pub async fn delete_config(&self, params: &DeleteConfigParams) -> ClientResult<DetailedResponse<ProjectConfigDelete>> {
        info!("Deleting config {} of project {}", params.id, params.project_id);
        self.config_call::<(), _>(
            Method::DELETE,
            &params.project_id,
            &params.id,
            "",
            "deleteConfig",
            None,
            params.headers.as_ref(),
        )
        .await
    }

    /// Approve a configuration without a passing validation
    pub async fn force_approve(
        &self,
        params: &ForceApproveParams,
    ) -> ClientResult<DetailedResponse<ProjectConfigVersion>> {
        require_params(&[("comment", params.comment.as_str())])?;
        info!("Force-approving config {} of project {}", params.id, params.project_id);
        let body = ApprovalRequest {
            comment: Some(params.comment.clone()),
        };
        self.config_call(
            Method::POST,
            &params.project_id,
            &params.id,
            "/force_approve",
            "forceApprove",
            Some(&body),
            params.headers.as_ref(),
        )
        .await
    }

    /// Approve a validated configuration so it can be deployed
    pub async fn approve(&self, params: &ApproveParams) -> ClientResult<DetailedResponse<ProjectConfigVersion>> {
        info!("Approving config {} of project {}", params.id, params.project_id);
        let body = ApprovalRequest {
            comment: params.comment.clone(),
        };
        self.config_call(
            Method::POST,
            &params.project_id,
            &params.id,
            "/approve",
            "approve",
            Some(&body),
            params.headers.as_ref(),
        )
        .await
    }

    /// Start a validation run for the draft configuration
    pub async fn validate_config(
        &self,
        params: &ValidateConfigParams,
    ) -> ClientResult<DetailedResponse<ProjectConfigVersion>> {
        info!("Validating config {} of project {}", params.id, params.project_id);
        self.config_call::<(), _>(
            Method::POST,
            &params.project_id,
            &params.id,
            "/validate",
            "validateConfig",
            None,
            params.headers.as_ref(),
        )
        .await
    }

    pub async fn deploy_config(
        &self,
        params: &DeployConfigParams,
    ) -> ClientResult<DetailedResponse<ProjectConfigVersion>> {
        info!("Deploying config {} of project {}", params.id, params.project_id);
        self.config_call::<(), _>(
            Method::POST,
            &params.project_id,
            &params.id,
            "/deploy",
            "deployConfig",
            None,
            params.headers.as_ref(),
        )
        .await
    }

    pub async fn undeploy_config(
        &self,
        params: &UndeployConfigParams,
    ) -> ClientResult<DetailedResponse<ProjectConfigVersion>> {
        info!("Undeploying config {} of project {}", params.id, params.project_id);
        self.config_call::<(), _>(
            Method::POST,
            &params.project_id,
            &params.id,
            "/undeploy",
            "undeployConfig",
            None,
            params.headers.as_ref(),
        )
        .await
    }

    /// Re-sync a configuration with its Schematics workspace
    ///
    /// The service answers with an empty body.
    pub async fn sync_config(&self, params: &SyncConfigParams) -> ClientResult<DetailedResponse<()>> {
        require_params(&[("project_id", params.project_id.as_str()), ("id", params.id.as_str())])?;
        info!("Syncing config {} of project {}", params.id, params.project_id);

        let body = SyncConfigRequest {
            schematics: params.schematics.clone(),
        };
        debug!("Request body: {:?}", body);
        let path = format!("{}/sync", config_path(&params.project_id, &params.id));
        let req = self
            .client
            .request(Method::POST, &path, "syncConfig", params.headers.as_ref())
            .await?
            .json(&body);

        self.client.execute_empty(req).await
    }

    pub async fn list_config_resources(
        &self,
        params: &ListConfigResourcesParams,
    ) -> ClientResult<DetailedResponse<ProjectConfigResourceCollection>> {
        info!("Listing resources of config {} in project {}", params.id, params.project_id);
        self.config_call::<(), _>(
            Method::GET,
            &params.project_id,
            &params.id,
            "/resources",
            "listConfigResources",
            None,
            params.headers.as_ref(),
        )
        .await
    }

    pub async fn list_config_versions(
        &self,
        params: &ListConfigVersionsParams,
    ) -> ClientResult<DetailedResponse<ProjectConfigVersionSummaryCollection>> {
        info!("Listing versions of config {} in project {}", params.id, params.project_id);
        self.config_call::<(), _>(
            Method::GET,
            &params.project_id,
            &params.id,
            "/versions",
            "listConfigVersions",
            None,
            params.headers.as_ref(),
        )
        .await
    }

    pub async fn get_config_version(
        &self,
        params: &GetConfigVersionParams,
    ) -> ClientResult<DetailedResponse<ProjectConfigVersion>> {
        info!("Getting version {} of config {}", params.version, params.id);
        self.config_call::<(), _>(
            Method::GET,
            &params.project_id,
            &params.id,
            &format!("/versions/{}", params.version),
            "getConfigVersion",
            None,
            params.headers.as_ref(),
        )
        .await
    }

    pub async fn delete_config_version(
        &self,
        params: &DeleteConfigVersionParams,
    ) -> ClientResult<DetailedResponse<ProjectConfigDelete>> {
        info!("Deleting version {} of config {}", params.version, params.id);
        self.config_call::<(), _>(
            Method::DELETE,
            &params.project_id,
            &params.id,
            &format!("/versions/{}", params.version),
            "deleteConfigVersion",
            None,
            params.headers.as_ref(),
        )
        .await
    }

    pub fn configs_pager(&self, params: &ListConfigsParams) -> ClientResult<ConfigsPager<'a>> {
        let api = *self;
        Pager::new(params, move |params: ListConfigsParams| -> PageFuture<'a, ProjectConfigCollection> {
            Box::pin(async move { api.list_configs(&params).await })
        })
    }
}
