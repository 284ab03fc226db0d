use super::{PaginationLink, PropertyMap};
use crate::pagination::PageResponse;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectState {
    Ready,
    Deleting,
    DeletingFailed,
    #[serde(other)]
    Unknown,
}

/// Lifecycle state of a configuration version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigState {
    Approved,
    Deleted,
    Deleting,
    DeletingFailed,
    Discarded,
    Draft,
    Deployed,
    DeployingFailed,
    Deploying,
    Superseded,
    Undeploying,
    UndeployingFailed,
    Validated,
    Validating,
    ValidatingFailed,
    Applied,
    ApplyFailed,
    #[serde(other)]
    Unknown,
}

/// Reference to the project owning an environment or configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectReference {
    pub id: String,
    pub href: Option<String>,
    pub crn: Option<String>,
    pub definition: Option<ProjectDefinitionReference>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDefinitionReference {
    pub name: String,
}

/// Project definition as returned by the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDefinitionProperties {
    pub name: String,
    pub description: Option<String>,
    pub destroy_on_delete: Option<bool>,
    pub monitoring_enabled: Option<bool>,
    pub auto_deploy: Option<bool>,
}

/// Project definition sent on creation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectPrototypeDefinition {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destroy_on_delete: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitoring_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_deploy: Option<bool>,
}

/// Partial project definition sent on update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectPatchDefinitionBlock {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destroy_on_delete: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitoring_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_deploy: Option<bool>,
}

/// An item needing attention, aggregated over the project's configs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CumulativeNeedsAttention {
    pub event: Option<String>,
    pub event_id: Option<String>,
    pub config_id: Option<String>,
    pub config_version: Option<u32>,
}

/// Project information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub crn: String,
    pub href: Option<String>,
    pub created_at: DateTime<Utc>,
    pub location: String,
    pub resource_group: Option<String>,
    pub resource_group_id: Option<String>,
    pub state: ProjectState,
    pub event_notifications_crn: Option<String>,
    #[serde(default)]
    pub cumulative_needs_attention_view: Vec<CumulativeNeedsAttention>,
    pub cumulative_needs_attention_view_error: Option<bool>,
    #[serde(default)]
    pub configs: Vec<ProjectConfigSummary>,
    #[serde(default)]
    pub environments: Vec<ProjectEnvironmentSummary>,
    pub definition: ProjectDefinitionProperties,
}

/// Project entry of a project listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub id: String,
    pub crn: String,
    pub href: Option<String>,
    pub created_at: DateTime<Utc>,
    pub location: String,
    pub resource_group_id: Option<String>,
    pub state: ProjectState,
    pub definition: ProjectDefinitionSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDefinitionSummary {
    pub name: String,
    pub description: Option<String>,
}

/// Projects collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectCollection {
    pub limit: Option<u32>,
    pub first: Option<PaginationLink>,
    pub next: Option<PaginationLink>,
    #[serde(default)]
    pub projects: Option<Vec<ProjectSummary>>,
}

/// A resource deployed by one of the project's configurations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectResourceSummary {
    pub resource_crn: String,
    pub resource_name: Option<String>,
    pub resource_type: Option<String>,
    pub catalog_type: Option<String>,
    pub resource_status: Option<String>,
    pub config_id: Option<String>,
}

/// Project resources collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectResourceCollection {
    pub limit: Option<u32>,
    pub first: Option<PaginationLink>,
    pub next: Option<PaginationLink>,
    #[serde(default)]
    pub resources: Option<Vec<ProjectResourceSummary>>,
}

/// Trusted profile or API key used to deploy into an environment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfigAuth {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trusted_profile_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

/// Security and Compliance Center profile attached to a config or environment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectComplianceProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_name: Option<String>,
}

/// Environment definition, used both for requests and responses
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentDefinition {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorizations: Option<ProjectConfigAuth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inputs: Option<PropertyMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compliance_profile: Option<ProjectComplianceProfile>,
}

/// Partial environment definition sent on update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentDefinitionPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorizations: Option<ProjectConfigAuth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inputs: Option<PropertyMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compliance_profile: Option<ProjectComplianceProfile>,
}

/// Environment information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Environment {
    pub id: String,
    pub project: ProjectReference,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
    pub target_account: Option<String>,
    pub href: Option<String>,
    pub definition: EnvironmentDefinition,
}

/// Environment entry embedded in a project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectEnvironmentSummary {
    pub id: String,
    pub href: Option<String>,
    pub definition: Option<ProjectDefinitionReference>,
}

/// Environments collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentCollection {
    pub limit: Option<u32>,
    pub first: Option<PaginationLink>,
    pub next: Option<PaginationLink>,
    #[serde(default)]
    pub environments: Option<Vec<Environment>>,
}

/// Response to an environment deletion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentDeleteResponse {
    pub id: String,
}

/// Schematics workspace backing a configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchematicsWorkspace {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_crn: Option<String>,
}

/// Configuration definition, used both for requests and responses
///
/// `locator_id` points to a deployable architecture in a catalog, while
/// `resource_crns` imports existing resources instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigDefinition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locator_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compliance_profile: Option<ProjectComplianceProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorizations: Option<ProjectConfigAuth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inputs: Option<PropertyMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<PropertyMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_crns: Option<Vec<String>>,
}

/// Configuration to create alongside a new project
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfigPrototype {
    pub definition: ConfigDefinition,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schematics: Option<SchematicsWorkspace>,
}

/// Environment to create alongside a new project
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentPrototype {
    pub definition: EnvironmentDefinition,
}

/// Result of the most recent validate, deploy or undeploy job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastActionWithSummary {
    pub href: Option<String>,
    pub result: Option<String>,
    pub job: Option<serde_json::Value>,
    pub pre_job: Option<serde_json::Value>,
    pub post_job: Option<serde_json::Value>,
}

/// Output value produced by a deployed configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputValue {
    pub name: String,
    pub description: Option<String>,
    pub value: Option<serde_json::Value>,
}

/// Short reference to a configuration version
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfigVersionSummary {
    pub version: u32,
    pub state: ConfigState,
    pub href: Option<String>,
    pub definition: Option<ProjectConfigVersionDefinitionSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfigVersionDefinitionSummary {
    pub environment_id: Option<String>,
    pub locator_id: Option<String>,
}

/// Versions of one configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfigVersionSummaryCollection {
    pub versions: Vec<ProjectConfigVersionSummary>,
}

/// Configuration information
///
/// Versions are returned in the same shape, see [`ProjectConfigVersion`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub id: String,
    pub version: u32,
    pub is_draft: bool,
    pub state: ConfigState,
    pub update_available: Option<bool>,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
    pub last_saved_at: Option<DateTime<Utc>>,
    pub last_approved: Option<serde_json::Value>,
    pub last_validated: Option<LastActionWithSummary>,
    pub last_deployed: Option<LastActionWithSummary>,
    pub last_undeployed: Option<LastActionWithSummary>,
    #[serde(default)]
    pub needs_attention_state: Vec<serde_json::Value>,
    #[serde(default)]
    pub outputs: Vec<OutputValue>,
    pub project: ProjectReference,
    pub schematics: Option<SchematicsWorkspace>,
    pub href: Option<String>,
    pub approved_version: Option<ProjectConfigVersionSummary>,
    pub deployed_version: Option<ProjectConfigVersionSummary>,
    pub definition: ConfigDefinition,
}

pub type ProjectConfigVersion = ProjectConfig;

/// Configuration entry of a configuration listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfigSummary {
    pub id: String,
    pub version: u32,
    pub state: ConfigState,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
    pub href: Option<String>,
    pub project: Option<ProjectReference>,
    pub approved_version: Option<ProjectConfigVersionSummary>,
    pub deployed_version: Option<ProjectConfigVersionSummary>,
    pub definition: Option<ConfigDefinitionSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigDefinitionSummary {
    pub name: Option<String>,
    pub description: Option<String>,
    pub locator_id: Option<String>,
}

/// Configurations collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfigCollection {
    pub limit: Option<u32>,
    pub first: Option<PaginationLink>,
    pub next: Option<PaginationLink>,
    #[serde(default)]
    pub configs: Option<Vec<ProjectConfigSummary>>,
}

/// Response to a configuration or version deletion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfigDelete {
    pub id: String,
}

/// Resource deployed by a configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfigResource {
    pub resource_crn: Option<String>,
    pub resource_name: Option<String>,
    pub resource_type: Option<String>,
    pub resource_tainted: Option<bool>,
    pub resource_group_name: Option<String>,
}

/// Resources deployed by a configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfigResourceCollection {
    pub resources: Vec<ProjectConfigResource>,
    pub resources_count: u32,
}

/// Body of project creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectCreateRequest {
    pub definition: ProjectPrototypeDefinition,
    pub location: String,
    pub resource_group: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configs: Option<Vec<ProjectConfigPrototype>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environments: Option<Vec<EnvironmentPrototype>>,
}

/// Body carrying only a definition block (creates and patches)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefinitionRequest<D> {
    pub definition: D,
}

/// Body of configuration creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigCreateRequest {
    pub definition: ConfigDefinition,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schematics: Option<SchematicsWorkspace>,
}

/// Body of approve and force-approve
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApprovalRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Body of configuration sync
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SyncConfigRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schematics: Option<SchematicsWorkspace>,
}

impl PageResponse for ProjectCollection {
    type Item = ProjectSummary;
    const ITEMS_FIELD: &'static str = "projects";

    fn take_items(&mut self) -> Option<Vec<ProjectSummary>> {
        self.projects.take()
    }

    fn next_link(&self) -> Option<&PaginationLink> {
        self.next.as_ref()
    }
}

impl PageResponse for ProjectResourceCollection {
    type Item = ProjectResourceSummary;
    const ITEMS_FIELD: &'static str = "resources";

    fn take_items(&mut self) -> Option<Vec<ProjectResourceSummary>> {
        self.resources.take()
    }

    fn next_link(&self) -> Option<&PaginationLink> {
        self.next.as_ref()
    }
}

impl PageResponse for EnvironmentCollection {
    type Item = Environment;
    const ITEMS_FIELD: &'static str = "environments";

    fn take_items(&mut self) -> Option<Vec<Environment>> {
        self.environments.take()
    }

    fn next_link(&self) -> Option<&PaginationLink> {
        self.next.as_ref()
    }
}

impl PageResponse for ProjectConfigCollection {
    type Item = ProjectConfigSummary;
    const ITEMS_FIELD: &'static str = "configs";

    fn take_items(&mut self) -> Option<Vec<ProjectConfigSummary>> {
        self.configs.take()
    }

    fn next_link(&self) -> Option<&PaginationLink> {
        self.next.as_ref()
    }
}
