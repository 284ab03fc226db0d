use cloud_project_client::apis::project::{
    ApproveParams, ConfigIdParams, ConfigVersionParams, CreateConfigParams, ForceApproveParams,
    ListConfigsParams, SyncConfigParams, UpdateConfigParams,
};
use cloud_project_client::models::{ConfigDefinition, ConfigState, SchematicsWorkspace};
use cloud_project_client::{BearerAuth, ClientError, ClientResult, ProjectV1, ServiceConfig};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CONFIG_PATH: &str = "/v1/projects/p-1/configs/cfg-1";

/// Helper to create a test client against the mock server
fn create_test_client(server: &MockServer) -> ClientResult<ProjectV1> {
    let config = ServiceConfig::new("project", server.uri())?;
    ProjectV1::with_config(config, BearerAuth::new("test-token"))
}

fn config_json(version: u32, state: &str) -> serde_json::Value {
    json!({
        "id": "cfg-1",
        "version": version,
        "is_draft": state == "draft",
        "state": state,
        "update_available": false,
        "created_at": "2024-03-01T10:15:00Z",
        "modified_at": "2024-03-01T11:00:00Z",
        "needs_attention_state": [],
        "outputs": [{"name": "bucket_name", "value": "logs-bucket"}],
        "project": {"id": "p-1", "crn": "crn:p-1"},
        "href": "/v1/projects/p-1/configs/cfg-1",
        "definition": {
            "name": "storage",
            "locator_id": "1082e7d2-5e2f-0a11.145",
            "environment_id": "env-1",
            "inputs": {"bucket_count": 2},
            "settings": {"IBMCLOUD_TOOLCHAIN_ENDPOINT": "https://toolchain.example.com"}
        }
    })
}

async fn mount_action(server: &MockServer, http_method: &str, suffix: &str, body: serde_json::Value) {
    Mock::given(method(http_method))
        .and(path(format!("{}{}", CONFIG_PATH, suffix)))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

/// Test creating a configuration from a catalog locator
#[tokio::test]
async fn test_create_config() {
    let _ = env_logger::try_init();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/projects/p-1/configs"))
        .and(body_json(json!({
            "definition": {
                "name": "storage",
                "locator_id": "1082e7d2-5e2f-0a11.145",
                "inputs": {"bucket_count": 2}
            },
            "schematics": {"workspace_crn": "crn:ws-1"}
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(config_json(1, "draft")))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server).expect("Failed to create client");
    let mut inputs = cloud_project_client::PropertyMap::new();
    inputs.insert("bucket_count".to_string(), json!(2));
    let definition = ConfigDefinition {
        name: Some("storage".to_string()),
        locator_id: Some("1082e7d2-5e2f-0a11.145".to_string()),
        inputs: Some(inputs),
        ..Default::default()
    };
    let mut params = CreateConfigParams::new("p-1", definition);
    params.schematics = Some(SchematicsWorkspace {
        workspace_crn: Some("crn:ws-1".to_string()),
    });

    let config = client
        .configs()
        .create_config(&params)
        .await
        .expect("Failed to create config")
        .result;

    assert_eq!(config.state, ConfigState::Draft);
    assert!(config.is_draft);
    assert_eq!(config.outputs[0].name, "bucket_name");
    assert_eq!(config.definition.environment_id.as_deref(), Some("env-1"));
}

/// Test listing configurations
#[tokio::test]
async fn test_list_configs() {
    let _ = env_logger::try_init();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/projects/p-1/configs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "configs": [{
                "id": "cfg-1",
                "version": 3,
                "state": "deployed",
                "created_at": "2024-03-01T10:15:00Z",
                "definition": {"name": "storage", "locator_id": "loc-1"},
                "deployed_version": {"version": 2, "state": "deployed"}
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server).expect("Failed to create client");
    let page = client
        .configs()
        .list_configs(&ListConfigsParams::new("p-1"))
        .await
        .expect("Failed to list configs")
        .result;

    let configs = page.configs.expect("Page should carry configs");
    assert_eq!(configs[0].state, ConfigState::Deployed);
    assert_eq!(configs[0].deployed_version.as_ref().map(|v| v.version), Some(2));
}

/// Test get, update and delete of a configuration
#[tokio::test]
async fn test_config_crud() {
    let _ = env_logger::try_init();
    let server = MockServer::start().await;

    mount_action(&server, "GET", "", config_json(1, "draft")).await;
    Mock::given(method("PATCH"))
        .and(path(CONFIG_PATH))
        .and(body_json(json!({"definition": {"description": "updated"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(config_json(1, "draft")))
        .expect(1)
        .mount(&server)
        .await;
    mount_action(&server, "DELETE", "", json!({"id": "cfg-1"})).await;

    let client = create_test_client(&server).expect("Failed to create client");
    let configs = client.configs();

    let config = configs
        .get_config(&ConfigIdParams::new("p-1", "cfg-1"))
        .await
        .expect("Failed to get config")
        .result;
    assert_eq!(config.version, 1);

    let definition = ConfigDefinition {
        description: Some("updated".to_string()),
        ..Default::default()
    };
    configs
        .update_config(&UpdateConfigParams::new("p-1", "cfg-1", definition))
        .await
        .expect("Failed to update config");

    let deleted = configs
        .delete_config(&ConfigIdParams::new("p-1", "cfg-1"))
        .await
        .expect("Failed to delete config")
        .result;
    assert_eq!(deleted.id, "cfg-1");
}

/// Test the validate, approve and deploy workflow
#[tokio::test]
async fn test_config_workflow_actions() {
    let _ = env_logger::try_init();
    let server = MockServer::start().await;

    mount_action(&server, "POST", "/validate", config_json(1, "validating")).await;
    Mock::given(method("POST"))
        .and(path(format!("{}/approve", CONFIG_PATH)))
        .and(body_json(json!({"comment": "looks good"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(config_json(1, "approved")))
        .expect(1)
        .mount(&server)
        .await;
    mount_action(&server, "POST", "/deploy", config_json(1, "deploying")).await;
    mount_action(&server, "POST", "/undeploy", config_json(1, "undeploying")).await;

    let client = create_test_client(&server).expect("Failed to create client");
    let configs = client.configs();
    let id = ConfigIdParams::new("p-1", "cfg-1");

    let validated = configs.validate_config(&id).await.expect("Failed to validate").result;
    assert_eq!(validated.state, ConfigState::Validating);

    let mut approve = ApproveParams::new("p-1", "cfg-1");
    approve.comment = Some("looks good".to_string());
    let approved = configs.approve(&approve).await.expect("Failed to approve").result;
    assert_eq!(approved.state, ConfigState::Approved);

    let deploying = configs.deploy_config(&id).await.expect("Failed to deploy").result;
    assert_eq!(deploying.state, ConfigState::Deploying);

    let undeploying = configs.undeploy_config(&id).await.expect("Failed to undeploy").result;
    assert_eq!(undeploying.state, ConfigState::Undeploying);
}

/// Test force approval requires and sends a comment
#[tokio::test]
async fn test_force_approve() {
    let _ = env_logger::try_init();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("{}/force_approve", CONFIG_PATH)))
        .and(body_json(json!({"comment": "hotfix"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(config_json(2, "approved")))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server).expect("Failed to create client");
    let configs = client.configs();

    let err = configs
        .force_approve(&ForceApproveParams::new("p-1", "cfg-1", ""))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::InvalidParameter(ref m) if m.contains("comment")));

    let approved = configs
        .force_approve(&ForceApproveParams::new("p-1", "cfg-1", "hotfix"))
        .await
        .expect("Failed to force approve")
        .result;
    assert_eq!(approved.version, 2);
}

/// Test syncing a configuration returns an empty success
#[tokio::test]
async fn test_sync_config() {
    let _ = env_logger::try_init();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("{}/sync", CONFIG_PATH)))
        .and(body_json(json!({"schematics": {"workspace_crn": "crn:ws-2"}})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server).expect("Failed to create client");
    let mut params = SyncConfigParams::new("p-1", "cfg-1");
    params.schematics = Some(SchematicsWorkspace {
        workspace_crn: Some("crn:ws-2".to_string()),
    });

    let response = client.configs().sync_config(&params).await.expect("Failed to sync config");
    assert_eq!(response.status, 204);
}

/// Test resources and versions of a configuration
#[tokio::test]
async fn test_config_resources_and_versions() {
    let _ = env_logger::try_init();
    let server = MockServer::start().await;

    mount_action(
        &server,
        "GET",
        "/resources",
        json!({
            "resources": [{"resource_crn": "crn:v1:cos", "resource_name": "bucket", "resource_tainted": false}],
            "resources_count": 1
        }),
    )
    .await;
    mount_action(
        &server,
        "GET",
        "/versions",
        json!({
            "versions": [
                {"version": 1, "state": "superseded", "definition": {"environment_id": "env-1"}},
                {"version": 2, "state": "approved"}
            ]
        }),
    )
    .await;
    mount_action(&server, "GET", "/versions/2", config_json(2, "approved")).await;
    mount_action(&server, "DELETE", "/versions/1", json!({"id": "cfg-1"})).await;

    let client = create_test_client(&server).expect("Failed to create client");
    let configs = client.configs();
    let id = ConfigIdParams::new("p-1", "cfg-1");

    let resources = configs.list_config_resources(&id).await.expect("Failed to list resources").result;
    assert_eq!(resources.resources_count, 1);
    assert_eq!(resources.resources[0].resource_name.as_deref(), Some("bucket"));

    let versions = configs.list_config_versions(&id).await.expect("Failed to list versions").result;
    assert_eq!(versions.versions.len(), 2);
    assert_eq!(versions.versions[0].state, ConfigState::Superseded);

    let version = configs
        .get_config_version(&ConfigVersionParams::new("p-1", "cfg-1", 2))
        .await
        .expect("Failed to get version")
        .result;
    assert_eq!(version.version, 2);

    let deleted = configs
        .delete_config_version(&ConfigVersionParams::new("p-1", "cfg-1", 1))
        .await
        .expect("Failed to delete version")
        .result;
    assert_eq!(deleted.id, "cfg-1");
}
