use cloud_project_client::apis::example_service::ListResourcesParams;
use cloud_project_client::apis::project::{
    ListConfigsParams, ListProjectEnvironmentsParams, ListProjectResourcesParams, ListProjectsParams,
};
use cloud_project_client::{
    BearerAuth, ClientError, ClientResult, ExampleServiceV1, NoAuth, ProjectV1, ServiceConfig,
};
use serde_json::json;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_project_client(server: &MockServer) -> ClientResult<ProjectV1> {
    ProjectV1::with_config(ServiceConfig::new("project", server.uri())?, BearerAuth::new("test-token"))
}

fn create_example_client(server: &MockServer) -> ClientResult<ExampleServiceV1> {
    let config = ServiceConfig::new("example_service", format!("{}/api/v1", server.uri()))?;
    ExampleServiceV1::with_config(config, NoAuth)
}

fn project_summary(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "crn": format!("crn:{}", id),
        "created_at": "2024-03-01T10:15:00Z",
        "location": "us-south",
        "state": "ready",
        "definition": {"name": id}
    })
}

/// Mount one page answered only when the cursor matches (or is absent)
async fn mount_page(
    server: &MockServer,
    route: &str,
    cursor_field: &str,
    cursor: Option<&str>,
    body: serde_json::Value,
) {
    let mock = Mock::given(method("GET")).and(path(route));
    let mock = match cursor {
        Some(cursor) => mock.and(query_param(cursor_field, cursor)),
        None => mock.and(query_param_is_missing(cursor_field)),
    };
    mock.respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

/// Test the two-page token scenario against the Example Service
#[tokio::test]
async fn test_resources_pager_follows_token() {
    let _ = env_logger::try_init();
    let server = MockServer::start().await;
    let resource = |name: &str| json!({"resource_id": name, "name": name});

    mount_page(
        &server,
        "/api/v1/resources",
        "token",
        None,
        json!({
            "limit": 2,
            "next": {"href": format!("{}/api/v1/resources?limit=2&token=abc", server.uri())},
            "resources": [resource("A"), resource("B")]
        }),
    )
    .await;
    mount_page(
        &server,
        "/api/v1/resources",
        "token",
        Some("abc"),
        json!({"limit": 2, "resources": [resource("C")]}),
    )
    .await;

    let client = create_example_client(&server).expect("Failed to create client");
    let params = ListResourcesParams {
        limit: Some(2),
        ..Default::default()
    };
    let mut pager = client.resources().resources_pager(&params).expect("Failed to create pager");

    let all = pager.get_all().await.expect("Failed to page through resources");

    let names: Vec<&str> = all.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B", "C"]);
    assert!(!pager.has_next());

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    assert!(requests.iter().all(|r| r.url.query().unwrap_or("").contains("limit=2")));
}

/// Test paging projects one page at a time
#[tokio::test]
async fn test_projects_pager_get_next() {
    let _ = env_logger::try_init();
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/v1/projects",
        "start",
        None,
        json!({
            "limit": 1,
            "next": {"href": format!("{}/v1/projects?limit=1&start=s-2", server.uri()), "start": "s-2"},
            "projects": [project_summary("p-1")]
        }),
    )
    .await;
    mount_page(
        &server,
        "/v1/projects",
        "start",
        Some("s-2"),
        json!({"limit": 1, "projects": [project_summary("p-2")]}),
    )
    .await;

    let client = create_project_client(&server).expect("Failed to create client");
    let params = ListProjectsParams {
        limit: Some(1),
        ..Default::default()
    };
    let mut pager = client.projects().projects_pager(&params).expect("Failed to create pager");

    assert!(pager.has_next());
    let first = pager.get_next().await.expect("Failed to get first page");
    assert_eq!(first[0].id, "p-1");
    assert!(pager.has_next());

    let second = pager.get_next().await.expect("Failed to get second page");
    assert_eq!(second[0].id, "p-2");
    assert!(!pager.has_next());

    let err = pager.get_next().await.unwrap_err();
    assert!(matches!(err, ClientError::Usage(_)));
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

/// Test that a pager cannot start from a caller-supplied cursor
#[tokio::test]
async fn test_pager_rejects_preset_start() {
    let server = MockServer::start().await;
    let client = create_project_client(&server).expect("Failed to create client");
    let params = ListProjectsParams {
        start: Some("s-5".to_string()),
        ..Default::default()
    };

    let result = client.projects().projects_pager(&params);

    assert!(matches!(result, Err(ClientError::Usage(_))));
    assert!(server.received_requests().await.unwrap().is_empty());
}

/// Test a transient failure is retried from the same position
#[tokio::test]
async fn test_environments_pager_retry_after_failure() {
    let _ = env_logger::try_init();
    let server = MockServer::start().await;
    let route = "/v1/projects/p-1/environments";
    let environment = |id: &str| {
        json!({
            "id": id,
            "project": {"id": "p-1"},
            "created_at": "2024-03-01T10:15:00Z",
            "definition": {"name": id}
        })
    };

    mount_page(
        &server,
        route,
        "start",
        None,
        json!({
            "next": {"href": format!("{}{}?start=e-2", server.uri(), route)},
            "environments": [environment("e-1")]
        }),
    )
    .await;
    Mock::given(method("GET"))
        .and(path(route))
        .and(query_param("start", "e-2"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .with_priority(1)
        .expect(1)
        .mount(&server)
        .await;
    mount_page(
        &server,
        route,
        "start",
        Some("e-2"),
        json!({"environments": [environment("e-2")]}),
    )
    .await;

    let client = create_project_client(&server).expect("Failed to create client");
    let mut pager = client
        .environments()
        .environments_pager(&ListProjectEnvironmentsParams::new("p-1"))
        .expect("Failed to create pager");

    assert_eq!(pager.get_next().await.expect("Failed to get first page")[0].id, "e-1");

    let err = pager.get_next().await.unwrap_err();
    assert_eq!(err.status(), Some(503));
    assert!(pager.has_next());

    let retried = pager.get_next().await.expect("Retry should succeed");
    assert_eq!(retried[0].id, "e-2");
    assert!(!pager.has_next());
}

/// Test a page without the items field is reported as malformed
#[tokio::test]
async fn test_configs_pager_missing_items() {
    let _ = env_logger::try_init();
    let server = MockServer::start().await;

    mount_page(&server, "/v1/projects/p-1/configs", "start", None, json!({"limit": 10})).await;

    let client = create_project_client(&server).expect("Failed to create client");
    let mut pager = client
        .configs()
        .configs_pager(&ListConfigsParams::new("p-1"))
        .expect("Failed to create pager");

    let err = pager.get_all().await.unwrap_err();
    assert!(matches!(err, ClientError::MalformedResponse(ref m) if m.contains("configs")));
}

/// Test a next link without a cursor is reported instead of ending the scan
#[tokio::test]
async fn test_project_resources_pager_malformed_next() {
    let _ = env_logger::try_init();
    let server = MockServer::start().await;
    let route = "/v1/projects/p-1/resources";

    mount_page(
        &server,
        route,
        "start",
        None,
        json!({
            "next": {"href": format!("{}{}?limit=10", server.uri(), route)},
            "resources": [{"resource_crn": "crn:v1:a"}]
        }),
    )
    .await;

    let client = create_project_client(&server).expect("Failed to create client");
    let mut pager = client
        .projects()
        .project_resources_pager(&ListProjectResourcesParams::new("p-1"))
        .expect("Failed to create pager");

    let err = pager.get_next().await.unwrap_err();
    assert!(matches!(err, ClientError::MalformedResponse(_)));
}

/// Test the pager ignores changes to the caller's params after construction
#[tokio::test]
async fn test_pager_copies_params() {
    let _ = env_logger::try_init();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/projects"))
        .and(query_param("limit", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "projects": [project_summary("p-1")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_project_client(&server).expect("Failed to create client");
    let mut params = ListProjectsParams {
        limit: Some(3),
        ..Default::default()
    };
    let mut pager = client.projects().projects_pager(&params).expect("Failed to create pager");
    params.limit = Some(50);
    params.start = Some("elsewhere".to_string());

    let all = pager.get_all().await.expect("Failed to page through projects");
    assert_eq!(all.len(), 1);
}
