pub mod example_service;
pub mod project;

// Re-export the service clients and their APIs
pub use example_service::{ExampleServiceV1, ResourceApi, ResourcesPager};
pub use project::{
    ConfigApi, ConfigsPager, EnvironmentApi, ProjectApi, ProjectEnvironmentsPager,
    ProjectResourcesPager, ProjectV1, ProjectsPager,
};
