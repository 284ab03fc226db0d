/*
 * Typed Rust clients for the IBM Cloud Example Service and Project APIs
 */

// Internal modules
mod client;
pub mod models; // Make models public
pub mod apis;
mod error;
mod auth;
pub mod config;
pub mod pagination;


// Re-export public types and interfaces
pub use client::{DetailedResponse, ServiceClient, SDK_ANALYTICS_HEADER};
pub use models::*;
pub use apis::*;
pub use error::{ClientError, ClientResult};
pub use auth::{Authentication, BasicAuth, BearerAuth, NoAuth};
pub use config::ServiceConfig;
pub use pagination::{PageRequest, PageResponse, Pager};

// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ExampleServiceV1, ProjectV1,
        BasicAuth, BearerAuth, NoAuth,
        ClientError, ClientResult, DetailedResponse, ServiceConfig,
        Pager,
        // Common model types
        Resource, Project, Environment, ProjectConfig,
        ProjectPrototypeDefinition, EnvironmentDefinition, ConfigDefinition,
    };
}
