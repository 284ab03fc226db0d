mod example_service;
mod project;

pub use example_service::*;
pub use project::*;

use crate::error::{ClientError, ClientResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use url::Url;

/// Free-form key/value block (`inputs`, `settings`, output values)
pub type PropertyMap = BTreeMap<String, serde_json::Value>;

/// Link to a page of a paginated collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginationLink {
    pub href: String,
    /// Cursor echoed by some endpoints alongside the href
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
}

impl PaginationLink {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            start: None,
        }
    }

    /// Read a query parameter out of the link's href
    ///
    /// A link that does not carry the parameter is malformed: a `next`
    /// link always has to say where the next page starts.
    pub fn query_param(&self, name: &str) -> ClientResult<String> {
        let url = match Url::parse(&self.href) {
            Ok(url) => url,
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                Url::parse("http://localhost/")?.join(&self.href)?
            }
            Err(e) => {
                return Err(ClientError::malformed_response(format!(
                    "pagination link '{}' is not a valid URL: {}",
                    self.href, e
                )))
            }
        };

        url.query_pairs()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
            .ok_or_else(|| {
                ClientError::malformed_response(format!(
                    "pagination link '{}' has no '{}' query parameter",
                    self.href, name
                ))
            })
    }
}

/// Single entry of an IBM Cloud error envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: Option<String>,
    pub message: Option<String>,
    pub more_info: Option<String>,
}

/// Error response from API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub errors: Option<Vec<ErrorDetail>>,
    pub error: Option<String>,
    pub message: Option<String>,
    pub trace: Option<String>,
    pub status_code: Option<u16>,
}

impl ErrorResponse {
    /// Best human-readable message the envelope offers
    pub fn describe(&self) -> Option<String> {
        let message = self
            .errors
            .as_ref()
            .and_then(|errors| errors.iter().find_map(|e| e.message.clone()))
            .or_else(|| self.message.clone())
            .or_else(|| self.error.clone())?;

        Some(match &self.trace {
            Some(trace) => format!("{} (trace: {})", message, trace),
            None => message,
        })
    }
}
