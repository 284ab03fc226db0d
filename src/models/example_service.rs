use super::PaginationLink;
use crate::pagination::PageResponse;
use serde::{Deserialize, Serialize};

/// A resource managed by the Example Service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub resource_id: Option<String>,
    pub name: String,
    pub tag: Option<String>,
    pub read_only: Option<String>,
}

/// One page of resources
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resources {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub total_count: Option<u32>,
    pub first: Option<PaginationLink>,
    pub next: Option<PaginationLink>,
    #[serde(default)]
    pub resources: Option<Vec<Resource>>,
}

impl PageResponse for Resources {
    type Item = Resource;
    const ITEMS_FIELD: &'static str = "resources";

    fn take_items(&mut self) -> Option<Vec<Resource>> {
        self.resources.take()
    }

    fn next_link(&self) -> Option<&PaginationLink> {
        self.next.as_ref()
    }
}

/// Resource creation body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceCreateRequest {
    pub resource_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}
