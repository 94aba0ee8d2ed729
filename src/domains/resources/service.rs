//! Resource service implementation.
//!
//! The ResourceService manages resource discovery and access.
//! It maintains a registry of available resources and handles read requests.
//!
//! Resources are defined in `definitions/` and registered via `registry.rs`.
//! Adding a new resource does NOT require modifying this file.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents};
use std::collections::HashMap;
use tracing::info;

use super::error::ResourceError;
use super::registry::get_all_resources;

/// Service for managing and accessing resources.
pub struct ResourceService {
    /// Registry of available resources.
    /// Key: resource URI, Value: resource metadata and content provider
    resources: HashMap<String, ResourceEntry>,
}

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// The content provider for this resource.
    pub content: ResourceContent,
}

/// Different types of resource content.
#[derive(Debug, Clone)]
pub enum ResourceContent {
    /// Static text content.
    Text(String),

    /// Content generated fresh on every read.
    Generated(fn() -> String),
}

impl ResourceService {
    /// Create a new ResourceService populated from the registry.
    pub fn new() -> Self {
        info!("Initializing ResourceService");

        let mut service = Self {
            resources: HashMap::new(),
        };

        for entry in get_all_resources() {
            service.register_resource(entry);
        }

        service
    }

    /// Register a resource.
    pub fn register_resource(&mut self, entry: ResourceEntry) {
        info!("Registering resource: {}", entry.resource.raw.uri);
        self.resources
            .insert(entry.resource.raw.uri.to_string(), entry);
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resources
            .values()
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// Read a resource by URI.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let entry = self
            .resources
            .get(uri)
            .ok_or_else(|| ResourceError::not_found(uri))?;

        let content = match &entry.content {
            ResourceContent::Text(text) => ResourceContents::text(text, uri),
            ResourceContent::Generated(generator) => ResourceContents::text(generator(), uri),
        };

        Ok(ReadResourceResult {
            contents: vec![content],
        })
    }
}

impl Default for ResourceService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_resource_service_creation() {
        let service = ResourceService::new();

        let resources = service.list_resources().await;
        assert_eq!(resources.len(), 1);
    }

    #[tokio::test]
    async fn test_read_help_resource() {
        let service = ResourceService::new();

        let result = service.read_resource("calculator://help").await.unwrap();
        match &result.contents[0] {
            ResourceContents::TextResourceContents { text, .. } => {
                assert!(text.contains("Calculator MCP Server"));
            }
            other => panic!("Expected text contents, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_read_is_idempotent() {
        let service = ResourceService::new();

        let text_of = |result: &ReadResourceResult| match &result.contents[0] {
            ResourceContents::TextResourceContents { text, .. } => text.clone(),
            other => panic!("Expected text contents, got {:?}", other),
        };

        let first = service.read_resource("calculator://help").await.unwrap();
        let second = service.read_resource("calculator://help").await.unwrap();
        assert_eq!(text_of(&first), text_of(&second));
    }

    #[tokio::test]
    async fn test_read_nonexistent_resource() {
        let service = ResourceService::new();

        let result = service.read_resource("calculator://missing").await;
        assert!(matches!(result, Err(ResourceError::NotFound(_))));
    }
}
