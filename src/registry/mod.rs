//! Data source registry
//!
//! Factories are keyed by the full data source type name, which is derived
//! from the data source's own metadata at registration time.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use k8s_provider_framework::{DataSource, MetadataRequest, MetadataResponse};

use crate::{Error, ProviderResult};

/// Data source factory trait for creating data sources
pub trait DataSourceFactory: Send + Sync {
    /// Create a new, unconfigured data source instance
    fn create_data_source(&self) -> Box<dyn DataSource>;

    /// Clone the factory as a boxed trait object
    fn clone_box(&self) -> Box<dyn DataSourceFactory>;
}

/// Registry of data source factories
pub struct DataSourceRegistry {
    /// Provider type name used to derive data source type names
    provider_type_name: String,

    /// Factories by data source type name
    factories: Arc<RwLock<HashMap<String, Box<dyn DataSourceFactory>>>>,
}

impl DataSourceRegistry {
    /// Create an empty registry
    pub fn new(provider_type_name: impl Into<String>) -> Self {
        Self {
            provider_type_name: provider_type_name.into(),
            factories: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn provider_type_name(&self) -> &str {
        &self.provider_type_name
    }

    /// Register a factory, returning the type name it was registered under
    pub async fn register_factory(&self, factory: Box<dyn DataSourceFactory>) -> String {
        let type_name = self.type_name_of(factory.create_data_source().as_ref());

        let mut factories = self.factories.write().await;
        if factories.insert(type_name.clone(), factory).is_some() {
            warn!("Replacing data source factory for {}", type_name);
        } else {
            debug!("Registered data source {}", type_name);
        }

        type_name
    }

    /// Registered type names, sorted
    pub async fn type_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.factories.read().await.keys().cloned().collect();
        names.sort();
        names
    }

    pub async fn contains(&self, type_name: &str) -> bool {
        self.factories.read().await.contains_key(type_name)
    }

    /// Create a data source by type name
    pub async fn create_data_source(&self, type_name: &str) -> ProviderResult<Box<dyn DataSource>> {
        let factory = self.get_factory(type_name).await?;
        Ok(factory.create_data_source())
    }

    async fn get_factory(&self, type_name: &str) -> ProviderResult<Box<dyn DataSourceFactory>> {
        let factories = self.factories.read().await;
        let factory = factories
            .get(type_name)
            .ok_or_else(|| Error::DataSource(format!("Unknown data source type: {}", type_name)))?;
        Ok(factory.clone_box())
    }

    fn type_name_of(&self, data_source: &dyn DataSource) -> String {
        let mut response = MetadataResponse::default();
        data_source.metadata(
            &MetadataRequest {
                provider_type_name: self.provider_type_name.clone(),
            },
            &mut response,
        );
        response.type_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway_solo_io::VirtualServiceV1DataSourceFactory;

    #[tokio::test]
    async fn test_registry_creation() {
        let registry = DataSourceRegistry::new("k8s");
        assert!(registry.type_names().await.is_empty());
        assert_eq!(registry.provider_type_name(), "k8s");
    }

    #[tokio::test]
    async fn test_register_derives_type_name() {
        let registry = DataSourceRegistry::new("k8s");
        let type_name = registry
            .register_factory(Box::new(VirtualServiceV1DataSourceFactory))
            .await;

        assert_eq!(type_name, "k8s_gateway_solo_io_virtual_service_v1");
        assert!(registry.contains(&type_name).await);
        assert_eq!(registry.type_names().await, vec![type_name.clone()]);

        let data_source = registry.create_data_source(&type_name).await.unwrap();
        assert!(data_source.schema().attribute("spec").is_some());
    }

    #[tokio::test]
    async fn test_register_twice_keeps_one_entry() {
        let registry = DataSourceRegistry::new("other");
        registry
            .register_factory(Box::new(VirtualServiceV1DataSourceFactory))
            .await;
        registry
            .register_factory(Box::new(VirtualServiceV1DataSourceFactory))
            .await;

        assert_eq!(
            registry.type_names().await,
            vec!["other_gateway_solo_io_virtual_service_v1".to_string()]
        );
    }

    #[tokio::test]
    async fn test_unknown_data_source() {
        let registry = DataSourceRegistry::new("k8s");
        let result = registry.create_data_source("k8s_missing").await;

        match result {
            Err(Error::DataSource(message)) => assert!(message.contains("k8s_missing")),
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("expected an error"),
        }
    }
}
