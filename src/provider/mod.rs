//! Provider: configuration, provider data and data source hosting

use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};

use k8s_provider_framework::{
    Config, ConfigureRequest, ConfigureResponse, DataSource, Diagnostics, ProviderData,
    ReadRequest, ReadResponse, Schema,
};

use crate::client::{DynamicClient, KubeDynamicClient};
use crate::config::ProviderConfig;
use crate::gateway_solo_io::VirtualServiceV1DataSourceFactory;
use crate::registry::DataSourceRegistry;
use crate::ProviderResult;

/// Type name of this provider, prefixed to every data source type name
pub const PROVIDER_TYPE_NAME: &str = "k8s";

/// Provider data handed to every data source
#[derive(Clone)]
pub struct DataSourceData {
    /// Shared Kubernetes client, absent in offline mode
    pub client: Option<Arc<dyn DynamicClient>>,

    /// Whether the provider runs without a cluster
    pub offline: bool,
}

impl DataSourceData {
    pub fn online(client: Arc<dyn DynamicClient>) -> Self {
        Self {
            client: Some(client),
            offline: false,
        }
    }

    pub fn offline() -> Self {
        Self {
            client: None,
            offline: true,
        }
    }
}

/// Result of hosting a single data source read
#[derive(Debug, Clone)]
pub struct ReadOutcome {
    /// State keyed by attribute names, `None` when the read failed
    pub state: Option<Value>,

    pub diagnostics: Diagnostics,
}

/// The k8s provider
pub struct K8sProvider {
    config: ProviderConfig,
    registry: DataSourceRegistry,
}

impl K8sProvider {
    /// Create a provider with every built-in data source registered
    pub async fn new(config: ProviderConfig) -> Self {
        let registry = DataSourceRegistry::new(PROVIDER_TYPE_NAME);
        register_builtin_data_sources(&registry).await;
        Self { config, registry }
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    pub fn registry(&self) -> &DataSourceRegistry {
        &self.registry
    }

    /// Build the provider data from the provider configuration
    pub async fn configure(&self) -> ProviderResult<DataSourceData> {
        if self.config.offline {
            info!("Provider configured in offline mode");
            return Ok(DataSourceData::offline());
        }

        let client = KubeDynamicClient::connect(&self.config).await?;
        info!("Provider configured with Kubernetes client");
        Ok(DataSourceData::online(Arc::new(client)))
    }

    /// Schema of a registered data source
    pub async fn schema(&self, type_name: &str) -> ProviderResult<Schema> {
        let data_source = self.registry.create_data_source(type_name).await?;
        Ok(data_source.schema())
    }

    /// Configure the provider and read a data source
    pub async fn read_data_source(&self, type_name: &str, config: Value) -> ProviderResult<ReadOutcome> {
        // unknown type names fail before any connection attempt
        let data_source = self.registry.create_data_source(type_name).await?;
        let provider_data = ProviderData::new(self.configure().await?);
        Ok(host_read(data_source, Some(provider_data), config).await)
    }

    /// Read a data source with the given provider data
    pub async fn read_data_source_with(
        &self,
        type_name: &str,
        provider_data: Option<ProviderData>,
        config: Value,
    ) -> ProviderResult<ReadOutcome> {
        let data_source = self.registry.create_data_source(type_name).await?;
        Ok(host_read(data_source, provider_data, config).await)
    }
}

/// Run configure then read, stopping after configure errors
async fn host_read(
    mut data_source: Box<dyn DataSource>,
    provider_data: Option<ProviderData>,
    config: Value,
) -> ReadOutcome {
    let schema = Arc::new(data_source.schema());
    let mut diagnostics = Diagnostics::new();

    let mut configure = ConfigureResponse::default();
    data_source.configure(ConfigureRequest { provider_data }, &mut configure);
    let configure_failed = configure.diagnostics.has_error();
    diagnostics.append(configure.diagnostics);
    if configure_failed {
        warn!("Data source configuration failed");
        return ReadOutcome {
            state: None,
            diagnostics,
        };
    }

    let mut response = ReadResponse::new(schema.clone());
    let request = ReadRequest {
        config: Config::new(schema, config),
    };
    data_source.read(request, &mut response).await;

    let read_failed = response.diagnostics.has_error();
    diagnostics.append(response.diagnostics);
    let state = if read_failed {
        None
    } else {
        response.state.into_raw()
    };

    ReadOutcome { state, diagnostics }
}

/// Register every data source shipped with the provider
pub async fn register_builtin_data_sources(registry: &DataSourceRegistry) {
    registry
        .register_factory(Box::new(VirtualServiceV1DataSourceFactory))
        .await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockDynamicClient;
    use serde_json::json;

    const TYPE_NAME: &str = "k8s_gateway_solo_io_virtual_service_v1";

    #[tokio::test]
    async fn test_provider_registers_builtin_data_sources() {
        let provider = K8sProvider::new(ProviderConfig::default()).await;
        assert_eq!(provider.registry().type_names().await, vec![TYPE_NAME.to_string()]);
    }

    #[tokio::test]
    async fn test_offline_configure_builds_no_client() {
        let config = ProviderConfig {
            offline: true,
            ..ProviderConfig::default()
        };
        let provider = K8sProvider::new(config).await;

        let data = provider.configure().await.unwrap();
        assert!(data.offline);
        assert!(data.client.is_none());
    }

    #[tokio::test]
    async fn test_offline_read_stops_after_configure() {
        let config = ProviderConfig {
            offline: true,
            ..ProviderConfig::default()
        };
        let provider = K8sProvider::new(config).await;

        let outcome = provider
            .read_data_source(TYPE_NAME, json!({"metadata": {"name": "web", "namespace": "gloo"}}))
            .await
            .unwrap();

        assert!(outcome.state.is_none());
        assert_eq!(outcome.diagnostics.len(), 1);
        let diag = outcome.diagnostics.iter().next().unwrap();
        assert_eq!(diag.summary, "Provider in Offline Mode");
    }

    #[tokio::test]
    async fn test_unknown_type_name() {
        let provider = K8sProvider::new(ProviderConfig::default()).await;
        assert!(provider.schema("k8s_missing").await.is_err());
        assert!(provider
            .read_data_source_with("k8s_missing", None, json!({}))
            .await
            .is_err());
    }

    #[tokio::test]
    async fn test_read_with_provider_data() {
        let mut client = MockDynamicClient::new();
        client.expect_get().times(1).returning(|_, namespace, name| {
            Ok(serde_json::from_value(json!({
                "apiVersion": "gateway.solo.io/v1",
                "kind": "VirtualService",
                "metadata": {"name": name, "namespace": namespace},
                "spec": {"virtualHost": {"domains": ["*"]}}
            }))
            .unwrap())
        });

        let provider = K8sProvider::new(ProviderConfig::default()).await;
        let data = DataSourceData::online(Arc::new(client));
        let outcome = provider
            .read_data_source_with(
                TYPE_NAME,
                Some(ProviderData::new(data)),
                json!({"metadata": {"name": "web", "namespace": "gloo"}}),
            )
            .await
            .unwrap();

        assert!(outcome.diagnostics.is_empty());
        let state = outcome.state.unwrap();
        assert_eq!(state["id"], "web/gloo");
        assert_eq!(state["spec"]["virtual_host"]["domains"], json!(["*"]));
    }
}
