use async_trait::async_trait;
use k8s_provider::gateway_solo_io::VirtualServiceV1DataSourceData;
use k8s_provider::{Config, DataSourceData, DynamicClient, Error, K8sProvider, ProviderConfig};
use k8s_provider_framework::ProviderData;
use kube::api::DynamicObject;
use kube::discovery::ApiResource;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

const TYPE_NAME: &str = "k8s_gateway_solo_io_virtual_service_v1";

/// In-memory API server keyed by `<namespace>/<name>`
#[derive(Default)]
struct FakeCluster {
    objects: HashMap<String, Value>,
    requests: Mutex<Vec<String>>,
}

impl FakeCluster {
    fn with_object(mut self, object: Value) -> Self {
        let key = format!(
            "{}/{}",
            object["metadata"]["namespace"].as_str().unwrap(),
            object["metadata"]["name"].as_str().unwrap()
        );
        self.objects.insert(key, object);
        self
    }
}

#[async_trait]
impl DynamicClient for FakeCluster {
    async fn get(
        &self,
        resource: &ApiResource,
        namespace: &str,
        name: &str,
    ) -> Result<DynamicObject, Error> {
        self.requests.lock().unwrap().push(format!(
            "{}/{}/{}/{}",
            resource.api_version, resource.plural, namespace, name
        ));

        match self.objects.get(&format!("{}/{}", namespace, name)) {
            Some(object) => Ok(serde_json::from_value(object.clone())?),
            None => Err(Error::Kube(kube::Error::Api(kube::error::ErrorResponse {
                status: "Failure".to_string(),
                message: format!("virtualservices.gateway.solo.io \"{}\" not found", name),
                reason: "NotFound".to_string(),
                code: 404,
            }))),
        }
    }
}

fn fixture_object() -> Value {
    let mut object: Value =
        serde_json::from_str(include_str!("fixtures/virtual_service_full.json")).unwrap();
    object.as_object_mut().unwrap().remove("id");
    object
}

async fn read(cluster: Arc<FakeCluster>, name: &str, namespace: &str) -> k8s_provider::ReadOutcome {
    let provider = K8sProvider::new(ProviderConfig::default()).await;
    provider
        .read_data_source_with(
            TYPE_NAME,
            Some(ProviderData::new(DataSourceData::online(cluster))),
            json!({"metadata": {"name": name, "namespace": namespace}}),
        )
        .await
        .unwrap()
}

#[tokio::test]
async fn test_read_full_virtual_service() {
    let cluster = Arc::new(FakeCluster::default().with_object(fixture_object()));

    let outcome = read(cluster.clone(), "storefront", "gloo-system").await;

    assert!(outcome.diagnostics.is_empty(), "{:?}", outcome.diagnostics);
    assert_eq!(
        *cluster.requests.lock().unwrap(),
        vec!["gateway.solo.io/v1/virtualservices/gloo-system/storefront".to_string()]
    );

    let state = outcome.state.unwrap();
    assert_eq!(state["id"], "storefront/gloo-system");
    assert_eq!(state["spec"]["ssl_config"]["secret_ref"]["name"], "storefront-tls");
    assert_eq!(
        state["spec"]["virtual_host"]["routes"][3]["delegate_action"]["selector"]["labels"]["team"],
        "checkout"
    );

    // state keyed by attribute names decodes back to the model
    let provider = K8sProvider::new(ProviderConfig::default()).await;
    let schema = provider.schema(TYPE_NAME).await.unwrap();
    let model: VirtualServiceV1DataSourceData =
        serde_json::from_value(schema.json_from_state(&state).unwrap()).unwrap();
    assert_eq!(model.metadata.name, "storefront");
    assert_eq!(
        model.spec.unwrap().virtual_host.unwrap().routes.unwrap().len(),
        4
    );
}

#[tokio::test]
async fn test_read_missing_virtual_service() {
    let cluster = Arc::new(FakeCluster::default().with_object(fixture_object()));

    let outcome = read(cluster, "storefront", "default").await;

    assert!(outcome.state.is_none());
    assert_eq!(outcome.diagnostics.len(), 1);
    assert_eq!(
        outcome.diagnostics.iter().next().unwrap().summary,
        "Unable to find resource"
    );
}

#[tokio::test]
async fn test_offline_provider_from_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(".k8s-provider.yaml");
    std::fs::write(
        &config_path,
        "version: \"1.0\"\nprovider:\n  offline: true\noutput:\n  format: yaml\n",
    )
    .unwrap();

    let config = Config::from_file(&config_path).unwrap();
    let provider = K8sProvider::new(config.provider).await;

    let outcome = provider
        .read_data_source(
            TYPE_NAME,
            json!({"metadata": {"name": "storefront", "namespace": "gloo-system"}}),
        )
        .await
        .unwrap();

    assert!(outcome.state.is_none());
    assert_eq!(
        outcome.diagnostics.iter().next().unwrap().summary,
        "Provider in Offline Mode"
    );
}
