//! Dynamic Kubernetes client
//!
//! Data sources read objects as untyped `DynamicObject`s and map them into
//! their own models, so a single client serves every custom resource.

use async_trait::async_trait;
use kube::api::{Api, DynamicObject};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::discovery::ApiResource;
#[cfg(test)]
use mockall::automock;
use tracing::{debug, info};

use crate::config::ProviderConfig;
use crate::{utils, Error, ProviderResult};

/// Trait for types with a known API group, version, kind and plural.
pub trait HasApiResource {
    /// API group (e.g. "gateway.solo.io")
    const GROUP: &'static str;
    /// API version within the group (e.g. "v1")
    const VERSION: &'static str;
    /// Resource kind (e.g. "VirtualService")
    const KIND: &'static str;
    /// Plural resource name used in request paths (e.g. "virtualservices")
    const PLURAL: &'static str;

    /// Full API version (group/version)
    fn api_version() -> String {
        if Self::GROUP.is_empty() {
            Self::VERSION.to_string()
        } else {
            format!("{}/{}", Self::GROUP, Self::VERSION)
        }
    }

    /// Build an ApiResource from the type's constants.
    fn api_resource() -> ApiResource {
        ApiResource {
            group: Self::GROUP.to_string(),
            version: Self::VERSION.to_string(),
            api_version: Self::api_version(),
            kind: Self::KIND.to_string(),
            plural: Self::PLURAL.to_string(),
        }
    }
}

/// Trait for reading untyped objects from the Kubernetes API
///
/// This trait abstracts the API server for testability.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DynamicClient: Send + Sync {
    /// GET a single namespaced object by name
    async fn get(
        &self,
        resource: &ApiResource,
        namespace: &str,
        name: &str,
    ) -> Result<DynamicObject, Error>;
}

/// Dynamic client backed by a `kube::Client`
#[derive(Clone)]
pub struct KubeDynamicClient {
    client: kube::Client,
}

impl KubeDynamicClient {
    pub fn new(client: kube::Client) -> Self {
        Self { client }
    }

    /// Connect using the provider configuration
    pub async fn connect(config: &ProviderConfig) -> ProviderResult<Self> {
        let client = create_client(config).await?;
        Ok(Self::new(client))
    }
}

#[async_trait]
impl DynamicClient for KubeDynamicClient {
    async fn get(
        &self,
        resource: &ApiResource,
        namespace: &str,
        name: &str,
    ) -> Result<DynamicObject, Error> {
        debug!(
            api_version = %resource.api_version,
            plural = %resource.plural,
            namespace = %namespace,
            name = %name,
            "GET dynamic object"
        );
        let api: Api<DynamicObject> = Api::namespaced_with(self.client.clone(), namespace, resource);
        Ok(api.get(name).await?)
    }
}

/// Build a `kube::Client` from the provider configuration
///
/// An explicit kubeconfig path wins; context/cluster/user overrides alone
/// select from the default kubeconfig; otherwise the configuration is
/// inferred (in-cluster service account, then `$KUBECONFIG`/`~/.kube/config`).
pub async fn create_client(config: &ProviderConfig) -> ProviderResult<kube::Client> {
    let options = KubeConfigOptions {
        context: config.context.clone(),
        cluster: config.cluster.clone(),
        user: config.user.clone(),
    };

    let kube_config = match &config.kubeconfig {
        Some(path) => {
            let path = utils::expand_path(path)?;
            info!("Loading kubeconfig from {:?}", path);
            let kubeconfig = Kubeconfig::read_from(&path)?;
            kube::Config::from_custom_kubeconfig(kubeconfig, &options).await?
        }
        None if config.has_overrides() => {
            info!("Loading default kubeconfig with overrides");
            kube::Config::from_kubeconfig(&options).await?
        }
        None => {
            info!("Inferring Kubernetes configuration");
            kube::Config::infer().await?
        }
    };

    Ok(kube::Client::try_from(kube_config)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Widget;

    impl HasApiResource for Widget {
        const GROUP: &'static str = "example.com";
        const VERSION: &'static str = "v1alpha1";
        const KIND: &'static str = "Widget";
        const PLURAL: &'static str = "widgets";
    }

    struct CoreThing;

    impl HasApiResource for CoreThing {
        const GROUP: &'static str = "";
        const VERSION: &'static str = "v1";
        const KIND: &'static str = "ConfigMap";
        const PLURAL: &'static str = "configmaps";
    }

    #[test]
    fn test_api_resource_from_constants() {
        let ar = Widget::api_resource();
        assert_eq!(ar.group, "example.com");
        assert_eq!(ar.version, "v1alpha1");
        assert_eq!(ar.api_version, "example.com/v1alpha1");
        assert_eq!(ar.kind, "Widget");
        assert_eq!(ar.plural, "widgets");
    }

    #[test]
    fn test_core_group_api_version() {
        assert_eq!(CoreThing::api_version(), "v1");
    }

    #[tokio::test]
    async fn test_missing_kubeconfig_file_is_an_error() {
        let config = ProviderConfig {
            kubeconfig: Some("/nonexistent/kubeconfig".to_string()),
            ..ProviderConfig::default()
        };

        let err = create_client(&config).await.err().unwrap();
        assert!(matches!(err, Error::Kubeconfig(_)));
    }
}
