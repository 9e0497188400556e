//! k8s provider library
//!
//! Read-only data sources for Kubernetes custom resources, starting with the
//! Gloo `gateway.solo.io/v1` VirtualService.

pub mod cli;
pub mod client;
pub mod config;
pub mod gateway_solo_io;
pub mod provider;
pub mod registry;
pub mod utils;

pub use client::{DynamicClient, HasApiResource, KubeDynamicClient};
pub use config::{Config, OutputConfig, OutputFormat, ProviderConfig};
pub use provider::{DataSourceData, K8sProvider, ReadOutcome, PROVIDER_TYPE_NAME};
pub use registry::{DataSourceFactory, DataSourceRegistry};

/// Application error types
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Kubernetes API error: {0}")]
    Kube(#[from] kube::Error),

    #[error("Kubeconfig error: {0}")]
    Kubeconfig(#[from] kube::config::KubeconfigError),

    #[error("Unable to infer Kubernetes configuration: {0}")]
    InferConfig(#[from] kube::config::InferConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Data source error: {0}")]
    DataSource(String),
}

impl Error {
    /// Check whether the API server answered 404
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Kube(kube::Error::Api(response)) if response.code == 404)
    }
}

/// Result type for the library
pub type ProviderResult<T> = std::result::Result<T, Error>;
