//! VirtualService data source

use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

use k8s_provider_framework::{
    ConfigureRequest, ConfigureResponse, DataSource, Diagnostic, MetadataRequest,
    MetadataResponse, ReadRequest, ReadResponse, Schema,
};

use super::model::VirtualServiceV1DataSourceData;
use super::schema::schema;
use crate::client::{DynamicClient, HasApiResource};
use crate::provider::DataSourceData;
use crate::registry::DataSourceFactory;

/// Type name suffix appended to the provider type name
pub const TYPE_NAME_SUFFIX: &str = "_gateway_solo_io_virtual_service_v1";

/// Reads a single `gateway.solo.io/v1` VirtualService
#[derive(Default)]
pub struct VirtualServiceV1DataSource {
    kubernetes_client: Option<Arc<dyn DynamicClient>>,
}

impl VirtualServiceV1DataSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether configure handed over a client
    pub fn is_configured(&self) -> bool {
        self.kubernetes_client.is_some()
    }
}

#[async_trait]
impl DataSource for VirtualServiceV1DataSource {
    fn metadata(&self, request: &MetadataRequest, response: &mut MetadataResponse) {
        response.type_name = format!("{}{}", request.provider_type_name, TYPE_NAME_SUFFIX);
    }

    fn schema(&self) -> Schema {
        schema()
    }

    fn configure(&mut self, request: ConfigureRequest, response: &mut ConfigureResponse) {
        let Some(provider_data) = request.provider_data else {
            return;
        };

        match provider_data.downcast_ref::<DataSourceData>() {
            Some(data) if data.offline => {
                response.diagnostics.add_error(
                    "Provider in Offline Mode",
                    "This provider is running in offline mode which does not support data sources. \
                     Please configure a Kubernetes client.",
                );
            }
            Some(data) => {
                self.kubernetes_client = data.client.clone();
            }
            None => {
                response.diagnostics.add_error(
                    "Unexpected Data Source Configure Type",
                    format!(
                        "Expected DataSourceData, got: {}. Please report this issue to the provider developers.",
                        provider_data.type_name()
                    ),
                );
            }
        }
    }

    async fn read(&self, request: ReadRequest, response: &mut ReadResponse) {
        let mut data: VirtualServiceV1DataSourceData = match request.config.get() {
            Ok(data) => data,
            Err(diag) => {
                response.diagnostics.push(diag);
                return;
            }
        };

        let Some(client) = &self.kubernetes_client else {
            response.diagnostics.add_error(
                "Unconfigured Kubernetes Client",
                "Expected a configured Kubernetes client. Please report this issue to the provider developers.",
            );
            return;
        };

        debug!(
            name = %data.metadata.name,
            namespace = %data.metadata.namespace,
            "Reading VirtualService"
        );

        let resource = VirtualServiceV1DataSourceData::api_resource();
        let object = match client
            .get(&resource, &data.metadata.namespace, &data.metadata.name)
            .await
        {
            Ok(object) => object,
            Err(e) if e.is_not_found() => {
                response.diagnostics.add_error(
                    "Unable to find resource",
                    format!(
                        "The requested resource cannot be found. Make sure that it exists in your cluster.\n\nError: {e}"
                    ),
                );
                return;
            }
            Err(e) => {
                response.diagnostics.add_error(
                    "Unable to GET resource",
                    format!(
                        "An unexpected error occurred while reading the resource. \
                         Please report this issue to the provider developers.\n\nGET Error: {e}"
                    ),
                );
                return;
            }
        };

        let read_response = match decode_object(&object) {
            Ok(read_response) => read_response,
            Err(diag) => {
                response.diagnostics.push(diag);
                return;
            }
        };

        data.id = Some(format!("{}/{}", data.metadata.name, data.metadata.namespace));
        data.api_version = Some(VirtualServiceV1DataSourceData::api_version());
        data.kind = Some(VirtualServiceV1DataSourceData::KIND.to_string());
        data.metadata = read_response.metadata;
        data.spec = read_response.spec;

        if let Err(diag) = response.state.set(&data) {
            response.diagnostics.push(diag);
            return;
        }

        info!(id = ?data.id, "Read VirtualService");
    }
}

/// Convert an API object into the model through its JSON form
pub(crate) fn decode_object<T: Serialize>(
    object: &T,
) -> Result<VirtualServiceV1DataSourceData, Diagnostic> {
    let json = serde_json::to_value(object).map_err(|e| {
        Diagnostic::error(
            "Unable to marshal resource",
            format!(
                "An unexpected error occurred while parsing the resource read response. \
                 Please report this issue to the provider developers.\n\nMarshal Error: {e}"
            ),
        )
    })?;

    serde_json::from_value(json).map_err(|e| {
        Diagnostic::error(
            "Unable to unmarshal resource",
            format!(
                "An unexpected error occurred while parsing the resource read response. \
                 Please report this issue to the provider developers.\n\nUnmarshal Error: {e}"
            ),
        )
    })
}

/// Factory registered with the data source registry
#[derive(Clone, Copy, Default)]
pub struct VirtualServiceV1DataSourceFactory;

impl DataSourceFactory for VirtualServiceV1DataSourceFactory {
    fn create_data_source(&self) -> Box<dyn DataSource> {
        Box::new(VirtualServiceV1DataSource::new())
    }

    fn clone_box(&self) -> Box<dyn DataSourceFactory> {
        Box::new(*self)
    }
}
