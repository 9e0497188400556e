//! Data source trait and its request/response types

use async_trait::async_trait;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::diag::Diagnostics;
use crate::schema::Schema;
use crate::tfsdk::{Config, State};

/// Type-erased value a provider hands to every data source at configure time
#[derive(Clone)]
pub struct ProviderData {
    value: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl ProviderData {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            value: Arc::new(value),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Borrow the value as `T` if that is its concrete type
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        (*self.value).downcast_ref::<T>()
    }

    /// Name of the concrete type, for diagnostics
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Debug for ProviderData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProviderData({})", self.type_name)
    }
}

/// Metadata request
#[derive(Debug, Clone)]
pub struct MetadataRequest {
    /// Type name of the provider, e.g. `k8s`
    pub provider_type_name: String,
}

/// Metadata response
#[derive(Debug, Clone, Default)]
pub struct MetadataResponse {
    /// Full data source type name
    pub type_name: String,
}

/// Configure request
#[derive(Debug, Clone, Default)]
pub struct ConfigureRequest {
    /// Provider data, `None` before the provider has been configured
    pub provider_data: Option<ProviderData>,
}

/// Configure response
#[derive(Debug, Clone, Default)]
pub struct ConfigureResponse {
    pub diagnostics: Diagnostics,
}

/// Read request
#[derive(Debug, Clone)]
pub struct ReadRequest {
    /// Data source block configuration
    pub config: Config,
}

/// Read response
#[derive(Debug, Clone)]
pub struct ReadResponse {
    /// State to persist, left unset on failure
    pub state: State,

    pub diagnostics: Diagnostics,
}

impl ReadResponse {
    pub fn new(schema: Arc<Schema>) -> Self {
        Self {
            state: State::new(schema),
            diagnostics: Diagnostics::new(),
        }
    }
}

/// A read-only binding to an external object
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Report the data source type name
    fn metadata(&self, request: &MetadataRequest, response: &mut MetadataResponse);

    /// Describe the attributes of the data source
    fn schema(&self) -> Schema;

    /// Receive provider data
    fn configure(&mut self, request: ConfigureRequest, response: &mut ConfigureResponse);

    /// Read the object described by the config into state
    async fn read(&self, request: ReadRequest, response: &mut ReadResponse);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Attribute;
    use serde_json::json;

    struct Handle(u8);

    #[test]
    fn test_provider_data_downcast() {
        let data = ProviderData::new(Handle(7));

        let handle = data.downcast_ref::<Handle>().unwrap();
        assert_eq!(handle.0, 7);
        assert!(data.downcast_ref::<String>().is_none());
        assert!(data.type_name().ends_with("Handle"));
    }

    struct Echo {
        configured: bool,
    }

    #[async_trait]
    impl DataSource for Echo {
        fn metadata(&self, request: &MetadataRequest, response: &mut MetadataResponse) {
            response.type_name = format!("{}_echo", request.provider_type_name);
        }

        fn schema(&self) -> Schema {
            Schema::new("echo", vec![Attribute::string("value", "value").required()])
        }

        fn configure(&mut self, request: ConfigureRequest, _response: &mut ConfigureResponse) {
            self.configured = request.provider_data.is_some();
        }

        async fn read(&self, request: ReadRequest, response: &mut ReadResponse) {
            match request.config.get::<serde_json::Value>() {
                Ok(value) => {
                    if let Err(diag) = response.state.set(&value) {
                        response.diagnostics.push(diag);
                    }
                }
                Err(diag) => response.diagnostics.push(diag),
            }
        }
    }

    #[tokio::test]
    async fn test_data_source_lifecycle() {
        let mut echo = Echo { configured: false };

        let mut metadata = MetadataResponse::default();
        echo.metadata(
            &MetadataRequest {
                provider_type_name: "k8s".to_string(),
            },
            &mut metadata,
        );
        assert_eq!(metadata.type_name, "k8s_echo");

        let mut configure = ConfigureResponse::default();
        echo.configure(
            ConfigureRequest {
                provider_data: Some(ProviderData::new(Handle(1))),
            },
            &mut configure,
        );
        assert!(echo.configured);
        assert!(configure.diagnostics.is_empty());

        let schema = Arc::new(echo.schema());
        let mut response = ReadResponse::new(schema.clone());
        echo.read(
            ReadRequest {
                config: Config::new(schema, json!({"value": "hello"})),
            },
            &mut response,
        )
        .await;

        assert!(response.diagnostics.is_empty());
        assert_eq!(response.state.raw(), Some(&json!({"value": "hello"})));
    }
}
