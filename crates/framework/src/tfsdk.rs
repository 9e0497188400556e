//! Config and state values

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use crate::diag::Diagnostic;
use crate::schema::Schema;

/// User supplied configuration of a data source block
#[derive(Debug, Clone)]
pub struct Config {
    schema: Arc<Schema>,
    raw: Value,
}

impl Config {
    /// Wrap a raw config value keyed by attribute names
    pub fn new(schema: Arc<Schema>, raw: Value) -> Self {
        Self { schema, raw }
    }

    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// Decode the config into a typed model
    pub fn get<T: DeserializeOwned>(&self) -> Result<T, Diagnostic> {
        let json = self.schema.json_from_state(&self.raw).map_err(|e| {
            Diagnostic::error(
                "Invalid Configuration",
                format!("The configuration does not match the data source schema.\n\nError: {e}"),
            )
        })?;

        serde_json::from_value(json).map_err(|e| {
            Diagnostic::error(
                "Value Conversion Error",
                format!("The configuration could not be decoded into the data source model.\n\nError: {e}"),
            )
        })
    }
}

/// State written back by a data source
#[derive(Debug, Clone)]
pub struct State {
    schema: Arc<Schema>,
    raw: Option<Value>,
}

impl State {
    /// Create an unset state
    pub fn new(schema: Arc<Schema>) -> Self {
        Self { schema, raw: None }
    }

    /// Raw state keyed by attribute names, `None` while unset
    pub fn raw(&self) -> Option<&Value> {
        self.raw.as_ref()
    }

    pub fn into_raw(self) -> Option<Value> {
        self.raw
    }

    pub fn is_set(&self) -> bool {
        self.raw.is_some()
    }

    /// Encode a typed model as the new state
    ///
    /// On failure the previous state is kept.
    pub fn set<T: Serialize>(&mut self, value: &T) -> Result<(), Diagnostic> {
        let json = serde_json::to_value(value).map_err(|e| {
            Diagnostic::error(
                "Value Conversion Error",
                format!("The data source model could not be encoded.\n\nError: {e}"),
            )
        })?;

        let state = self.schema.state_from_json(&json).map_err(|e| {
            Diagnostic::error(
                "Value Conversion Error",
                format!("The data source model does not match its schema. Please report this issue to the provider developers.\n\nError: {e}"),
            )
        })?;

        self.raw = Some(state);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Attribute, ElementType};
    use serde::Deserialize;
    use serde_json::json;
    use std::collections::BTreeMap;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    #[serde(rename_all = "camelCase")]
    struct Model {
        id: Option<String>,
        metadata: Metadata,
        display_name: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Metadata {
        name: String,
        labels: Option<BTreeMap<String, String>>,
    }

    fn schema() -> Arc<Schema> {
        Arc::new(Schema::new(
            "model",
            vec![
                Attribute::string("id", "id").computed(),
                Attribute::single_nested(
                    "metadata",
                    "metadata",
                    vec![
                        Attribute::string("name", "name").required(),
                        Attribute::map("labels", "labels", ElementType::String).computed(),
                    ],
                )
                .required(),
                Attribute::string("display_name", "displayName").computed(),
            ],
        ))
    }

    #[test]
    fn test_config_get() {
        let config = Config::new(schema(), json!({"metadata": {"name": "web"}}));
        let model: Model = config.get().unwrap();

        assert_eq!(model.metadata.name, "web");
        assert_eq!(model.id, None);
        assert_eq!(model.display_name, None);
    }

    #[test]
    fn test_config_get_missing_required_field() {
        let config = Config::new(schema(), json!({"metadata": {}}));
        let diag = config.get::<Model>().unwrap_err();

        assert!(diag.is_error());
        assert_eq!(diag.summary, "Value Conversion Error");
        assert!(diag.detail.contains("name"));
    }

    #[test]
    fn test_config_get_unknown_attribute() {
        let config = Config::new(schema(), json!({"metadata": {"name": "web"}, "spec": {}}));
        let diag = config.get::<Model>().unwrap_err();

        assert_eq!(diag.summary, "Invalid Configuration");
        assert!(diag.detail.contains("unknown attribute spec"));
    }

    #[test]
    fn test_state_set() {
        let mut state = State::new(schema());
        assert!(!state.is_set());

        let model = Model {
            id: Some("web/default".to_string()),
            metadata: Metadata {
                name: "web".to_string(),
                labels: Some(BTreeMap::from([("tier".to_string(), "frontend".to_string())])),
            },
            display_name: Some("Web".to_string()),
        };
        state.set(&model).unwrap();

        assert_eq!(
            state.raw(),
            Some(&json!({
                "id": "web/default",
                "metadata": {"name": "web", "labels": {"tier": "frontend"}},
                "display_name": "Web"
            }))
        );
    }

    #[test]
    fn test_state_set_rejects_unmapped_field() {
        #[derive(Serialize)]
        struct Extra {
            id: String,
            extra: bool,
        }

        let mut state = State::new(schema());
        let diag = state
            .set(&Extra {
                id: "x".to_string(),
                extra: true,
            })
            .unwrap_err();

        assert_eq!(diag.summary, "Value Conversion Error");
        assert!(!state.is_set());
    }
}
