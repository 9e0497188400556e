//! Attribute schema and the `tfsdk` <-> `json` projection
//!
//! Every attribute carries two names: `name` is what the user sees in config
//! and state, `json_name` is the field name in the Kubernetes object. State
//! values are always keyed by `name`; typed models serialize with `json_name`.
//! The projection functions below translate between the two shapes, walking
//! the schema so that map keys (labels, annotations, ...) are never renamed.

use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

/// Errors raised while projecting values through a schema
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SchemaError {
    #[error("unknown attribute {path}")]
    UnknownAttribute { path: AttributePath },

    #[error("type mismatch at {path}: expected {expected}")]
    TypeMismatch {
        path: AttributePath,
        expected: &'static str,
    },
}

/// One step of an attribute path
#[derive(Debug, Clone, PartialEq, Eq)]
enum PathStep {
    Attribute(String),
    Index(usize),
    Key(String),
}

/// Location of a value inside a state or JSON tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributePath(Vec<PathStep>);

impl AttributePath {
    pub fn root() -> Self {
        Self::default()
    }

    /// Path to a named attribute below this one
    pub fn attribute(&self, name: &str) -> Self {
        self.with(PathStep::Attribute(name.to_string()))
    }

    /// Path to a list element below this one
    pub fn index(&self, index: usize) -> Self {
        self.with(PathStep::Index(index))
    }

    /// Path to a map entry below this one
    pub fn key(&self, key: &str) -> Self {
        self.with(PathStep::Key(key.to_string()))
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    fn with(&self, step: PathStep) -> Self {
        let mut steps = self.0.clone();
        steps.push(step);
        Self(steps)
    }
}

impl fmt::Display for AttributePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return write!(f, "(root)");
        }
        for (i, step) in self.0.iter().enumerate() {
            match step {
                PathStep::Attribute(name) if i == 0 => write!(f, "{name}")?,
                PathStep::Attribute(name) => write!(f, ".{name}")?,
                PathStep::Index(index) => write!(f, "[{index}]")?,
                PathStep::Key(key) => write!(f, "[{key:?}]")?,
            }
        }
        Ok(())
    }
}

/// Element type of list and map attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementType {
    String,
    Bool,
    Int64,
    Float64,
}

impl ElementType {
    pub fn type_name(&self) -> &'static str {
        match self {
            ElementType::String => "string",
            ElementType::Bool => "bool",
            ElementType::Int64 => "int64",
            ElementType::Float64 => "float64",
        }
    }

    /// Check whether a non-null JSON value has this type
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            ElementType::String => value.is_string(),
            ElementType::Bool => value.is_boolean(),
            ElementType::Int64 => value.is_i64(),
            ElementType::Float64 => value.is_number(),
        }
    }
}

/// Attribute type
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AttributeKind {
    String,
    Bool,
    Int64,
    Float64,
    List { element: ElementType },
    Map { element: ElementType },
    SingleNested { attributes: Vec<Attribute> },
    ListNested { attributes: Vec<Attribute> },
    MapNested { attributes: Vec<Attribute> },
    /// Any JSON value, kept as is
    Dynamic,
}

impl AttributeKind {
    /// Nested attributes of object kinds
    pub fn nested_attributes(&self) -> Option<&[Attribute]> {
        match self {
            AttributeKind::SingleNested { attributes }
            | AttributeKind::ListNested { attributes }
            | AttributeKind::MapNested { attributes } => Some(attributes),
            _ => None,
        }
    }
}

/// A single schema attribute
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attribute {
    /// Name in config and state
    pub name: String,

    /// Field name in the Kubernetes object
    pub json_name: String,

    /// Human readable description
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Attribute type
    #[serde(flatten)]
    pub kind: AttributeKind,

    /// Must be set in config
    pub required: bool,

    /// May be set in config
    pub optional: bool,

    /// Filled in by the provider
    pub computed: bool,
}

impl Attribute {
    fn new(name: &str, json_name: &str, kind: AttributeKind) -> Self {
        Self {
            name: name.to_string(),
            json_name: json_name.to_string(),
            description: String::new(),
            kind,
            required: false,
            optional: false,
            computed: false,
        }
    }

    pub fn string(name: &str, json_name: &str) -> Self {
        Self::new(name, json_name, AttributeKind::String)
    }

    pub fn bool(name: &str, json_name: &str) -> Self {
        Self::new(name, json_name, AttributeKind::Bool)
    }

    pub fn int64(name: &str, json_name: &str) -> Self {
        Self::new(name, json_name, AttributeKind::Int64)
    }

    pub fn float64(name: &str, json_name: &str) -> Self {
        Self::new(name, json_name, AttributeKind::Float64)
    }

    pub fn list(name: &str, json_name: &str, element: ElementType) -> Self {
        Self::new(name, json_name, AttributeKind::List { element })
    }

    pub fn map(name: &str, json_name: &str, element: ElementType) -> Self {
        Self::new(name, json_name, AttributeKind::Map { element })
    }

    pub fn single_nested(name: &str, json_name: &str, attributes: Vec<Attribute>) -> Self {
        Self::new(name, json_name, AttributeKind::SingleNested { attributes })
    }

    pub fn list_nested(name: &str, json_name: &str, attributes: Vec<Attribute>) -> Self {
        Self::new(name, json_name, AttributeKind::ListNested { attributes })
    }

    pub fn map_nested(name: &str, json_name: &str, attributes: Vec<Attribute>) -> Self {
        Self::new(name, json_name, AttributeKind::MapNested { attributes })
    }

    pub fn dynamic(name: &str, json_name: &str) -> Self {
        Self::new(name, json_name, AttributeKind::Dynamic)
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self.optional = false;
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self.required = false;
        self
    }

    pub fn computed(mut self) -> Self {
        self.computed = true;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Nested attributes of object attributes
    pub fn nested_attributes(&self) -> Option<&[Attribute]> {
        self.kind.nested_attributes()
    }
}

/// Data source schema
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schema {
    /// Human readable description
    pub description: String,

    /// Top level attributes
    pub attributes: Vec<Attribute>,
}

impl Schema {
    pub fn new(description: impl Into<String>, attributes: Vec<Attribute>) -> Self {
        Self {
            description: description.into(),
            attributes,
        }
    }

    /// Get a top level attribute by name
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// Walk nested attributes by name, e.g. `["spec", "virtual_host", "domains"]`
    pub fn attribute_at(&self, names: &[&str]) -> Option<&Attribute> {
        let (first, rest) = names.split_first()?;
        let mut current = self.attribute(first)?;
        for name in rest {
            current = current
                .nested_attributes()?
                .iter()
                .find(|a| a.name == *name)?;
        }
        Some(current)
    }

    /// Project a JSON object keyed by `json_name` into state keyed by `name`
    ///
    /// Every attribute appears in the result, null when absent. Keys without
    /// a matching attribute and values of the wrong type are errors.
    pub fn state_from_json(&self, json: &Value) -> Result<Value, SchemaError> {
        if !json.is_object() {
            return Err(SchemaError::TypeMismatch {
                path: AttributePath::root(),
                expected: "object",
            });
        }
        object_to_state(&self.attributes, json, &AttributePath::root())
    }

    /// Project state keyed by `name` into a JSON object keyed by `json_name`
    ///
    /// Null values are dropped so that optional fields deserialize as absent.
    pub fn json_from_state(&self, state: &Value) -> Result<Value, SchemaError> {
        if !state.is_object() {
            return Err(SchemaError::TypeMismatch {
                path: AttributePath::root(),
                expected: "object",
            });
        }
        object_to_json(&self.attributes, state, &AttributePath::root())
    }
}

fn object_to_state(
    attributes: &[Attribute],
    value: &Value,
    path: &AttributePath,
) -> Result<Value, SchemaError> {
    let object = match value {
        Value::Null => return Ok(Value::Null),
        Value::Object(object) => object,
        _ => return Err(mismatch(path, "object")),
    };

    if let Some(key) = object
        .keys()
        .find(|key| !attributes.iter().any(|a| &a.json_name == *key))
    {
        return Err(SchemaError::UnknownAttribute {
            path: path.attribute(key),
        });
    }

    let mut state = Map::with_capacity(attributes.len());
    for attribute in attributes {
        let field = object.get(&attribute.json_name).unwrap_or(&Value::Null);
        let projected = project(attribute, field, &path.attribute(&attribute.name), object_to_state)?;
        state.insert(attribute.name.clone(), projected);
    }
    Ok(Value::Object(state))
}

fn object_to_json(
    attributes: &[Attribute],
    value: &Value,
    path: &AttributePath,
) -> Result<Value, SchemaError> {
    let object = match value {
        Value::Null => return Ok(Value::Null),
        Value::Object(object) => object,
        _ => return Err(mismatch(path, "object")),
    };

    let mut json = Map::with_capacity(object.len());
    for (key, field) in object {
        let attribute = attributes
            .iter()
            .find(|a| &a.name == key)
            .ok_or_else(|| SchemaError::UnknownAttribute {
                path: path.attribute(key),
            })?;
        if field.is_null() {
            continue;
        }
        let projected = project(attribute, field, &path.attribute(key), object_to_json)?;
        json.insert(attribute.json_name.clone(), projected);
    }
    Ok(Value::Object(json))
}

type ObjectProjection = fn(&[Attribute], &Value, &AttributePath) -> Result<Value, SchemaError>;

/// Project one attribute value, recursing into nested objects with `object`
fn project(
    attribute: &Attribute,
    value: &Value,
    path: &AttributePath,
    object: ObjectProjection,
) -> Result<Value, SchemaError> {
    match &attribute.kind {
        AttributeKind::SingleNested { attributes } => object(attributes, value, path),
        AttributeKind::ListNested { attributes } => match value {
            Value::Null => Ok(Value::Null),
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(i, item)| object(attributes, item, &path.index(i)))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array),
            _ => Err(mismatch(path, "list")),
        },
        AttributeKind::MapNested { attributes } => match value {
            Value::Null => Ok(Value::Null),
            Value::Object(entries) => entries
                .iter()
                .map(|(key, item)| object(attributes, item, &path.key(key)).map(|v| (key.clone(), v)))
                .collect::<Result<Map<_, _>, _>>()
                .map(Value::Object),
            _ => Err(mismatch(path, "map")),
        },
        AttributeKind::Dynamic => Ok(value.clone()),
        kind => {
            check_scalar(kind, value, path)?;
            Ok(value.clone())
        }
    }
}

fn check_scalar(kind: &AttributeKind, value: &Value, path: &AttributePath) -> Result<(), SchemaError> {
    if value.is_null() {
        return Ok(());
    }
    let element = match kind {
        AttributeKind::String => ElementType::String,
        AttributeKind::Bool => ElementType::Bool,
        AttributeKind::Int64 => ElementType::Int64,
        AttributeKind::Float64 => ElementType::Float64,
        AttributeKind::List { element } => {
            let items = value.as_array().ok_or_else(|| mismatch(path, "list"))?;
            for (i, item) in items.iter().enumerate() {
                if !element.matches(item) {
                    return Err(mismatch(&path.index(i), element.type_name()));
                }
            }
            return Ok(());
        }
        AttributeKind::Map { element } => {
            let entries = value.as_object().ok_or_else(|| mismatch(path, "map"))?;
            for (key, item) in entries {
                if !element.matches(item) {
                    return Err(mismatch(&path.key(key), element.type_name()));
                }
            }
            return Ok(());
        }
        AttributeKind::SingleNested { .. }
        | AttributeKind::ListNested { .. }
        | AttributeKind::MapNested { .. }
        | AttributeKind::Dynamic => return Ok(()),
    };

    if element.matches(value) {
        Ok(())
    } else {
        Err(mismatch(path, element.type_name()))
    }
}

fn mismatch(path: &AttributePath, expected: &'static str) -> SchemaError {
    SchemaError::TypeMismatch {
        path: path.clone(),
        expected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn test_schema() -> Schema {
        Schema::new(
            "test",
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
                Attribute::single_nested(
                    "spec",
                    "spec",
                    vec![
                        Attribute::string("display_name", "displayName").computed(),
                        Attribute::list_nested(
                            "routes",
                            "routes",
                            vec![
                                Attribute::int64("num_retries", "numRetries").computed(),
                                Attribute::list("methods", "methods", ElementType::String)
                                    .computed(),
                            ],
                        )
                        .computed(),
                    ],
                )
                .computed(),
            ],
        )
    }

    #[test]
    fn test_state_from_json_renames_attributes() {
        let schema = test_schema();
        let json = json!({
            "metadata": {"name": "vs", "labels": {"app.kubernetes.io/name": "web"}},
            "spec": {"displayName": "Web", "routes": [{"numRetries": 3}]}
        });

        let state = schema.state_from_json(&json).unwrap();

        assert_eq!(state["id"], Value::Null);
        assert_eq!(state["spec"]["display_name"], "Web");
        assert_eq!(state["spec"]["routes"][0]["num_retries"], 3);
        assert_eq!(state["spec"]["routes"][0]["methods"], Value::Null);
        // map keys are data, not attribute names
        assert_eq!(state["metadata"]["labels"]["app.kubernetes.io/name"], "web");
    }

    #[test]
    fn test_json_from_state_drops_nulls() {
        let schema = test_schema();
        let state = json!({
            "id": null,
            "metadata": {"name": "vs", "labels": null},
            "spec": {"display_name": "Web", "routes": [{"num_retries": 1, "methods": ["GET"]}]}
        });

        let json = schema.json_from_state(&state).unwrap();

        assert_eq!(
            json,
            json!({
                "metadata": {"name": "vs"},
                "spec": {"displayName": "Web", "routes": [{"numRetries": 1, "methods": ["GET"]}]}
            })
        );
    }

    #[test]
    fn test_projection_round_trip() {
        let schema = test_schema();
        let json = json!({
            "id": "vs/default",
            "metadata": {"name": "vs", "labels": {"a": "b"}},
            "spec": {"displayName": "Web", "routes": [{"numRetries": 2, "methods": ["GET", "POST"]}]}
        });

        let state = schema.state_from_json(&json).unwrap();
        assert_eq!(schema.json_from_state(&state).unwrap(), json);
    }

    #[test]
    fn test_unknown_json_field_is_rejected() {
        let schema = test_schema();
        let json = json!({"metadata": {"name": "vs"}, "spec": {"routes": [{"timeout": "5s"}]}});

        let err = schema.state_from_json(&json).unwrap_err();
        assert_eq!(err.to_string(), "unknown attribute spec.routes[0].timeout");
    }

    #[test]
    fn test_unknown_state_attribute_is_rejected() {
        let schema = test_schema();
        let err = schema
            .json_from_state(&json!({"metadata": {"nmae": "vs"}}))
            .unwrap_err();

        assert!(matches!(err, SchemaError::UnknownAttribute { .. }));
        assert_eq!(err.to_string(), "unknown attribute metadata.nmae");
    }

    #[rstest]
    #[case(json!({"spec": {"displayName": 42}}), "spec.display_name", "string")]
    #[case(json!({"spec": {"routes": {"numRetries": 1}}}), "spec.routes", "list")]
    #[case(json!({"spec": {"routes": [{"numRetries": 1.5}]}}), "spec.routes[0].num_retries", "int64")]
    #[case(json!({"spec": {"routes": [{"methods": ["GET", 1]}]}}), "spec.routes[0].methods[1]", "string")]
    #[case(json!({"metadata": {"labels": {"tier": 1}}}), "metadata.labels[\"tier\"]", "string")]
    #[case(json!({"spec": "nope"}), "spec", "object")]
    fn test_type_mismatch(
        #[case] json: Value,
        #[case] expected_path: &str,
        #[case] expected_type: &str,
    ) {
        let err = test_schema().state_from_json(&json).unwrap_err();
        match err {
            SchemaError::TypeMismatch { path, expected } => {
                assert_eq!(path.to_string(), expected_path);
                assert_eq!(expected, expected_type);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    fn nested_map_schema() -> Schema {
        Schema::new(
            "test",
            vec![
                Attribute::map_nested(
                    "providers",
                    "providers",
                    vec![
                        Attribute::string("issuer", "issuer").computed(),
                        Attribute::int64("clock_skew_seconds", "clockSkewSeconds").computed(),
                    ],
                )
                .computed(),
                Attribute::dynamic("configs", "configs").computed(),
            ],
        )
    }

    #[test]
    fn test_map_nested_keeps_keys_and_renames_values() {
        let schema = nested_map_schema();
        let json = json!({
            "providers": {"kc_Provider": {"issuer": "https://kc", "clockSkewSeconds": 5}},
            "configs": {"rawKey": [1, {"nestedKey": null}]}
        });

        let state = schema.state_from_json(&json).unwrap();
        assert_eq!(state["providers"]["kc_Provider"]["clock_skew_seconds"], 5);
        // dynamic values are not projected
        assert_eq!(state["configs"], json!({"rawKey": [1, {"nestedKey": null}]}));

        assert_eq!(schema.json_from_state(&state).unwrap(), json);
    }

    #[test]
    fn test_map_nested_rejects_unknown_value_attribute() {
        let err = nested_map_schema()
            .state_from_json(&json!({"providers": {"kc": {"audience": "x"}}}))
            .unwrap_err();
        assert_eq!(err.to_string(), "unknown attribute providers[\"kc\"].audience");
    }

    #[test]
    fn test_map_nested_must_be_object() {
        let err = nested_map_schema()
            .state_from_json(&json!({"providers": ["kc"]}))
            .unwrap_err();
        assert_eq!(err.to_string(), "type mismatch at providers: expected map");
    }

    #[test]
    fn test_root_must_be_object() {
        let err = test_schema().state_from_json(&json!([])).unwrap_err();
        assert_eq!(err.to_string(), "type mismatch at (root): expected object");
    }

    #[test]
    fn test_attribute_at() {
        let schema = test_schema();
        let attribute = schema.attribute_at(&["spec", "routes", "num_retries"]).unwrap();
        assert_eq!(attribute.json_name, "numRetries");
        assert!(schema.attribute_at(&["spec", "missing"]).is_none());
        assert!(schema.attribute_at(&[]).is_none());
    }

    #[test]
    fn test_required_and_optional_are_exclusive() {
        let attribute = Attribute::string("name", "name").optional().required();
        assert!(attribute.required);
        assert!(!attribute.optional);
    }

    #[test]
    fn test_schema_serializes_kind_inline() {
        let value = serde_json::to_value(Attribute::list("methods", "methods", ElementType::String))
            .unwrap();
        assert_eq!(value["type"], "list");
        assert_eq!(value["element"], "string");
        assert_eq!(value["json_name"], "methods");
        assert!(value.get("description").is_none());
    }
}
