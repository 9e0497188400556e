//! Data source framework for the k8s provider
//!
//! The minimal surface a data source is written against: diagnostics, the
//! attribute schema, config/state values and the `DataSource` trait itself.

pub mod datasource;
pub mod diag;
pub mod schema;
pub mod tfsdk;

// Re-export main types for convenience
pub use datasource::*;
pub use diag::{Diagnostic, Diagnostics, Severity};
pub use schema::{Attribute, AttributeKind, AttributePath, ElementType, Schema, SchemaError};
pub use tfsdk::{Config, State};
