//! `gateway.solo.io/v1` VirtualService data source

pub mod data_source;
pub mod model;
pub mod schema;


// Re-export main types for convenience
pub use data_source::{VirtualServiceV1DataSource, VirtualServiceV1DataSourceFactory};
pub use model::VirtualServiceV1DataSourceData;
pub use schema::schema;
