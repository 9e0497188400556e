//! Data sources for the `gateway.solo.io` API group

pub mod virtual_service_v1;

pub use virtual_service_v1::{
    VirtualServiceV1DataSource, VirtualServiceV1DataSourceData, VirtualServiceV1DataSourceFactory,
};
