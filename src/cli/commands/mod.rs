//! CLI command modules

pub mod data_sources;
pub mod info;
pub mod init;
pub mod read;
pub mod schema;
pub mod validate;
