//! Configuration management for the k8s provider

pub mod config;
pub mod output;
pub mod provider;

#[cfg(test)]
mod tests;

// Re-export main types for convenience
pub use config::Config;
pub use output::{OutputConfig, OutputFormat};
pub use provider::ProviderConfig;
