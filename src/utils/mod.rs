//! Utility functions for the k8s provider

use std::path::{Path, PathBuf};

use crate::{Error, ProviderResult};

/// File names searched for in the working directory, in order
pub const CONFIG_FILE_NAMES: [&str; 4] = [
    ".k8s-provider.yaml",
    ".k8s-provider.yml",
    "k8s-provider.yaml",
    "k8s-provider.yml",
];

/// Get the XDG config directory for the k8s provider
pub fn get_config_dir() -> ProviderResult<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?
        .join("k8s-provider");

    Ok(config_dir)
}

/// Candidate configuration files, in lookup order
pub fn default_config_paths(working_dir: &Path) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = CONFIG_FILE_NAMES
        .iter()
        .map(|name| working_dir.join(name))
        .collect();

    if let Ok(config_dir) = get_config_dir() {
        paths.push(config_dir.join("config.yaml"));
    }

    paths
}

/// Expand `~` and environment variables in a path
pub fn expand_path(path: &str) -> ProviderResult<PathBuf> {
    let expanded = shellexpand::full(path)
        .map_err(|e| Error::Config(format!("Failed to expand path {}: {}", path, e)))?;
    Ok(PathBuf::from(expanded.as_ref()))
}
