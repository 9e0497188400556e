//! Provider connection settings

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// Provider configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Path to a kubeconfig file, `~` and environment variables are expanded
    pub kubeconfig: Option<String>,

    /// Kubeconfig context to use instead of the current context
    pub context: Option<String>,

    /// Kubeconfig cluster to use instead of the context's cluster
    pub cluster: Option<String>,

    /// Kubeconfig user to use instead of the context's user
    pub user: Option<String>,

    /// Run without a cluster; data sources refuse to read
    #[serde(default)]
    pub offline: bool,
}

impl ProviderConfig {
    /// Check whether any kubeconfig selection override is set
    pub fn has_overrides(&self) -> bool {
        self.context.is_some() || self.cluster.is_some() || self.user.is_some()
    }

    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("kubeconfig", &self.kubeconfig),
            ("context", &self.context),
            ("cluster", &self.cluster),
            ("user", &self.user),
        ];

        for (field, value) in fields {
            if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
                return Err(anyhow!("Provider {} cannot be empty", field));
            }
        }

        Ok(())
    }
}
