//! Output configuration

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Output format of read state and schemas
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            other => Err(anyhow!("Unsupported output format: {}", other)),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Pretty-print JSON output
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_pretty() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Json,
            pretty: true,
        }
    }
}

impl OutputConfig {
    /// Render a value in the configured format
    pub fn render<T: Serialize>(&self, value: &T) -> Result<String> {
        let rendered = match (self.format, self.pretty) {
            (OutputFormat::Json, true) => serde_json::to_string_pretty(value)?,
            (OutputFormat::Json, false) => serde_json::to_string(value)?,
            (OutputFormat::Yaml, _) => serde_yaml::to_string(value)?,
        };
        Ok(rendered)
    }
}
