use serde::{Deserialize, Serialize};

use crate::domain::service::ServiceConfig;

/// `horses` section of the application config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HorsesConfig {
    #[serde(default = "default_max_name_length")]
    pub max_name_length: usize,
    #[serde(default = "default_max_description_length")]
    pub max_description_length: usize,
    /// Populate an empty database with demo owners and horses at startup.
    #[serde(default)]
    pub seed_demo_data: bool,
}

impl Default for HorsesConfig {
    fn default() -> Self {
        Self {
            max_name_length: default_max_name_length(),
            max_description_length: default_max_description_length(),
            seed_demo_data: false,
        }
    }
}

impl From<&HorsesConfig> for ServiceConfig {
    fn from(cfg: &HorsesConfig) -> Self {
        Self {
            max_name_length: cfg.max_name_length,
            max_description_length: cfg.max_description_length,
        }
    }
}

fn default_max_name_length() -> usize {
    255
}

fn default_max_description_length() -> usize {
    4095
}
