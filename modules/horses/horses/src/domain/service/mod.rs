use std::sync::Arc;

mod horses;
mod owners;

pub use horses::HorsesService;
pub use owners::OwnersService;

use super::repos::{HorsesRepository, OwnersRepository};

/// Limits applied by the validators.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub max_name_length: usize,
    pub max_description_length: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            max_name_length: 255,
            max_description_length: 4095,
        }
    }
}

/// Services of the module, wired over one pair of repositories.
#[derive(Clone)]
pub struct AppServices {
    pub horses: Arc<HorsesService>,
    pub owners: Arc<OwnersService>,
}

impl AppServices {
    pub fn new(
        horses_repo: Arc<dyn HorsesRepository>,
        owners_repo: Arc<dyn OwnersRepository>,
        config: ServiceConfig,
    ) -> Self {
        let config = Arc::new(config);
        let owners = Arc::new(OwnersService::new(
            owners_repo,
            horses_repo.clone(),
            config.clone(),
        ));
        let horses = Arc::new(HorsesService::new(horses_repo, owners.clone(), config));
        Self { horses, owners }
    }
}
