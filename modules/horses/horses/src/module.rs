use std::sync::Arc;

use anyhow::Context;
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tracing::{debug, info};

use crate::api::rest::routes;
use crate::config::HorsesConfig;
use crate::domain::service::{AppServices, ServiceConfig};
use crate::infra::storage::migrations::Migrator;
use crate::infra::storage::{SeaHorsesRepository, SeaOwnersRepository, seed};
use crate::local_client::HorsesLocalClient;

/// Composition root of the horses module: repositories, services and routes over one
/// database connection.
#[derive(Clone)]
pub struct HorsesModule {
    db: DatabaseConnection,
    config: HorsesConfig,
    services: AppServices,
}

impl HorsesModule {
    #[must_use]
    pub fn new(db: DatabaseConnection, config: HorsesConfig) -> Self {
        let service_config = ServiceConfig::from(&config);
        debug!(
            max_name_length = service_config.max_name_length,
            max_description_length = service_config.max_description_length,
            "Loaded horses config"
        );

        let horses_repo = Arc::new(SeaHorsesRepository::new(db.clone()));
        let owners_repo = Arc::new(SeaOwnersRepository::new(db.clone()));
        let services = AppServices::new(horses_repo, owners_repo, service_config);

        Self {
            db,
            config,
            services,
        }
    }

    /// Run database migrations, then seed demo data when configured.
    ///
    /// # Errors
    /// Fails when a migration or the seeding fails.
    pub async fn init_storage(&self) -> anyhow::Result<()> {
        self.migrate().await?;
        if self.config.seed_demo_data {
            self.seed_demo_data().await?;
        }
        Ok(())
    }

    /// # Errors
    /// Fails when a migration fails.
    pub async fn migrate(&self) -> anyhow::Result<()> {
        info!("Running horses database migrations");
        Migrator::up(&self.db, None)
            .await
            .context("horses migrations failed")?;
        info!("Horses database migrations completed successfully");
        Ok(())
    }

    /// # Errors
    /// Fails when the store rejects the demo rows.
    pub async fn seed_demo_data(&self) -> anyhow::Result<bool> {
        seed::seed_demo_data(&self.db)
            .await
            .context("seeding demo data failed")
    }

    /// Register the REST routes of the module on `router`.
    pub fn register_rest(&self, router: axum::Router) -> axum::Router {
        info!("Registering horses REST routes");
        routes::register_routes(router, &self.services)
    }

    #[must_use]
    pub fn services(&self) -> &AppServices {
        &self.services
    }

    /// In-process client for other components of the application.
    #[must_use]
    pub fn client(&self) -> Arc<dyn horses_sdk::HorsesClientV1> {
        Arc::new(HorsesLocalClient::new(self.services.clone()))
    }
}
