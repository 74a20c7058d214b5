use std::collections::HashMap;
use std::sync::Arc;

use horses_sdk::{NewOwner, Owner, OwnerSearch};
use tracing::{info, instrument};

use super::ServiceConfig;
use crate::domain::error::DomainError;
use crate::domain::repos::{HorsesRepository, OwnersRepository};
use crate::domain::validator;

pub struct OwnersService {
    repo: Arc<dyn OwnersRepository>,
    horses: Arc<dyn HorsesRepository>,
    config: Arc<ServiceConfig>,
}

impl OwnersService {
    pub fn new(
        repo: Arc<dyn OwnersRepository>,
        horses: Arc<dyn HorsesRepository>,
        config: Arc<ServiceConfig>,
    ) -> Self {
        Self {
            repo,
            horses,
            config,
        }
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i64) -> Result<Owner, DomainError> {
        self.repo.get_by_id(id).await
    }

    /// Owners for `ids` keyed by id; ids without a row are left out.
    pub async fn get_all_by_id(&self, ids: &[i64]) -> Result<HashMap<i64, Owner>, DomainError> {
        let owners = self.repo.get_all_by_id(ids).await?;
        Ok(owners.into_iter().map(|o| (o.id, o)).collect())
    }

    #[instrument(skip(self))]
    pub async fn search(&self, criteria: &OwnerSearch) -> Result<Vec<Owner>, DomainError> {
        self.repo.search(criteria).await
    }

    #[instrument(skip(self, owner))]
    pub async fn create(&self, owner: NewOwner) -> Result<Owner, DomainError> {
        validator::validate_owner(&owner, &self.config)?;
        let created = self.repo.create(owner).await?;
        info!(id = created.id, "Created owner");
        Ok(created)
    }

    /// Delete an owner no horse refers to.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), DomainError> {
        // NotFound takes precedence over Conflict
        self.repo.get_by_id(id).await?;
        let horses = self.horses.count_by_owner(id).await?;
        if horses > 0 {
            return Err(DomainError::conflict(format!(
                "Owner {id} still owns {horses} horse(s)"
            )));
        }
        self.repo.delete(id).await?;
        info!(id, "Deleted owner");
        Ok(())
    }
}
