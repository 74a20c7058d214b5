//! Local implementation of `HorsesClientV1`.
//!
//! Delegates to the domain services and converts errors to SDK error types.

use std::collections::HashMap;

use async_trait::async_trait;
use horses_sdk::{
    HorseDetail, HorseListItem, HorseSearch, HorseUpdate, HorsesClientV1, HorsesError, NewHorse,
    NewOwner, Owner, OwnerSearch,
};

use crate::domain::service::AppServices;

pub struct HorsesLocalClient {
    services: AppServices,
}

impl HorsesLocalClient {
    #[must_use]
    pub fn new(services: AppServices) -> Self {
        Self { services }
    }
}

#[async_trait]
impl HorsesClientV1 for HorsesLocalClient {
    async fn search_horses(
        &self,
        criteria: HorseSearch,
    ) -> Result<Vec<HorseListItem>, HorsesError> {
        self.services
            .horses
            .search(&criteria)
            .await
            .map_err(Into::into)
    }

    async fn get_horse(&self, id: i64) -> Result<HorseDetail, HorsesError> {
        self.services.horses.get_by_id(id).await.map_err(Into::into)
    }

    async fn create_horse(&self, horse: NewHorse) -> Result<HorseDetail, HorsesError> {
        self.services.horses.create(horse).await.map_err(Into::into)
    }

    async fn update_horse(&self, update: HorseUpdate) -> Result<HorseDetail, HorsesError> {
        self.services.horses.update(update).await.map_err(Into::into)
    }

    async fn delete_horse(&self, id: i64) -> Result<(), HorsesError> {
        self.services.horses.delete(id).await.map_err(Into::into)
    }

    async fn get_owner(&self, id: i64) -> Result<Owner, HorsesError> {
        self.services.owners.get_by_id(id).await.map_err(Into::into)
    }

    async fn get_owners(&self, ids: Vec<i64>) -> Result<HashMap<i64, Owner>, HorsesError> {
        self.services
            .owners
            .get_all_by_id(&ids)
            .await
            .map_err(Into::into)
    }

    async fn search_owners(&self, criteria: OwnerSearch) -> Result<Vec<Owner>, HorsesError> {
        self.services
            .owners
            .search(&criteria)
            .await
            .map_err(Into::into)
    }

    async fn create_owner(&self, owner: NewOwner) -> Result<Owner, HorsesError> {
        self.services.owners.create(owner).await.map_err(Into::into)
    }

    async fn delete_owner(&self, id: i64) -> Result<(), HorsesError> {
        self.services.owners.delete(id).await.map_err(Into::into)
    }
}
