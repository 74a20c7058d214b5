//! `HorsesClientV1` trait definition.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::errors::HorsesError;
use crate::models::{
    HorseDetail, HorseListItem, HorseSearch, HorseUpdate, NewHorse, NewOwner, Owner, OwnerSearch,
};

/// Public API of the horses module (Version 1).
///
/// Implemented in-process by the module's local client; every method goes to the store.
#[async_trait]
pub trait HorsesClientV1: Send + Sync {
    /// Horses matching `criteria`; an empty search lists every horse.
    async fn search_horses(&self, criteria: HorseSearch)
    -> Result<Vec<HorseListItem>, HorsesError>;

    async fn get_horse(&self, id: i64) -> Result<HorseDetail, HorsesError>;

    async fn create_horse(&self, horse: NewHorse) -> Result<HorseDetail, HorsesError>;

    async fn update_horse(&self, update: HorseUpdate) -> Result<HorseDetail, HorsesError>;

    async fn delete_horse(&self, id: i64) -> Result<(), HorsesError>;

    async fn get_owner(&self, id: i64) -> Result<Owner, HorsesError>;

    /// Owners for the given ids, keyed by id. Unknown ids are left out.
    async fn get_owners(&self, ids: Vec<i64>) -> Result<HashMap<i64, Owner>, HorsesError>;

    async fn search_owners(&self, criteria: OwnerSearch) -> Result<Vec<Owner>, HorsesError>;

    async fn create_owner(&self, owner: NewOwner) -> Result<Owner, HorsesError>;

    /// Fails with `Conflict` while any horse still references the owner.
    async fn delete_owner(&self, id: i64) -> Result<(), HorsesError>;
}
