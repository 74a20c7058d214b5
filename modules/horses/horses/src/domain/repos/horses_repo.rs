use async_trait::async_trait;
use horses_sdk::{Horse, HorseSearch, HorseUpdate, NewHorse, Sex};

use crate::domain::error::DomainError;

/// Repository trait for Horse persistence operations.
///
/// Keyed lookups and writes fail with `DomainError::HorseNotFound` when the id does not
/// exist, and with `DomainError::Fatal` when the store returns more than one row for a
/// unique id.
#[async_trait]
pub trait HorsesRepository: Send + Sync {
    /// All horses, ordered by id.
    async fn get_all(&self) -> Result<Vec<Horse>, DomainError>;

    async fn get_by_id(&self, id: i64) -> Result<Horse, DomainError>;

    /// Insert a horse and return it with the id generated by the store.
    async fn create(&self, horse: NewHorse) -> Result<Horse, DomainError>;

    /// Replace all mutable fields of the horse identified by `update.id`.
    async fn update(&self, update: HorseUpdate) -> Result<Horse, DomainError>;

    async fn delete(&self, id: i64) -> Result<(), DomainError>;

    /// Horses matching every present criterion of `criteria`.
    async fn search(&self, criteria: &HorseSearch) -> Result<Vec<Horse>, DomainError>;

    /// Number of horses referencing the given owner.
    async fn count_by_owner(&self, owner_id: i64) -> Result<u64, DomainError>;

    /// Number of horses naming `parent_id` in the parent slot of the given sex.
    async fn count_offspring(&self, parent_id: i64, slot: Sex) -> Result<u64, DomainError>;
}
