use async_trait::async_trait;
use horses_sdk::{NewOwner, Owner, OwnerSearch};

use crate::domain::error::DomainError;

/// Repository trait for Owner persistence operations.
#[async_trait]
pub trait OwnersRepository: Send + Sync {
    async fn get_by_id(&self, id: i64) -> Result<Owner, DomainError>;

    /// Best-effort batch fetch: ids without a row are silently left out.
    async fn get_all_by_id(&self, ids: &[i64]) -> Result<Vec<Owner>, DomainError>;

    async fn search(&self, criteria: &OwnerSearch) -> Result<Vec<Owner>, DomainError>;

    async fn create(&self, owner: NewOwner) -> Result<Owner, DomainError>;

    async fn delete(&self, id: i64) -> Result<(), DomainError>;
}
