use async_trait::async_trait;
use horses_sdk::{NewOwner, Owner, OwnerSearch};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use tracing::debug;

use crate::domain::error::DomainError;
use crate::domain::repos::OwnersRepository;
use crate::infra::storage::db::{db_err, owner_name_contains};
use crate::infra::storage::entity::owner::{ActiveModel as OwnerAM, Column, Entity as OwnerEntity};

/// `SeaORM`-backed implementation of [`OwnersRepository`].
#[derive(Clone)]
pub struct SeaOwnersRepository {
    db: DatabaseConnection,
}

impl SeaOwnersRepository {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OwnersRepository for SeaOwnersRepository {
    async fn get_by_id(&self, id: i64) -> Result<Owner, DomainError> {
        let mut rows = OwnerEntity::find()
            .filter(Column::Id.eq(id))
            .all(&self.db)
            .await
            .map_err(db_err)?;

        if rows.len() > 1 {
            return Err(DomainError::fatal(format!(
                "Too many owners with ID {id} found"
            )));
        }
        rows.pop()
            .map(Into::into)
            .ok_or(DomainError::owner_not_found(id))
    }

    async fn get_all_by_id(&self, ids: &[i64]) -> Result<Vec<Owner>, DomainError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let rows = OwnerEntity::find()
            .filter(Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        debug!(requested = ids.len(), found = rows.len(), "Fetched owners by id");
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn search(&self, criteria: &OwnerSearch) -> Result<Vec<Owner>, DomainError> {
        let mut query = OwnerEntity::find();
        if let Some(name) = criteria
            .name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            query = query.filter(owner_name_contains(name));
        }
        let rows = query
            .order_by_asc(Column::Id)
            .limit(criteria.max_amount)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn create(&self, owner: NewOwner) -> Result<Owner, DomainError> {
        let m: OwnerAM = owner.into();
        let inserted = m.insert(&self.db).await.map_err(db_err)?;
        debug!(id = inserted.id, "Inserted owner row");
        Ok(inserted.into())
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        let result = OwnerEntity::delete_many()
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(DomainError::owner_not_found(id));
        }
        Ok(())
    }
}
