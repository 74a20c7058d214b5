use async_trait::async_trait;
use horses_sdk::{Horse, HorseSearch, HorseUpdate, NewHorse, Sex};
use sea_orm::sea_query::{Expr, Func, LikeExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, JoinType,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};
use tracing::debug;

use crate::domain::error::DomainError;
use crate::domain::repos::HorsesRepository;
use crate::infra::storage::db::{LIKE_ESCAPE, contains_pattern, db_err, owner_name_contains};
use crate::infra::storage::entity::HorseSex;
use crate::infra::storage::entity::horse::{
    ActiveModel as HorseAM, Column, Entity as HorseEntity, Relation,
};

/// `SeaORM`-backed implementation of [`HorsesRepository`].
#[derive(Clone)]
pub struct SeaHorsesRepository {
    db: DatabaseConnection,
}

impl SeaHorsesRepository {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(|s| s.trim()).filter(|s| !s.is_empty())
}

/// Case-insensitive substring match of `column` against `needle`.
fn column_contains(column: Column, needle: &str) -> sea_orm::sea_query::SimpleExpr {
    Expr::expr(Func::lower(Expr::col((HorseEntity, column))))
        .like(LikeExpr::new(contains_pattern(needle)).escape(LIKE_ESCAPE))
}

fn search_condition(criteria: &HorseSearch) -> Condition {
    let mut cond = Condition::all();
    if let Some(name) = non_blank(criteria.name.as_ref()) {
        cond = cond.add(column_contains(Column::Name, name));
    }
    if let Some(description) = non_blank(criteria.description.as_ref()) {
        cond = cond.add(column_contains(Column::Description, description));
    }
    if let Some(born_before) = criteria.born_before {
        cond = cond.add(Column::DateOfBirth.lt(born_before));
    }
    if let Some(sex) = criteria.sex {
        cond = cond.add(Column::Sex.eq(HorseSex::from(sex)));
    }
    if let Some(owner_name) = non_blank(criteria.owner_name.as_ref()) {
        cond = cond.add(owner_name_contains(owner_name));
    }
    cond
}

#[async_trait]
impl HorsesRepository for SeaHorsesRepository {
    async fn get_all(&self) -> Result<Vec<Horse>, DomainError> {
        let rows = HorseEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Horse, DomainError> {
        let mut rows = HorseEntity::find()
            .filter(Column::Id.eq(id))
            .all(&self.db)
            .await
            .map_err(db_err)?;

        if rows.len() > 1 {
            return Err(DomainError::fatal(format!(
                "Too many horses with ID {id} found"
            )));
        }
        rows.pop()
            .map(Into::into)
            .ok_or(DomainError::horse_not_found(id))
    }

    async fn create(&self, horse: NewHorse) -> Result<Horse, DomainError> {
        let m: HorseAM = horse.into();
        let inserted = m.insert(&self.db).await.map_err(db_err)?;
        debug!(id = inserted.id, "Inserted horse row");
        Ok(inserted.into())
    }

    async fn update(&self, update: HorseUpdate) -> Result<Horse, DomainError> {
        let id = update.id;
        let m: HorseAM = update.into();
        let result = HorseEntity::update_many()
            .set(m)
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(DomainError::horse_not_found(id));
        }
        self.get_by_id(id).await
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        let result = HorseEntity::delete_many()
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(DomainError::horse_not_found(id));
        }
        Ok(())
    }

    async fn search(&self, criteria: &HorseSearch) -> Result<Vec<Horse>, DomainError> {
        let mut query = HorseEntity::find();
        if non_blank(criteria.owner_name.as_ref()).is_some() {
            query = query.join(JoinType::InnerJoin, Relation::Owner.def());
        }
        let rows = query
            .filter(search_condition(criteria))
            .order_by_asc(Column::Id)
            .limit(criteria.limit)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn count_by_owner(&self, owner_id: i64) -> Result<u64, DomainError> {
        HorseEntity::find()
            .filter(Column::OwnerId.eq(owner_id))
            .count(&self.db)
            .await
            .map_err(db_err)
    }

    async fn count_offspring(&self, parent_id: i64, slot: Sex) -> Result<u64, DomainError> {
        let column = match slot {
            Sex::Female => Column::ParentFemaleId,
            Sex::Male => Column::ParentMaleId,
        };
        HorseEntity::find()
            .filter(column.eq(parent_id))
            .count(&self.db)
            .await
            .map_err(db_err)
    }
}
