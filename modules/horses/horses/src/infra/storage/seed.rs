//! Demo data for a fresh database.

use chrono::NaiveDate;
use horses_sdk::{NewHorse, NewOwner, Sex};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use tracing::info;

use crate::domain::error::DomainError;
use crate::domain::repos::{HorsesRepository, OwnersRepository};
use crate::infra::storage::db::db_err;
use crate::infra::storage::entity::{horse, owner};
use crate::infra::storage::{SeaHorsesRepository, SeaOwnersRepository};

const OWNERS: &[(&str, &str, Option<&str>)] = &[
    ("Jane", "Doe", Some("jane.doe@example.com")),
    ("Max", "Mustermann", None),
    ("Erika", "Musterfrau", Some("erika@example.com")),
];

fn date(y: i32, m: u32, d: u32) -> Result<NaiveDate, DomainError> {
    NaiveDate::from_ymd_opt(y, m, d)
        .ok_or_else(|| DomainError::fatal(format!("invalid seed date {y}-{m}-{d}")))
}

fn horse(
    name: &str,
    description: &str,
    date_of_birth: NaiveDate,
    sex: Sex,
    owner_id: Option<i64>,
) -> NewHorse {
    NewHorse {
        name: name.to_owned(),
        description: Some(description.to_owned()),
        date_of_birth,
        sex,
        image: None,
        owner_id,
        parent_female_id: None,
        parent_male_id: None,
    }
}

/// Insert a few owners and a small family of horses when both tables are empty.
///
/// Returns `true` when data was inserted.
///
/// # Errors
/// Propagates any store failure.
pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<bool, DomainError> {
    let owners_count = owner::Entity::find().count(db).await.map_err(db_err)?;
    let horses_count = horse::Entity::find().count(db).await.map_err(db_err)?;
    if owners_count > 0 || horses_count > 0 {
        info!(owners_count, horses_count, "Database not empty, skipping demo data");
        return Ok(false);
    }

    let owners_repo = SeaOwnersRepository::new(db.clone());
    let horses_repo = SeaHorsesRepository::new(db.clone());

    let mut owner_ids = Vec::with_capacity(OWNERS.len());
    for (first, last, email) in OWNERS {
        let created = owners_repo
            .create(NewOwner {
                first_name: (*first).to_owned(),
                last_name: (*last).to_owned(),
                email: email.map(str::to_owned),
                description: None,
            })
            .await?;
        owner_ids.push(created.id);
    }
    let jane = owner_ids.first().copied();
    let max = owner_ids.get(1).copied();

    let storm = horses_repo
        .create(horse("Storm", "Grey mare", date(2015, 1, 1)?, Sex::Female, jane))
        .await?;
    let thunder = horses_repo
        .create(horse("Thunder", "Bay stallion", date(2012, 4, 20)?, Sex::Male, max))
        .await?;

    let mut colt = horse("Colt", "Storm's first foal", date(2020, 5, 3)?, Sex::Male, jane);
    colt.parent_female_id = Some(storm.id);
    colt.parent_male_id = Some(thunder.id);
    horses_repo.create(colt).await?;

    let mut filly = horse("Breeze", "Quick and curious", date(2021, 6, 14)?, Sex::Female, None);
    filly.parent_female_id = Some(storm.id);
    horses_repo.create(filly).await?;

    info!(owners = owner_ids.len(), horses = 4, "Inserted demo data");
    Ok(true)
}
