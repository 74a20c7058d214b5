//! Entity to view conversions with owners resolved from a lookup map.

use std::collections::HashMap;

use horses_sdk::{Horse, HorseDetail, HorseListItem, Owner};

use super::error::DomainError;

/// Look up the owner of `horse` in `owners`.
///
/// A horse without an owner maps to `None`. A persisted horse whose owner id is missing
/// from the map points at a row that does not exist, which is a `Fatal` error.
fn resolve_owner(horse: &Horse, owners: &HashMap<i64, Owner>) -> Result<Option<Owner>, DomainError> {
    match horse.owner_id {
        None => Ok(None),
        Some(owner_id) => owners.get(&owner_id).cloned().map(Some).ok_or_else(|| {
            DomainError::fatal(format!(
                "Horse {} refers to non-existing owner {owner_id}",
                horse.id
            ))
        }),
    }
}

pub fn to_list_item(
    horse: Horse,
    owners: &HashMap<i64, Owner>,
) -> Result<HorseListItem, DomainError> {
    let owner = resolve_owner(&horse, owners)?;
    Ok(HorseListItem {
        id: horse.id,
        name: horse.name,
        description: horse.description,
        date_of_birth: horse.date_of_birth,
        sex: horse.sex,
        image: horse.image,
        owner,
        parent_female_id: horse.parent_female_id,
        parent_male_id: horse.parent_male_id,
    })
}

pub fn to_detail(horse: Horse, owners: &HashMap<i64, Owner>) -> Result<HorseDetail, DomainError> {
    let owner = resolve_owner(&horse, owners)?;
    Ok(HorseDetail {
        id: horse.id,
        name: horse.name,
        description: horse.description,
        date_of_birth: horse.date_of_birth,
        sex: horse.sex,
        image: horse.image,
        owner,
        parent_female_id: horse.parent_female_id,
        parent_male_id: horse.parent_male_id,
    })
}
