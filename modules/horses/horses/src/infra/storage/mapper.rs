use horses_sdk::{Horse, HorseUpdate, NewHorse, NewOwner, Owner, Sex};
use sea_orm::{NotSet, Set};

use super::entity::{HorseSex, horse, owner};

impl From<Sex> for HorseSex {
    fn from(sex: Sex) -> Self {
        match sex {
            Sex::Female => HorseSex::Female,
            Sex::Male => HorseSex::Male,
        }
    }
}

impl From<HorseSex> for Sex {
    fn from(sex: HorseSex) -> Self {
        match sex {
            HorseSex::Female => Sex::Female,
            HorseSex::Male => Sex::Male,
        }
    }
}

/// Convert a database entity to a contract model
impl From<horse::Model> for Horse {
    fn from(m: horse::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            description: m.description,
            date_of_birth: m.date_of_birth,
            sex: m.sex.into(),
            image: m.image,
            owner_id: m.owner_id,
            parent_female_id: m.parent_female_id,
            parent_male_id: m.parent_male_id,
        }
    }
}

impl From<owner::Model> for Owner {
    fn from(m: owner::Model) -> Self {
        Self {
            id: m.id,
            first_name: m.first_name,
            last_name: m.last_name,
            email: m.email,
            description: m.description,
        }
    }
}

/// Insert model; the id is generated by the store.
impl From<NewHorse> for horse::ActiveModel {
    fn from(h: NewHorse) -> Self {
        Self {
            id: NotSet,
            name: Set(h.name),
            description: Set(h.description),
            date_of_birth: Set(h.date_of_birth),
            sex: Set(h.sex.into()),
            image: Set(h.image),
            owner_id: Set(h.owner_id),
            parent_female_id: Set(h.parent_female_id),
            parent_male_id: Set(h.parent_male_id),
        }
    }
}

/// Column values of a full-row update. The id stays unset and goes into the filter.
impl From<HorseUpdate> for horse::ActiveModel {
    fn from(h: HorseUpdate) -> Self {
        Self {
            id: NotSet,
            name: Set(h.name),
            description: Set(h.description),
            date_of_birth: Set(h.date_of_birth),
            sex: Set(h.sex.into()),
            image: Set(h.image),
            owner_id: Set(h.owner_id),
            parent_female_id: Set(h.parent_female_id),
            parent_male_id: Set(h.parent_male_id),
        }
    }
}

impl From<NewOwner> for owner::ActiveModel {
    fn from(o: NewOwner) -> Self {
        Self {
            id: NotSet,
            first_name: Set(o.first_name),
            last_name: Set(o.last_name),
            email: Set(o.email),
            description: Set(o.description),
        }
    }
}
