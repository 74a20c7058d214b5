use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

/// Sex of a horse. Persisted and transported by its upper-case name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sex {
    Female,
    Male,
}

impl Sex {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Sex::Female => "FEMALE",
            Sex::Male => "MALE",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FEMALE" => Ok(Sex::Female),
            "MALE" => Ok(Sex::Male),
            other => Err(format!("unknown sex '{other}'")),
        }
    }
}

/// A persisted horse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Horse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub date_of_birth: NaiveDate,
    pub sex: Sex,
    pub image: Option<String>,
    pub owner_id: Option<i64>,
    pub parent_female_id: Option<i64>,
    pub parent_male_id: Option<i64>,
}

/// Data for creating a horse; the id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHorse {
    pub name: String,
    pub description: Option<String>,
    pub date_of_birth: NaiveDate,
    pub sex: Sex,
    pub image: Option<String>,
    pub owner_id: Option<i64>,
    pub parent_female_id: Option<i64>,
    pub parent_male_id: Option<i64>,
}

impl NewHorse {
    /// Turn the payload into a full replacement of the horse with the given id.
    #[must_use]
    pub fn into_update(self, id: i64) -> HorseUpdate {
        HorseUpdate {
            id,
            name: self.name,
            description: self.description,
            date_of_birth: self.date_of_birth,
            sex: self.sex,
            image: self.image,
            owner_id: self.owner_id,
            parent_female_id: self.parent_female_id,
            parent_male_id: self.parent_male_id,
        }
    }
}

/// Full replacement of all mutable fields of an existing horse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HorseUpdate {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub date_of_birth: NaiveDate,
    pub sex: Sex,
    pub image: Option<String>,
    pub owner_id: Option<i64>,
    pub parent_female_id: Option<i64>,
    pub parent_male_id: Option<i64>,
}

/// Search criteria for horses. All present criteria must match.
///
/// Blank strings are treated like absent criteria.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HorseSearch {
    pub name: Option<String>,
    pub description: Option<String>,
    /// Only horses born strictly before this date.
    pub born_before: Option<NaiveDate>,
    pub sex: Option<Sex>,
    /// Substring of the owner's "first last" name.
    pub owner_name: Option<String>,
    pub limit: Option<u64>,
}

fn is_blank(value: Option<&String>) -> bool {
    value.is_none_or(|s| s.trim().is_empty())
}

impl HorseSearch {
    /// True when no criterion would constrain the result.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        is_blank(self.name.as_ref())
            && is_blank(self.description.as_ref())
            && is_blank(self.owner_name.as_ref())
            && self.born_before.is_none()
            && self.sex.is_none()
            && self.limit.is_none()
    }
}

/// A persisted owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Owner {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOwner {
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OwnerSearch {
    /// Substring of "first last"; absent matches every owner.
    pub name: Option<String>,
    pub max_amount: Option<u64>,
}

/// Horse as shown in list and search results, with its owner resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HorseListItem {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub date_of_birth: NaiveDate,
    pub sex: Sex,
    pub image: Option<String>,
    pub owner: Option<Owner>,
    pub parent_female_id: Option<i64>,
    pub parent_male_id: Option<i64>,
}

/// Horse detail view, with the full owner embedded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HorseDetail {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub date_of_birth: NaiveDate,
    pub sex: Sex,
    pub image: Option<String>,
    pub owner: Option<Owner>,
    pub parent_female_id: Option<i64>,
    pub parent_male_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sex_parses_its_own_names() {
        for sex in [Sex::Female, Sex::Male] {
            assert_eq!(sex.as_str().parse::<Sex>(), Ok(sex));
        }
        assert!("female".parse::<Sex>().is_err());
    }

    #[test]
    fn blank_criteria_count_as_empty_search() {
        let search = HorseSearch {
            name: Some("   ".to_owned()),
            owner_name: Some(String::new()),
            ..HorseSearch::default()
        };
        assert!(search.is_empty());

        let search = HorseSearch {
            sex: Some(Sex::Male),
            ..HorseSearch::default()
        };
        assert!(!search.is_empty());
    }

    #[test]
    fn into_update_keeps_every_field() {
        let new = NewHorse {
            name: "Storm".to_owned(),
            description: Some("grey".to_owned()),
            date_of_birth: NaiveDate::from_ymd_opt(2015, 1, 1).unwrap(),
            sex: Sex::Female,
            image: None,
            owner_id: Some(3),
            parent_female_id: Some(4),
            parent_male_id: None,
        };
        let update = new.clone().into_update(9);
        assert_eq!(update.id, 9);
        assert_eq!(update.name, new.name);
        assert_eq!(update.owner_id, Some(3));
        assert_eq!(update.parent_female_id, Some(4));
    }
}
