use chrono::NaiveDate;
use horses_sdk::{
    HorseDetail, HorseListItem, HorseSearch, NewHorse, NewOwner, Owner, OwnerSearch, Sex,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SexDto {
    Female,
    Male,
}

impl From<Sex> for SexDto {
    fn from(sex: Sex) -> Self {
        match sex {
            Sex::Female => SexDto::Female,
            Sex::Male => SexDto::Male,
        }
    }
}

impl From<SexDto> for Sex {
    fn from(sex: SexDto) -> Self {
        match sex {
            SexDto::Female => Sex::Female,
            SexDto::Male => Sex::Male,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OwnerDto {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub description: Option<String>,
}

impl From<Owner> for OwnerDto {
    fn from(o: Owner) -> Self {
        Self {
            id: o.id,
            first_name: o.first_name,
            last_name: o.last_name,
            email: o.email,
            description: o.description,
        }
    }
}

/// Horse as returned by list and search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HorseListDto {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub date_of_birth: NaiveDate,
    pub sex: SexDto,
    pub image: Option<String>,
    pub owner: Option<OwnerDto>,
    pub parent_female_id: Option<i64>,
    pub parent_male_id: Option<i64>,
}

impl From<HorseListItem> for HorseListDto {
    fn from(h: HorseListItem) -> Self {
        Self {
            id: h.id,
            name: h.name,
            description: h.description,
            date_of_birth: h.date_of_birth,
            sex: h.sex.into(),
            image: h.image,
            owner: h.owner.map(Into::into),
            parent_female_id: h.parent_female_id,
            parent_male_id: h.parent_male_id,
        }
    }
}

/// Single horse with its owner embedded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HorseDetailDto {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub date_of_birth: NaiveDate,
    pub sex: SexDto,
    pub image: Option<String>,
    pub owner: Option<OwnerDto>,
    pub parent_female_id: Option<i64>,
    pub parent_male_id: Option<i64>,
}

impl From<HorseDetail> for HorseDetailDto {
    fn from(h: HorseDetail) -> Self {
        Self {
            id: h.id,
            name: h.name,
            description: h.description,
            date_of_birth: h.date_of_birth,
            sex: h.sex.into(),
            image: h.image,
            owner: h.owner.map(Into::into),
            parent_female_id: h.parent_female_id,
            parent_male_id: h.parent_male_id,
        }
    }
}

/// Body of `POST /horses` and `PUT /horses/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HorseWriteRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub date_of_birth: NaiveDate,
    pub sex: SexDto,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub owner_id: Option<i64>,
    #[serde(default)]
    pub parent_female_id: Option<i64>,
    #[serde(default)]
    pub parent_male_id: Option<i64>,
}

impl From<HorseWriteRequest> for NewHorse {
    fn from(req: HorseWriteRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            date_of_birth: req.date_of_birth,
            sex: req.sex.into(),
            image: req.image,
            owner_id: req.owner_id,
            parent_female_id: req.parent_female_id,
            parent_male_id: req.parent_male_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OwnerCreateRequest {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl From<OwnerCreateRequest> for NewOwner {
    fn from(req: OwnerCreateRequest) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            description: req.description,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct HorseSearchQuery {
    /// Substring of the horse name, case-insensitive
    pub name: Option<String>,
    /// Substring of the description, case-insensitive
    pub description: Option<String>,
    /// Only horses born strictly before this date
    pub born_before: Option<NaiveDate>,
    pub sex: Option<SexDto>,
    /// Substring of the owner's "first last" name, case-insensitive
    pub owner_name: Option<String>,
    pub limit: Option<u64>,
}

impl From<HorseSearchQuery> for HorseSearch {
    fn from(q: HorseSearchQuery) -> Self {
        Self {
            name: q.name,
            description: q.description,
            born_before: q.born_before,
            sex: q.sex.map(Into::into),
            owner_name: q.owner_name,
            limit: q.limit,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct OwnerSearchQuery {
    /// Substring of the owner's "first last" name, case-insensitive
    pub name: Option<String>,
    pub max_amount: Option<u64>,
}

impl From<OwnerSearchQuery> for OwnerSearch {
    fn from(q: OwnerSearchQuery) -> Self {
        Self {
            name: q.name,
            max_amount: q.max_amount,
        }
    }
}
