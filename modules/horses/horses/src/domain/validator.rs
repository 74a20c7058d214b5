//! Field-level and referential checks run before any horse or owner is written.

use chrono::NaiveDate;
use horses_sdk::{Horse, HorseUpdate, NewHorse, NewOwner, Sex};

use super::error::{DomainError, Violation};
use super::service::ServiceConfig;

/// Fields shared by create and update payloads.
struct HorseFields<'a> {
    name: &'a str,
    description: Option<&'a str>,
    date_of_birth: NaiveDate,
    image: Option<&'a str>,
}

impl<'a> From<&'a NewHorse> for HorseFields<'a> {
    fn from(h: &'a NewHorse) -> Self {
        Self {
            name: &h.name,
            description: h.description.as_deref(),
            date_of_birth: h.date_of_birth,
            image: h.image.as_deref(),
        }
    }
}

impl<'a> From<&'a HorseUpdate> for HorseFields<'a> {
    fn from(h: &'a HorseUpdate) -> Self {
        Self {
            name: &h.name,
            description: h.description.as_deref(),
            date_of_birth: h.date_of_birth,
            image: h.image.as_deref(),
        }
    }
}

fn check_horse_fields(
    fields: &HorseFields<'_>,
    config: &ServiceConfig,
    today: NaiveDate,
    violations: &mut Vec<Violation>,
) {
    check_required(violations, "name", fields.name, config.max_name_length);
    if let Some(description) = fields.description {
        check_max_len(
            violations,
            "description",
            description,
            config.max_description_length,
        );
    }
    if let Some(image) = fields.image {
        check_max_len(violations, "image", image, config.max_description_length);
    }
    if fields.date_of_birth > today {
        violations.push(Violation::new(
            "dateOfBirth",
            "Date of birth must not be in the future",
        ));
    }
}

fn check_required(violations: &mut Vec<Violation>, field: &'static str, value: &str, max: usize) {
    if value.trim().is_empty() {
        violations.push(Violation::new(field, "must not be blank"));
    } else {
        check_max_len(violations, field, value, max);
    }
}

fn check_max_len(violations: &mut Vec<Violation>, field: &'static str, value: &str, max: usize) {
    if value.chars().count() > max {
        violations.push(Violation::new(
            field,
            format!("exceeds maximum length of {max}"),
        ));
    }
}

fn finish(subject: &str, violations: Vec<Violation>) -> Result<(), DomainError> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(DomainError::validation(
            format!("Validation of {subject} failed"),
            violations,
        ))
    }
}

pub fn validate_for_create(
    horse: &NewHorse,
    config: &ServiceConfig,
    today: NaiveDate,
) -> Result<(), DomainError> {
    let mut violations = Vec::new();
    check_horse_fields(&horse.into(), config, today, &mut violations);
    finish("horse for create", violations)
}

pub fn validate_for_update(
    horse: &HorseUpdate,
    config: &ServiceConfig,
    today: NaiveDate,
) -> Result<(), DomainError> {
    let mut violations = Vec::new();
    check_horse_fields(&horse.into(), config, today, &mut violations);
    if horse.parent_female_id == Some(horse.id) {
        violations.push(Violation::new(
            "parentFemaleId",
            "A horse cannot be its own parent",
        ));
    }
    if horse.parent_male_id == Some(horse.id) {
        violations.push(Violation::new(
            "parentMaleId",
            "A horse cannot be its own parent",
        ));
    }
    finish("horse for update", violations)
}

/// A referenced parent must have the sex its slot demands.
pub fn check_parent_sex(parent: &Horse, expected: Sex) -> Result<(), DomainError> {
    if parent.sex == expected {
        return Ok(());
    }
    let (field, label) = match expected {
        Sex::Female => ("parentFemaleId", "female"),
        Sex::Male => ("parentMaleId", "male"),
    };
    Err(DomainError::invalid_field(
        field,
        format!("The specified parent {label} must be of gender {expected}"),
    ))
}

/// A horse registered as a parent keeps the sex of its parent slot.
pub fn check_sex_change(current: Sex, offspring: u64) -> Result<(), DomainError> {
    if offspring == 0 {
        return Ok(());
    }
    Err(DomainError::invalid_field(
        "sex",
        format!("The horse is registered as {current} parent of {offspring} horse(s)"),
    ))
}

pub fn validate_owner(owner: &NewOwner, config: &ServiceConfig) -> Result<(), DomainError> {
    let mut violations = Vec::new();
    check_required(
        &mut violations,
        "firstName",
        &owner.first_name,
        config.max_name_length,
    );
    check_required(
        &mut violations,
        "lastName",
        &owner.last_name,
        config.max_name_length,
    );
    if let Some(email) = owner.email.as_deref() {
        check_max_len(&mut violations, "email", email, config.max_name_length);
        if !looks_like_email(email) {
            violations.push(Violation::new("email", "must be a valid email address"));
        }
    }
    if let Some(description) = owner.description.as_deref() {
        check_max_len(
            &mut violations,
            "description",
            description,
            config.max_description_length,
        );
    }
    finish("owner for create", violations)
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}
