use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use horses_sdk::{
    Horse, HorseDetail, HorseListItem, HorseSearch, HorseUpdate, NewHorse, Owner, Sex,
};
use tracing::{debug, error, info, instrument};

use super::{OwnersService, ServiceConfig};
use crate::domain::error::DomainError;
use crate::domain::mapper;
use crate::domain::repos::HorsesRepository;
use crate::domain::validator;

/// Horse use cases: listing with owners resolved, referentially checked writes.
pub struct HorsesService {
    repo: Arc<dyn HorsesRepository>,
    owners: Arc<OwnersService>,
    config: Arc<ServiceConfig>,
}

impl HorsesService {
    pub fn new(
        repo: Arc<dyn HorsesRepository>,
        owners: Arc<OwnersService>,
        config: Arc<ServiceConfig>,
    ) -> Self {
        Self {
            repo,
            owners,
            config,
        }
    }

    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<HorseListItem>, DomainError> {
        let horses = self.repo.get_all().await?;
        self.to_list(horses).await
    }

    /// Horses matching `criteria`; falls back to listing everything when no criterion is set.
    #[instrument(skip(self))]
    pub async fn search(&self, criteria: &HorseSearch) -> Result<Vec<HorseListItem>, DomainError> {
        if criteria.is_empty() {
            return self.list_all().await;
        }
        let horses = self.repo.search(criteria).await?;
        debug!(count = horses.len(), "Horse search matched");
        self.to_list(horses).await
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i64) -> Result<HorseDetail, DomainError> {
        let horse = self.repo.get_by_id(id).await?;
        let owners = self.owner_of(&horse).await?;
        mapper::to_detail(horse, &owners).inspect_err(log_fatal)
    }

    #[instrument(skip(self, horse), fields(name = %horse.name))]
    pub async fn create(&self, horse: NewHorse) -> Result<HorseDetail, DomainError> {
        validator::validate_for_create(&horse, &self.config, today())?;
        self.check_parents(horse.parent_female_id, horse.parent_male_id)
            .await?;
        let owners = self.require_owner(horse.owner_id).await?;

        let created = self.repo.create(horse).await?;
        info!(id = created.id, "Created horse");
        mapper::to_detail(created, &owners)
    }

    #[instrument(skip(self, update), fields(id = update.id))]
    pub async fn update(&self, update: HorseUpdate) -> Result<HorseDetail, DomainError> {
        validator::validate_for_update(&update, &self.config, today())?;
        let current = self.repo.get_by_id(update.id).await?;
        if current.sex != update.sex {
            let offspring = self.repo.count_offspring(current.id, current.sex).await?;
            validator::check_sex_change(current.sex, offspring)?;
        }
        self.check_parents(update.parent_female_id, update.parent_male_id)
            .await?;
        self.check_no_ancestry_cycle(&update).await?;
        let owners = self.require_owner(update.owner_id).await?;

        let updated = self.repo.update(update).await?;
        info!(id = updated.id, "Updated horse");
        mapper::to_detail(updated, &owners)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), DomainError> {
        self.repo.delete(id).await?;
        info!(id, "Deleted horse");
        Ok(())
    }

    /// Referenced parents must exist and have the sex their slot demands.
    async fn check_parents(
        &self,
        parent_female_id: Option<i64>,
        parent_male_id: Option<i64>,
    ) -> Result<(), DomainError> {
        if let Some(id) = parent_female_id {
            let parent = self.repo.get_by_id(id).await?;
            validator::check_parent_sex(&parent, Sex::Female)?;
        }
        if let Some(id) = parent_male_id {
            let parent = self.repo.get_by_id(id).await?;
            validator::check_parent_sex(&parent, Sex::Male)?;
        }
        Ok(())
    }

    /// The updated horse must not appear among the ancestors of its new parents.
    async fn check_no_ancestry_cycle(&self, update: &HorseUpdate) -> Result<(), DomainError> {
        let slots = [
            ("parentFemaleId", update.parent_female_id),
            ("parentMaleId", update.parent_male_id),
        ];
        for (field, parent) in slots {
            let Some(parent) = parent else {
                continue;
            };
            let mut pending = vec![parent];
            let mut seen = BTreeSet::new();
            while let Some(id) = pending.pop() {
                if id == update.id {
                    return Err(DomainError::invalid_field(
                        field,
                        "A horse cannot be its own ancestor",
                    ));
                }
                if !seen.insert(id) {
                    continue;
                }
                let ancestor = self.repo.get_by_id(id).await?;
                pending.extend(ancestor.parent_female_id);
                pending.extend(ancestor.parent_male_id);
            }
        }
        Ok(())
    }

    /// Owner referenced by a write payload; an unknown id is the caller's mistake.
    async fn require_owner(
        &self,
        owner_id: Option<i64>,
    ) -> Result<HashMap<i64, Owner>, DomainError> {
        let Some(owner_id) = owner_id else {
            return Ok(HashMap::new());
        };
        let owner = self.owners.get_by_id(owner_id).await?;
        Ok(HashMap::from([(owner_id, owner)]))
    }

    /// Owner of an already persisted horse; a dangling reference is fatal.
    async fn owner_of(&self, horse: &Horse) -> Result<HashMap<i64, Owner>, DomainError> {
        let Some(owner_id) = horse.owner_id else {
            return Ok(HashMap::new());
        };
        match self.owners.get_by_id(owner_id).await {
            Ok(owner) => Ok(HashMap::from([(owner_id, owner)])),
            Err(e) if e.is_not_found() => {
                let err = DomainError::fatal(format!(
                    "Owner {owner_id} referenced by horse {} not found",
                    horse.id
                ));
                log_fatal(&err);
                Err(err)
            }
            Err(e) => Err(e),
        }
    }

    async fn to_list(&self, horses: Vec<Horse>) -> Result<Vec<HorseListItem>, DomainError> {
        let owner_ids: Vec<i64> = horses
            .iter()
            .filter_map(|h| h.owner_id)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let owners = self.owners.get_all_by_id(&owner_ids).await?;

        horses
            .into_iter()
            .map(|h| mapper::to_list_item(h, &owners))
            .collect::<Result<Vec<_>, _>>()
            .inspect_err(log_fatal)
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn log_fatal(e: &DomainError) {
    if matches!(e, DomainError::Fatal { .. }) {
        error!(error = %e, "Persisted horse data is inconsistent");
    }
}
