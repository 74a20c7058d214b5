#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Test support utilities for horses integration tests.
//!
//! Provides an in-memory database with migrations applied and builders for test data.

#![allow(dead_code)] // Support module provides utilities that may not all be used

use chrono::NaiveDate;
use horses::{HorsesConfig, HorsesModule, NewHorse, NewOwner, Sex};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// Fresh in-memory SQLite database, migrated.
///
/// One pooled connection, so every query sees the same database.
pub async fn inmem_db() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(opts)
        .await
        .expect("Failed to connect to in-memory database");
    HorsesModule::new(db.clone(), HorsesConfig::default())
        .migrate()
        .await
        .expect("Failed to run migrations");
    db
}

/// Test context bundling a migrated database and the module built on top of it.
pub struct TestContext {
    pub db: DatabaseConnection,
    pub module: HorsesModule,
}

impl TestContext {
    pub async fn new() -> Self {
        let db = inmem_db().await;
        let module = HorsesModule::new(db.clone(), HorsesConfig::default());
        Self { db, module }
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn new_horse(name: &str, sex: Sex, date_of_birth: NaiveDate) -> NewHorse {
    NewHorse {
        name: name.to_owned(),
        description: None,
        date_of_birth,
        sex,
        image: None,
        owner_id: None,
        parent_female_id: None,
        parent_male_id: None,
    }
}

pub fn new_owner(first_name: &str, last_name: &str) -> NewOwner {
    NewOwner {
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        email: None,
        description: None,
    }
}
