//! Infrastructure storage layer: database persistence for horses and owners.
//!
//! All SeaORM-specific code lives here:
//! - `entity/` - SeaORM entity definitions (`horse`, `owner`)
//! - `mapper.rs` - Conversions between SeaORM models and SDK contract types
//! - `migrations/` - Database schema migrations
//! - `*_sea_repo.rs` - Repository implementations over a `DatabaseConnection`
//! - `seed.rs` - Demo data for empty databases

pub mod db;
pub mod entity;
pub mod horses_sea_repo;
pub mod mapper;
pub mod migrations;
pub mod owners_sea_repo;
pub mod seed;

pub use horses_sea_repo::SeaHorsesRepository;
pub use owners_sea_repo::SeaOwnersRepository;
