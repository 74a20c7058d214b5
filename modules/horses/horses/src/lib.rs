//! Horses Module
//!
//! Horse and owner records with referential checks, stored through `SeaORM` and exposed
//! over a REST API and an in-process client.
//!
//! ## Public API
//!
//! The public API is defined in the `horses-sdk` crate and re-exported here:
//! - `HorsesClientV1` - trait for in-process consumers
//! - `Horse`, `Owner` and their create/update/search/view models
//! - `HorsesError` - error type
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
// === PUBLIC API (from SDK) ===
pub use horses_sdk::{
    Horse, HorseDetail, HorseListItem, HorseSearch, HorseUpdate, HorsesClientV1, HorsesError,
    NewHorse, NewOwner, Owner, OwnerSearch, Sex,
};

// === ERROR CATALOG ===
pub mod errors;

// === MODULE DEFINITION ===
pub mod module;
pub use module::HorsesModule;

pub mod config;
pub use config::HorsesConfig;

// === LOCAL CLIENT ===
pub mod local_client;

// === INTERNAL MODULES ===
// Exposed for integration tests; consumers should stick to the SDK types.
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
