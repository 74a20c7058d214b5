//! Horses SDK
//!
//! This crate provides the public API for the horses module:
//! - `HorsesClientV1` trait for in-process consumers
//! - Model types (`Horse`, `Owner`, their create/update/search shapes and views)
//! - Error type (`HorsesError`)

#![forbid(unsafe_code)]

pub mod api;
pub mod errors;
pub mod models;

pub use api::HorsesClientV1;
pub use errors::HorsesError;
pub use models::{
    Horse, HorseDetail, HorseListItem, HorseSearch, HorseUpdate, NewHorse, NewOwner, Owner,
    OwnerSearch, Sex,
};
